//! Translation service
//!
//! Translates narration text for the voice languages that need it, caching
//! every computed translation in a caller-owned cache keyed by
//! (target-language, source-text). The cache is injected, never ambient:
//! whoever builds the service decides its scope and lifetime.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::Language;
use tracing::{debug, warn};

use crate::ports::{CachePort, CachePortExt, InferencePort, ttl};

/// Cache key for a translated narration
///
/// The source text is hashed so arbitrarily long narrations produce
/// bounded keys; the language code stays readable for inspection.
#[must_use]
pub fn translation_cache_key(target: Language, text: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(target.code().as_bytes());
    hasher.update(b"|");
    hasher.update(text.as_bytes());
    format!("translate:{}:{}", target.code(), hasher.finalize().to_hex())
}

/// Cached narration translation
pub struct TranslationService {
    engine: Option<Arc<dyn InferencePort>>,
    cache: Arc<dyn CachePort>,
}

impl fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationService")
            .field("engine", &self.engine.is_some())
            .field("cache", &self.cache)
            .finish()
    }
}

impl TranslationService {
    /// Create a translation service over an optional model engine and a
    /// caller-owned cache
    #[must_use]
    pub fn new(engine: Option<Arc<dyn InferencePort>>, cache: Arc<dyn CachePort>) -> Self {
        Self { engine, cache }
    }

    /// Translate a narration into the target language
    ///
    /// English and Hindi narrations pass through unchanged, as does any
    /// text when no model engine is available or the engine fails. A
    /// computed translation is stored before it is returned; the next call
    /// with the same (language, text) pair is served from the cache.
    pub async fn translate(&self, text: &str, target: Language) -> String {
        if !target.is_translatable() {
            return text.to_string();
        }

        let Some(engine) = &self.engine else {
            debug!(language = %target, "No model engine, narration stays untranslated");
            return text.to_string();
        };

        let key = translation_cache_key(target, text);

        match self.cache.get::<String>(&key).await {
            Ok(Some(hit)) => {
                debug!(language = %target, "Translation cache hit");
                return hit;
            },
            Ok(None) => {},
            Err(e) => {
                // Cache errors must not break translation
                warn!(error = %e, "Translation cache read error");
            },
        }

        let message = format!("Language: {}\nText: {text}", target.name());
        match engine.generate(&message).await {
            Ok(result) if !result.content.trim().is_empty() => {
                let translated = result.content.trim().to_string();
                if let Err(e) = self.cache.set(&key, &translated, ttl::TRANSLATION).await {
                    warn!(error = %e, "Translation cache write error");
                }
                translated
            },
            Ok(_) => {
                warn!(language = %target, "Model returned an empty translation");
                text.to_string()
            },
            Err(e) => {
                warn!(error = %e, language = %target, "Translation failed, keeping source text");
                text.to_string()
            },
        }
    }
}
