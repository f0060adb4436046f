//! Value Objects - Immutable, identity-less domain primitives

mod air_quality;
mod day_key;
mod geo_location;
mod humidity;
mod language;
mod temperature;
mod timezone;

pub use air_quality::AqiLevel;
pub use day_key::DayKey;
pub use geo_location::GeoLocation;
pub use humidity::{Humidity, InvalidHumidity};
pub use language::Language;
pub use temperature::Temperature;
pub use timezone::Timezone;
