//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{DayKey, GeoLocation, Humidity, Temperature, Timezone};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn serialization_roundtrip(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            if let Ok(loc) = GeoLocation::new(lat, lon) {
                let json = serde_json::to_string(&loc).unwrap();
                let deserialized: GeoLocation = serde_json::from_str(&json).unwrap();
                prop_assert!((loc.latitude() - deserialized.latitude()).abs() < 1e-10);
                prop_assert!((loc.longitude() - deserialized.longitude()).abs() < 1e-10);
            }
        }
    }
}

// ============================================================================
// Temperature Property Tests
// ============================================================================

mod temperature_tests {
    use super::*;

    proptest! {
        #[test]
        fn rounded_stays_within_half_a_tenth(celsius in -100.0f64..=100.0f64) {
            let rounded = Temperature::new(celsius).rounded();
            prop_assert!((rounded.celsius() - celsius).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn rounding_is_idempotent(celsius in -100.0f64..=100.0f64) {
            let once = Temperature::new(celsius).rounded();
            let twice = once.rounded();
            prop_assert!((once.celsius() - twice.celsius()).abs() < f64::EPSILON);
        }

        #[test]
        fn min_max_bound_both_operands(a in -100.0f64..=100.0f64, b in -100.0f64..=100.0f64) {
            let (ta, tb) = (Temperature::new(a), Temperature::new(b));
            let lo = ta.min(tb);
            let hi = ta.max(tb);
            prop_assert!(lo.celsius() <= a && lo.celsius() <= b);
            prop_assert!(hi.celsius() >= a && hi.celsius() >= b);
        }

        #[test]
        fn rounding_preserves_ordering(a in -100.0f64..=100.0f64, b in -100.0f64..=100.0f64) {
            let (ta, tb) = (Temperature::new(a), Temperature::new(b));
            if ta < tb {
                prop_assert!(ta.rounded() <= tb.rounded());
            }
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_range_accepted(value in 0u8..=100u8) {
            let h = Humidity::new(value);
            prop_assert!(h.is_ok());
            prop_assert_eq!(h.unwrap().value(), value);
        }

        #[test]
        fn out_of_range_rejected(value in 101u8..=255u8) {
            prop_assert!(Humidity::new(value).is_err());
        }

        #[test]
        fn clamped_never_exceeds_max(value in 0u8..=255u8) {
            prop_assert!(Humidity::clamped(value).value() <= Humidity::MAX);
        }

        #[test]
        fn categories_are_mutually_exclusive(value in 0u8..=100u8) {
            let h = Humidity::clamped(value);
            prop_assert!(!(h.is_dry() && h.is_humid()));
        }
    }
}

// ============================================================================
// DayKey Property Tests
// ============================================================================

mod day_key_tests {
    use super::*;

    // Unix timestamps between 1970 and ~2100, comfortably inside chrono's range
    const TS_RANGE: std::ops::Range<i64> = 0..4_102_444_800;

    proptest! {
        #[test]
        fn derivation_is_total_over_feed_timestamps(ts in TS_RANGE) {
            prop_assert!(DayKey::from_timestamp(ts, &Timezone::utc()).is_ok());
            prop_assert!(DayKey::from_timestamp(ts, &Timezone::kolkata()).is_ok());
        }

        #[test]
        fn derivation_is_deterministic(ts in TS_RANGE) {
            let a = DayKey::from_timestamp(ts, &Timezone::kolkata()).unwrap();
            let b = DayKey::from_timestamp(ts, &Timezone::kolkata()).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn later_timestamps_never_map_to_earlier_days(
            ts in TS_RANGE,
            delta in 0i64..1_000_000
        ) {
            let zone = Timezone::utc();
            let earlier = DayKey::from_timestamp(ts, &zone).unwrap();
            let later = DayKey::from_timestamp(ts + delta, &zone).unwrap();
            prop_assert!(earlier <= later);
        }

        #[test]
        fn samples_three_hours_apart_span_at_most_one_day(ts in TS_RANGE) {
            let zone = Timezone::kolkata();
            let a = DayKey::from_timestamp(ts, &zone).unwrap();
            let b = DayKey::from_timestamp(ts + 3 * 3600, &zone).unwrap();
            let gap = b.date().signed_duration_since(a.date()).num_days();
            prop_assert!((0..=1).contains(&gap));
        }
    }
}
