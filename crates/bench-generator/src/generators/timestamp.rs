//! Timestamp value generators.

use bench_core::ranges::{
    CREATED_AT_MAX_SECS, CREATED_AT_MIN_SECS, UPDATED_AT_MAX_LAG_SECS, UPDATED_AT_PROBABILITY,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generate a random timestamp in `[start_secs, end_secs]` (whole seconds).
pub fn timestamp_range<R: Rng>(rng: &mut R, start_secs: i64, end_secs: i64) -> DateTime<Utc> {
    let secs = if start_secs >= end_secs {
        start_secs
    } else {
        rng.random_range(start_secs..=end_secs)
    };
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Generate an event creation timestamp.
pub fn created_at<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    timestamp_range(rng, CREATED_AT_MIN_SECS, CREATED_AT_MAX_SECS)
}

/// Maybe generate an update timestamp no earlier than `created_at`.
pub fn updated_at<R: Rng>(rng: &mut R, created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if !rng.random_bool(UPDATED_AT_PROBABILITY) {
        return None;
    }
    let lag = rng.random_range(0..=UPDATED_AT_MAX_LAG_SECS);
    Some(created_at + Duration::seconds(lag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_created_at_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let dt = created_at(&mut rng);
            assert!(dt.year() >= 2020 && dt.year() <= 2024);
        }
    }

    #[test]
    fn test_updated_at_not_before_created_at() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut present = 0;

        for _ in 0..1000 {
            let created = created_at(&mut rng);
            if let Some(updated) = updated_at(&mut rng, created) {
                present += 1;
                assert!(updated >= created);
                assert!(updated - created <= Duration::seconds(UPDATED_AT_MAX_LAG_SECS));
            }
        }

        // Roughly half
        assert!((350..=650).contains(&present), "present = {present}");
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let dt = timestamp_range(&mut rng, 100, 100);
        assert_eq!(dt.timestamp(), 100);
    }
}
