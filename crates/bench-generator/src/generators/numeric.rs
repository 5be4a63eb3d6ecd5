//! Numeric value generators.

use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng, T: SampleUniform + PartialOrd>(rng: &mut R, min: T, max: T) -> T {
    rng.random_range(min..=max)
}

/// Generate a random float in the given range (inclusive), rounded to
/// `decimals` places.
///
/// Bounds with at most `decimals` fractional digits stay inclusive after
/// rounding.
pub fn float_range<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let value = (rng.random_range(min..=max) * factor).round() / factor;
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value: u32 = int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(int_range(&mut rng, 5u8, 5u8), 5);
    }

    #[test]
    fn test_float_range_rounding() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = float_range(&mut rng, 1.0, 4.0, 2);
            assert!((1.0..=4.0).contains(&value));
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}
