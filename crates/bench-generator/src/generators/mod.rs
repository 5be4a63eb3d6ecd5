//! Individual value generators for the record fields.
//!
//! Each function draws one value from the caller's RNG. Ranges come from
//! [`bench_core::ranges`].

pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;

use rand::Rng;

/// Pick one element of a non-empty slice uniformly.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Pick one `Copy` element of a non-empty slice uniformly.
pub fn pick_copy<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    *pick(rng, items)
}
