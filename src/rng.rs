use rand::Rng;

/// Returns a uniform random integer in the inclusive range `[min, max]`.
///
/// Callers must pass `min <= max`; the range is validated by the placement
/// math before any draw happens.
#[must_use]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}
