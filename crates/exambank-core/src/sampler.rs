//! Fair sampling of practice exams from a question bank.
//!
//! A sample is drawn with a partial Fisher–Yates shuffle over a copy of the
//! bank's index space, keeping the `count` shuffled positions. Every subset of
//! size `count` is equally likely and so is every ordering of the chosen subset.
//!
//! Production callers go through [`sample`], which draws from the operating
//! system CSPRNG (`OsRng`). The `_with` variants take any `Rng` so tests and
//! benchmarks can use a seeded generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `min(count, len)` distinct indices from `0..len` in random order.
pub fn sample_indices_with<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let (chosen, _) = indices.partial_shuffle(rng, count.min(len));
    chosen.to_vec()
}

/// Draw up to `count` distinct items from `items` using the given generator.
///
/// `items` is only borrowed; its order is left untouched.
pub fn sample_with<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    count: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    sample_indices_with(items.len(), count, rng)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Draw up to `count` distinct items from `items` using `OsRng`.
pub fn sample<T>(items: &[T], count: usize) -> Vec<&T> {
    sample_with(items, count, &mut OsRng)
}

/// Index-only variant of [`sample`], for callers that keep the bank elsewhere.
pub fn sample_indices(len: usize, count: usize) -> Vec<usize> {
    sample_indices_with(len, count, &mut OsRng)
}
