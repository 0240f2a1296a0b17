//! Selection-frequency statistics for the sampler.
//!
//! Repeats a draw many times and reports how often each question was picked.
//! A fair sampler picks every question with probability `count / len`.

use std::collections::HashMap;

use rand::rngs::OsRng;
use rand::Rng;

use crate::model::Question;
use crate::sampler::sample_indices_with;

/// Probability that any given question appears in one draw.
pub fn expected_frequency(len: usize, count: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    count.min(len) as f64 / len as f64
}

/// Observed fraction of `trials` draws in which each question id appeared.
pub fn selection_frequencies_with<R: Rng + ?Sized>(
    questions: &[Question],
    count: usize,
    trials: u32,
    rng: &mut R,
) -> HashMap<String, f64> {
    let mut hits = vec![0u32; questions.len()];

    for _ in 0..trials {
        for i in sample_indices_with(questions.len(), count, rng) {
            hits[i] += 1;
        }
    }

    questions
        .iter()
        .zip(hits)
        .map(|(q, h)| {
            let freq = if trials == 0 {
                0.0
            } else {
                h as f64 / trials as f64
            };
            (q.id.clone(), freq)
        })
        .collect()
}

/// [`selection_frequencies_with`] drawing from `OsRng`, like production draws do.
pub fn selection_frequencies(
    questions: &[Question],
    count: usize,
    trials: u32,
) -> HashMap<String, f64> {
    selection_frequencies_with(questions, count, trials, &mut OsRng)
}

/// Largest absolute gap between observed and expected frequency.
pub fn max_deviation(frequencies: &HashMap<String, f64>, expected: f64) -> f64 {
    frequencies
        .values()
        .map(|f| (f - expected).abs())
        .fold(0.0, f64::max)
}
