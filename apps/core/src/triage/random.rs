//! Random sources for the triage pipeline.
//!
//! The classifier's no-signal fallback and every probability draw read from a
//! [`RandomSource`] passed in by the caller. Nothing in the pipeline touches
//! process-wide random state directly.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::AppError;

/// Provider of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in the half-open interval `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Non-deterministic source backed by the thread-local generator.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible source seeded from a `u64`.
///
/// Two instances built from the same seed yield the same sequence.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Lets tests pin exact branch outcomes and exact probability values.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    /// Build a replaying source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `values` is empty or any value lies
    /// outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Result<Self, AppError> {
        if values.is_empty() {
            return Err(AppError::Validation(
                "Random sequence must contain at least one value".to_string(),
            ));
        }

        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(AppError::Validation(format!(
                "Random sequence value {} is outside [0, 1)",
                bad
            )));
        }

        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of values drawn so far (including wrap-arounds).
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_range() {
        let mut rng = ThreadRandom::new();
        for _ in 0..1000 {
            let v = rng.next_uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_random_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn test_sequence_random_wraps() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.5, 0.9]).expect("valid sequence");
        let drawn: Vec<f64> = (0..5).map(|_| rng.next_uniform()).collect();
        assert_eq!(drawn, vec![0.1, 0.5, 0.9, 0.1, 0.5]);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_sequence_random_rejects_bad_input() {
        assert!(SequenceRandom::new(vec![]).is_err());
        assert!(SequenceRandom::new(vec![1.0]).is_err());
        assert!(SequenceRandom::new(vec![-0.1]).is_err());
        assert!(SequenceRandom::new(vec![f64::NAN]).is_err());
        assert!(SequenceRandom::new(vec![0.0, 0.999]).is_ok());
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn draw_once<R: RandomSource>(mut source: R) -> f64 {
            source.next_uniform()
        }

        let mut rng = SequenceRandom::new(vec![0.2, 0.4]).expect("valid sequence");
        assert_eq!(draw_once(&mut rng), 0.2);
        assert_eq!(rng.next_uniform(), 0.4);
    }
}
