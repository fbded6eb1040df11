//! Probability synthesis.
//!
//! The chosen class always gets the "dominant" share, drawn from a high
//! sub-range. Whatever is left over is split between the other two classes at
//! a fixed ratio, so the vector always sums to one and the chosen class is
//! always the largest component.

use serde::{Deserialize, Serialize};

use super::classification::Classification;
use super::random::RandomSource;
use crate::error::AppError;

/// Allowed distance of the component sum from one
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Draw range and remainder split for one class
struct SynthesisRule {
    /// Inclusive lower bound of the dominant draw
    low: f64,
    /// Width of the half-open dominant range
    width: f64,
    /// Receives `first_share * (1 - dominant)`
    first: Classification,
    first_share: f64,
    /// Receives the rest of the remainder
    second: Classification,
}

static EMERGENCY_RULE: SynthesisRule = SynthesisRule {
    low: 0.85,
    width: 0.14,
    first: Classification::NotEmergency,
    first_share: 0.7,
    second: Classification::Fake,
};

static FAKE_RULE: SynthesisRule = SynthesisRule {
    low: 0.85,
    width: 0.14,
    first: Classification::NotEmergency,
    first_share: 0.6,
    second: Classification::Emergency,
};

static NOT_EMERGENCY_RULE: SynthesisRule = SynthesisRule {
    low: 0.80,
    width: 0.15,
    first: Classification::Emergency,
    first_share: 0.5,
    second: Classification::Fake,
};

fn rule_for(classification: Classification) -> &'static SynthesisRule {
    match classification {
        Classification::Emergency => &EMERGENCY_RULE,
        Classification::Fake => &FAKE_RULE,
        Classification::NotEmergency => &NOT_EMERGENCY_RULE,
    }
}

/// Probability of each triage class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityVector {
    pub emergency: f64,
    pub not_emergency: f64,
    pub fake: f64,
}

/// One rendered probability bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbabilityRow {
    pub class: Classification,
    pub label: &'static str,
    /// Whole percent, rounded for display
    pub percent: u32,
}

impl ProbabilityVector {
    /// Component for `classification`
    pub fn get(&self, classification: Classification) -> f64 {
        match classification {
            Classification::Emergency => self.emergency,
            Classification::NotEmergency => self.not_emergency,
            Classification::Fake => self.fake,
        }
    }

    fn set(&mut self, classification: Classification, value: f64) {
        match classification {
            Classification::Emergency => self.emergency = value,
            Classification::NotEmergency => self.not_emergency = value,
            Classification::Fake => self.fake = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.emergency + self.not_emergency + self.fake
    }

    /// Class with the largest component. Ties resolve in [`Classification::ALL`] order.
    pub fn dominant(&self) -> Classification {
        let mut best = Classification::Emergency;
        for class in Classification::ALL {
            if self.get(class) > self.get(best) {
                best = class;
            }
        }
        best
    }

    /// Whether `classification` is strictly larger than both other components
    pub fn is_dominated_by(&self, classification: Classification) -> bool {
        let value = self.get(classification);
        Classification::ALL
            .iter()
            .filter(|c| **c != classification)
            .all(|c| value > self.get(*c))
    }

    /// Check that the vector is a distribution dominated by `classification`.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] when a component is negative or not finite,
    /// the sum is off by more than [`SUM_TOLERANCE`], or another class ties
    /// or beats `classification`.
    pub fn check(&self, classification: Classification) -> Result<(), AppError> {
        for class in Classification::ALL {
            let value = self.get(class);
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "Invalid {} probability: {}",
                    class.label(),
                    value
                )));
            }
        }
        if (self.sum() - 1.0).abs() > SUM_TOLERANCE {
            return Err(AppError::Validation(format!(
                "Probabilities sum to {}, expected 1",
                self.sum()
            )));
        }
        if !self.is_dominated_by(classification) {
            return Err(AppError::Validation(format!(
                "Probabilities are not dominated by {}",
                classification.label()
            )));
        }
        Ok(())
    }

    /// Whole-percent view of a component. Does not modify the vector.
    pub fn percent(&self, classification: Classification) -> u32 {
        (self.get(classification) * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Bars in display order: emergency, non-emergency, fake/spam.
    pub fn display_rows(&self) -> Vec<ProbabilityRow> {
        Classification::ALL
            .iter()
            .map(|class| ProbabilityRow {
                class: *class,
                label: row_label(*class),
                percent: self.percent(*class),
            })
            .collect()
    }
}

fn row_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Emergency => "Emergency Probability",
        Classification::NotEmergency => "Non-Emergency Probability",
        Classification::Fake => "Fake/Spam Probability",
    }
}

/// Build a probability vector dominated by `classification`.
///
/// Consumes exactly one draw from `rng`.
pub fn synthesize<R: RandomSource + ?Sized>(
    classification: Classification,
    rng: &mut R,
) -> ProbabilityVector {
    let rule = rule_for(classification);
    let dominant = rule.low + rng.next_uniform() * rule.width;
    let remaining = 1.0 - dominant;
    let first = remaining * rule.first_share;

    let mut vector = ProbabilityVector {
        emergency: 0.0,
        not_emergency: 0.0,
        fake: 0.0,
    };
    vector.set(classification, dominant);
    vector.set(rule.first, first);
    vector.set(rule.second, remaining - first);
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::random::{SeededRandom, SequenceRandom};

    const EPS: f64 = 1e-12;

    fn fixed(value: f64) -> SequenceRandom {
        SequenceRandom::new(vec![value]).expect("valid sequence")
    }

    #[test]
    fn test_emergency_exact_split() {
        let p = synthesize(Classification::Emergency, &mut fixed(0.5));
        assert!((p.emergency - 0.92).abs() < EPS);
        assert!((p.not_emergency - 0.056).abs() < EPS);
        assert!((p.fake - 0.024).abs() < EPS);
    }

    #[test]
    fn test_fake_exact_split() {
        let p = synthesize(Classification::Fake, &mut fixed(0.0));
        assert!((p.fake - 0.85).abs() < EPS);
        assert!((p.not_emergency - 0.09).abs() < EPS);
        assert!((p.emergency - 0.06).abs() < EPS);
    }

    #[test]
    fn test_not_emergency_exact_split() {
        let p = synthesize(Classification::NotEmergency, &mut fixed(0.0));
        assert!((p.not_emergency - 0.80).abs() < EPS);
        assert!((p.emergency - 0.10).abs() < EPS);
        assert!((p.fake - 0.10).abs() < EPS);
    }

    #[test]
    fn test_upper_edge_draw_stays_below_bound() {
        let p = synthesize(Classification::Emergency, &mut fixed(0.999_999));
        assert!(p.emergency < 0.99);
        assert!(p.is_dominated_by(Classification::Emergency));
    }

    #[test]
    fn test_consumes_one_draw() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]).expect("valid sequence");
        synthesize(Classification::Fake, &mut rng);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_dominance_and_sum_hold_for_every_draw() {
        let mut rng = SeededRandom::new(7);
        for class in Classification::ALL {
            for _ in 0..1000 {
                let p = synthesize(class, &mut rng);
                assert!((p.sum() - 1.0).abs() < 1e-9, "sum {} for {:?}", p.sum(), class);
                assert!(p.is_dominated_by(class), "{:?} not dominant in {:?}", class, p);
                assert_eq!(p.dominant(), class);
                assert!(p.emergency >= 0.0 && p.not_emergency >= 0.0 && p.fake >= 0.0);
            }
        }
    }

    #[test]
    fn test_check_accepts_synthesized_vectors() {
        let mut rng = SeededRandom::new(3);
        for class in Classification::ALL {
            let p = synthesize(class, &mut rng);
            assert_eq!(p.check(class), Ok(()));
        }
    }

    #[test]
    fn test_check_rejects_broken_vectors() {
        let wrong_class = ProbabilityVector {
            emergency: 1.0,
            not_emergency: 0.0,
            fake: 0.0,
        };
        assert!(matches!(
            wrong_class.check(Classification::Fake),
            Err(AppError::Validation(_))
        ));

        let bad_sum = ProbabilityVector {
            emergency: 0.9,
            not_emergency: 0.9,
            fake: 0.9,
        };
        assert!(bad_sum.check(Classification::Emergency).is_err());

        let negative = ProbabilityVector {
            emergency: 1.2,
            not_emergency: -0.1,
            fake: -0.1,
        };
        assert!(negative.check(Classification::Emergency).is_err());

        let tie = ProbabilityVector {
            emergency: 0.5,
            not_emergency: 0.5,
            fake: 0.0,
        };
        assert!(tie.check(Classification::Emergency).is_err());
    }

    #[test]
    fn test_display_rows_do_not_mutate() {
        let p = synthesize(Classification::Emergency, &mut fixed(0.5));
        let before = p;
        let rows = p.display_rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Emergency Probability");
        assert_eq!(rows[0].percent, 92);
        assert_eq!(rows[1].label, "Non-Emergency Probability");
        assert_eq!(rows[1].percent, 6);
        assert_eq!(rows[2].label, "Fake/Spam Probability");
        assert_eq!(rows[2].percent, 2);
        assert_eq!(p, before);
    }
}
