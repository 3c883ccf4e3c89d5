use std::f64::consts::TAU;

use serde::Serialize;
use tracing::debug;

use super::component::Component;
use super::validation::validate_value;
use super::values::ValueSet;
use super::weights::WeightTable;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentContribution {
    pub component: Component,
    pub value: f64,        // Rating as supplied, 0-10
    pub weight: f64,       // Published coefficient, e.g. 0.15
    pub contribution: f64, // weight * value
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: Vec<ComponentContribution>,
}

/// Weighted-sum scorer over the seven components.
///
/// Stateless apart from the weight table it is built with; `compute` is pure.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    weights: WeightTable,
}

impl ScoreEngine {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Score a value set: the sum of weight * value over all components.
    ///
    /// Every value must be finite and within 0-10, otherwise the first offending
    /// component is reported as `OutOfRange`.
    ///
    /// The published coefficients total 1.05, so the raw sum can reach 10.5 (all
    /// ratings at 10). The score is clamped to 0-10; the breakdown keeps the raw
    /// contributions.
    pub fn compute(&self, values: &ValueSet) -> Result<ScoreResult> {
        for (component, value) in values.iter() {
            validate_value(component, value)?;
        }

        let breakdown: Vec<ComponentContribution> = values
            .iter()
            .map(|(component, value)| {
                let weight = self.weights.weight(component);
                ComponentContribution {
                    component,
                    value,
                    weight,
                    contribution: weight * value,
                }
            })
            .collect();

        // Sum in hundredths and divide once so whole ratings come back exactly
        let weighted: f64 = values
            .iter()
            .map(|(component, value)| f64::from(self.weights.hundredths(component)) * value)
            .sum();
        let score = (weighted / 100.0).clamp(0.0, 10.0);

        debug!(score, "computed motivation score");

        Ok(ScoreResult { score, breakdown })
    }

    /// `n` angles evenly spaced over [0, 2π), starting at 0.
    pub fn radar_angles(n: usize) -> Vec<f64> {
        (0..n).map(|i| TAU * i as f64 / n as f64).collect()
    }

    /// (label, value) pairs in component order, for chart renderers.
    pub fn chart_points(values: &ValueSet) -> Vec<(&'static str, f64)> {
        values.iter().map(|(c, v)| (c.name(), v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn example_values() -> ValueSet {
        ValueSet::new([8.0, 6.0, 7.0, 5.0, 9.0, 6.0, 8.0])
    }

    #[test]
    fn test_example_score() {
        // 0.15*8 + 0.10*6 + 0.15*7 + 0.15*5 + 0.15*9 + 0.15*6 + 0.20*8
        // = 1.2 + 0.6 + 1.05 + 0.75 + 1.35 + 0.9 + 1.6
        let result = ScoreEngine::default().compute(&example_values()).unwrap();
        assert_eq!(result.score, 7.45);
    }

    #[test]
    fn test_example_score_with_unit_total_weights() {
        let weights = WeightTable::new([15, 10, 15, 15, 15, 10, 20]).unwrap();
        let result = ScoreEngine::new(weights).compute(&example_values()).unwrap();
        assert_eq!(result.score, 7.15);
    }

    #[test]
    fn test_all_max_scores_ten() {
        // Raw sum is 10.5 under the published coefficients
        let result = ScoreEngine::default().compute(&ValueSet::uniform(10.0)).unwrap();
        assert_eq!(result.score, 10.0);
        let raw: f64 = result.breakdown.iter().map(|c| c.contribution).sum();
        assert!((raw - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_ratings_use_published_sum() {
        let result = ScoreEngine::default().compute(&ValueSet::uniform(5.0)).unwrap();
        assert_eq!(result.score, 5.25);
    }

    #[test]
    fn test_all_zero_scores_zero() {
        let result = ScoreEngine::default().compute(&ValueSet::uniform(0.0)).unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let engine = ScoreEngine::default();
        let values = ValueSet::new([3.3, 7.1, 0.4, 9.9, 5.0, 2.2, 6.8]);
        assert_eq!(engine.compute(&values).unwrap(), engine.compute(&values).unwrap());
    }

    #[test]
    fn test_breakdown_matches_weights() {
        let result = ScoreEngine::default().compute(&example_values()).unwrap();
        assert_eq!(result.breakdown.len(), 7);

        let eval = &result.breakdown[6];
        assert_eq!(eval.component, Component::EvaluationCorrection);
        assert_eq!(eval.weight, 0.2);
        assert!((eval.contribution - 1.6).abs() < 1e-12);

        let profile = &result.breakdown[1];
        assert_eq!(profile.weight, 0.1);
        assert!((profile.contribution - 0.6).abs() < 1e-12);

        let sum: f64 = result.breakdown.iter().map(|c| c.contribution).sum();
        assert!((sum - result.score).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_reports_first_offender() {
        let mut values = ValueSet::uniform(5.0);
        values.set(Component::BasicNeeds, 10.5);
        values.set(Component::EvaluationCorrection, -1.0);

        let err = ScoreEngine::default().compute(&values).unwrap_err();
        match err {
            Error::OutOfRange { component, value } => {
                assert_eq!(component, Component::BasicNeeds);
                assert_eq!(value, 10.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nan_rejected() {
        let mut values = ValueSet::uniform(5.0);
        values.set(Component::Diagnostics, f64::NAN);
        assert!(ScoreEngine::default().compute(&values).is_err());
    }

    #[test]
    fn test_injected_weights_are_used() {
        let weights = WeightTable::new([40, 10, 10, 10, 10, 10, 10]).unwrap();
        let mut values = ValueSet::uniform(0.0);
        values.set(Component::DigitalTechnologies, 10.0);
        let result = ScoreEngine::new(weights).compute(&values).unwrap();
        assert_eq!(result.score, 4.0);
    }

    #[test]
    fn test_radar_angles_seven() {
        let angles = ScoreEngine::radar_angles(7);
        assert_eq!(angles.len(), 7);
        assert_eq!(angles[0], 0.0);
        for (i, angle) in angles.iter().enumerate() {
            assert_eq!(*angle, 2.0 * PI * i as f64 / 7.0);
            assert!(*angle < 2.0 * PI);
        }
    }

    #[test]
    fn test_radar_angles_empty() {
        assert!(ScoreEngine::radar_angles(0).is_empty());
        assert_eq!(ScoreEngine::radar_angles(1), vec![0.0]);
    }

    #[test]
    fn test_chart_points_use_display_names() {
        let points = ScoreEngine::chart_points(&example_values());
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], ("Digital technologies", 8.0));
        assert_eq!(points[6], ("Evaluation & correction", 8.0));
    }

    proptest! {
        /// Valid input always scores within 0-10 and equals the weighted sum, capped at 10
        #[test]
        fn prop_score_in_range_and_weighted(
            raw in proptest::array::uniform7(0.0f64..=10.0f64)
        ) {
            let engine = ScoreEngine::default();
            let values = ValueSet::new(raw);
            let result = engine.compute(&values).unwrap();

            prop_assert!(result.score >= 0.0 && result.score <= 10.0);

            let expected: f64 = engine
                .weights()
                .iter()
                .map(|(c, w)| w * values.get(c))
                .sum::<f64>()
                .min(10.0);
            prop_assert!((result.score - expected).abs() < 1e-9);
        }

        /// Raising one rating never lowers the score
        #[test]
        fn prop_score_is_monotonic(
            raw in proptest::array::uniform7(0.0f64..=9.0f64),
            idx in 0usize..7,
            bump in 0.0f64..=1.0f64
        ) {
            let engine = ScoreEngine::default();
            let before = ValueSet::new(raw);
            let mut after = before;
            let component = Component::ALL[idx];
            after.set(component, before.get(component) + bump);

            let lo = engine.compute(&before).unwrap().score;
            let hi = engine.compute(&after).unwrap().score;
            prop_assert!(hi >= lo);
        }
    }
}
