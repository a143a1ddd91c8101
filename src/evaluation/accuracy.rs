//! The simplest evaluator: global accuracy over predicted labels

use crate::core::error::Result;
use crate::core::traits::Prediction;
use crate::core::types::Label;
use crate::data::example::Example;
use crate::evaluation::{safe_ratio, Evaluator, MeasureRegistry};

/// Counts how often the top predicted label is one of the test example's
/// gold labels
#[derive(Debug)]
pub struct AccuracyEvaluator {
    correct: usize,
    total: usize,
    accuracy: f64,
    registry: MeasureRegistry<Self>,
}

impl AccuracyEvaluator {
    pub fn new() -> Self {
        Self {
            correct: 0,
            total: 0,
            accuracy: 0.0,
            registry: MeasureRegistry::new().with("accuracy", 0, |e: &Self, _| e.accuracy),
        }
    }

    /// The accuracy derived at the last `compute`; 0.0 before any counts
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl Default for AccuracyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for AccuracyEvaluator {
    fn add_count(&mut self, test: &Example, prediction: &dyn Prediction) {
        self.total += 1;
        // A prediction with no label at all counts as incorrect
        if let Some(predicted) = prediction.predicted_labels().first() {
            if test.is_example_of(predicted) {
                self.correct += 1;
            }
        }
    }

    fn compute(&mut self) {
        self.accuracy = safe_ratio(self.correct as f64, self.total as f64);
    }

    fn clear(&mut self) {
        self.correct = 0;
        self.total = 0;
        self.accuracy = 0.0;
    }

    fn performance_measure(&mut self, name: &str, args: &[Label]) -> Result<f64> {
        self.compute();
        self.registry.resolve(self, name, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClassificationOutput;
    use crate::data::example::SimpleExample;

    fn example_of(label: &str) -> Example {
        let mut e = SimpleExample::new();
        e.add_label(Label::new(label));
        e.into()
    }

    #[test]
    fn test_accuracy() {
        let mut evaluator = AccuracyEvaluator::new();

        for (gold, predicted) in [("A", "A"), ("A", "B"), ("B", "B"), ("B", "B")] {
            evaluator.add_count(
                &example_of(gold),
                &ClassificationOutput::single(Label::new(predicted), 1.0),
            );
        }

        evaluator.compute();
        assert_eq!(evaluator.accuracy(), 0.75);
    }

    #[test]
    fn test_compute_idempotence() {
        let mut evaluator = AccuracyEvaluator::new();
        evaluator.add_count(
            &example_of("A"),
            &ClassificationOutput::single(Label::new("A"), 1.0),
        );

        evaluator.compute();
        let first = evaluator.accuracy();
        evaluator.compute();
        assert_eq!(evaluator.accuracy(), first);
    }

    #[test]
    fn test_clear() {
        let mut evaluator = AccuracyEvaluator::new();
        evaluator.add_count(
            &example_of("A"),
            &ClassificationOutput::single(Label::new("A"), 1.0),
        );
        evaluator.compute();

        evaluator.clear();
        assert_eq!(evaluator.accuracy(), 0.0);
        evaluator.compute();
        assert_eq!(evaluator.accuracy(), 0.0);
    }

    #[test]
    fn test_measure_by_name() {
        let mut evaluator = AccuracyEvaluator::new();
        evaluator.add_count(
            &example_of("A"),
            &ClassificationOutput::single(Label::new("A"), 1.0),
        );

        // performance_measure forces compute
        assert_eq!(evaluator.performance_measure("accuracy", &[]).unwrap(), 1.0);
        assert!(evaluator.performance_measure("f1", &[]).is_err());
    }
}
