//! Binary-classification evaluator
//!
//! Judges predictions against one designated positive label using a
//! sign-of-score decision rule: score >= 0 means positive.

use crate::core::error::Result;
use crate::core::traits::Prediction;
use crate::core::types::Label;
use crate::data::example::Example;
use crate::evaluation::{safe_ratio, Evaluator, MeasureRegistry};

/// Accuracy, precision, recall and F1 against one positive label
#[derive(Debug)]
pub struct BinaryClassificationEvaluator {
    positive_label: Label,

    total: usize,
    correct: usize,
    predicted_positive: usize,
    gold_positive: usize,
    true_positive: usize,

    accuracy: f64,
    precision: f64,
    recall: f64,
    f1: f64,
    registry: MeasureRegistry<Self>,
}

impl BinaryClassificationEvaluator {
    pub fn new(positive_label: Label) -> Self {
        Self {
            positive_label,
            total: 0,
            correct: 0,
            predicted_positive: 0,
            gold_positive: 0,
            true_positive: 0,
            accuracy: 0.0,
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            registry: MeasureRegistry::new()
                .with("accuracy", 0, |e: &Self, _| e.accuracy)
                .with("precision", 0, |e: &Self, _| e.precision)
                .with("recall", 0, |e: &Self, _| e.recall)
                .with("f1", 0, |e: &Self, _| e.f1),
        }
    }

    pub fn positive_label(&self) -> &Label {
        &self.positive_label
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// true positives / predicted positives; 0.0 when nothing was predicted
    /// positive
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// true positives / gold positives; 0.0 when no gold positives were seen
    pub fn recall(&self) -> f64 {
        self.recall
    }

    pub fn f1(&self) -> f64 {
        self.f1
    }
}

impl Evaluator for BinaryClassificationEvaluator {
    fn add_count(&mut self, test: &Example, prediction: &dyn Prediction) {
        self.total += 1;
        // A missing score for the positive label is treated as a negative
        // decision
        let score = prediction
            .score(&self.positive_label)
            .unwrap_or(f64::NEG_INFINITY);
        let predicted_positive = score >= 0.0;
        let is_positive = test.is_example_of(&self.positive_label);

        if predicted_positive {
            self.predicted_positive += 1;
        }
        if is_positive {
            self.gold_positive += 1;
        }
        if predicted_positive == is_positive {
            self.correct += 1;
        }
        if predicted_positive && is_positive {
            self.true_positive += 1;
        }
    }

    fn compute(&mut self) {
        self.accuracy = safe_ratio(self.correct as f64, self.total as f64);
        self.precision = safe_ratio(self.true_positive as f64, self.predicted_positive as f64);
        self.recall = safe_ratio(self.true_positive as f64, self.gold_positive as f64);
        self.f1 = if self.precision + self.recall == 0.0 {
            0.0
        } else {
            2.0 * self.precision * self.recall / (self.precision + self.recall)
        };
    }

    fn clear(&mut self) {
        self.total = 0;
        self.correct = 0;
        self.predicted_positive = 0;
        self.gold_positive = 0;
        self.true_positive = 0;
        self.accuracy = 0.0;
        self.precision = 0.0;
        self.recall = 0.0;
        self.f1 = 0.0;
    }

    fn performance_measure(&mut self, name: &str, args: &[Label]) -> Result<f64> {
        self.compute();
        self.registry.resolve(self, name, args)
    }
}
