//! Multi-class classification evaluator
//!
//! Per-label precision/recall/F1 plus overall accuracy. The evaluator trusts
//! the externally-supplied top predicted label of each prediction; the test
//! example's first label is its gold class.

use crate::core::error::Result;
use crate::core::traits::Prediction;
use crate::core::types::Label;
use crate::data::example::Example;
use crate::evaluation::{safe_ratio, Evaluator, MeasureRegistry};
use std::collections::HashMap;

const UNKNOWN_LABEL_SENTINEL: f64 = -1.0;

/// Per-label counters and metrics over a fixed set of tracked labels
#[derive(Debug)]
pub struct ClassificationEvaluator {
    labels: Vec<Label>,
    correct_counter: HashMap<Label, f64>,
    predicted_counter: HashMap<Label, f64>,
    to_be_predicted_counter: HashMap<Label, f64>,

    precisions: HashMap<Label, f64>,
    recalls: HashMap<Label, f64>,
    f1s: HashMap<Label, f64>,

    total: usize,
    correct: usize,
    accuracy: f64,
    registry: MeasureRegistry<Self>,
}

impl ClassificationEvaluator {
    /// An evaluator tracking metrics for the given labels
    pub fn new(labels: Vec<Label>) -> Self {
        let mut evaluator = Self {
            labels,
            correct_counter: HashMap::new(),
            predicted_counter: HashMap::new(),
            to_be_predicted_counter: HashMap::new(),
            precisions: HashMap::new(),
            recalls: HashMap::new(),
            f1s: HashMap::new(),
            total: 0,
            correct: 0,
            accuracy: 0.0,
            registry: MeasureRegistry::new()
                .with("accuracy", 0, |e: &Self, _| e.accuracy)
                .with("mean_f1", 0, |e: &Self, _| e.mean_f1())
                .with("precision", 1, |e: &Self, args| e.precision_for(&args[0]))
                .with("recall", 1, |e: &Self, args| e.recall_for(&args[0]))
                .with("f1", 1, |e: &Self, args| e.f1_for(&args[0])),
        };
        evaluator.initialize_counters();
        evaluator
    }

    fn initialize_counters(&mut self) {
        for label in &self.labels {
            self.correct_counter.insert(label.clone(), 0.0);
            self.predicted_counter.insert(label.clone(), 0.0);
            self.to_be_predicted_counter.insert(label.clone(), 0.0);
            self.precisions.insert(label.clone(), UNKNOWN_LABEL_SENTINEL);
            self.recalls.insert(label.clone(), UNKNOWN_LABEL_SENTINEL);
            self.f1s.insert(label.clone(), UNKNOWN_LABEL_SENTINEL);
        }
        self.total = 0;
        self.correct = 0;
        self.accuracy = 0.0;
    }

    /// The labels this evaluator tracks
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Feed raw counters directly, bypassing prediction extraction. Useful
    /// when counts come from an external source.
    pub fn add_raw_count(&mut self, gold: &Label, predicted: &Label) {
        *self
            .to_be_predicted_counter
            .entry(gold.clone())
            .or_insert(0.0) += 1.0;
        *self
            .predicted_counter
            .entry(predicted.clone())
            .or_insert(0.0) += 1.0;
        if predicted == gold {
            *self.correct_counter.entry(gold.clone()).or_insert(0.0) += 1.0;
            self.correct += 1;
        }
        self.total += 1;
    }

    /// Precision for a label; -1.0 for labels this evaluator does not track
    pub fn precision_for(&self, label: &Label) -> f64 {
        self.precisions
            .get(label)
            .copied()
            .unwrap_or(UNKNOWN_LABEL_SENTINEL)
    }

    /// Recall for a label; -1.0 for labels this evaluator does not track
    pub fn recall_for(&self, label: &Label) -> f64 {
        self.recalls
            .get(label)
            .copied()
            .unwrap_or(UNKNOWN_LABEL_SENTINEL)
    }

    /// F1 for a label; -1.0 for labels this evaluator does not track
    pub fn f1_for(&self, label: &Label) -> f64 {
        self.f1s
            .get(label)
            .copied()
            .unwrap_or(UNKNOWN_LABEL_SENTINEL)
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Mean F1 over all tracked labels
    pub fn mean_f1(&self) -> f64 {
        self.mean_f1_for(&self.labels)
    }

    /// Mean F1 over the given labels; untracked labels contribute the -1.0
    /// sentinel. 0.0 for an empty slice.
    pub fn mean_f1_for(&self, labels: &[Label]) -> f64 {
        if labels.is_empty() {
            return 0.0;
        }
        let sum: f64 = labels.iter().map(|l| self.f1_for(l)).sum();
        sum / labels.len() as f64
    }
}

impl Evaluator for ClassificationEvaluator {
    fn add_count(&mut self, test: &Example, prediction: &dyn Prediction) {
        // Both a gold label and a predicted label are required to count
        let (Some(gold), Some(predicted)) = (
            test.labels().first().cloned(),
            prediction.predicted_labels().first().cloned(),
        ) else {
            return;
        };

        *self
            .to_be_predicted_counter
            .entry(gold.clone())
            .or_insert(0.0) += 1.0;
        *self
            .predicted_counter
            .entry(predicted.clone())
            .or_insert(0.0) += 1.0;
        if test.is_example_of(&predicted) {
            *self.correct_counter.entry(gold).or_insert(0.0) += 1.0;
            self.correct += 1;
        }
        self.total += 1;
    }

    fn compute(&mut self) {
        for label in &self.labels {
            let correct = self.correct_counter.get(label).copied().unwrap_or(0.0);
            let predicted = self.predicted_counter.get(label).copied().unwrap_or(0.0);
            let gold = self
                .to_be_predicted_counter
                .get(label)
                .copied()
                .unwrap_or(0.0);

            let precision = safe_ratio(correct, predicted);
            let recall = safe_ratio(correct, gold);
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            self.precisions.insert(label.clone(), precision);
            self.recalls.insert(label.clone(), recall);
            self.f1s.insert(label.clone(), f1);
        }
        self.accuracy = safe_ratio(self.correct as f64, self.total as f64);
    }

    fn clear(&mut self) {
        self.correct_counter.clear();
        self.predicted_counter.clear();
        self.to_be_predicted_counter.clear();
        self.precisions.clear();
        self.recalls.clear();
        self.f1s.clear();
        self.initialize_counters();
    }

    fn performance_measure(&mut self, name: &str, args: &[Label]) -> Result<f64> {
        self.compute();
        self.registry.resolve(self, name, args)
    }
}
