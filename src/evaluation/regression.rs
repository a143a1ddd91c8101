//! Regression evaluator: per-target mean squared error

use crate::core::error::Result;
use crate::core::traits::Prediction;
use crate::core::types::Label;
use crate::data::example::Example;
use crate::evaluation::{Evaluator, MeasureRegistry};
use std::collections::HashMap;

const UNKNOWN_LABEL_SENTINEL: f64 = -1.0;

/// Accumulates squared errors per target property; `compute` divides by the
/// number of accumulated pairs
#[derive(Debug)]
pub struct RegressorEvaluator {
    labels: Vec<Label>,
    accumulated: HashMap<Label, f64>,
    errors: HashMap<Label, f64>,
    n: usize,
    registry: MeasureRegistry<Self>,
}

impl RegressorEvaluator {
    /// An evaluator over the given target properties
    pub fn new(labels: Vec<Label>) -> Self {
        let mut evaluator = Self {
            labels,
            accumulated: HashMap::new(),
            errors: HashMap::new(),
            n: 0,
            registry: MeasureRegistry::new()
                .with("mean_squared_error", 1, |e: &Self, args| {
                    e.mean_squared_error(&args[0])
                })
                .with("mean_squared_errors", 0, |e: &Self, _| {
                    e.mean_squared_errors()
                }),
        };
        evaluator.initialize_counters();
        evaluator
    }

    fn initialize_counters(&mut self) {
        for label in &self.labels {
            self.accumulated.insert(label.clone(), 0.0);
            self.errors.insert(label.clone(), 0.0);
        }
        self.n = 0;
    }

    /// Mean squared error of a target; -1.0 for targets this evaluator does
    /// not track
    pub fn mean_squared_error(&self, label: &Label) -> f64 {
        self.errors
            .get(label)
            .copied()
            .unwrap_or(UNKNOWN_LABEL_SENTINEL)
    }

    /// Mean of the per-target errors; 0.0 when no targets are tracked
    pub fn mean_squared_errors(&self) -> f64 {
        if self.errors.is_empty() {
            return 0.0;
        }
        self.errors.values().sum::<f64>() / self.errors.len() as f64
    }
}

impl Evaluator for RegressorEvaluator {
    fn add_count(&mut self, test: &Example, prediction: &dyn Prediction) {
        for label in &self.labels {
            // Pairs lacking either value contribute nothing to this target
            let (Some(gold), Some(score)) =
                (test.regression_value(label), prediction.score(label))
            else {
                continue;
            };
            let error = (score - gold) * (score - gold);
            *self.accumulated.entry(label.clone()).or_insert(0.0) += error;
        }
        self.n += 1;
    }

    fn compute(&mut self) {
        for label in &self.labels {
            let sum = self.accumulated.get(label).copied().unwrap_or(0.0);
            let error = if self.n == 0 { 0.0 } else { sum / self.n as f64 };
            self.errors.insert(label.clone(), error);
        }
    }

    fn clear(&mut self) {
        self.accumulated.clear();
        self.errors.clear();
        self.initialize_counters();
    }

    fn performance_measure(&mut self, name: &str, args: &[Label]) -> Result<f64> {
        self.compute();
        self.registry.resolve(self, name, args)
    }
}
