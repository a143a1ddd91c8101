//! Evaluators: accumulate prediction-vs-gold counts, derive metrics on demand
//!
//! An evaluator accumulates counters through `add_count`, derives its metrics
//! in an explicit `compute` step (counters and derived metrics can disagree
//! until then) and resets through `clear`. Every publicly computed metric is
//! also reachable by name through a per-variant measure registry, so generic
//! reporting code needs no static knowledge of the concrete evaluator type.

pub mod accuracy;
pub mod binary;
pub mod multiclass;
pub mod regression;

pub use self::accuracy::AccuracyEvaluator;
pub use self::binary::BinaryClassificationEvaluator;
pub use self::multiclass::ClassificationEvaluator;
pub use self::regression::RegressorEvaluator;

use crate::core::error::{KernelKitError, Result};
use crate::core::traits::Prediction;
use crate::core::types::Label;
use crate::data::example::Example;
use std::collections::HashMap;
use std::fmt;

/// Accumulator and metric-derivation component for prediction quality
pub trait Evaluator {
    /// Accumulate one test-example/prediction pair. Pure accumulation,
    /// derived metrics are untouched.
    fn add_count(&mut self, test: &Example, prediction: &dyn Prediction);

    /// Derive all metrics from the accumulated counters. Idempotent:
    /// calling twice without an intervening `add_count` yields identical
    /// results.
    fn compute(&mut self);

    /// Reset counters and metrics to the freshly-constructed state
    fn clear(&mut self);

    /// Retrieve any computed metric by name, forcing `compute` first.
    /// Unknown names or a wrong argument count fail with `NoSuchMeasure`.
    fn performance_measure(&mut self, name: &str, args: &[Label]) -> Result<f64>;
}

struct MeasureEntry<E: ?Sized> {
    arity: usize,
    accessor: fn(&E, &[Label]) -> f64,
}

/// String-keyed registry of metric accessors, built once per evaluator at
/// construction
pub struct MeasureRegistry<E: ?Sized> {
    measures: HashMap<&'static str, MeasureEntry<E>>,
}

impl<E: ?Sized> MeasureRegistry<E> {
    pub fn new() -> Self {
        Self {
            measures: HashMap::new(),
        }
    }

    /// Register a measure taking `arity` label arguments
    pub fn with(mut self, name: &'static str, arity: usize, accessor: fn(&E, &[Label]) -> f64) -> Self {
        self.measures.insert(name, MeasureEntry { arity, accessor });
        self
    }

    /// Look up and invoke a measure on `target`
    pub fn resolve(&self, target: &E, name: &str, args: &[Label]) -> Result<f64> {
        let entry = self
            .measures
            .get(name)
            .ok_or_else(|| KernelKitError::NoSuchMeasure(name.to_string()))?;
        if args.len() != entry.arity {
            return Err(KernelKitError::NoSuchMeasure(format!(
                "'{}' expects {} label argument(s), got {}",
                name,
                entry.arity,
                args.len()
            )));
        }
        Ok((entry.accessor)(target, args))
    }
}

impl<E: ?Sized> Default for MeasureRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> fmt::Debug for MeasureRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.measures.keys().collect();
        names.sort();
        f.debug_struct("MeasureRegistry")
            .field("measures", &names)
            .finish()
    }
}

/// Counter division with a 0.0 sentinel instead of a numeric fault
pub(crate) fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
