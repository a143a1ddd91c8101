//! Core collaborator traits

use crate::core::types::Label;

/// Opaque prediction produced by a learning component.
///
/// Evaluators extract from it, depending on the task, a per-label numeric
/// score, the ranked list of predicted labels, or a per-target regression
/// value. The scoring model itself is outside this crate.
pub trait Prediction {
    /// Score assigned to `label`, or `None` if the prediction does not cover it
    fn score(&self, label: &Label) -> Option<f64>;

    /// Predicted labels ordered best-first; empty for pure regression outputs
    fn predicted_labels(&self) -> &[Label];
}
