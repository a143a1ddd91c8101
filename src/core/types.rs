//! Core type definitions: labels and prediction outputs

use crate::core::traits::Prediction;
use std::collections::HashMap;
use std::fmt;

/// A class (classification) or target (regression) identifier.
///
/// Labels are compared and hashed by content, so two labels built from the
/// same string are interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Create a new label from any string-like value
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The label name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Classification output: a score per label plus the labels ranked best-first.
///
/// Evaluators read either the per-label score (binary tasks) or the top
/// ranked label (multi-class tasks).
#[derive(Debug, Clone)]
pub struct ClassificationOutput {
    scores: HashMap<Label, f64>,
    ranked: Vec<Label>,
}

impl ClassificationOutput {
    /// Build an output from per-label scores, ranking labels by descending score
    pub fn from_scores(scores: Vec<(Label, f64)>) -> Self {
        let mut ranked: Vec<(Label, f64)> = scores.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            scores: scores.into_iter().collect(),
            ranked: ranked.into_iter().map(|(l, _)| l).collect(),
        }
    }

    /// Build an output with a single scored label
    pub fn single(label: Label, score: f64) -> Self {
        Self::from_scores(vec![(label, score)])
    }
}

impl Prediction for ClassificationOutput {
    fn score(&self, label: &Label) -> Option<f64> {
        self.scores.get(label).copied()
    }

    fn predicted_labels(&self) -> &[Label] {
        &self.ranked
    }
}

/// Regression output: one numeric score per target property.
#[derive(Debug, Clone, Default)]
pub struct UnivariateRegressionOutput {
    scores: HashMap<Label, f64>,
}

impl UnivariateRegressionOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicted value for a target property
    pub fn set_score(&mut self, label: Label, score: f64) {
        self.scores.insert(label, score);
    }

    /// Convenience constructor for a single-target prediction
    pub fn single(label: Label, score: f64) -> Self {
        let mut output = Self::new();
        output.set_score(label, score);
        output
    }
}

impl Prediction for UnivariateRegressionOutput {
    fn score(&self, label: &Label) -> Option<f64> {
        self.scores.get(label).copied()
    }

    fn predicted_labels(&self) -> &[Label] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_equality_and_hash() {
        use std::collections::HashSet;

        let a = Label::new("sport");
        let b = Label::from("sport");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_classification_output_ranking() {
        let output = ClassificationOutput::from_scores(vec![
            (Label::new("a"), 0.2),
            (Label::new("b"), 0.9),
            (Label::new("c"), -0.5),
        ]);

        assert_eq!(output.predicted_labels()[0], Label::new("b"));
        assert_eq!(output.score(&Label::new("c")), Some(-0.5));
        assert_eq!(output.score(&Label::new("unknown")), None);
    }

    #[test]
    fn test_regression_output() {
        let target = Label::new("price");
        let output = UnivariateRegressionOutput::single(target.clone(), 3.5);

        assert_eq!(output.score(&target), Some(3.5));
        assert!(output.predicted_labels().is_empty());
    }
}
