//! Labeled examples composed of named representations
//!
//! An example owns a set of named representations plus classification labels
//! and regression values. Every example gets a unique identifier at
//! construction; kernel-side caches key on that identifier, so an example's
//! identity is stable for its whole lifetime (clones share it).

use crate::core::error::{KernelKitError, Result};
use crate::core::types::Label;
use crate::data::representation::{Representation, SparseVector};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EXAMPLE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of an example, assigned once at construction.
///
/// Two structurally identical examples built independently have different
/// ids: squared-norm caches are keyed by identity, not by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExampleId(u64);

impl ExampleId {
    fn next() -> Self {
        Self(NEXT_EXAMPLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An example composed of a set of named representations
#[derive(Debug, Clone)]
pub struct SimpleExample {
    id: ExampleId,
    representations: HashMap<String, Representation>,
    labels: Vec<Label>,
    regression_values: HashMap<Label, f64>,
}

impl SimpleExample {
    /// Initializes an empty example (0 labels and 0 representations)
    pub fn new() -> Self {
        Self {
            id: ExampleId::next(),
            representations: HashMap::new(),
            labels: Vec::new(),
            regression_values: HashMap::new(),
        }
    }

    /// Initializes an example with the given labels and representations
    pub fn with_contents(
        labels: Vec<Label>,
        representations: HashMap<String, Representation>,
    ) -> Self {
        let mut example = Self::new();
        example.representations = representations;
        for label in labels {
            example.add_label(label);
        }
        example
    }

    pub fn id(&self) -> ExampleId {
        self.id
    }

    /// Adds a representation, replacing any previous one with the same name
    pub fn add_representation<S: Into<String>>(
        &mut self,
        name: S,
        representation: Representation,
    ) {
        self.representations.insert(name.into(), representation);
    }

    pub fn representation(&self, name: &str) -> Option<&Representation> {
        self.representations.get(name)
    }

    pub fn representation_mut(&mut self, name: &str) -> Option<&mut Representation> {
        self.representations.get_mut(name)
    }

    pub fn number_of_representations(&self) -> usize {
        self.representations.len()
    }

    /// Adds a classification label; duplicates are ignored
    pub fn add_label(&mut self, label: Label) {
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }

    /// Classification labels, in insertion order. The first one is treated
    /// as the gold label by multi-class evaluators.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn is_example_of(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Sets the regression target value for a property
    pub fn set_regression_value(&mut self, property: Label, value: f64) {
        self.regression_values.insert(property, value);
    }

    pub fn regression_value(&self, property: &Label) -> Option<f64> {
        self.regression_values.get(property).copied()
    }

    pub fn regression_properties(&self) -> impl Iterator<Item = &Label> {
        self.regression_values.keys()
    }

    /// Normalize each normalizable representation; the rest are skipped
    pub fn normalize(&mut self) {
        for representation in self.representations.values_mut() {
            representation.normalize();
        }
    }

    /// A zero vector shaped like the named vector representation
    pub fn zero_vector(&self, representation_name: &str) -> Result<SparseVector> {
        let representation = self.representation(representation_name).ok_or_else(|| {
            KernelKitError::NotFound(format!(
                "representation '{representation_name}' not present in example"
            ))
        })?;
        let vector = representation.as_vector().ok_or_else(|| {
            KernelKitError::InvalidArgument(format!(
                "representation '{}' is a {}, not a vector",
                representation_name,
                representation.kind().name()
            ))
        })?;
        Ok(vector.zero_vector())
    }

    /// Structural comparison of representations, ignoring labels and identity
    pub fn structurally_equal_ignore_labels(&self, other: &SimpleExample) -> bool {
        if self.number_of_representations() != other.number_of_representations() {
            return false;
        }
        self.representations
            .iter()
            .all(|(name, representation)| other.representation(name) == Some(representation))
    }
}

impl Default for SimpleExample {
    fn default() -> Self {
        Self::new()
    }
}

/// A pair of examples, used in tasks comparing two instances
/// (re-ranking, entailment)
#[derive(Debug, Clone)]
pub struct ExamplePair {
    id: ExampleId,
    labels: Vec<Label>,
    regression_values: HashMap<Label, f64>,
    left: Box<Example>,
    right: Box<Example>,
}

impl ExamplePair {
    pub fn new(left: Example, right: Example) -> Self {
        Self {
            id: ExampleId::next(),
            labels: Vec::new(),
            regression_values: HashMap::new(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Example {
        &self.left
    }

    pub fn right(&self) -> &Example {
        &self.right
    }

    pub fn add_label(&mut self, label: Label) {
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }

    pub fn set_regression_value(&mut self, property: Label, value: f64) {
        self.regression_values.insert(property, value);
    }
}

/// A labeled instance: either a simple example or a pair of examples
#[derive(Debug, Clone)]
pub enum Example {
    Simple(SimpleExample),
    Pair(ExamplePair),
}

impl Example {
    /// Identity used as cache key; stable for the example's lifetime
    pub fn id(&self) -> ExampleId {
        match self {
            Example::Simple(example) => example.id,
            Example::Pair(pair) => pair.id,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleExample> {
        match self {
            Example::Simple(example) => Some(example),
            _ => None,
        }
    }

    pub fn labels(&self) -> &[Label] {
        match self {
            Example::Simple(example) => example.labels(),
            Example::Pair(pair) => &pair.labels,
        }
    }

    pub fn is_example_of(&self, label: &Label) -> bool {
        self.labels().contains(label)
    }

    pub fn regression_value(&self, property: &Label) -> Option<f64> {
        match self {
            Example::Simple(example) => example.regression_value(property),
            Example::Pair(pair) => pair.regression_values.get(property).copied(),
        }
    }

    pub fn regression_properties(&self) -> Vec<&Label> {
        match self {
            Example::Simple(example) => example.regression_properties().collect(),
            Example::Pair(pair) => pair.regression_values.keys().collect(),
        }
    }

    /// Normalize every normalizable representation; pairs delegate to both
    /// children
    pub fn normalize(&mut self) {
        match self {
            Example::Simple(example) => example.normalize(),
            Example::Pair(pair) => {
                pair.left.normalize();
                pair.right.normalize();
            }
        }
    }

    /// A zero vector shaped like the named vector representation; pairs
    /// delegate to the left child
    pub fn zero_vector(&self, representation_name: &str) -> Result<SparseVector> {
        match self {
            Example::Simple(example) => example.zero_vector(representation_name),
            Example::Pair(pair) => pair.left.zero_vector(representation_name),
        }
    }

    /// Looks up a named representation; pairs delegate to the left child
    pub fn representation(&self, name: &str) -> Option<&Representation> {
        match self {
            Example::Simple(example) => example.representation(name),
            Example::Pair(pair) => pair.left.representation(name),
        }
    }
}

impl From<SimpleExample> for Example {
    fn from(example: SimpleExample) -> Self {
        Example::Simple(example)
    }
}

impl From<ExamplePair> for Example {
    fn from(pair: ExamplePair) -> Self {
        Example::Pair(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::representation::{TreeNode, TreeRepresentation};
    use approx::assert_relative_eq;

    fn vector_example(name: &str, indices: Vec<usize>, values: Vec<f64>) -> SimpleExample {
        let mut example = SimpleExample::new();
        example.add_representation(
            name,
            Representation::Vector(SparseVector::new(indices, values)),
        );
        example
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let a = SimpleExample::new();
        let b = SimpleExample::new();
        assert_ne!(a.id(), b.id());

        let clone = a.clone();
        assert_eq!(a.id(), clone.id());
    }

    #[test]
    fn test_labels_dedup_and_order() {
        let mut example = SimpleExample::new();
        example.add_label(Label::new("sport"));
        example.add_label(Label::new("politics"));
        example.add_label(Label::new("sport"));

        assert_eq!(
            example.labels(),
            &[Label::new("sport"), Label::new("politics")]
        );
        assert!(example.is_example_of(&Label::new("politics")));
        assert!(!example.is_example_of(&Label::new("economy")));
    }

    #[test]
    fn test_regression_values() {
        let mut example = SimpleExample::new();
        let target = Label::new("price");
        example.set_regression_value(target.clone(), 2.5);

        assert_eq!(example.regression_value(&target), Some(2.5));
        assert_eq!(example.regression_value(&Label::new("other")), None);
    }

    #[test]
    fn test_normalize_skips_trees() {
        let mut example = vector_example("bow", vec![0, 1], vec![3.0, 4.0]);
        example.add_representation(
            "parse",
            Representation::Tree(TreeRepresentation::new(TreeNode::leaf("S"))),
        );

        example.normalize();

        let vector = example.representation("bow").unwrap().as_vector().unwrap();
        assert_relative_eq!(vector.norm(), 1.0);
        assert!(example.representation("parse").unwrap().as_tree().is_some());
    }

    #[test]
    fn test_zero_vector_errors() {
        let example = vector_example("bow", vec![0], vec![1.0]);

        assert!(example.zero_vector("bow").unwrap().is_empty());
        assert!(matches!(
            example.zero_vector("missing"),
            Err(KernelKitError::NotFound(_))
        ));

        let mut with_tree = SimpleExample::new();
        with_tree.add_representation(
            "parse",
            Representation::Tree(TreeRepresentation::new(TreeNode::leaf("S"))),
        );
        assert!(matches!(
            with_tree.zero_vector("parse"),
            Err(KernelKitError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_structural_equality_ignores_labels_and_identity() {
        let mut a = vector_example("bow", vec![0, 1], vec![1.0, 2.0]);
        a.add_label(Label::new("x"));
        let b = vector_example("bow", vec![0, 1], vec![1.0, 2.0]);

        assert!(a.structurally_equal_ignore_labels(&b));
        assert_ne!(a.id(), b.id());

        let c = vector_example("bow", vec![0, 1], vec![1.0, 3.0]);
        assert!(!a.structurally_equal_ignore_labels(&c));
    }

    #[test]
    fn test_pair_delegation() {
        let left = vector_example("bow", vec![0, 1], vec![3.0, 4.0]);
        let right = vector_example("bow", vec![0], vec![2.0]);
        let mut pair = Example::from(ExamplePair::new(left.into(), right.into()));

        pair.normalize();
        match &pair {
            Example::Pair(p) => {
                let left_vec = p.left().representation("bow").unwrap().as_vector().unwrap();
                let right_vec = p
                    .right()
                    .representation("bow")
                    .unwrap()
                    .as_vector()
                    .unwrap();
                assert_relative_eq!(left_vec.norm(), 1.0);
                assert_relative_eq!(right_vec.norm(), 1.0);
            }
            _ => unreachable!(),
        }

        // zero vector goes through the left child
        assert!(pair.zero_vector("bow").unwrap().is_empty());
    }
}
