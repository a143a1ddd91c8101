//! Ordered, re-readable, sample-able collections of examples

use crate::core::error::{KernelKitError, Result};
use crate::core::types::Label;
use crate::data::example::Example;
use crate::data::reader::ExampleReader;
use crate::data::representation::SparseVector;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Default seed of the per-dataset random generator. Draws and shuffles are
/// deterministic out of the box; call [`SimpleDataset::set_seed`] to change
/// the sequence.
const DEFAULT_SEED: u64 = 0;

/// An ordered collection of examples with a streaming read cursor and an
/// owned seeded random generator.
///
/// The cursor always lies in `[0, len]`; [`SimpleDataset::has_next_example`]
/// holds iff it is strictly below `len`. Random draws and shuffles consume
/// the dataset's own generator, never a process-wide one.
#[derive(Debug, Clone)]
pub struct SimpleDataset {
    examples: Vec<Example>,
    cursor: usize,
    rng: StdRng,
}

impl SimpleDataset {
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
            cursor: 0,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Populates a new dataset by draining a reader
    pub fn from_reader<R: ExampleReader + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut dataset = Self::new();
        while reader.has_next() {
            dataset.add_example(reader.read_next()?);
        }
        Ok(dataset)
    }

    /// Appends an example; cursor state is unaffected
    pub fn add_example(&mut self, example: Example) {
        self.examples.push(example);
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// All stored examples, in insertion order
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Whether the cursor has at least one example left. Pure predicate.
    pub fn has_next_example(&self) -> bool {
        self.cursor < self.examples.len()
    }

    /// Returns the next example and advances the cursor.
    ///
    /// Callers should check [`SimpleDataset::has_next_example`] first;
    /// reading past the end is an `Exhausted` error.
    pub fn get_next_example(&mut self) -> Result<&Example> {
        if !self.has_next_example() {
            return Err(KernelKitError::Exhausted(
                "no more examples to read in the dataset".to_string(),
            ));
        }
        let example = &self.examples[self.cursor];
        self.cursor += 1;
        Ok(example)
    }

    /// Returns the next `n` examples, or fewer if the dataset runs out
    pub fn get_next_examples(&mut self, n: usize) -> &[Example] {
        let start = self.cursor;
        let end = (self.cursor + n).min(self.examples.len());
        self.cursor = end;
        &self.examples[start..end]
    }

    /// Resets the read cursor to the beginning
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Counts the stored examples carrying `positive_class`. O(len) scan.
    pub fn number_of_positive_examples(&self, positive_class: &Label) -> usize {
        self.examples
            .iter()
            .filter(|e| e.is_example_of(positive_class))
            .count()
    }

    /// Counts the stored examples not carrying `positive_class`. O(len) scan.
    pub fn number_of_negative_examples(&self, positive_class: &Label) -> usize {
        self.examples.len() - self.number_of_positive_examples(positive_class)
    }

    /// All distinct classification labels, in sorted order
    pub fn classification_labels(&self) -> Vec<Label> {
        let set: BTreeSet<Label> = self
            .examples
            .iter()
            .flat_map(|e| e.labels().iter().cloned())
            .collect();
        set.into_iter().collect()
    }

    /// All distinct regression properties, in sorted order
    pub fn regression_properties(&self) -> Vec<Label> {
        let set: BTreeSet<Label> = self
            .examples
            .iter()
            .flat_map(|e| e.regression_properties().into_iter().cloned())
            .collect();
        set.into_iter().collect()
    }

    /// Reinitializes the random generator. Two datasets with identical
    /// contents and the same seed produce identical draws and shuffles.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws one example at random (with replacement across calls)
    pub fn rand_example(&mut self) -> Result<&Example> {
        if self.examples.is_empty() {
            return Err(KernelKitError::Exhausted(
                "cannot draw a random example from an empty dataset".to_string(),
            ));
        }
        let index = self.rng.gen_range(0..self.examples.len());
        Ok(&self.examples[index])
    }

    /// Draws `k` examples at random, with replacement
    pub fn rand_examples(&mut self, k: usize) -> Result<Vec<Example>> {
        let mut drawn = Vec::with_capacity(k);
        for _ in 0..k {
            drawn.push(self.rand_example()?.clone());
        }
        Ok(drawn)
    }

    /// Returns a new dataset with the same examples in a permuted order.
    ///
    /// The permutation is driven by this dataset's generator, so equal
    /// contents plus equal seed give equal orderings. The original order is
    /// untouched and the returned cursor starts at 0.
    pub fn get_shuffled_dataset(&mut self) -> SimpleDataset {
        let mut shuffled = self.examples.clone();
        shuffled.shuffle(&mut self.rng);
        SimpleDataset {
            examples: shuffled,
            cursor: 0,
            rng: StdRng::seed_from_u64(self.rng.gen()),
        }
    }

    /// Normalizes every contained example; representations lacking the
    /// capability are silently skipped
    pub fn normalize_examples(&mut self) {
        for example in &mut self.examples {
            example.normalize();
        }
    }

    /// A zero vector shaped like the named representation, taken from the
    /// first example carrying it. `NotFound` if no example does,
    /// `InvalidArgument` if it is carried but is not a vector.
    pub fn get_zero_vector(&self, representation_name: &str) -> Result<SparseVector> {
        let mut wrong_kind = None;
        for example in &self.examples {
            match example.representation(representation_name) {
                Some(representation) => match representation.as_vector() {
                    Some(vector) => return Ok(vector.zero_vector()),
                    None => {
                        wrong_kind = Some(representation.kind().name());
                    }
                },
                None => continue,
            }
        }
        match wrong_kind {
            Some(kind) => Err(KernelKitError::InvalidArgument(format!(
                "representation '{representation_name}' is a {kind}, not a vector"
            ))),
            None => Err(KernelKitError::NotFound(format!(
                "no example carries a representation named '{representation_name}'"
            ))),
        }
    }
}

impl Default for SimpleDataset {
    fn default() -> Self {
        Self::new()
    }
}
