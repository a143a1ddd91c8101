//! Example-selection policies
//!
//! A selector returns a fixed-size subset of examples, either from an
//! already-loaded dataset or from a streaming reader (loaded fully, then
//! selected).

use crate::core::error::Result;
use crate::data::dataset::SimpleDataset;
use crate::data::example::Example;
use crate::data::reader::ExampleReader;
use log::info;

/// How many loaded examples between progress reports
const PROGRESS_INTERVAL: usize = 100;

/// Policy object extracting a fixed-size subset of examples
pub trait ExampleSelector {
    /// Selects from a pre-loaded dataset
    fn select(&self, dataset: &mut SimpleDataset) -> Vec<Example>;

    /// Loads the whole stream, then selects
    fn select_from_reader(&self, reader: &mut dyn ExampleReader) -> Result<Vec<Example>>;
}

fn load_all(reader: &mut dyn ExampleReader) -> Result<SimpleDataset> {
    let mut dataset = SimpleDataset::new();
    while reader.has_next() {
        dataset.add_example(reader.read_next()?);
        if dataset.len() % PROGRESS_INTERVAL == 0 {
            info!("loaded {} examples", dataset.len());
        }
    }
    Ok(dataset)
}

/// Selects the first `m` examples, preserving their order
#[derive(Debug, Clone, Copy)]
pub struct FirstExampleSelector {
    m: usize,
}

impl FirstExampleSelector {
    pub fn new(m: usize) -> Self {
        Self { m }
    }
}

impl ExampleSelector for FirstExampleSelector {
    fn select(&self, dataset: &mut SimpleDataset) -> Vec<Example> {
        dataset.get_next_examples(self.m).to_vec()
    }

    fn select_from_reader(&self, reader: &mut dyn ExampleReader) -> Result<Vec<Example>> {
        let mut dataset = load_all(reader)?;
        Ok(dataset.get_next_examples(self.m).to_vec())
    }
}

/// Selects `m` examples at random via a seeded shuffle-then-take
#[derive(Debug, Clone, Copy)]
pub struct RandomExampleSelector {
    m: usize,
    seed: u64,
}

impl RandomExampleSelector {
    pub fn new(m: usize, seed: u64) -> Self {
        Self { m, seed }
    }

    fn take(&self, dataset: &mut SimpleDataset) -> Vec<Example> {
        dataset.set_seed(self.seed);
        dataset
            .get_shuffled_dataset()
            .get_next_examples(self.m)
            .to_vec()
    }
}

impl ExampleSelector for RandomExampleSelector {
    fn select(&self, dataset: &mut SimpleDataset) -> Vec<Example> {
        self.take(dataset)
    }

    fn select_from_reader(&self, reader: &mut dyn ExampleReader) -> Result<Vec<Example>> {
        let mut dataset = load_all(reader)?;
        Ok(self.take(&mut dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Label;
    use crate::data::example::SimpleExample;
    use crate::data::representation::{Representation, SparseVector};

    struct VecReader {
        examples: Vec<Example>,
    }

    impl ExampleReader for VecReader {
        fn has_next(&self) -> bool {
            !self.examples.is_empty()
        }

        fn read_next(&mut self) -> Result<Example> {
            Ok(self.examples.remove(0))
        }
    }

    fn example_with_value(value: f64) -> Example {
        let mut example = SimpleExample::new();
        example.add_representation(
            "bow",
            Representation::Vector(SparseVector::new(vec![0], vec![value])),
        );
        example.add_label(Label::new("A"));
        example.into()
    }

    fn values(selected: &[Example]) -> Vec<f64> {
        selected
            .iter()
            .map(|e| e.representation("bow").unwrap().as_vector().unwrap().get(0))
            .collect()
    }

    fn dataset_of(n: usize) -> SimpleDataset {
        let mut dataset = SimpleDataset::new();
        for i in 0..n {
            dataset.add_example(example_with_value(i as f64));
        }
        dataset
    }

    #[test]
    fn test_first_selector_preserves_order() {
        let mut dataset = dataset_of(5);
        let selected = FirstExampleSelector::new(3).select(&mut dataset);
        assert_eq!(values(&selected), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_first_selector_from_reader() {
        let mut reader = VecReader {
            examples: (0..5).map(|i| example_with_value(i as f64)).collect(),
        };
        let selected = FirstExampleSelector::new(2)
            .select_from_reader(&mut reader)
            .unwrap();
        assert_eq!(values(&selected), vec![0.0, 1.0]);
    }

    #[test]
    fn test_first_selector_shortfall() {
        let mut dataset = dataset_of(2);
        let selected = FirstExampleSelector::new(10).select(&mut dataset);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_random_selector_is_seed_deterministic() {
        let selector = RandomExampleSelector::new(4, 13);

        let mut first = dataset_of(8);
        let mut second = dataset_of(8);
        let a = values(&selector.select(&mut first));
        let b = values(&selector.select(&mut second));

        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_random_selector_from_reader_matches_dataset_path() {
        let selector = RandomExampleSelector::new(3, 21);

        let mut reader = VecReader {
            examples: (0..6).map(|i| example_with_value(i as f64)).collect(),
        };
        let from_reader = selector.select_from_reader(&mut reader).unwrap();

        let mut dataset = dataset_of(6);
        let from_dataset = selector.select(&mut dataset);

        assert_eq!(values(&from_reader), values(&from_dataset));
    }
}
