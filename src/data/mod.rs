//! Data model: representations, examples, datasets, readers and selectors

pub mod dataset;
pub mod example;
pub mod reader;
pub mod representation;
pub mod selection;

pub use self::dataset::SimpleDataset;
pub use self::example::{Example, ExampleId, ExamplePair, SimpleExample};
pub use self::reader::{DatasetReader, ExampleReader};
pub use self::representation::{
    Representation, RepresentationContent, RepresentationKind, SparseVector, TreeNode,
    TreeRepresentation,
};
pub use self::selection::{ExampleSelector, FirstExampleSelector, RandomExampleSelector};
