//! Kernel methods toolkit
//!
//! Labeled examples with pluggable representations, datasets with streaming
//! cursors and seeded sampling, symmetric kernel similarity functions with
//! squared-norm caching, and evaluators for classification and regression
//! metrics.

pub mod cache;
pub mod core;
pub mod data;
pub mod evaluation;
pub mod kernel;

// Re-export main types for convenience
pub use crate::cache::{CacheStats, SquaredNormCache};
pub use crate::core::error::{KernelKitError, Result};
pub use crate::core::traits::Prediction;
pub use crate::core::types::{ClassificationOutput, Label, UnivariateRegressionOutput};
pub use crate::data::{
    DatasetReader, Example, ExampleId, ExamplePair, ExampleReader, ExampleSelector,
    FirstExampleSelector, RandomExampleSelector, Representation, SimpleDataset, SimpleExample,
    SparseVector, TreeNode, TreeRepresentation,
};
pub use crate::evaluation::{
    AccuracyEvaluator, BinaryClassificationEvaluator, ClassificationEvaluator, Evaluator,
    MeasureRegistry, RegressorEvaluator,
};
pub use crate::kernel::{
    DirectKernel, DirectKernelFunction, Kernel, LinearKernel, NormalizedKernel, PolynomialKernel,
};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
