//! Core error, label and collaborator definitions

pub mod error;
pub mod traits;
pub mod types;

pub use self::error::{KernelKitError, Result};
pub use self::traits::Prediction;
pub use self::types::{ClassificationOutput, Label, UnivariateRegressionOutput};
