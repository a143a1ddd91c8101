//! Kernel trait and the direct-kernel dispatch

use crate::core::error::{KernelKitError, Result};
use crate::data::example::Example;
use crate::data::representation::RepresentationContent;

/// A symmetric similarity function over pairs of examples.
///
/// Every implementation must satisfy k(a, b) == k(b, a) for all valid
/// inputs; the test suite verifies this property for each concrete kernel.
pub trait Kernel {
    /// Compute the kernel similarity between two examples
    fn compute(&self, a: &Example, b: &Example) -> Result<f64>;
}

/// A typed similarity over one representation kind, plugged into a
/// [`DirectKernel`]
pub trait DirectKernelFunction {
    type Rep: RepresentationContent;

    /// Similarity between two representations of the target kind.
    /// Must be symmetric.
    fn similarity(&self, a: &Self::Rep, b: &Self::Rep) -> f64;
}

/// A kernel operating directly on one named representation.
///
/// The named representation is extracted from each example and handed to the
/// typed similarity function. Examples of the wrong structural kind, a
/// missing representation name, or a representation of the wrong kind all
/// fail fast with `InvalidArgument`; a silent zero similarity would corrupt
/// downstream learning.
#[derive(Debug, Clone)]
pub struct DirectKernel<F: DirectKernelFunction> {
    representation: String,
    function: F,
}

impl<F: DirectKernelFunction> DirectKernel<F> {
    /// A direct kernel applying `function` to the representation named
    /// `representation_identifier`. Concrete kernels expose their own `new`
    /// taking the function parameters directly.
    pub fn with_function<S: Into<String>>(representation_identifier: S, function: F) -> Self {
        Self {
            representation: representation_identifier.into(),
            function,
        }
    }

    /// The target representation identifier
    pub fn representation(&self) -> &str {
        &self.representation
    }

    fn extract<'a>(&self, example: &'a Example) -> Result<&'a F::Rep> {
        let simple = example.as_simple().ok_or_else(|| {
            KernelKitError::InvalidArgument(
                "direct kernels operate on simple examples, not example pairs".to_string(),
            )
        })?;
        let representation = simple.representation(&self.representation).ok_or_else(|| {
            KernelKitError::InvalidArgument(format!(
                "example carries no representation named '{}'",
                self.representation
            ))
        })?;
        F::Rep::extract(representation).ok_or_else(|| {
            KernelKitError::InvalidArgument(format!(
                "representation '{}' is a {}, expected a {}",
                self.representation,
                representation.kind().name(),
                F::Rep::KIND.name()
            ))
        })
    }
}

impl<F: DirectKernelFunction> Kernel for DirectKernel<F> {
    fn compute(&self, a: &Example, b: &Example) -> Result<f64> {
        let rep_a = self.extract(a)?;
        let rep_b = self.extract(b)?;
        Ok(self.function.similarity(rep_a, rep_b))
    }
}
