//! Linear kernel: K(x, y) = x^T * y
//!
//! The simplest direct kernel, computing the dot product between the two
//! examples' vector representations.

use crate::data::representation::SparseVector;
use crate::kernel::traits::{DirectKernel, DirectKernelFunction};

/// Dot product over sparse vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFunction;

impl DirectKernelFunction for LinearFunction {
    type Rep = SparseVector;

    fn similarity(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        a.dot(b)
    }
}

/// A linear kernel over one named vector representation
pub type LinearKernel = DirectKernel<LinearFunction>;

impl LinearKernel {
    /// Linear kernel over the representation named
    /// `representation_identifier`
    pub fn new<S: Into<String>>(representation_identifier: S) -> Self {
        DirectKernel::with_function(representation_identifier, LinearFunction)
    }
}
