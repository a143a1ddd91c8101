//! Polynomial kernel: K(x, y) = (γ * <x, y> + r)^d
//!
//! - γ (gamma): scaling factor for the dot product
//! - r (coef0): independent term in the polynomial
//! - d (degree): degree of the polynomial

use crate::data::representation::SparseVector;
use crate::kernel::traits::{DirectKernel, DirectKernelFunction};

/// Polynomial similarity over sparse vectors
#[derive(Debug, Clone, Copy)]
pub struct PolynomialFunction {
    /// Scaling factor for the dot product
    pub gamma: f64,
    /// Independent term in the polynomial
    pub coef0: f64,
    /// Degree of the polynomial
    pub degree: u32,
}

impl PolynomialFunction {
    pub fn new(degree: u32, gamma: f64, coef0: f64) -> Self {
        assert!(degree > 0, "Polynomial degree must be positive");
        assert!(gamma > 0.0, "Gamma must be positive");
        Self {
            gamma,
            coef0,
            degree,
        }
    }
}

impl DirectKernelFunction for PolynomialFunction {
    type Rep = SparseVector;

    fn similarity(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        (self.gamma * a.dot(b) + self.coef0).powi(self.degree as i32)
    }
}

/// A polynomial kernel over one named vector representation
pub type PolynomialKernel = DirectKernel<PolynomialFunction>;

impl PolynomialKernel {
    pub fn new<S: Into<String>>(
        representation_identifier: S,
        degree: u32,
        gamma: f64,
        coef0: f64,
    ) -> Self {
        DirectKernel::with_function(
            representation_identifier,
            PolynomialFunction::new(degree, gamma, coef0),
        )
    }

    /// Quadratic kernel: (<x,y> + 1)²
    pub fn quadratic<S: Into<String>>(representation_identifier: S) -> Self {
        Self::new(representation_identifier, 2, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::example::{Example, SimpleExample};
    use crate::data::representation::Representation;
    use crate::kernel::traits::Kernel;

    fn example(values: Vec<f64>) -> Example {
        let mut e = SimpleExample::new();
        let indices = (0..values.len()).collect();
        e.add_representation(
            "bow",
            Representation::Vector(SparseVector::new(indices, values)),
        );
        e.into()
    }

    #[test]
    fn test_quadratic_kernel() {
        let kernel = PolynomialKernel::quadratic("bow");
        let x = example(vec![1.0, 2.0]);
        let y = example(vec![3.0, 1.0]);

        // (1*3 + 2*1 + 1)^2 = 36
        assert_eq!(kernel.compute(&x, &y).unwrap(), 36.0);
    }

    #[test]
    fn test_polynomial_kernel_symmetry() {
        let kernel = PolynomialKernel::new("bow", 3, 0.5, 1.0);
        let x = example(vec![1.0, -2.0, 0.5]);
        let y = example(vec![0.0, 4.0, 2.0]);

        assert_eq!(
            kernel.compute(&x, &y).unwrap(),
            kernel.compute(&y, &x).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "Polynomial degree must be positive")]
    fn test_zero_degree_rejected() {
        PolynomialFunction::new(0, 1.0, 1.0);
    }
}
