//! Kernel similarity functions over examples

pub mod linear;
pub mod normalized;
pub mod polynomial;
pub mod traits;

pub use self::linear::{LinearFunction, LinearKernel};
pub use self::normalized::NormalizedKernel;
pub use self::polynomial::{PolynomialFunction, PolynomialKernel};
pub use self::traits::{DirectKernel, DirectKernelFunction, Kernel};
