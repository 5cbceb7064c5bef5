//! Free-function forms of the common complex operations.

use crate::complex::ComplexNumber;

pub fn mag(z: ComplexNumber) -> f64 {
    z.magnitude()
}

pub fn arg(z: ComplexNumber) -> f64 {
    z.argument()
}

pub fn conjugate(z: ComplexNumber) -> ComplexNumber {
    z.conjugate()
}

/// Componentwise floor, the rounding step of the Gaussian remainder.
pub fn floor(z: ComplexNumber) -> ComplexNumber {
    z.round_to_gaussian_integer()
}
