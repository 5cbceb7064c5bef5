use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::complex::{ComplexNumber, Real, ToComplex};
use crate::functions::floor;

// ---------------------------------------------------------------------------
// Complex ⊕ Complex
// ---------------------------------------------------------------------------

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re() + rhs.re(), self.im() + rhs.im())
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re() - rhs.re(), self.im() - rhs.im())
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(
            self.re() * rhs.re() - self.im() * rhs.im(),
            self.re() * rhs.im() + self.im() * rhs.re(),
        )
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;

    /// `a·conj(b) / |b|²`. A zero divisor yields infinities or NaN.
    fn div(self, rhs: ComplexNumber) -> ComplexNumber {
        let conj = rhs.conjugate();
        // Real part of b·conj(b); the imaginary part cancels.
        let norm = rhs.re() * rhs.re() + rhs.im() * rhs.im();
        self * conj * (1.0 / norm)
    }
}

impl Rem for ComplexNumber {
    type Output = ComplexNumber;

    /// `a - b·q` where `q` is `a/b` with both parts floored.
    fn rem(self, rhs: ComplexNumber) -> ComplexNumber {
        -rhs * floor(self / rhs) + self
    }
}

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::new(-self.re(), -self.im())
    }
}

// ---------------------------------------------------------------------------
// Complex ⊕ Real
// ---------------------------------------------------------------------------

macro_rules! impl_real_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for ComplexNumber {
                type Output = ComplexNumber;

                fn add(self, rhs: $t) -> ComplexNumber {
                    ComplexNumber::new(self.re() + rhs.into_f64(), self.im())
                }
            }

            impl Sub<$t> for ComplexNumber {
                type Output = ComplexNumber;

                fn sub(self, rhs: $t) -> ComplexNumber {
                    ComplexNumber::new(self.re() - rhs.into_f64(), self.im())
                }
            }

            impl Mul<$t> for ComplexNumber {
                type Output = ComplexNumber;

                fn mul(self, rhs: $t) -> ComplexNumber {
                    let k = rhs.into_f64();
                    ComplexNumber::new(self.re() * k, self.im() * k)
                }
            }

            impl Div<$t> for ComplexNumber {
                type Output = ComplexNumber;

                fn div(self, rhs: $t) -> ComplexNumber {
                    self / rhs.to_complex()
                }
            }

            impl AddAssign<$t> for ComplexNumber {
                fn add_assign(&mut self, rhs: $t) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$t> for ComplexNumber {
                fn sub_assign(&mut self, rhs: $t) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$t> for ComplexNumber {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$t> for ComplexNumber {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_real_ops!(f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ---------------------------------------------------------------------------
// Compound assignment
// ---------------------------------------------------------------------------

impl AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: ComplexNumber) {
        *self = *self + rhs;
    }
}

impl SubAssign for ComplexNumber {
    fn sub_assign(&mut self, rhs: ComplexNumber) {
        *self = *self - rhs;
    }
}

impl MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: ComplexNumber) {
        *self = *self * rhs;
    }
}

impl DivAssign for ComplexNumber {
    fn div_assign(&mut self, rhs: ComplexNumber) {
        *self = *self / rhs;
    }
}

impl RemAssign for ComplexNumber {
    fn rem_assign(&mut self, rhs: ComplexNumber) {
        *self = *self % rhs;
    }
}
