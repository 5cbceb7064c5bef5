use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::default_round;
use crate::error::{CompxError, CompxResult};
use crate::part::Part;
use crate::rounding::floor_to;

/// Numeric primitives accepted as real operands.
pub trait Real: Copy + 'static {
    fn into_f64(self) -> f64;
}

/// Lift a real number onto the real axis.
pub trait ToComplex {
    fn to_complex(self) -> ComplexNumber;
}

impl<T: Real> ToComplex for T {
    fn to_complex(self) -> ComplexNumber {
        ComplexNumber::from_real(self)
    }
}

macro_rules! impl_real {
    ($($t:ty),* $(,)?) => {
        $(
            impl Real for $t {
                #[inline]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_real!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Immutable `re + im·i`.
///
/// Magnitude and argument are computed once at construction. Equality is
/// tolerant: both sides are floor-rounded to
/// [`default_round`](crate::constants::default_round) decimal places first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Cartesian", into = "Cartesian")]
pub struct ComplexNumber {
    re: f64,
    im: f64,
    magnitude: f64,
    argument: f64,
}

#[derive(Serialize, Deserialize)]
struct Cartesian {
    re: f64,
    im: f64,
}

impl From<Cartesian> for ComplexNumber {
    fn from(c: Cartesian) -> Self {
        Self::new(c.re, c.im)
    }
}

impl From<ComplexNumber> for Cartesian {
    fn from(z: ComplexNumber) -> Self {
        Self { re: z.re, im: z.im }
    }
}

impl ComplexNumber {
    pub fn new<R: Real, I: Real>(re: R, im: I) -> Self {
        let re = re.into_f64();
        let im = im.into_f64();
        Self {
            re,
            im,
            magnitude: (re * re + im * im).sqrt(),
            argument: im.atan2(re),
        }
    }

    pub fn from_real<R: Real>(re: R) -> Self {
        Self::new(re, 0.0)
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    /// `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// `atan2(im, re)`, in `(-π, π]`.
    pub fn argument(&self) -> f64 {
        self.argument
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// The real part, provided the imaginary part is exactly zero.
    pub fn to_real(&self) -> CompxResult<f64> {
        if self.im == 0.0 {
            Ok(self.re)
        } else {
            Err(CompxError::IllegalConversionArgument)
        }
    }

    pub fn inc(&self, part: Part) -> Self {
        self.shift(part, 1.0)
    }

    pub fn dec(&self, part: Part) -> Self {
        self.shift(part, -1.0)
    }

    pub fn increment(&self) -> Self {
        self.inc(Part::default())
    }

    pub fn decrement(&self) -> Self {
        self.dec(Part::default())
    }

    fn shift(&self, part: Part, by: f64) -> Self {
        match part {
            Part::Real => Self::new(self.re + by, self.im),
            Part::Imaginary => Self::new(self.re, self.im + by),
            Part::Both => Self::new(self.re + by, self.im + by),
        }
    }

    /// Floor both components to `places` decimal digits.
    pub fn round(&self, places: u32) -> Self {
        Self::new(floor_to(self.re, places), floor_to(self.im, places))
    }

    pub fn round_to_gaussian_integer(&self) -> Self {
        self.round(0)
    }

    /// True when `other % self` is zero under the rounded equality.
    pub fn divides(&self, other: ComplexNumber) -> bool {
        other % *self == 0.0
    }

    /// Equality after flooring both sides to `places` decimal digits.
    pub fn eq_rounded(&self, other: &ComplexNumber, places: u32) -> bool {
        let a = self.round(places);
        let b = other.round(places);
        a.re == b.re && a.im == b.im
    }

    /// Compare against a value whose type is only known at runtime.
    ///
    /// Complex numbers and numeric primitives are accepted; anything else
    /// fails with [`CompxError::InvalidComparison`].
    pub fn try_eq<T: Any>(&self, other: &T) -> CompxResult<bool> {
        let any = other as &dyn Any;
        if let Some(z) = any.downcast_ref::<ComplexNumber>() {
            return Ok(self == z);
        }
        match real_operand(any) {
            Some(r) => Ok(*self == r),
            None => Err(CompxError::InvalidComparison(
                std::any::type_name::<T>().to_string(),
            )),
        }
    }

    // Infinities count as whole numbers; NaN does not.
    fn is_integral(&self) -> bool {
        let whole = |v: f64| v.floor() == v.ceil();
        whole(self.re) && whole(self.im)
    }
}

fn real_operand(any: &dyn Any) -> Option<f64> {
    macro_rules! downcast {
        ($($t:ty),*) => {
            $(
                if let Some(v) = any.downcast_ref::<$t>() {
                    return Some(v.into_f64());
                }
            )*
        };
    }
    downcast!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    None
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        self.eq_rounded(other, default_round())
    }
}

macro_rules! impl_eq_real {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for ComplexNumber {
                fn eq(&self, other: &$t) -> bool {
                    *self == other.to_complex()
                }
            }
        )*
    };
}

impl_eq_real!(f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Hashes the same rounded form equality compares, so equal values hash alike
// while `default_round` stays put.
impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let rounded = self.round(default_round());
        canonical_bits(rounded.re).hash(state);
        canonical_bits(rounded.im).hash(state);
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < 0.0 { '-' } else { '+' };
        if self.is_integral() {
            // -0.0 would print as "-0"
            let re = if self.re == 0.0 { 0.0 } else { self.re };
            write!(f, "{re:.0} {sign} {:.0}i", self.im.abs())
        } else {
            write!(f, "{:?} {sign} {:?}i", self.re, self.im.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::f64::consts::PI;

    fn hash_of(z: &ComplexNumber) -> u64 {
        let mut h = DefaultHasher::new();
        z.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_new_from_integers() {
        let z = ComplexNumber::new(3, 4);
        assert_eq!(z.re(), 3.0);
        assert_eq!(z.im(), 4.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(ComplexNumber::new(3, 4).magnitude(), 5.0);
        for (re, im) in [(1.5f64, -2.0f64), (-7.25, 0.5), (0.0, 0.0)] {
            let z = ComplexNumber::new(re, im);
            assert_eq!(z.magnitude(), (re * re + im * im).sqrt());
        }
    }

    #[test]
    fn test_argument() {
        assert_eq!(ComplexNumber::new(-1, 0).argument(), PI);
        assert_eq!(ComplexNumber::new(1, 0).argument(), 0.0);
        assert_eq!(ComplexNumber::zero().argument(), 0.0);
        assert_eq!(ComplexNumber::new(0, 1).argument(), PI / 2.0);
    }

    #[test]
    fn test_conjugate_is_involutive() {
        for z in [
            ComplexNumber::new(1.5, -2.25),
            ComplexNumber::new(-3, 7),
            ComplexNumber::zero(),
        ] {
            assert_eq!(z.conjugate().conjugate(), z);
        }
        assert_eq!(ComplexNumber::new(2, 3).conjugate().im(), -3.0);
    }

    #[test]
    fn test_to_real() {
        assert_eq!(ComplexNumber::new(4.5, 0).to_real().unwrap(), 4.5);
        assert_eq!(ComplexNumber::new(4.5, -0.0).to_real().unwrap(), 4.5);
        assert_eq!(
            ComplexNumber::new(3, 4).to_real().unwrap_err(),
            CompxError::IllegalConversionArgument
        );
    }

    #[test]
    fn test_to_real_has_no_tolerance() {
        assert!(ComplexNumber::new(1.0, 1e-300).to_real().is_err());
    }

    #[test]
    fn test_real_roundtrip() {
        for r in [0.0, -3.5, 42.0, 1e-9] {
            let z = ComplexNumber::from_real(r);
            assert_eq!(z.to_real().unwrap().to_complex(), z);
        }
    }

    #[test]
    fn test_inc_dec() {
        let z = ComplexNumber::new(2, 5);
        assert_eq!(z.inc(Part::Real), ComplexNumber::new(3, 5));
        assert_eq!(z.inc(Part::Imaginary), ComplexNumber::new(2, 6));
        assert_eq!(z.increment(), ComplexNumber::new(3, 6));
        assert_eq!(z.dec(Part::Real), ComplexNumber::new(1, 5));
        assert_eq!(z.dec(Part::Imaginary), ComplexNumber::new(2, 4));
        assert_eq!(z.decrement(), ComplexNumber::new(1, 4));
    }

    #[test]
    fn test_round_floors_each_part() {
        let z = ComplexNumber::new(2.789, -1.231).round(2);
        assert_eq!(z.re(), 2.78);
        assert_eq!(z.im(), -1.24);
    }

    #[test]
    fn test_round_to_gaussian_integer() {
        let z = ComplexNumber::new(2.9, -0.1).round_to_gaussian_integer();
        assert_eq!(z.re(), 2.0);
        assert_eq!(z.im(), -1.0);
    }

    #[test]
    fn test_eq_is_tolerant_past_precision() {
        let a = ComplexNumber::new(1.0, 2.0);
        let b = ComplexNumber::new(1.000_000_000_000_01, 2.000_000_000_000_04);
        assert_eq!(a, b);
        assert!(a != ComplexNumber::new(1.0001, 2.0));
    }

    #[test]
    fn test_eq_rounded_explicit_precision() {
        let a = ComplexNumber::new(1.0, 2.0);
        let b = ComplexNumber::new(1.004, 2.009);
        assert!(a.eq_rounded(&b, 2));
        assert!(!a.eq_rounded(&b, 3));
    }

    #[test]
    fn test_eq_real() {
        assert_eq!(ComplexNumber::new(5, 0), 5);
        assert_eq!(ComplexNumber::new(5, 0), 5.0);
        assert!(ComplexNumber::new(5, 1) != 5.0);
    }

    #[test]
    fn test_try_eq() {
        let z = ComplexNumber::new(7, 0);
        assert!(z.try_eq(&ComplexNumber::new(7, 0)).unwrap());
        assert!(z.try_eq(&7u8).unwrap());
        assert!(!z.try_eq(&6.5f32).unwrap());
        match z.try_eq(&"seven") {
            Err(CompxError::InvalidComparison(ty)) => assert!(ty.contains("str")),
            other => panic!("expected InvalidComparison, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_matches_rounded_equality() {
        let a = ComplexNumber::new(1.0, 2.0);
        let b = ComplexNumber::new(1.000_000_000_000_01, 2.000_000_000_000_04);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(
            hash_of(&ComplexNumber::new(0.0, -0.0)),
            hash_of(&ComplexNumber::zero())
        );
        assert_ne!(
            hash_of(&ComplexNumber::new(1, 2)),
            hash_of(&ComplexNumber::new(2, 1))
        );
    }

    #[test]
    fn test_display_integral() {
        assert_eq!(ComplexNumber::new(5, -8).to_string(), "5 - 8i");
        assert_eq!(ComplexNumber::new(-3, 2).to_string(), "-3 + 2i");
        assert_eq!(ComplexNumber::new(0, -0.0).to_string(), "0 + 0i");
    }

    #[test]
    fn test_display_fractional() {
        assert_eq!(ComplexNumber::new(5.5, 2.25).to_string(), "5.5 + 2.25i");
        assert_eq!(ComplexNumber::new(5, -2.25).to_string(), "5.0 - 2.25i");
    }

    #[test]
    fn test_display_non_finite_and_exponents() {
        assert_eq!(
            ComplexNumber::new(f64::INFINITY, 1).to_string(),
            "inf + 1i"
        );
        assert_eq!(
            ComplexNumber::new(2, f64::NEG_INFINITY).to_string(),
            "2 - infi"
        );
        assert_eq!(ComplexNumber::new(1, f64::NAN).to_string(), "1.0 + NaNi");
        assert_eq!(ComplexNumber::new(1e-5, 0.5).to_string(), "1e-5 + 0.5i");
        assert_eq!(
            ComplexNumber::new(1e20, 0).to_string(),
            "100000000000000000000 + 0i"
        );
    }

    #[test]
    fn test_nan_propagates() {
        let z = ComplexNumber::new(f64::NAN, 1.0);
        assert!(z.magnitude().is_nan());
        assert!(z != z);
    }

    #[test]
    fn test_serde_shape() {
        let z = ComplexNumber::new(1.5, -2);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"re":1.5,"im":-2.0}"#);
        let back: ComplexNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back.magnitude(), z.magnitude());
    }
}
