use serde::{Deserialize, Serialize};
use std::fmt;

/// Component(s) touched by [`ComplexNumber::inc`](crate::ComplexNumber::inc)
/// and [`ComplexNumber::dec`](crate::ComplexNumber::dec).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Real,
    Imaginary,
    #[default]
    Both,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real" | "re" => Ok(Self::Real),
            "imaginary" | "imag" | "im" => Ok(Self::Imaginary),
            "both" => Ok(Self::Both),
            _ => Err(format!("invalid part: {s}")),
        }
    }
}
