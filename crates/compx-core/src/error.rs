use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompxError {
    #[error("illegal conversion: this number has a non zero imaginary part")]
    IllegalConversionArgument,

    #[error("invalid comparison: cannot compare a complex number to {0}")]
    InvalidComparison(String),

    #[error("rounding precision {0} is outside the range 0..={max}", max = crate::constants::MAX_ROUND)]
    ConversionRangeOutsideOfBounds(u32),
}

pub type CompxResult<T> = Result<T, CompxError>;
