pub mod complex;
pub mod constants;
pub mod error;
pub mod functions;
mod ops;
pub mod part;
pub mod rounding;

pub use complex::{ComplexNumber, Real, ToComplex};
pub use constants::{default_round, i, set_default_round};
pub use error::{CompxError, CompxResult};
pub use part::Part;
