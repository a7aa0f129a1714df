//! k1field: arithmetic over the secp256k1 base field
//!
//! This library provides addition, subtraction, multiplication, inversion,
//! division and exponentiation modulo `P = 2^256 - 2^32 - 977`, as a building
//! block for elliptic-curve and zero-knowledge protocols.
//!
//! The free functions in [`field`] operate on raw [`U256`] values and accept
//! operands at or above `P`. [`Fp`] is the canonical element type with
//! operator overloading.

pub mod arithmetic;
pub mod field;
pub mod polynomial;
pub mod util;

// Re-export commonly used types
pub use arithmetic::traits::{Field, PrimeField};
pub use arithmetic::u256::U256;
pub use field::fp::Fp;
pub use field::{add, div, exp, exp_traced, inv, mul, sub, ExpTrace, FieldError, FieldResult, P};
pub use polynomial::Polynomial;

/// Feature flags
#[cfg(feature = "parallel")]
pub use rayon;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
