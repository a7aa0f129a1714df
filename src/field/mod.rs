//! Arithmetic modulo the secp256k1 field prime
//!
//! Every operation takes raw `U256` operands, which need not be reduced,
//! and returns a canonical result in `[0, P)`.

use bitvec::order::Lsb0;
use bitvec::view::BitView;
use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::arithmetic::u256::U256;

pub mod fp;

/// Error types for field operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid field element: value is not below the modulus")]
    InvalidElement,

    #[error("No square root exists")]
    NoSquareRoot,

    #[error("Invalid encoding: {0}")]
    Parse(String),
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;

/// The field prime `P = 2^256 - 2^32 - 977`
pub const P: U256 = U256::from_limbs([
    0xFFFFFFFEFFFFFC2F,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
]);

/// `P - 2`, the Fermat inversion exponent
pub const P_MINUS_TWO: U256 = U256::from_limbs([
    0xFFFFFFFEFFFFFC2D,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
]);

/// `2^256 mod P = 2^32 + 977`
const FOLD: u64 = 0x1000003D1;

lazy_static! {
    /// The modulus as a `BigUint`, for reducing arbitrary-size integers
    pub static ref MODULUS_BIG: BigUint = P.to_biguint();
}

/// Work done by one exponentiation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpTrace {
    /// Loop iterations, one per bit of the exponent
    pub iterations: u32,
    /// Modular multiplications, squarings included
    pub multiplications: u32,
}

/// Reduces `a` modulo `P`.
///
/// `P > 2^255`, so a single conditional subtraction suffices.
#[inline]
pub fn reduce(a: U256) -> U256 {
    if a >= P {
        a.wrapping_sub(&P)
    } else {
        a
    }
}

/// `(a + b) mod P`
pub fn add(a: U256, b: U256) -> U256 {
    let (a, b) = (reduce(a), reduce(b));
    let (sum, carry) = a.overflowing_add(&b);

    // a + b < 2P; on carry the true sum is 2^256 + sum and wrapping off P is exact
    if carry || sum >= P {
        sum.wrapping_sub(&P)
    } else {
        sum
    }
}

/// `(a - b) mod P`, computed as `a + (P - (b mod P))` so nothing underflows
pub fn sub(a: U256, b: U256) -> U256 {
    add(a, P.wrapping_sub(&reduce(b)))
}

/// `(a * b) mod P` through a 512-bit intermediate
pub fn mul(a: U256, b: U256) -> U256 {
    reduce_wide(&a.widening_mul(&b))
}

/// Reduces a 512-bit value using `2^256 ≡ 2^32 + 977 (mod P)`
fn reduce_wide(wide: &[u64; 8]) -> U256 {
    // lo + hi * 2^256 ≡ lo + hi * FOLD, at most 290 bits
    let mut t = [0u64; 5];
    let mut carry = 0u128;
    for i in 0..4 {
        let acc = (wide[i + 4] as u128) * (FOLD as u128) + (wide[i] as u128) + carry;
        t[i] = acc as u64;
        carry = acc >> 64;
    }
    t[4] = carry as u64;

    // Fold the fifth limb the same way
    let low = U256::from_limbs([t[0], t[1], t[2], t[3]]);
    let high = U256::from_u128((t[4] as u128) * (FOLD as u128));
    let (sum, overflow) = low.overflowing_add(&high);

    // After an overflow the wrapped sum is below 2^67, so this cannot carry again
    let sum = if overflow {
        sum.wrapping_add(&U256::from_u64(FOLD))
    } else {
        sum
    };

    reduce(sum)
}

/// `a^b mod P` by right-to-left square-and-multiply
pub fn exp(a: U256, b: U256) -> U256 {
    exp_traced(a, b).0
}

/// Same as [`exp`], also reporting how much work was done.
///
/// The loop runs once per significant bit of `b`, so the cost is
/// `O(log b)` multiplications. `exp(a, 0)` is 1 for every `a`, zero included.
pub fn exp_traced(a: U256, b: U256) -> (U256, ExpTrace) {
    let mut square = reduce(a);
    let mut result = U256::ONE;
    let mut trace = ExpTrace::default();

    let len = b.bits() as usize;
    for bit in b.as_limbs().view_bits::<Lsb0>()[..len].iter().by_vals() {
        if bit {
            result = mul(result, square);
            trace.multiplications += 1;
        }
        square = mul(square, square);
        trace.multiplications += 1;
        trace.iterations += 1;
    }

    log::trace!(
        "exp: {} exponent bits, {} multiplications",
        trace.iterations,
        trace.multiplications
    );

    (result, trace)
}

/// Multiplicative inverse `a^(P-2) mod P`, by Fermat's little theorem.
///
/// Fails with `DivisionByZero` when `a ≡ 0 (mod P)`.
pub fn inv(a: U256) -> FieldResult<U256> {
    if reduce(a).is_zero() {
        log::debug!("attempted to invert zero ({})", a);
        return Err(FieldError::DivisionByZero);
    }
    Ok(exp(a, P_MINUS_TWO))
}

/// `a * b^-1 mod P`; fails with `DivisionByZero` when `b ≡ 0 (mod P)`
pub fn div(a: U256, b: U256) -> FieldResult<U256> {
    Ok(mul(a, inv(b)?))
}
