use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};
use rand::Rng;

use crate::arithmetic::u256::U256;
use crate::field::{FieldError, FieldResult};

/// Trait for field elements with basic arithmetic operations
pub trait Field:
    Sized
    + Copy
    + Debug
    + Display
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
    + Zero
    + One
{
    /// Embeds a small integer into the field
    fn from_u64(value: u64) -> Self;

    /// Samples a uniformly random element
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Returns the multiplicative inverse of this element
    fn inverse(&self) -> FieldResult<Self>;

    /// Squares this element
    fn square(&self) -> Self {
        *self * *self
    }

    fn double(&self) -> Self {
        *self + *self
    }

    /// Raises this element to a power
    fn pow(&self, exp: &U256) -> Self;

    /// Inverts every element in place with a single field inversion.
    ///
    /// Fails with `DivisionByZero` if any element is zero; the slice is left
    /// unchanged in that case.
    fn batch_invert(elements: &mut [Self]) -> FieldResult<()> {
        if elements.is_empty() {
            return Ok(());
        }

        // Montgomery's trick: prefix products, one inversion, then unwind
        let n = elements.len();
        let mut products = Vec::with_capacity(n);
        let mut acc = Self::one();

        for element in elements.iter() {
            if element.is_zero() {
                return Err(FieldError::DivisionByZero);
            }
            products.push(acc);
            acc *= *element;
        }

        log::debug!("batch inverting {} elements", n);
        let mut inv = acc.inverse()?;

        for i in (0..n).rev() {
            let tmp = elements[i] * inv;
            elements[i] = products[i] * inv;
            inv = tmp;
        }

        Ok(())
    }
}

/// Trait for prime fields with a fixed modulus
pub trait PrimeField: Field {
    /// The modulus of the field
    const MODULUS: U256;

    /// Wraps an already reduced value, rejecting anything `>= MODULUS`
    fn from_canonical(value: U256) -> FieldResult<Self>;

    /// Returns the canonical representative in `[0, MODULUS)`
    fn to_canonical(&self) -> U256;

    /// Computes a square root of this element if one exists
    fn sqrt(&self) -> FieldResult<Self>;
}
