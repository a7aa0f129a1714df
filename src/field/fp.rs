//! Canonical elements of the secp256k1 base field
//!
//! `Fp` wraps a `U256` that is always below `P`, so equality is equality of
//! field elements and the operator overloads read like ordinary arithmetic.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use crate::arithmetic::traits::{Field, PrimeField};
use crate::arithmetic::u256::U256;
use crate::field::{self, FieldError, FieldResult, MODULUS_BIG, P};

/// `(P + 1) / 4`; square roots are a single exponentiation because `P ≡ 3 (mod 4)`
const SQRT_EXP: U256 = U256::from_limbs([
    0xFFFFFFFFBFFFFF0C,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0x3FFFFFFFFFFFFFFF,
]);

/// An element of the secp256k1 base field in canonical form
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fp(U256);

impl Fp {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const ONE: Self = Self(U256::ONE);

    /// Creates a field element, reducing the value modulo `P`
    pub fn new(value: U256) -> Self {
        Self(field::reduce(value))
    }

    /// Creates a field element from an integer of any size
    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = value.mod_floor(&MODULUS_BIG);
        // The reduced value is below P, so it always fits in 32 bytes
        let bytes = reduced.to_bytes_be();
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        Self(U256::from_be_bytes(buf))
    }

    /// Parses a strict 32-byte big-endian encoding
    pub fn from_be_bytes(bytes: [u8; 32]) -> FieldResult<Self> {
        Self::from_canonical(U256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Get the canonical value
    pub fn value(&self) -> U256 {
        self.0
    }

    pub fn to_biguint(&self) -> BigUint {
        self.0.to_biguint()
    }

    /// Divides by `rhs`, failing with `DivisionByZero` when `rhs` is zero
    pub fn div(&self, rhs: &Self) -> FieldResult<Self> {
        field::div(self.0, rhs.0).map(Self)
    }
}

impl Field for Fp {
    fn from_u64(value: u64) -> Self {
        Self(U256::from_u64(value))
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // Rejection sampling; fewer than 2^-224 of draws land above P
        loop {
            let mut buf = [0u8; 32];
            rng.fill(&mut buf[..]);
            let value = U256::from_be_bytes(buf);
            if value < P {
                return Self(value);
            }
        }
    }

    fn inverse(&self) -> FieldResult<Self> {
        field::inv(self.0).map(Self)
    }

    fn square(&self) -> Self {
        Self(field::mul(self.0, self.0))
    }

    fn pow(&self, exp: &U256) -> Self {
        Self(field::exp(self.0, *exp))
    }
}

impl PrimeField for Fp {
    const MODULUS: U256 = P;

    fn from_canonical(value: U256) -> FieldResult<Self> {
        if value >= P {
            return Err(FieldError::InvalidElement);
        }
        Ok(Self(value))
    }

    fn to_canonical(&self) -> U256 {
        self.0
    }

    fn sqrt(&self) -> FieldResult<Self> {
        let root = self.pow(&SQRT_EXP);

        if root.square() != *self {
            return Err(FieldError::NoSquareRoot);
        }

        Ok(root)
    }
}

impl Zero for Fp {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fp {
    fn one() -> Self {
        Self::ONE
    }
}

impl Add for Fp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(field::add(self.0, rhs.0))
    }
}

impl AddAssign for Fp {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(field::sub(self.0, rhs.0))
    }
}

impl SubAssign for Fp {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Fp {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(field::mul(self.0, rhs.0))
    }
}

impl MulAssign for Fp {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    fn neg(self) -> Self {
        Self(field::sub(U256::ZERO, self.0))
    }
}

impl Sum for Fp {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fp {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<U256> for Fp {
    fn from(value: U256) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({:#x})", self.0)
    }
}
