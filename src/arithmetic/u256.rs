//! Fixed-width 256-bit unsigned integers
//!
//! `U256` is the raw operand type of the field operations. It carries no
//! modulus and is never reduced on construction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::field::{FieldError, FieldResult};
use crate::util::{bytes_to_limbs, limbs_to_bytes, to_fixed_bytes};

/// Number of 64-bit limbs in a `U256`
pub const LIMBS: usize = 4;

/// A 256-bit unsigned integer stored as little-endian u64 limbs
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256([u64; LIMBS]);

impl U256 {
    pub const ZERO: Self = Self([0; LIMBS]);
    pub const ONE: Self = Self([1, 0, 0, 0]);
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Creates a value from little-endian limbs
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    pub const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Returns the little-endian limbs
    pub const fn as_limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Number of significant bits; zero for `U256::ZERO`
    pub fn bits(&self) -> u32 {
        for i in (0..LIMBS).rev() {
            if self.0[i] != 0 {
                return 64 * i as u32 + (64 - self.0[i].leading_zeros());
            }
        }
        0
    }

    /// Returns bit `i` (little-endian); bits past 255 read as zero
    pub fn bit(&self, i: u32) -> bool {
        if i >= 256 {
            return false;
        }
        (self.0[(i / 64) as usize] >> (i % 64)) & 1 == 1
    }

    /// Adds with carry propagation, returning the low 256 bits and the carry out
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut sum = [0u64; LIMBS];
        let mut carry = 0u64;

        for i in 0..LIMBS {
            let temp = (self.0[i] as u128) + (rhs.0[i] as u128) + (carry as u128);
            sum[i] = temp as u64;
            carry = (temp >> 64) as u64;
        }

        (Self(sum), carry != 0)
    }

    /// Subtracts with borrow propagation, returning the low 256 bits and the borrow out
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut diff = [0u64; LIMBS];
        let mut borrow = false;

        for i in 0..LIMBS {
            let (d, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (d, b2) = d.overflowing_sub(borrow as u64);
            diff[i] = d;
            borrow = b1 || b2;
        }

        (Self(diff), borrow)
    }

    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Full 512-bit product as eight little-endian limbs
    pub fn widening_mul(&self, rhs: &Self) -> [u64; 2 * LIMBS] {
        let mut t = [0u64; 2 * LIMBS];

        for i in 0..LIMBS {
            let mut carry = 0u128;
            for j in 0..LIMBS {
                let prod = (self.0[i] as u128) * (rhs.0[j] as u128) + (t[i + j] as u128) + carry;
                t[i + j] = prod as u64;
                carry = prod >> 64;
            }
            t[i + LIMBS] = carry as u64;
        }

        t
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes_to_limbs(&bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_bytes(&self.0)
    }

    /// Parses up to 32 big-endian bytes, left-padding shorter input
    pub fn from_be_slice(bytes: &[u8]) -> FieldResult<Self> {
        to_fixed_bytes::<32>(bytes)
            .map(Self::from_be_bytes)
            .ok_or_else(|| FieldError::Parse(format!("{} bytes exceed 256 bits", bytes.len())))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = FieldError;

    fn try_from(value: &BigUint) -> FieldResult<Self> {
        Self::from_be_slice(&value.to_bytes_be())
    }
}

impl FromStr for U256 {
    type Err = FieldError;

    /// Parses a hexadecimal string, with or without a `0x` prefix
    fn from_str(s: &str) -> FieldResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() || digits.len() > 64 {
            return Err(FieldError::Parse(format!(
                "expected 1 to 64 hex digits, got {}",
                digits.len()
            )));
        }

        let mut limbs = [0u64; LIMBS];
        for (i, c) in digits.chars().rev().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| FieldError::Parse(format!("invalid hex digit {:?}", c)))?;
            limbs[i / 16] |= (nibble as u64) << ((i % 16) * 4);
        }

        Ok(Self(limbs))
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(
            f,
            "{:016x}{:016x}{:016x}{:016x}",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_and_borrow() {
        let (sum, carry) = U256::MAX.overflowing_add(&U256::ONE);
        assert_eq!(sum, U256::ZERO);
        assert!(carry);

        let (diff, borrow) = U256::ZERO.overflowing_sub(&U256::ONE);
        assert_eq!(diff, U256::MAX);
        assert!(borrow);

        let a = U256::from_limbs([u64::MAX, 0, 0, 0]);
        assert_eq!(a.wrapping_add(&U256::ONE), U256::from_limbs([0, 1, 0, 0]));
    }

    #[test]
    fn test_widening_mul() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let wide = U256::MAX.widening_mul(&U256::MAX);
        assert_eq!(wide, [1, 0, 0, 0, u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]);

        let wide = U256::from_u64(3).widening_mul(&U256::from_u64(5));
        assert_eq!(wide, [15, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bits() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(U256::from_limbs([0, 0, 1, 0]).bits(), 129);
        assert_eq!(U256::MAX.bits(), 256);
        assert!(U256::from_limbs([0, 0, 0, 1 << 63]).bit(255));
        assert!(!U256::MAX.bit(256));
    }

    #[test]
    fn test_ordering_uses_high_limbs_first() {
        let small = U256::from_limbs([u64::MAX, 0, 0, 0]);
        let large = U256::from_limbs([0, 0, 0, 1]);
        assert!(small < large);
        assert_eq!(large.cmp(&large), Ordering::Equal);
    }

    #[test]
    fn test_hex_parsing() {
        let p: U256 = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
            .parse()
            .unwrap();
        assert_eq!(p.as_limbs()[0], 0xFFFFFFFEFFFFFC2F);
        assert_eq!(p.as_limbs()[3], u64::MAX);
        assert_eq!(
            p.to_string(),
            "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        );

        assert_eq!("ff".parse::<U256>().unwrap(), U256::from_u64(255));
        assert!("".parse::<U256>().is_err());
        assert!("0x".parse::<U256>().is_err());
        assert!("0xzz".parse::<U256>().is_err());
        assert!("1".repeat(65).parse::<U256>().is_err());
    }

    #[test]
    fn test_biguint_conversion() {
        let value = U256::from_limbs([1, 2, 3, 4]);
        let big = value.to_biguint();
        assert_eq!(U256::try_from(&big).unwrap(), value);

        let too_big = BigUint::from(1u64) << 256;
        assert!(matches!(U256::try_from(&too_big), Err(FieldError::Parse(_))));
    }

    #[test]
    fn test_byte_slices() {
        assert_eq!(U256::from_be_slice(&[1, 0]).unwrap(), U256::from_u64(256));
        assert!(U256::from_be_slice(&[0u8; 33]).is_err());
    }
}
