/// Utility functions for the k1field library

/// Left-pads a big-endian byte slice into a fixed-size array.
///
/// Returns `None` when the slice is longer than `N`.
pub fn to_fixed_bytes<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    if bytes.len() > N {
        return None;
    }
    let mut result = [0u8; N];
    result[N - bytes.len()..].copy_from_slice(bytes);
    Some(result)
}

/// Converts 32 big-endian bytes into four little-endian u64 limbs
pub fn bytes_to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(word);
    }
    limbs
}

/// Converts four little-endian u64 limbs into 32 big-endian bytes
pub fn limbs_to_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.rchunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bytes_left_pads() {
        let padded: [u8; 4] = to_fixed_bytes(&[0xab, 0xcd]).unwrap();
        assert_eq!(padded, [0, 0, 0xab, 0xcd]);
        assert!(to_fixed_bytes::<2>(&[1, 2, 3]).is_none());
    }

    #[test]
    fn test_limb_order() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        bytes[0] = 0x80;
        let limbs = bytes_to_limbs(&bytes);
        assert_eq!(limbs, [1, 0, 0, 0x8000_0000_0000_0000]);
        assert_eq!(limbs_to_bytes(&limbs), bytes);
    }
}
