use crate::error::{Error, Result};

/// The number of bits in a byte.
pub const BITS_PER_BYTE: usize = 8;

/// Encode a value into exactly `width` bits, most significant bit first.
///
/// # Arguments
///
/// * `value` - The value to be encoded.
/// * `width` - The number of bits to produce.
///
/// `Note:` a value that cannot be held in `width` bits is rejected rather than truncated.
///
pub fn to_bits(value: u64, width: usize) -> Result<Vec<bool>> {
    if width < u64::BITS as usize && value >> width != 0 {
        return Err(Error::BitWidthExceeded);
    }

    let bits = (0..width)
        .rev()
        .map(|i| i < u64::BITS as usize && (value >> i) & 1 == 1)
        .collect();

    Ok(bits)
}

/// Decode a big-endian sequence of bits into a value.
///
/// # Arguments
///
/// * `bits` - The bits, most significant first.
///
/// `Note:` only the final 64 bits can contribute to the result.
///
pub fn from_bits(bits: &[bool]) -> u64 {
    bits.iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Expand a slice of bytes into bits, each byte most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);
    for byte in bytes {
        bits.extend((0..BITS_PER_BYTE).rev().map(|i| (byte >> i) & 1 == 1));
    }
    bits
}

/// Group a sequence of bits back into bytes.
///
/// # Arguments
///
/// * `bits` - The bits to be grouped. The length must be a multiple of 8.
///
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(Error::CorruptedMessage);
    }

    let bytes = bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| from_bits(chunk) as u8)
        .collect();

    Ok(bytes)
}
