//! Per-channel perturbation, keyed on the reference value of the channel.
//!
//! A bit is stored by lowering the channel by one (clamped at zero) and then adding the
//! bit. The stored value alone does not reveal the bit; only its difference from the
//! lowered reference value does.

use crate::error::{Error, Result};

/// Encode a single bit into a channel value.
///
/// # Arguments
///
/// * `value` - The original value of the channel.
/// * `bit` - The bit to be stored.
///
#[inline]
pub fn encode_channel(value: u8, bit: bool) -> u8 {
    value.saturating_sub(1) + u8::from(bit)
}

/// Decode a single bit from a channel value.
///
/// # Arguments
///
/// * `encoded` - The value of the channel within the encoded image.
/// * `original` - The value of the channel within the reference image.
///
/// # Returns
///
/// [`Error::CorruptedMessage`] if the difference between the values could not have been
/// produced by [`encode_channel`].
///
#[inline]
pub fn decode_channel(encoded: u8, original: u8) -> Result<bool> {
    match encoded.checked_sub(original.saturating_sub(1)) {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(Error::CorruptedMessage),
    }
}
