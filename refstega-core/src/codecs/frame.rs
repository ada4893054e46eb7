//! Length-prefixed framing of a bitstream.
//!
//! ```text
//! [L bits] payload length in bits (big-endian)
//! [N bits] payload
//! ```
//!
//! `L` is derived from the carrier capacity alone (see [`length_prefix_width`]),
//! so the decoder can recompute it without any side channel.

use crate::{
    codecs::capacity::length_prefix_width,
    error::{Error, Result},
    utilities::bit_utils,
};

/// Wrap a payload bitstream within a length-prefixed frame.
///
/// # Arguments
///
/// * `bits` - The payload bits.
/// * `capacity` - The total number of usable slots within the carrier.
///
/// # Returns
///
/// [`Error::PayloadTooLarge`] if the framed bits do not fit within the capacity, or
/// if the payload length cannot be represented by the prefix.
///
pub fn encode_frame(bits: &[bool], capacity: usize) -> Result<Vec<bool>> {
    let prefix_width = length_prefix_width(capacity)?;

    if prefix_width + bits.len() > capacity {
        return Err(Error::PayloadTooLarge);
    }

    let length_bits = bit_utils::to_bits(bits.len() as u64, prefix_width)
        .map_err(|_| Error::PayloadTooLarge)?;

    let mut frame = Vec::with_capacity(prefix_width + bits.len());
    frame.extend_from_slice(&length_bits);
    frame.extend_from_slice(bits);

    Ok(frame)
}

/// Read a framed payload from a stream of bits.
///
/// Only the prefix and the payload are consumed from the stream; any trailing bits are
/// never pulled.
///
/// # Arguments
///
/// * `bits` - The stream of recovered bits. An error within the stream aborts the read.
/// * `capacity` - The total number of usable slots within the carrier.
///
pub fn read_frame<I>(mut bits: I, capacity: usize) -> Result<Vec<bool>>
where
    I: Iterator<Item = Result<bool>>,
{
    let prefix_width = length_prefix_width(capacity)?;

    let length_bits = bits
        .by_ref()
        .take(prefix_width)
        .collect::<Result<Vec<bool>>>()?;
    if length_bits.len() != prefix_width {
        return Err(Error::CorruptedMessage);
    }

    let data_length = bit_utils::from_bits(&length_bits);
    if data_length > (capacity - prefix_width) as u64 {
        return Err(Error::CorruptedMessage);
    }
    let data_length = data_length as usize;

    let data = bits.take(data_length).collect::<Result<Vec<bool>>>()?;
    if data.len() != data_length {
        return Err(Error::CorruptedMessage);
    }

    Ok(data)
}

/// Unwrap the payload from a length-prefixed frame.
///
/// # Arguments
///
/// * `bits` - The framed bits. Any bits following the payload are ignored.
/// * `capacity` - The total number of usable slots within the carrier.
///
pub fn decode_frame(bits: &[bool], capacity: usize) -> Result<Vec<bool>> {
    read_frame(bits.iter().copied().map(Ok), capacity)
}
