//! Sizing of the length prefix against the capacity of a carrier.
//!
//! A carrier with `capacity` usable slots reserves `L` of them for the length
//! prefix, where `L = ceil(log2(b))` for the largest payload bit count `b`
//! satisfying `b + ceil(log2(b)) <= capacity`.

use crate::error::{Error, Result};

/// The smallest capacity for which a length prefix can be sized.
pub const MIN_CAPACITY: usize = 4;

/// Calculate `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// Find the largest payload bit count `b` for which `b + ceil(log2(b))` fits within the capacity.
///
/// `b + ceil(log2(b))` is strictly increasing in `b`, so a binary search will find the boundary.
fn largest_fitting_payload(capacity: u64) -> u64 {
    let fits = |b: u64| b.saturating_add(ceil_log2(b) as u64) <= capacity;

    let (mut lo, mut hi) = (1u64, capacity);
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    lo
}

/// Compute the number of bits reserved for the length prefix of a carrier.
///
/// # Arguments
///
/// * `capacity` - The total number of usable slots within the carrier.
///
/// # Returns
///
/// [`Error::ZeroCapacity`] if the capacity is zero, and [`Error::CapacityTooSmall`] if the
/// capacity is below [`MIN_CAPACITY`]; no prefix can be sized for those carriers.
///
pub fn length_prefix_width(capacity: usize) -> Result<usize> {
    match capacity {
        0 => Err(Error::ZeroCapacity),
        c if c < MIN_CAPACITY => Err(Error::CapacityTooSmall),
        c => Ok(ceil_log2(largest_fitting_payload(c as u64)) as usize),
    }
}

/// Compute the largest number of payload bits that a carrier can frame.
///
/// This is bounded both by the slots left after the prefix and by the largest
/// value the prefix itself can represent.
///
/// # Arguments
///
/// * `capacity` - The total number of usable slots within the carrier.
///
pub fn max_payload_bits(capacity: usize) -> Result<usize> {
    let prefix = length_prefix_width(capacity)?;
    let representable = if prefix >= usize::BITS as usize {
        usize::MAX
    } else {
        (1usize << prefix) - 1
    };

    Ok((capacity - prefix).min(representable))
}
