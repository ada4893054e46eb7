//! Deterministic enumeration of the carrier slots that may hold data.
//!
//! Slots are visited row by row, column by column within a row, and red, green,
//! then blue within a pixel. Only channels that are not at the value boundary are
//! yielded. Encoding and decoding must walk the same (reference) image so that both
//! sides see the identical sequence.

use crate::{codecs::collision, image_wrapper::{ImageWrapper, Slot}};

/// A lazy, restartable iterator over the safe slots of an image.
#[derive(Clone)]
pub struct SafeSlots<'a> {
    img: &'a ImageWrapper,
    index: usize,
}

impl Iterator for SafeSlots<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let channels = self.img.channels();
        let offset = channels[self.index..]
            .iter()
            .position(|&v| !collision::is_unsafe(v))?;

        let index = self.index + offset;
        self.index = index + 1;

        Some(self.img.slot_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.img.get_total_channels() - self.index))
    }
}

/// Walk the safe slots of an image, in slot order.
///
/// # Arguments
///
/// * `img` - A reference to the [`ImageWrapper`] whose channel values decide which slots are safe.
///
pub fn safe_slots(img: &ImageWrapper) -> SafeSlots<'_> {
    SafeSlots { img, index: 0 }
}
