//! Classification of channels that sit at the edge of the value range, and a
//! preprocessing pass that moves such channels away from it.

use crate::image_wrapper::ImageWrapper;

use rand::Rng;
use rand_core::RngCore;

/// The largest offset applied to a boundary channel by [`preprocess`].
pub const MAX_PREPROCESS_OFFSET: u8 = 3;

/// The number of unsafe channels within an image before and after preprocessing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CollisionReport {
    pub before: usize,
    pub after: usize,
}

/// Check whether a channel value sits at the boundary of the value range.
///
/// Channels at the boundary are never used to carry data.
#[inline]
pub fn is_unsafe(value: u8) -> bool {
    value == u8::MIN || value == u8::MAX
}

/// Count the channels within an image that cannot carry data.
pub fn count_unsafe(img: &ImageWrapper) -> usize {
    img.channels().iter().filter(|&&v| is_unsafe(v)).count()
}

/// Count the channels within an image that can carry data.
pub fn count_safe_slots(img: &ImageWrapper) -> usize {
    img.get_total_channels() - count_unsafe(img)
}

/// Nudge every boundary channel within an image towards the safe range.
///
/// # Arguments
///
/// * `img` - A mutable reference to the [`ImageWrapper`] to be modified.
/// * `rng` - The source of the random offsets.
///
/// `Note:` each offset is drawn uniformly from `0..=MAX_PREPROCESS_OFFSET`. As an offset of zero
/// leaves the channel untouched, some boundary channels are expected to remain.
///
pub fn preprocess<R>(img: &mut ImageWrapper, rng: &mut R) -> CollisionReport
where
    R: RngCore,
{
    let before = count_unsafe(img);

    for b in img.channels_mut() {
        *b = match *b {
            u8::MIN => rng.random_range(0..=MAX_PREPROCESS_OFFSET),
            u8::MAX => u8::MAX - rng.random_range(0..=MAX_PREPROCESS_OFFSET),
            v => v,
        };
    }

    CollisionReport {
        before,
        after: count_unsafe(img),
    }
}

#[cfg(test)]
mod tests_collision {
    use super::*;
    use crate::{
        image_wrapper::ImageWrapper, utilities::misc_utils::fixed_seeded_xoshiro512,
        utilities::test_utils::TestUtils,
    };

    #[test]
    fn boundary_values_are_unsafe() {
        assert!(is_unsafe(0));
        assert!(is_unsafe(255));
        for v in 1..=254u8 {
            assert!(!is_unsafe(v), "value {v} should be safe");
        }
    }

    #[test]
    fn counting() {
        let bytes = vec![0, 1, 255, 128, 254, 0];
        let img = ImageWrapper::from_rgb_bytes(2, 1, bytes).unwrap();

        assert_eq!(count_unsafe(&img), 3);
        assert_eq!(count_safe_slots(&img), 3);
    }

    #[test]
    fn preprocess_moves_towards_safe_range() {
        let mut img = ImageWrapper::from_rgb_bytes(
            64,
            64,
            [0u8, 255, 77].repeat(64 * 64),
        )
        .unwrap();
        let mut rng = fixed_seeded_xoshiro512(7);

        let report = preprocess(&mut img, &mut rng);
        assert_eq!(report.before, 64 * 64 * 2);
        assert_eq!(report.after, count_unsafe(&img));
        assert!(report.after <= report.before);

        for px in img.channels().chunks_exact(3) {
            assert!(px[0] <= MAX_PREPROCESS_OFFSET, "low value moved too far");
            assert!(px[1] >= u8::MAX - MAX_PREPROCESS_OFFSET, "high value moved too far");
            assert_eq!(px[2], 77, "safe value was modified");
        }

        // Roughly three quarters of the boundary channels should have been moved.
        let moved = report.before - report.after;
        assert!(
            moved > report.before / 2,
            "too few channels were moved: {moved} of {}",
            report.before
        );
    }

    #[test]
    fn preprocess_is_deterministic_for_a_seed() {
        let img = TestUtils::gradient_image(40, 30);

        let mut a = img.clone();
        let mut b = img.clone();
        preprocess(&mut a, &mut fixed_seeded_xoshiro512(1234));
        preprocess(&mut b, &mut fixed_seeded_xoshiro512(1234));

        assert_eq!(a.channels(), b.channels(), "same seed produced different output");
    }

    #[test]
    fn preprocess_never_increases_collisions() {
        let mut rng = fixed_seeded_xoshiro512(99);
        for _ in 0..32 {
            let mut img = TestUtils::gradient_image(16, 16);
            let report = preprocess(&mut img, &mut rng);
            assert!(report.after <= report.before);
        }
    }
}
