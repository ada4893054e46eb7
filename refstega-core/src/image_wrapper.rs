use crate::error::{Error, Result};
use crate::macros::*;
use crate::utilities::file_utils;

use image::{ColorType, ImageFormat};

/// The number of colour channels held within each pixel (red, green and blue).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// The address of a single channel within an image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    /// The row (y coordinate) of the pixel.
    pub row: u32,
    /// The column (x coordinate) of the pixel.
    pub column: u32,
    /// The channel index within the pixel: 0 = red, 1 = green, 2 = blue.
    pub channel: u8,
}

/// An in-memory, row-major grid of 8-bit RGB pixels.
#[derive(Clone, Debug)]
pub struct ImageWrapper {
    image_bytes: Vec<u8>,
    /// A boolean indicating whether modifications to the image should be permitted.
    read_only: bool,
    /// The dimensions of the image, as (width, height).
    dimensions: (u32, u32),
}

impl ImageWrapper {
    /// Create an image from raw, row-major RGB bytes.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the image, in pixels.
    /// * `height` - The height of the image, in pixels.
    /// * `bytes` - The channel values, three per pixel.
    ///
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Result<ImageWrapper> {
        if bytes.len() != width as usize * height as usize * CHANNELS_PER_PIXEL {
            return Err(Error::ImageDimensionsInvalid);
        }

        Ok(ImageWrapper {
            image_bytes: bytes,
            read_only: false,
            dimensions: (width, height),
        })
    }

    /// Create an image in which every pixel has the same colour.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the image, in pixels.
    /// * `height` - The height of the image, in pixels.
    /// * `rgb` - The colour of every pixel.
    ///
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> ImageWrapper {
        let total_pixels = width as usize * height as usize;
        let mut image_bytes = Vec::with_capacity(total_pixels * CHANNELS_PER_PIXEL);
        for _ in 0..total_pixels {
            image_bytes.extend_from_slice(&rgb);
        }

        ImageWrapper {
            image_bytes,
            read_only: false,
            dimensions: (width, height),
        }
    }

    /// Return the image's dimensions, as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Get a reference slice of every channel within the image, in slot order.
    #[inline]
    pub fn channels(&self) -> &[u8] {
        &self.image_bytes
    }

    /// Get a mutable reference slice of every channel within the image, in slot order.
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [u8] {
        assert!(!self.read_only, "attempted to modify a read-only image");
        &mut self.image_bytes
    }

    /// Get the value of the channel at a given slot.
    #[inline]
    pub fn get_channel(&self, slot: Slot) -> u8 {
        self.image_bytes[self.index_of(slot)]
    }

    /// Set the value of the channel at a given slot.
    #[inline]
    pub fn set_channel(&mut self, slot: Slot, value: u8) {
        let index = self.index_of(slot);
        self.channels_mut()[index] = value;
    }

    /// Get the RGB values of the pixel at a given position.
    pub fn get_pixel(&self, row: u32, column: u32) -> [u8; 3] {
        let start = (row as usize * self.dimensions.0 as usize + column as usize)
            * CHANNELS_PER_PIXEL;
        [
            self.image_bytes[start],
            self.image_bytes[start + 1],
            self.image_bytes[start + 2],
        ]
    }

    /// Calculate the total number of channels available in the image.
    #[inline]
    pub fn get_total_channels(&self) -> usize {
        self.image_bytes.len()
    }

    /// Convert a slot into an index within the channel slice.
    #[inline]
    pub fn index_of(&self, slot: Slot) -> usize {
        (slot.row as usize * self.dimensions.0 as usize + slot.column as usize)
            * CHANNELS_PER_PIXEL
            + slot.channel as usize
    }

    /// Convert an index within the channel slice into a slot.
    #[inline]
    pub fn slot_at(&self, index: usize) -> Slot {
        let pixel = index / CHANNELS_PER_PIXEL;
        let width = self.dimensions.0 as usize;

        Slot {
            row: (pixel / width) as u32,
            column: (pixel % width) as u32,
            channel: (index % CHANNELS_PER_PIXEL) as u8,
        }
    }

    /// Indicates whether modifications to the image are forbidden.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Attempt to load an image from a file.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The path to the image file.
    /// * `read_only` - Whether modifications to the image should be forbidden.
    ///
    /// `Note:` every supported pixel type is converted to 8-bit RGB. Any alpha channel is discarded.
    ///
    pub fn load_from_file(file_path: &str, read_only: bool) -> Result<ImageWrapper> {
        if !file_utils::path_exists(file_path) {
            return Err(Error::PathInvalid);
        }

        let image = unwrap_or_return_err!(image::open(file_path), Error::ImageOpening).to_rgb8();

        Ok(ImageWrapper {
            dimensions: image.dimensions(),
            image_bytes: image.into_raw(),
            read_only,
        })
    }

    /// Save the buffer to a file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to which the file should be saved.
    ///
    /// `Note:` the file type is derived from the file extension and must be lossless,
    /// otherwise the channel values could not be recovered.
    ///
    pub fn save(&self, path: &str) -> Result<()> {
        assert!(!self.read_only, "attempted to write to a read-only file");

        let format = ImageWrapper::output_format(path)?;

        let (w, h) = self.dimensions;
        image::save_buffer_with_format(path, &self.image_bytes, w, h, ColorType::Rgb8, format)
            .map_err(|e| Error::ImageSaving(e.to_string()))
    }

    /// Determine the lossless image format to be used for a given output path.
    ///
    /// # Arguments
    ///
    /// * `path` - The output path.
    ///
    pub fn output_format(path: &str) -> Result<ImageFormat> {
        match ImageFormat::from_path(path) {
            Ok(f @ (ImageFormat::Png | ImageFormat::Bmp)) => Ok(f),
            _ => Err(Error::ImageTypeInvalid),
        }
    }
}

#[cfg(test)]
mod tests_image_wrapper {
    use super::{ImageWrapper, Slot};
    use crate::{error::Error, utilities::test_utils::TestUtils};

    #[test]
    fn slot_index_mapping() {
        let img = ImageWrapper::solid(5, 4, [1, 2, 3]);
        assert_eq!(img.get_total_channels(), 60);

        for index in 0..img.get_total_channels() {
            let slot = img.slot_at(index);
            assert_eq!(img.index_of(slot), index, "slot mapping is not bijective");
        }

        let slot = Slot {
            row: 2,
            column: 3,
            channel: 1,
        };
        assert_eq!(img.slot_at(40), slot);
        assert_eq!(img.get_channel(slot), 2);
    }

    #[test]
    fn from_rgb_bytes_validates_length() {
        assert_eq!(
            ImageWrapper::from_rgb_bytes(2, 2, vec![0; 11]).err(),
            Some(Error::ImageDimensionsInvalid)
        );
        assert!(ImageWrapper::from_rgb_bytes(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn set_channel() {
        let mut img = ImageWrapper::solid(2, 2, [128, 128, 128]);
        let slot = Slot {
            row: 1,
            column: 0,
            channel: 2,
        };
        img.set_channel(slot, 7);

        assert_eq!(img.get_pixel(1, 0), [128, 128, 7]);
        assert_eq!(img.get_pixel(0, 0), [128, 128, 128]);
    }

    #[test]
    fn output_formats() {
        assert_eq!(
            ImageWrapper::output_format("a.png"),
            Ok(image::ImageFormat::Png)
        );
        assert_eq!(
            ImageWrapper::output_format("a.bmp"),
            Ok(image::ImageFormat::Bmp)
        );
        assert_eq!(
            ImageWrapper::output_format("a.jpg"),
            Err(Error::ImageTypeInvalid)
        );
        assert_eq!(
            ImageWrapper::output_format("no-extension"),
            Err(Error::ImageTypeInvalid)
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", true);

        let bytes = (0..(7 * 3 * 3)).map(|i| (i * 5) as u8).collect();
        let img = ImageWrapper::from_rgb_bytes(7, 3, bytes).unwrap();
        img.save(&path).expect("failed to save the image");

        let loaded = ImageWrapper::load_from_file(&path, true).expect("failed to load the image");
        assert!(loaded.is_read_only());
        assert_eq!(loaded.dimensions(), (7, 3));
        assert_eq!(loaded.channels(), img.channels(), "channel values changed on disk");
    }

    #[test]
    fn load_missing_file() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", false);

        assert_eq!(
            ImageWrapper::load_from_file(&path, true).err(),
            Some(Error::PathInvalid)
        );
    }

    #[test]
    fn load_invalid_file() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", true);
        std::fs::write(&path, b"not an image").unwrap();

        assert_eq!(
            ImageWrapper::load_from_file(&path, true).err(),
            Some(Error::ImageOpening)
        );
    }

    #[test]
    #[should_panic(expected = "attempted to modify a read-only image")]
    fn read_only_images_are_immutable() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", true);
        ImageWrapper::solid(2, 2, [9, 9, 9]).save(&path).unwrap();

        let mut img = ImageWrapper::load_from_file(&path, true).unwrap();
        img.channels_mut()[0] = 1;
    }
}
