use crate::{
    codecs::{
        capacity, channel,
        codec::{Codec, ConfigFlags, ConfigParams},
        collision::{self, CollisionReport},
        frame, walker,
    },
    error::{Error, Result},
    image_wrapper::{ImageWrapper, Slot},
    logger::Logger,
    utilities::{bit_utils, file_utils, misc_utils},
};

use rand_xoshiro::Xoshiro512PlusPlus;

/// The struct that holds the reference-keyed LSB steganography algorithm.
///
/// One bit is stored within each safe channel of the reference image. Recovering the
/// data requires both the encoded image and the unmodified reference image.
pub struct StegaLsb {
    /// If the resulting files should be written when encoding, decoding or preprocessing.
    output_files: bool,
    /// The logger instance for this codec.
    logger: Logger,
    /// The RNG for the preprocessing offsets.
    preprocess_rng: Xoshiro512PlusPlus,
}

impl StegaLsb {
    pub fn new() -> Self {
        Self {
            output_files: true,
            logger: Logger::new(false),
            preprocess_rng: misc_utils::random_seeded_xoshiro512(),
        }
    }

    /// Create an instance whose preprocessing output is reproducible.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed for the preprocessing RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            preprocess_rng: misc_utils::fixed_seeded_xoshiro512(seed),
            ..Self::new()
        }
    }

    /// Encode a sequence of bytes into an in-memory image.
    ///
    /// # Arguments
    ///
    /// * `img` - A mutable reference to the [`ImageWrapper`] that holds the reference image.
    /// * `data` - The bytes to be encoded.
    ///
    /// `Note:` only the slots covered by the framed data are modified.
    pub fn encode_into(&self, img: &mut ImageWrapper, data: &[u8]) -> Result<()> {
        let capacity = collision::count_safe_slots(img);
        let frame = frame::encode_frame(&bit_utils::bytes_to_bits(data), capacity)?;

        self.logger.log(&format!(
            "capacity: {capacity} slots, length prefix: {} bits, framed: {} bits",
            capacity::length_prefix_width(capacity)?,
            frame.len()
        ));

        // The safe slots must be taken from the unmodified image, as writing a bit
        // can move a channel onto the value boundary.
        let slots: Vec<Slot> = walker::safe_slots(img).take(frame.len()).collect();

        for (slot, bit) in slots.into_iter().zip(frame) {
            let value = img.get_channel(slot);
            img.set_channel(slot, channel::encode_channel(value, bit));
        }

        Ok(())
    }

    /// Decode the bytes held within an in-memory encoded image.
    ///
    /// # Arguments
    ///
    /// * `ref_img` - A reference to the [`ImageWrapper`] that holds the reference image.
    /// * `enc_img` - A reference to the [`ImageWrapper`] that holds the encoded image.
    pub fn decode_from(&self, ref_img: &ImageWrapper, enc_img: &ImageWrapper) -> Result<Vec<u8>> {
        // The reference and encoded images must have the same dimensions.
        if ref_img.dimensions() != enc_img.dimensions() {
            return Err(Error::DimensionMismatch);
        }

        let capacity = collision::count_safe_slots(ref_img);
        self.logger.log(&format!("capacity: {capacity} slots"));

        let bits = walker::safe_slots(ref_img).map(|slot| {
            channel::decode_channel(enc_img.get_channel(slot), ref_img.get_channel(slot))
        });
        let data = frame::read_frame(bits, capacity)?;

        self.logger
            .log(&format!("recovered {} payload bits", data.len()));

        bit_utils::bits_to_bytes(&data)
    }

    /// The internal implementation of the decoding algorithm.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `encoded_img_path` - The path to the modified image.
    fn decode_internal(&self, original_img_path: &str, encoded_img_path: &str) -> Result<Vec<u8>> {
        let ref_image = ImageWrapper::load_from_file(original_img_path, true)?;
        let enc_image = ImageWrapper::load_from_file(encoded_img_path, true)?;

        self.decode_from(&ref_image, &enc_image)
    }

    /// The internal implementation of the encoding algorithm.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `data` - The data to be encoded within the reference image.
    /// * `encoded_img_path` - The path that will be used to store the encoded image.
    fn encode_internal(
        &self,
        original_img_path: &str,
        data: &[u8],
        encoded_img_path: &str,
    ) -> Result<()> {
        // Reject lossy output formats before doing any work.
        if self.output_files {
            ImageWrapper::output_format(encoded_img_path)?;
        }

        // We don't need to hold a separate reference image instance here.
        let mut img = ImageWrapper::load_from_file(original_img_path, false)?;
        self.encode_into(&mut img, data)?;

        if !self.output_files {
            return Ok(());
        }

        img.save(encoded_img_path)
    }
}

impl Codec for StegaLsb {
    fn encode(
        &mut self,
        original_img_path: &str,
        plaintext: &str,
        encoded_img_path: &str,
    ) -> Result<()> {
        self.encode_internal(original_img_path, plaintext.as_bytes(), encoded_img_path)
    }

    fn encode_file(
        &mut self,
        original_img_path: &str,
        input_file_path: &str,
        encoded_img_path: &str,
    ) -> Result<()> {
        let bytes = file_utils::read_file_to_u8_vector(input_file_path)?;
        self.encode_internal(original_img_path, &bytes, encoded_img_path)
    }

    fn decode(&mut self, original_img_path: &str, encoded_img_path: &str) -> Result<String> {
        let bytes = self.decode_internal(original_img_path, encoded_img_path)?;
        String::from_utf8(bytes).map_err(|_| Error::CorruptedMessage)
    }

    fn decode_file(
        &mut self,
        original_img_path: &str,
        encoded_img_path: &str,
        output_file_path: &str,
    ) -> Result<()> {
        let bytes = self.decode_internal(original_img_path, encoded_img_path)?;

        // Write the raw bytes directly to the output file.
        if self.output_files {
            file_utils::write_u8_slice_to_file(output_file_path, &bytes)
        } else {
            Ok(())
        }
    }

    fn preprocess(
        &mut self,
        input_img_path: &str,
        output_img_path: &str,
    ) -> Result<CollisionReport> {
        if self.output_files {
            ImageWrapper::output_format(output_img_path)?;
        }

        let mut img = ImageWrapper::load_from_file(input_img_path, false)?;
        let report = collision::preprocess(&mut img, &mut self.preprocess_rng);

        self.logger.log(&format!(
            "unsafe channels: {} before, {} after, of {}",
            report.before,
            report.after,
            img.get_total_channels()
        ));

        if self.output_files {
            img.save(output_img_path)?;
        }

        Ok(report)
    }

    fn set_flag_state(&mut self, config: ConfigFlags, state: bool) {
        match config {
            ConfigFlags::Verbose => {
                if state {
                    self.logger.enable_verbose_mode();
                } else {
                    self.logger.disable_verbose_mode();
                }
            }
            ConfigFlags::OutputFiles => {
                self.output_files = state;
            }
        }
    }

    fn set_parameter(&mut self, param: ConfigParams) {
        match param {
            ConfigParams::Seed(seed) => {
                self.preprocess_rng = misc_utils::fixed_seeded_xoshiro512(seed);
            }
        }
    }
}

impl Default for StegaLsb {
    fn default() -> Self {
        Self::new()
    }
}
