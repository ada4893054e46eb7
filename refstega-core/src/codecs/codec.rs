use crate::{codecs::collision::CollisionReport, error::Result};

pub trait Codec {
    /// Encode a string into a copy of the reference image.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `plaintext` - The text to be encoded within the reference image.
    /// * `encoded_img_path` - The path that will be used to store the encoded image.
    ///
    fn encode(
        &mut self,
        original_img_path: &str,
        plaintext: &str,
        encoded_img_path: &str,
    ) -> Result<()>;

    /// Encode the contents of a file into a copy of the reference image.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `input_file_path` - The path to the file to be encoded.
    /// * `encoded_img_path` - The path that will be used to store the encoded image.
    ///
    fn encode_file(
        &mut self,
        original_img_path: &str,
        input_file_path: &str,
        encoded_img_path: &str,
    ) -> Result<()>;

    /// Decode a string from an encoded image.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `encoded_img_path` - The path to the modified image.
    ///
    fn decode(&mut self, original_img_path: &str, encoded_img_path: &str) -> Result<String>;

    /// Decode the raw bytes held within an encoded image and write them to a file.
    ///
    /// # Arguments
    ///
    /// * `original_img_path` - The path to the reference image.
    /// * `encoded_img_path` - The path to the modified image.
    /// * `output_file_path` - The path to which the decoded bytes will be written.
    ///
    fn decode_file(
        &mut self,
        original_img_path: &str,
        encoded_img_path: &str,
        output_file_path: &str,
    ) -> Result<()>;

    /// Rewrite an image so that fewer of its channels sit at the value boundary.
    ///
    /// # Arguments
    ///
    /// * `input_img_path` - The path to the image to be processed.
    /// * `output_img_path` - The path that will be used to store the processed image.
    ///
    /// `Note:` the processed image should be used as the reference image when encoding.
    ///
    fn preprocess(&mut self, input_img_path: &str, output_img_path: &str)
        -> Result<CollisionReport>;

    /// Enable or disable a specific configuration flag.
    ///
    /// # Arguments
    ///
    /// * `config` - The [`ConfigFlags`] option to be configured.
    /// * `state` - A boolean indicating whether the config option should be enabled or disabled.
    ///
    fn set_flag_state(&mut self, config: ConfigFlags, state: bool);

    /// Set the value of a specific configuration parameter.
    ///
    /// # Arguments
    ///
    /// * `param` - The [`ConfigParams`] option, holding its new value.
    ///
    fn set_parameter(&mut self, param: ConfigParams);
}

/// A list of configuration flags that are applicable to a [`Codec`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigFlags {
    /// Enable or disable verbose mode.
    Verbose,
    /// Enable or disable the saving of files when encoding, decoding or preprocessing.
    OutputFiles,
}

/// A list of configuration parameters that are applicable to a [`Codec`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigParams {
    /// Reseed the random source used when preprocessing images.
    Seed(u64),
}
