use core::fmt;

/// Result with internal [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The value cannot be represented within the requested number of bits.
    BitWidthExceeded,
    /// The carrier has some usable channels, but too few to hold a length prefix.
    CapacityTooSmall,
    /// The recovered bitstream does not describe a valid message.
    CorruptedMessage,
    /// The dimensions of the encoded image are different than those of the reference image.
    DimensionMismatch,
    /// Error creating a file.
    FileCreate,
    /// Error reading from a file.
    FileRead,
    /// Error writing to a file.
    FileWrite,
    /// The pixel data does not match the dimensions of the image.
    ImageDimensionsInvalid,
    /// There was an error when attempting to load an image file.
    ImageOpening,
    /// There was an error when attempting to save an image file.
    ImageSaving(String),
    /// The image type cannot be used for steganography.
    ImageTypeInvalid,
    /// The specified path is invalid.
    PathInvalid,
    /// The framed message is larger than the carrier can hold.
    PayloadTooLarge,
    /// The carrier has no usable channels.
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BitWidthExceeded => "The value is too large for the requested bit width.",
            Error::CapacityTooSmall => {
                "The image has too few usable channels to hold a message length."
            }
            Error::CorruptedMessage => {
                "The decoded message is corrupted, or the reference image is not the original."
            }
            Error::DimensionMismatch => "The dimensions of the images are not equal.",
            Error::FileCreate => "An error occurred when attempting to create a file.",
            Error::FileRead => "An error occurred when attempting to read from a file.",
            Error::FileWrite => "An error occurred when attempting to write to a file.",
            Error::ImageDimensionsInvalid => {
                "Invalid image dimensions: the pixel data must hold exactly width × height × 3 channels."
            }
            Error::ImageOpening => "Error when attempting to load the image.",
            Error::ImageSaving(s) => s,
            Error::ImageTypeInvalid => {
                "The output image type is invalid; only lossless formats (PNG, BMP) are supported."
            }
            Error::PathInvalid => "The path is invalid or does not exist.",
            Error::PayloadTooLarge => {
                "There is insufficient space to encode the data within the image."
            }
            Error::ZeroCapacity => "The image has no usable channels; the capacity is zero.",
        })
    }
}

impl std::error::Error for Error {}
