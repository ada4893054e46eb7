#![crate_name = "refstega_cli"]
mod error;
use crate::error::{Error, Result};
use clap::{Parser, Subcommand};
use refstega_core::codecs::{
    codec::{Codec, ConfigFlags, ConfigParams},
    lsb::StegaLsb,
};
use simple_logger::SimpleLogger;

/// Hide data within an image, recoverable with the original image.
#[derive(Parser)]
#[command(name = "refstega-cli")]
#[command(about = "Reference-keyed LSB steganography", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable verbose output.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into a copy of an image.
    Encode {
        /// Text to encode.
        #[arg(value_name = "MESSAGE")]
        message: String,
        /// Reference image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input_image: String,
        /// Output image path (PNG or BMP).
        #[arg(value_name = "OUTPUT_IMAGE")]
        output_image: String,
    },
    /// Encode the contents of a file into a copy of an image.
    #[command(name = "encode_file", visible_alias = "encode-file")]
    EncodeFile {
        /// Input file path to encode.
        #[arg(value_name = "FILE")]
        file: String,
        /// Reference image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input_image: String,
        /// Output image path (PNG or BMP).
        #[arg(value_name = "OUTPUT_IMAGE")]
        output_image: String,
    },
    /// Decode a message from an encoded image.
    Decode {
        /// Original (reference) image path.
        #[arg(value_name = "ORIGINAL_IMAGE")]
        original_image: String,
        /// Encoded image path.
        #[arg(value_name = "ENCODED_IMAGE")]
        encoded_image: String,
    },
    /// Decode the raw data held within an encoded image into a file.
    #[command(name = "decode_file", visible_alias = "decode-file")]
    DecodeFile {
        /// Original (reference) image path.
        #[arg(value_name = "ORIGINAL_IMAGE")]
        original_image: String,
        /// Encoded image path.
        #[arg(value_name = "ENCODED_IMAGE")]
        encoded_image: String,
        /// Output file path for decoded data.
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: String,
    },
    /// Reduce the number of boundary-valued channels within an image before encoding.
    Preprocess {
        /// Input image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input_image: String,
        /// Output image path (PNG or BMP).
        #[arg(value_name = "OUTPUT_IMAGE")]
        output_image: String,
        /// Seed for the random offsets, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    if let Err(e) = SimpleLogger::new().init() {
        eprintln!("Unable to initialise the logger: {e}");
    }
    let cli = Cli::parse();

    let mut codec: Box<dyn Codec> = Box::new(StegaLsb::new());
    if cli.verbose {
        codec.set_flag_state(ConfigFlags::Verbose, true);
    }

    let result = match cli.command {
        Commands::Encode {
            message,
            input_image,
            output_image,
        } => handle_encode(&input_image, &output_image, &message, &mut codec),
        Commands::EncodeFile {
            file,
            input_image,
            output_image,
        } => handle_encode_file(&input_image, &output_image, &file, &mut codec),
        Commands::Decode {
            original_image,
            encoded_image,
        } => handle_decode(&original_image, &encoded_image, &mut codec),
        Commands::DecodeFile {
            original_image,
            encoded_image,
            output_file,
        } => handle_decode_file(&original_image, &encoded_image, &output_file, &mut codec),
        Commands::Preprocess {
            input_image,
            output_image,
            seed,
        } => {
            if let Some(s) = seed {
                codec.set_parameter(ConfigParams::Seed(s));
            }
            handle_preprocess(&input_image, &output_image, &mut codec)
        }
    };

    if let Err(e) = result {
        show_abort_message(e);
    }
}

/// Handle text encode command.
fn handle_encode(
    input_image: &str,
    output_image: &str,
    message: &str,
    codec: &mut Box<dyn Codec>,
) -> Result<()> {
    match codec.encode(input_image, message, output_image) {
        Ok(_) => {
            println!("The text has been successfully encoded.");
            Ok(())
        }
        Err(e) => Err(Error::Encoding(e.to_string())),
    }
}

/// Handle file encode command.
fn handle_encode_file(
    input_image: &str,
    output_image: &str,
    input_file: &str,
    codec: &mut Box<dyn Codec>,
) -> Result<()> {
    match codec.encode_file(input_image, input_file, output_image) {
        Ok(_) => {
            println!("The file has been successfully encoded.");
            Ok(())
        }
        Err(e) => Err(Error::Encoding(e.to_string())),
    }
}

/// Handle text decode command.
fn handle_decode(
    original_image: &str,
    encoded_image: &str,
    codec: &mut Box<dyn Codec>,
) -> Result<()> {
    let decoded = codec
        .decode(original_image, encoded_image)
        .map_err(|e| Error::Decoding(e.to_string()))?;

    println!("{decoded}");
    Ok(())
}

/// Handle file decode command.
fn handle_decode_file(
    original_image: &str,
    encoded_image: &str,
    output_file: &str,
    codec: &mut Box<dyn Codec>,
) -> Result<()> {
    codec
        .decode_file(original_image, encoded_image, output_file)
        .map_err(|e| Error::Decoding(e.to_string()))?;

    println!("File successfully decoded to {output_file}");
    Ok(())
}

/// Handle image preprocess command.
fn handle_preprocess(
    input_image: &str,
    output_image: &str,
    codec: &mut Box<dyn Codec>,
) -> Result<()> {
    let report = codec
        .preprocess(input_image, output_image)
        .map_err(|e| Error::Preprocessing(e.to_string()))?;

    println!(
        "Potential collisions: {} before, {} after.",
        report.before, report.after
    );
    Ok(())
}

/// Display an error message.
pub fn show_abort_message(error: Error) {
    eprintln!("Error: {error}");
    std::process::exit(1);
}
