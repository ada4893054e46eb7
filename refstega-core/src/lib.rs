#![crate_name = "refstega_core"]

pub mod codecs;
pub mod error;
pub mod image_wrapper;
mod logger;
mod macros;
pub mod utilities;
