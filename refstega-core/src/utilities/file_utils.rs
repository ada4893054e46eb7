use crate::{
    error::{Error, Result},
    macros::*,
};

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// Check if the specified path is valid and exists.
///
/// # Arguments
///
/// * `path` - The path to be checked.
///
#[inline]
pub(crate) fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Read a file into a u8 vector.
///
/// # Arguments
///
/// * `path` - The path to the file.
///
pub(crate) fn read_file_to_u8_vector(path: &str) -> Result<Vec<u8>> {
    if !path_exists(path) {
        return Err(Error::PathInvalid);
    }

    let mut file = unwrap_or_return_err!(File::open(path), Error::FileRead);
    let mut buffer = Vec::new();
    match file.read_to_end(&mut buffer) {
        Ok(_) => Ok(buffer),
        Err(_) => Err(Error::FileRead),
    }
}

/// Write a u8 slice to an output file, replacing any existing contents.
///
/// # Arguments
///
/// * `path` - The path to the file.
/// * `bytes` - The bytes to be written.
///
pub(crate) fn write_u8_slice_to_file(path: &str, bytes: &[u8]) -> Result<()> {
    let mut file = unwrap_or_return_err!(File::create(path), Error::FileCreate);

    // Write the bytes directly into the output file.
    match file.write_all(bytes) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::FileWrite),
    }
}
