pub mod bit_utils;
pub(crate) mod file_utils;
pub(crate) mod misc_utils;
#[cfg(test)]
pub(crate) mod test_utils;
