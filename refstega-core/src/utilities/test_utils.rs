use crate::image_wrapper::ImageWrapper;

use path_absolutize::Absolutize;
use rand::Rng;
use std::fs;

pub(crate) struct TestUtils {
    /// A vector of files that will be automatically cleared when the instance is dropped.
    auto_clear_files: Vec<String>,
}

impl TestUtils {
    pub fn new() -> Self {
        Self {
            auto_clear_files: Vec::new(),
        }
    }

    /// Add a file to the automatic file clearing list.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to be cleared.
    ///
    fn add_auto_clear_file(&mut self, path: &str) {
        self.auto_clear_files.push(path.to_string());
    }

    /// Get the full path to a random output file path.
    /// These files are created in the operating system's temp directory.
    ///
    /// # Arguments
    ///
    /// * `ext` - The extension of the temporary file.
    /// * `auto_clear` - Whether this file should be automatically cleared after the test has finished.
    ///
    /// `Note:` This path is normalized to avoid creating any issues
    /// with relative paths.
    ///
    pub fn get_out_file(&mut self, ext: &str, auto_clear: bool) -> String {
        let random: u128 = rand::rng().random();

        let mut path = std::env::temp_dir();
        path.push(format!("{random}.{ext}"));

        let path = path.absolutize().unwrap();
        let path_str = path.to_str().unwrap().to_string();

        // Do we need to automatically delete this file after we are finished?
        if auto_clear {
            self.add_auto_clear_file(&path_str);
        }

        path_str
    }

    /// Write an image to a random, automatically cleared, PNG file.
    ///
    /// # Arguments
    ///
    /// * `img` - The image to be written.
    ///
    pub fn write_image(&mut self, img: &ImageWrapper) -> String {
        let path = self.get_out_file("png", true);
        img.save(&path).expect("failed to write the test image");
        path
    }

    /// Generate an image holding a smooth gradient that covers the full channel range,
    /// including values at the 0/255 boundary.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the image, in pixels.
    /// * `height` - The height of the image, in pixels.
    ///
    pub fn gradient_image(width: u32, height: u32) -> ImageWrapper {
        let mut bytes = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let r = ((x as f32 / (width - 1).max(1) as f32) * 255.0) as u8;
                let g = ((y as f32 / (height - 1).max(1) as f32) * 255.0) as u8;
                let b = ((x + y) % 256) as u8;
                bytes.extend_from_slice(&[r, g, b]);
            }
        }

        ImageWrapper::from_rgb_bytes(width, height, bytes).unwrap()
    }
}

impl Drop for TestUtils {
    fn drop(&mut self) {
        for f in &self.auto_clear_files {
            let _ = fs::remove_file(f);
        }
    }
}
