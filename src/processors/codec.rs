// image-ripper/src/processors/codec.rs
//! Decoding by content sniffing, encoding by output suffix.
//!
//! Decoding never looks at the file name: the `image` crate guesses the
//! format from the leading magic bytes. Encoding is the other way round,
//! the destination suffix picks the codec:
//!
//! | Suffix          | Output                                 |
//! |-----------------|----------------------------------------|
//! | `.jpg`, `.jpeg` | JPEG, quality 100, alpha channel dropped |
//! | `.png`          | PNG, lossless                          |
//!
//! Anything else is rejected before the destination is touched.

use crate::core::{Result, RipperError};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const JPEG_QUALITY: u8 = 100;

#[derive(Debug, Clone, Default)]
pub struct ImageCodec {
    optimize_png: bool,
}

impl ImageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs PNG output through oxipng before writing. Still lossless.
    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    pub fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        let image = image::load_from_memory(data).map_err(RipperError::Decode)?;

        log::info!(
            "Loaded image: {}x{} pixels, format: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    pub fn decode_file(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());
        let data = std::fs::read(path)?;
        self.decode(&data)
    }

    /// Writes `image` to `path`, creating missing parent directories.
    pub fn encode(&self, path: &Path, image: &DynamicImage) -> Result<()> {
        let format = Self::output_format(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RipperError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        log::debug!("Saving image to {} with format {:?}", path.display(), format);

        match format {
            ImageFormat::Jpeg => self.save_jpeg(image, path)?,
            _ => self.save_png(image, path)?,
        }

        self.log_save_result(path)
    }

    /// Codec chosen for a destination path.
    pub fn output_format(path: &Path) -> Result<ImageFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            Some("png") => Ok(ImageFormat::Png),
            _ => Err(RipperError::UnsupportedFormat(format!(
                "no encoder for output {}",
                path.display()
            ))),
        }
    }

    fn save_jpeg(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);

        match image.color() {
            ColorType::L8 | ColorType::Rgb8 => image.write_with_encoder(encoder)?,
            _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?,
        }

        writer.flush()?;
        Ok(())
    }

    fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let mut buffer: Vec<u8> = Vec::new();
        let encoder = PngEncoder::new(&mut buffer);

        match image.color() {
            ColorType::Rgb32F | ColorType::Rgba32F => {
                DynamicImage::ImageRgba16(image.to_rgba16()).write_with_encoder(encoder)?
            }
            _ => image.write_with_encoder(encoder)?,
        }

        if self.optimize_png {
            buffer = optimize_from_memory(&buffer, &Options::default())
                .map_err(|e| RipperError::Optimize(e.to_string()))?;
        }

        std::fs::write(path, buffer)?;
        Ok(())
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::info!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(())
    }
}
