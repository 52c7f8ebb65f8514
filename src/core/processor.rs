// image-ripper/src/core/processor.rs
use super::{Configuration, Result, RipperError};
use crate::processors::{ImageCodec, Resizer};
use crate::utils::{expand, file_base_name};
use std::path::{Path, PathBuf};

/// Turns one input image into one output per configured size bucket.
pub struct ResizePipeline {
    codec: ImageCodec,
    resizer: Resizer,
}

impl ResizePipeline {
    pub fn new(codec: ImageCodec) -> Self {
        Self {
            codec,
            resizer: Resizer::new(),
        }
    }

    /// Decodes `input` once and writes a scaled copy for every size, in
    /// size-name order. The first error aborts the remaining sizes.
    pub fn process(&self, input: &str, config: &Configuration) -> Result<Vec<PathBuf>> {
        let src_scale = Self::source_scale(config)?;
        let file_name = file_base_name(input);

        let image = self.codec.decode_file(Path::new(input))?;

        let mut written = Vec::with_capacity(config.sizes.len());
        for (size, &scale) in &config.sizes {
            if scale == 0.0 {
                return Err(RipperError::ZeroScale { size: size.clone() });
            }

            let factor = scale / src_scale;
            log::debug!("Scaling {} for {} by {}", input, size, factor);

            let scaled = self.resizer.scale(&image, factor);
            let output = expand(&config.output, size, file_name);
            self.codec.encode(&output, &scaled)?;
            written.push(output);
        }

        Ok(written)
    }

    fn source_scale(config: &Configuration) -> Result<f32> {
        match config.sizes.get(&config.default_size) {
            None => Err(RipperError::UnconfiguredSize {
                size: config.default_size.clone(),
            }),
            Some(&scale) if scale == 0.0 => Err(RipperError::ZeroScale {
                size: config.default_size.clone(),
            }),
            Some(&scale) => Ok(scale),
        }
    }
}

impl Default for ResizePipeline {
    fn default() -> Self {
        Self::new(ImageCodec::new())
    }
}
