// image-ripper/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Scales images by a factor with a fixed Lanczos3 filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resizer;

impl Resizer {
    pub fn new() -> Self {
        Self
    }

    pub fn scale(&self, image: &DynamicImage, factor: f32) -> DynamicImage {
        let (width, height) = Self::scaled_dimensions(image.dimensions(), factor);

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        if width == 0 || height == 0 {
            log::debug!("Scale factor {} collapses image to {}x{}", factor, width, height);
            return DynamicImage::new(width, height, image.color());
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    /// `round(dim * factor)` per axis, never below zero.
    pub fn scaled_dimensions((orig_width, orig_height): (u32, u32), factor: f32) -> (u32, u32) {
        let scale_axis = |dim: u32| (dim as f64 * factor as f64).round().max(0.0) as u32;
        (scale_axis(orig_width), scale_axis(orig_height))
    }
}
