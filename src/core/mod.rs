// image-ripper/src/core/mod.rs
pub mod config;
pub mod processor;

use std::path::PathBuf;
use thiserror::Error;

pub use config::{find_config_path, Configuration, CONFIG_SUFFIX};
pub use processor::ResizePipeline;

#[derive(Error, Debug)]
pub enum RipperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config document: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("in {size} scale must not be 0")]
    ZeroScale { size: String },

    #[error("size {size} is not configured")]
    UnconfiguredSize { size: String },

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("PNG optimization failed: {0}")]
    Optimize(String),
}

pub type Result<T> = std::result::Result<T, RipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scale_message_names_the_size() {
        let err = RipperError::ZeroScale { size: "hdpi".to_string() };
        assert_eq!(err.to_string(), "in hdpi scale must not be 0");
    }

    #[test]
    fn directory_error_names_the_path() {
        let err = RipperError::DirectoryCreate {
            path: PathBuf::from("out/mdpi"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/mdpi"));
    }
}
