mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use crate::core::{
    find_config_path, Configuration, ResizePipeline, Result, RipperError, CONFIG_SUFFIX,
};
pub use processors::{BatchReport, BatchRunner, ImageCodec, Resizer};
pub use utils::{expand, file_base_name, is_image_path, FILE_TOKEN, SIZE_TOKEN};

pub mod prelude {
    pub use crate::{BatchRunner, Configuration, ImageCodec, ResizePipeline, Resizer};
}

// Re-export commonly used types
pub use image::DynamicImage;
