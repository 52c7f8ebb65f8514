// image-ripper/src/processors/mod.rs
mod batch;
mod codec;
mod resizer;

pub use batch::{BatchReport, BatchRunner};
pub use codec::ImageCodec;
pub use resizer::Resizer;

pub mod prelude {
    pub use super::{BatchRunner, ImageCodec, Resizer};
}
