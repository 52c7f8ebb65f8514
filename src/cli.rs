// image-ripper/src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "image-ripper", version, about = "Resize images into density buckets")]
pub struct Cli {
    /// Images to resize. An argument ending in `.config` is read as the config file.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Run PNG output through oxipng (lossless, slower)
    #[arg(long)]
    pub optimize_png: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
