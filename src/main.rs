use clap::Parser;
use image_ripper::{find_config_path, BatchRunner, Cli, Configuration, ImageCodec, ResizePipeline};
use log::LevelFilter;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    println!("Image ripper. version {}", env!("CARGO_PKG_VERSION"));

    let config = Configuration::resolve(&cli.paths, find_config_path(&cli.paths).map(Path::new));
    for size in config.zero_scale_sizes() {
        log::warn!("Size {} has scale 0, files cannot be resized", size);
    }

    let codec = ImageCodec::new().with_png_optimization(cli.optimize_png);
    let runner = BatchRunner::new(ResizePipeline::new(codec));
    let report = runner.run(&config);

    if !report.outputs.is_empty() {
        println!(
            "Resized {} images into {} files",
            report.processed_count,
            report.outputs.len()
        );
    }
}
