// image-ripper/src/processors/batch.rs
use crate::core::{Configuration, ResizePipeline};
use crate::utils::is_image_path;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed_count: usize,
    pub skipped_count: usize,
    pub outputs: Vec<PathBuf>,
    pub errors: Vec<(String, String)>,
}

/// Runs the pipeline over every configured file, one after another.
pub struct BatchRunner {
    pipeline: ResizePipeline,
}

impl BatchRunner {
    pub fn new(pipeline: ResizePipeline) -> Self {
        Self { pipeline }
    }

    /// Processes `config.files`, printing failures to stdout.
    pub fn run(&self, config: &Configuration) -> BatchReport {
        let stdout = std::io::stdout();
        self.run_with_output(config, &mut stdout.lock())
    }

    /// A failing file is reported to `out` and never stops the batch.
    pub fn run_with_output<W: Write>(&self, config: &Configuration, out: &mut W) -> BatchReport {
        let mut report = BatchReport::default();

        for file in &config.files {
            if !is_image_path(file) {
                log::debug!("Skipping {}", file);
                report.skipped_count += 1;
                continue;
            }

            match self.pipeline.process(file, config) {
                Ok(outputs) => {
                    report.processed_count += 1;
                    report.outputs.extend(outputs);
                }
                Err(e) => {
                    if let Err(write_err) = writeln!(out, "Unable to resize {}: {}", file, e) {
                        log::warn!("Failed to report error for {}: {}", file, write_err);
                    }
                    report.errors.push((file.clone(), e.to_string()));
                }
            }
        }

        log::info!(
            "Processed {} images, {} failed, {} outputs written",
            report.processed_count,
            report.errors.len(),
            report.outputs.len()
        );

        report
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(ResizePipeline::default())
    }
}
