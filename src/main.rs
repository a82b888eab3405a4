use anyhow::Context;
use image_processor_rs::image_pipeline::arguments::USAGE;
use image_processor_rs::image_pipeline::{CliArguments, ImagePipeline, PipelineConfig};
use image_processor_rs::logger;

use tracing::{debug, error, info};

/// Set to any value to log at debug level when `RUST_LOG` is not set.
const VERBOSE_ENV: &str = "IMAGE_PROCESSOR_VERBOSE";

fn main() -> anyhow::Result<()> {
    logger::init(std::env::var_os(VERBOSE_ENV).is_some());

    let Some(args) = CliArguments::parse(std::env::args().skip(1))
        .context("Failed to parse command line")?
    else {
        println!("{USAGE}");
        return Ok(());
    };

    let pipeline = ImagePipeline::new(PipelineConfig::default());
    info!(
        "Filters requested: {}",
        args.filters
            .iter()
            .map(|f| f.alias.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );
    debug!("Available filters: {:?}", pipeline.registry().aliases());

    match pipeline.process_file_with_timings(&args.input, &args.output, &args.filters) {
        Ok(timings) => {
            timings.log_summary();
            info!("Saved {}", args.output.display());
            Ok(())
        }
        Err(e) => {
            error!("Processing failed: {}", e);
            Err(e).with_context(|| {
                format!(
                    "Failed to process {} -> {}",
                    args.input.display(),
                    args.output.display()
                )
            })
        }
    }
}
