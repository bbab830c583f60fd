use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rgb_raster_tools::image_pipeline::{HexImageConfig, HexToImagePipeline};
use rgb_raster_tools::image_pipeline::hex::types::{
    DEFAULT_INPUT_PATH, DEFAULT_LOGICAL_COLUMNS, DEFAULT_OUTPUT_PATH, DEFAULT_SCALE_FACTOR,
};
use rgb_raster_tools::logger;

use tracing::{error, info};

/// Decode a text file of 12-bit hex colors into a block-scaled RGB image
#[derive(Parser, Debug)]
#[command(name = "hex-image", version, about, long_about = None)]
struct Cli {
    /// Text file of whitespace-separated hex color tokens
    #[arg(long, short, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Image to write; the format follows the extension
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Logical pixels per row
    #[arg(long, default_value_t = DEFAULT_LOGICAL_COLUMNS)]
    columns: u32,

    /// Side in pixels of the block drawn for each logical pixel
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: u32,

    /// Fail instead of skipping tokens that are not valid hex
    #[arg(long)]
    strict: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_with_default(logger::level_directive(cli.verbose, cli.quiet));

    let config = HexImageConfig::builder()
        .input_path(cli.input)
        .output_path(cli.output)
        .logical_columns(cli.columns)
        .scale_factor(cli.scale)
        .fail_on_invalid_tokens(cli.strict)
        .build();
    let pipeline = HexToImagePipeline::new(config);

    match pipeline.run() {
        Ok(summary) => {
            info!(
                "Image saved as '{}' ({}x{}, {} logical pixels, {} tokens skipped)",
                pipeline.config().output_path.display(),
                summary.width,
                summary.height,
                summary.logical_pixels,
                summary.skipped.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Hex image conversion failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
