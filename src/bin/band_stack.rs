use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rgb_raster_tools::image_pipeline::{BandPaths, BandStackPipeline, StackConfig, TiffCompression};
use rgb_raster_tools::logger;

use tracing::{error, info};

/// Stack three single-band rasters into one three-band RGB TIFF
#[derive(Parser, Debug)]
#[command(name = "band-stack", version, about, long_about = None)]
struct Cli {
    /// Raster holding the red band
    #[arg(required_unless_present = "example")]
    red: Option<PathBuf>,

    /// Raster holding the green band
    #[arg(required_unless_present = "example")]
    green: Option<PathBuf>,

    /// Raster holding the blue band
    #[arg(required_unless_present = "example")]
    blue: Option<PathBuf>,

    /// Path of the RGB TIFF to write
    #[arg(required_unless_present = "example")]
    output: Option<PathBuf>,

    /// Print a usage example and exit
    #[arg(long)]
    example: bool,

    /// Output compression
    #[arg(long, value_enum, default_value_t = TiffCompression::None)]
    compression: TiffCompression,

    /// Apply horizontal differencing before compression
    #[arg(long)]
    predictor: bool,

    /// Do not copy GeoTIFF tags from the red band
    #[arg(long)]
    no_georeferencing: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn print_example() {
    println!("\nUsage example:");
    println!("  band-stack path/to/red_band.tif path/to/green_band.tif path/to/blue_band.tif path/to/rgb_output.tif");
    println!("\nFor instance, a Landsat 8 true-color composite:");
    println!("  band-stack LC08_B4.TIF LC08_B3.TIF LC08_B2.TIF LC08_rgb.tif --compression deflate-balanced");
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.example {
        print_example();
        return ExitCode::SUCCESS;
    }

    logger::init_with_default(logger::level_directive(cli.verbose, cli.quiet));

    let (Some(red), Some(green), Some(blue), Some(output)) = (cli.red, cli.green, cli.blue, cli.output) else {
        error!("red, green, blue and output paths are all required");
        return ExitCode::from(2);
    };

    let config = StackConfig::builder()
        .compression(cli.compression)
        .predictor(cli.predictor.then_some(2))
        .copy_georeferencing(!cli.no_georeferencing)
        .build();
    let pipeline = BandStackPipeline::new(config);

    match pipeline.convert_file(BandPaths::new(&red, &green, &blue), &output) {
        Ok(()) => {
            info!("RGB TIFF created at '{}'", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Band stacking failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
