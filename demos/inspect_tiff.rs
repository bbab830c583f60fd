//! Prints per-channel statistics of a TIFF, e.g. one written by `band-stack`.
//!
//! Usage: `cargo run --example inspect_tiff -- rgb.tif`

use std::collections::HashSet;

use anyhow::{Context, bail};
use tiff::decoder::{Decoder, DecodingResult};

fn channel_stats(name: &str, values: impl Iterator<Item = f64>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut unique = HashSet::new();
    for v in values {
        min = min.min(v);
        max = max.max(v);
        unique.insert(v.to_bits());
    }

    println!("\n{name} channel:");
    println!("  Range: {} - {} (span: {})", min, max, max - min);
    println!("  Unique values: {}", unique.len());
    println!("  Effective bits: {:.2}", (unique.len() as f64).log2());
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).context("expected a TIFF path argument")?;
    let file = std::fs::File::open(&path).with_context(|| format!("opening {path}"))?;
    let mut decoder = Decoder::new(file)?;

    let (width, height) = decoder.dimensions()?;
    let colortype = decoder.colortype()?;
    println!("Image: {}x{} pixels, {:?}", width, height, colortype);

    let channels = match colortype {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => bail!("unsupported color type {other:?}"),
    };

    let samples: Vec<f64> = match decoder.read_image()? {
        DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::F64(data) => data,
        _ => bail!("unsupported sample type"),
    };

    for (index, name) in ["Red", "Green", "Blue", "Alpha"].iter().take(channels).enumerate() {
        channel_stats(name, samples.iter().skip(index).step_by(channels).copied());
    }

    Ok(())
}
