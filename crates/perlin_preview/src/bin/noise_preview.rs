//! # Noise Preview
//!
//! Samples a whole noise field and reports on it.
//!
//! Run with: cargo run --package perlin_preview --bin noise_preview -- field.toml --ascii

use std::time::Instant;

use anyhow::Context;
use perlin_noise::NoiseConfig;
use perlin_preview::{ascii_preview, NoiseStats, PixelBuffer, PreviewArgs, USAGE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match PreviewArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err:#}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => NoiseConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NoiseConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    info!(
        width = config.width,
        height = config.height,
        chunk_size = config.chunk_size,
        seed = ?config.seed,
        octaves = config.octaves,
        "building noise field"
    );
    let sampler = config.build_sampler().context("building sampler")?;

    let start = Instant::now();
    let buffer = PixelBuffer::render(&sampler);
    info!(
        pixels = buffer.values().len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "sampled field"
    );

    if let Some(stats) = NoiseStats::from_values(buffer.values()) {
        println!("{stats}");
    }
    if args.ascii {
        println!();
        print!("{}", ascii_preview(&buffer, args.width_chars));
    }

    Ok(())
}
