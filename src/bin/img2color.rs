use anyhow::{Context, Result};
use clap::Parser;
use img2color::{Img2ColorConfig, KMeansAlgorithm, detect_colors_bytes};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Describe the dominant colors of images in plain English, RGB, hex and xkcd names.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON config file; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of colors to detect
    #[arg(short = 'k', long)]
    num_colors: Option<usize>,

    /// Report complementary colors instead of the detected ones
    #[arg(short, long)]
    complementary: bool,

    /// k-means variant: lloyd, elkan, auto or full
    #[arg(short, long)]
    algorithm: Option<KMeansAlgorithm>,

    /// Iteration budget as a percentage (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    accuracy: Option<u32>,

    /// Comma-separated color names/values to leave out
    #[arg(short = 'x', long)]
    exclude: Option<String>,

    /// Generation metadata (JSON) carrying the sampler seed
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Shrink images so the longest side is at most this many pixels first
    #[arg(short, long)]
    downscale: Option<u32>,

    /// Print one JSON object per image instead of labelled lines
    #[arg(long)]
    json: bool,

    /// Log clustering details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = build_config(&args)?;
    let metadata = args.metadata.as_deref().map(load_metadata).transpose()?;

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("failed to read '{}'", input.display()))?;
        let outputs = detect_colors_bytes(&bytes, &config, metadata.as_ref(), args.downscale)
            .with_context(|| format!("color detection failed for '{}'", input.display()))?;

        if args.json {
            println!("{}", serde_json::to_string(&outputs)?);
        } else {
            println!("{}", input.display());
            print!("{outputs}");
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<Img2ColorConfig> {
    let mut config = match &args.config {
        Some(path) => Img2ColorConfig::from_json_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Img2ColorConfig::default(),
    };
    if let Some(n) = args.num_colors {
        config.num_colors = n;
    }
    if args.complementary {
        config.get_complementary = true;
    }
    if let Some(algorithm) = args.algorithm {
        config.k_means_algorithm = algorithm;
    }
    if let Some(accuracy) = args.accuracy {
        config.accuracy = accuracy;
    }
    if let Some(exclude) = &args.exclude {
        config.exclude_colors = exclude.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Malformed metadata is still an error here: the user pointed at the file.
fn load_metadata(path: &Path) -> Result<Value> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata '{}'", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("metadata '{}' is not JSON", path.display()))
}
