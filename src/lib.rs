//! # img2color
//!
//! Detect the dominant colors of an image and describe each one in several
//! naming schemes: nearest CSS/HTML color name, `rgb()` and hex notation, and
//! an xkcd-survey based hierarchy (fine name, design name, common name, type,
//! family).
//!
//! ```rust,no_run
//! use img2color::{detect_colors, Img2ColorConfig, ImageTensor};
//!
//! let img = image::open("photo.png")?;
//! let tensor = ImageTensor::from_image(&img)?;
//! let outputs = detect_colors(&tensor, &Img2ColorConfig::default(), None)?;
//! println!("{}", outputs.plain_english_colors);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde_json::Value;
use tracing::{debug, info};

pub mod cluster;
pub mod config;
pub mod error;
pub mod namer;
pub mod output;
pub mod seed;
pub mod tensor;
pub mod transform;
pub mod webcolors;
mod wasm;

pub use cluster::{ClusterParams, KMeansAlgorithm, cluster_pixels};
pub use config::Img2ColorConfig;
pub use error::{Img2ColorError, Result};
pub use namer::{ColorClassifier, NamedColorRecord, XkcdClassifier};
pub use output::{ColorOutputs, ExclusionSet};
pub use seed::extract_seed;
pub use tensor::ImageTensor;
pub use wasm::detect_palette;

/// Run the full pipeline with the built-in xkcd classifier.
///
/// `metadata` is the upstream generation metadata, if any; a sampler seed
/// found there makes clustering reproducible.
pub fn detect_colors(
    tensor: &ImageTensor,
    config: &Img2ColorConfig,
    metadata: Option<&Value>,
) -> Result<ColorOutputs> {
    detect_colors_with(tensor, config, metadata, XkcdClassifier::shared())
}

/// Run the full pipeline with a caller-supplied taxonomic classifier.
///
/// Steps performed:
/// 1. Derive a seed from `metadata` (absent on any irregularity).
/// 2. Cluster the first batch element into `num_colors` centroids.
/// 3. Truncate centroids to RGB, optionally complementing them.
/// 4. Name every color (web dictionary and `classifier`).
/// 5. Format, filter exclusions and join each of the eight outputs.
pub fn detect_colors_with<C>(
    tensor: &ImageTensor,
    config: &Img2ColorConfig,
    metadata: Option<&Value>,
    classifier: &C,
) -> Result<ColorOutputs>
where
    C: ColorClassifier + ?Sized,
{
    // ----------------------
    // 1. Seed
    // ----------------------
    let seed = metadata.and_then(extract_seed);
    debug!(?seed, "seed from generation metadata");

    // ----------------------
    // 2. Cluster
    // ----------------------
    let params = ClusterParams {
        num_colors: config.effective_num_colors(),
        algorithm: config.k_means_algorithm,
        max_iterations: config.max_iterations(),
        seed,
    };
    let centroids = cluster_pixels(tensor, &params)?;

    // ----------------------
    // 3. Transform
    // ----------------------
    let rgb = transform::apply_complementary(
        transform::centroids_to_rgb(&centroids),
        config.get_complementary,
    );

    // ----------------------
    // 4. Name
    // ----------------------
    let plain_english: Vec<&str> = rgb
        .iter()
        .filter_map(|&c| webcolors::nearest_web_color(c))
        .collect();
    let rgb_strings: Vec<String> = rgb
        .iter()
        .map(|c| format!("rgb({}, {}, {})", c.red, c.green, c.blue))
        .collect();
    let hex_strings: Vec<String> = rgb.iter().map(|&c| webcolors::format_hex(c)).collect();
    let records: Vec<NamedColorRecord> = rgb.iter().map(|&c| classifier.classify(c)).collect();
    for (hex, record) in hex_strings.iter().zip(&records) {
        debug!(%hex, xkcd = %record.xkcd_color, family = %record.color_family, "resolved color");
    }

    // ----------------------
    // 5. Assemble
    // ----------------------
    let exclude = config.exclusions();
    let field = |f: fn(&NamedColorRecord) -> &str| exclude.join(records.iter().map(f));
    let outputs = ColorOutputs {
        plain_english_colors: exclude.join(&plain_english),
        rgb_colors: exclude.join(&rgb_strings),
        hex_colors: exclude.join(&hex_strings),
        xkcd_colors: field(|r| r.xkcd_color.as_str()),
        design_colors: field(|r| r.design_color.as_str()),
        common_colors: field(|r| r.common_color.as_str()),
        color_types: field(|r| r.color_type.as_str()),
        color_families: field(|r| r.color_family.as_str()),
    };

    info!(
        target: "img2color",
        colors = rgb.len(),
        excluded_terms = exclude.len(),
        seeded = seed.is_some(),
        hex = %outputs.hex_colors,
        "palette detected"
    );

    Ok(outputs)
}

/// Decode an encoded image and run [`detect_colors`] on it.
///
/// With `downscale`, the image is first shrunk so its longest side is at most
/// that many pixels, which keeps k-means fast on large inputs.
pub fn detect_colors_bytes(
    input: &[u8],
    config: &Img2ColorConfig,
    metadata: Option<&Value>,
    downscale: Option<u32>,
) -> Result<ColorOutputs> {
    let img = image::load_from_memory(input)?;
    let img = match downscale {
        Some(max_side) => tensor::downscale(img, max_side),
        None => img,
    };
    let tensor = ImageTensor::from_image(&img)?;
    detect_colors(&tensor, config, metadata)
}
