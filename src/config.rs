//! Tunable parameters for one detection run.
//!
//! Every field has a default, so partial JSON documents are valid:
//!
//! ```
//! use img2color::{Img2ColorConfig, KMeansAlgorithm};
//!
//! let config = Img2ColorConfig::from_json_str(r#"{ "num_colors": 3, "k_means_algorithm": "elkan" }"#)?;
//! assert_eq!(config.num_colors, 3);
//! assert_eq!(config.k_means_algorithm, KMeansAlgorithm::Elkan);
//! assert_eq!(config.accuracy, 60);
//! # Ok::<(), img2color::Img2ColorError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cluster::KMeansAlgorithm;
use crate::error::{Img2ColorError, Result};
use crate::output::ExclusionSet;

/// Iteration count at 100% accuracy.
pub const MAX_ITERATIONS: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Img2ColorConfig {
    /// Palette size. Zero is treated as one.
    pub num_colors: usize,
    /// Report complementary colors instead of the detected ones.
    pub get_complementary: bool,
    pub k_means_algorithm: KMeansAlgorithm,
    /// Percentage in `[1, 100]` of [`MAX_ITERATIONS`].
    pub accuracy: u32,
    /// Comma-separated names to drop from the outputs.
    pub exclude_colors: String,
}

impl Default for Img2ColorConfig {
    fn default() -> Self {
        Self {
            num_colors: 5,
            get_complementary: false,
            k_means_algorithm: KMeansAlgorithm::Lloyd,
            accuracy: 60,
            exclude_colors: String::new(),
        }
    }
}

impl Img2ColorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.accuracy) {
            return Err(Img2ColorError::invalid_parameter("accuracy", self.accuracy));
        }
        Ok(())
    }

    /// `num_colors` clamped to at least one.
    pub fn effective_num_colors(&self) -> usize {
        self.num_colors.max(1)
    }

    /// `round(512 * accuracy / 100)`, never below one.
    pub fn max_iterations(&self) -> usize {
        let scaled = (MAX_ITERATIONS as f64 * self.accuracy as f64 / 100.0).round() as usize;
        scaled.max(1)
    }

    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::parse(&self.exclude_colors)
    }
}
