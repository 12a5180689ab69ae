use std::fmt;
use std::str::FromStr;

use kmeans_colors::{get_kmeans, get_kmeans_hamerly};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Img2ColorError, Result};
use crate::tensor::ImageTensor;

/// Convergence threshold handed to kmeans_colors.
const CONVERGENCE: f32 = 1e-4;

/// kmeans_colors reports cluster membership as `u8`.
pub const MAX_CLUSTERS: usize = 256;

/// Centroid-update strategy for k-means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KMeansAlgorithm {
    /// Exact assignment-and-update iterations.
    #[default]
    Lloyd,
    /// Triangle-inequality accelerated iterations (Hamerly's bounds).
    Elkan,
    /// Accelerated when more than one cluster is requested, Lloyd otherwise.
    Auto,
    /// Alias of [`KMeansAlgorithm::Lloyd`].
    Full,
}

impl KMeansAlgorithm {
    pub const ALL: [KMeansAlgorithm; 4] = [Self::Lloyd, Self::Elkan, Self::Auto, Self::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lloyd => "lloyd",
            Self::Elkan => "elkan",
            Self::Auto => "auto",
            Self::Full => "full",
        }
    }

    /// Whether the accelerated routine runs for `k` clusters.
    fn accelerated(self, k: usize) -> bool {
        match self {
            Self::Lloyd | Self::Full => false,
            Self::Elkan => true,
            Self::Auto => k > 1,
        }
    }
}

impl fmt::Display for KMeansAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KMeansAlgorithm {
    type Err = Img2ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Img2ColorError::invalid_parameter("k_means_algorithm", s))
    }
}

/// Parameters for one clustering run. `num_colors` is taken as given; the
/// caller clamps it to at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterParams {
    pub num_colors: usize,
    pub algorithm: KMeansAlgorithm,
    pub max_iterations: usize,
    /// Drawn from OS entropy when absent.
    pub seed: Option<u64>,
}

/// Partition the pixels of batch element 0 into `num_colors` clusters and
/// return the centroids scaled into `[0, 255]`.
///
/// Always yields exactly `num_colors` centroids. kmeans_colors returns fewer
/// when the image has fewer distinct pixels than clusters; the returned ones
/// are then repeated in order to fill the list.
///
/// An empty pixel set or more than [`MAX_CLUSTERS`] clusters is an error.
pub fn cluster_pixels(tensor: &ImageTensor, params: &ClusterParams) -> Result<Vec<[f32; 3]>> {
    let k = params.num_colors;
    let pixels: Vec<Srgb> = tensor
        .pixels(0)
        .map(|[r, g, b]| Srgb::new(r, g, b))
        .collect();

    if pixels.is_empty() {
        return Err(Img2ColorError::EmptyImage);
    }
    if k > MAX_CLUSTERS {
        return Err(Img2ColorError::TooManyClusters {
            requested: k,
            maximum: MAX_CLUSTERS,
        });
    }
    let seed = match params.seed {
        Some(seed) => seed,
        None => getrandom::u64()?,
    };

    debug!(
        k,
        algorithm = %params.algorithm,
        max_iterations = params.max_iterations,
        seed,
        pixels = pixels.len(),
        "clustering pixels"
    );

    let kmeans = if params.algorithm.accelerated(k) {
        get_kmeans_hamerly(k, params.max_iterations, CONVERGENCE, false, &pixels, seed)
    } else {
        get_kmeans(k, params.max_iterations, CONVERGENCE, false, &pixels, seed)
    };

    if kmeans.centroids.len() < k {
        debug!(
            found = kmeans.centroids.len(),
            k, "fewer clusters than requested, repeating centroids"
        );
    }

    Ok(kmeans
        .centroids
        .iter()
        .cycle()
        .take(k)
        .map(|c| [c.red * 255.0, c.green * 255.0, c.blue * 255.0])
        .collect())
}
