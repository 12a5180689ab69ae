//! Seed discovery in upstream generation metadata.
//!
//! Image-generation workflows embed their node graph alongside the image. The
//! sampler node's first widget holds the noise seed; reusing it makes the
//! palette reproducible whenever the same workflow is re-run.

use serde_json::Value;
use tracing::debug;

/// Substring identifying sampler nodes. Matched case-sensitively.
const SAMPLER_MARKER: &str = "Ksampler";

/// Largest seed accepted; zero is rejected as well.
pub const MAX_SEED: u64 = 0xFFFF_FFFF;

/// Look for `workflow.nodes[*]` whose `type` contains [`SAMPLER_MARKER`] and
/// whose first `widgets_values` entry is numeric.
///
/// Only the first such node counts: if its value falls outside
/// `(0, MAX_SEED]` the result is `None` even when later nodes would qualify.
/// Any structural surprise yields `None`.
pub fn extract_seed(metadata: &Value) -> Option<u64> {
    let nodes = metadata.get("workflow")?.get("nodes")?.as_array()?;

    let value = nodes.iter().find_map(|node| {
        let node_type = node.get("type")?.as_str()?;
        if !node_type.contains(SAMPLER_MARKER) {
            return None;
        }
        let first = node.get("widgets_values")?.as_array()?.first()?;
        first.is_number().then_some(first)
    })?;

    let seed = numeric_seed(value);
    debug!(?seed, raw = %value, "sampler seed candidate");
    seed
}

fn numeric_seed(value: &Value) -> Option<u64> {
    let seed = match value.as_u64() {
        Some(v) => v,
        None => {
            // Negative integers fall through here too and are rejected below.
            let f = value.as_f64()?;
            if !f.is_finite() || f.fract() != 0.0 || f <= 0.0 || f > MAX_SEED as f64 {
                return None;
            }
            f as u64
        }
    };
    (1..=MAX_SEED).contains(&seed).then_some(seed)
}
