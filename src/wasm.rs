use js_sys::Array;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::{ImageTensor, Img2ColorConfig, KMeansAlgorithm, detect_colors};

/// Detect the palette of a single `height × width` RGB image.
///
/// `data` holds row-major RGB intensities in `[0, 1]`. The returned array has
/// the eight output strings in order (see `ColorOutputs::LABELS`).
/// Unparseable `metadata_json` counts as no metadata.
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = detectPalette)]
pub fn detect_palette(
    data: Vec<f32>,
    height: usize,
    width: usize,
    num_colors: Option<usize>,
    get_complementary: Option<bool>,
    k_means_algorithm: Option<String>,
    accuracy: Option<u32>,
    exclude_colors: Option<String>,
    metadata_json: Option<String>,
) -> Result<Array, JsValue> {
    let defaults = Img2ColorConfig::default();
    let algorithm = match k_means_algorithm {
        Some(name) => name.parse::<KMeansAlgorithm>().map_err(to_js)?,
        None => defaults.k_means_algorithm,
    };
    let config = Img2ColorConfig {
        num_colors: num_colors.unwrap_or(defaults.num_colors),
        get_complementary: get_complementary.unwrap_or(defaults.get_complementary),
        k_means_algorithm: algorithm,
        accuracy: accuracy.unwrap_or(defaults.accuracy),
        exclude_colors: exclude_colors.unwrap_or_default(),
    };
    config.validate().map_err(to_js)?;

    let metadata: Option<Value> = metadata_json.and_then(|s| serde_json::from_str(&s).ok());
    let tensor = ImageTensor::new([1, height, width, 3], data).map_err(to_js)?;
    let outputs = detect_colors(&tensor, &config, metadata.as_ref()).map_err(to_js)?;

    let result = Array::new();
    for value in outputs.into_array() {
        result.push(&JsValue::from_str(&value));
    }
    Ok(result)
}

fn to_js(err: crate::Img2ColorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
