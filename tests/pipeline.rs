use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use img2color::webcolors::parse_hex;
use img2color::{
    ColorOutputs, ImageTensor, Img2ColorConfig, Img2ColorError, KMeansAlgorithm, NamedColorRecord,
    detect_colors, detect_colors_bytes, detect_colors_with,
};
use palette::Srgb;
use serde_json::{Value, json};

fn solid(w: usize, h: usize, rgb: [f32; 3]) -> ImageTensor {
    ImageTensor::new([1, h, w, 3], rgb.repeat(w * h)).unwrap()
}

/// Left half one color, right half another.
fn split(left: [f32; 3], right: [f32; 3]) -> ImageTensor {
    let mut data = Vec::new();
    for _row in 0..4 {
        for x in 0..8 {
            data.extend_from_slice(if x < 4 { &left } else { &right });
        }
    }
    ImageTensor::new([1, 4, 8, 3], data).unwrap()
}

fn seeded(seed: u64) -> Value {
    json!({ "workflow": { "nodes": [{ "type": "KsamplerAdvanced", "widgets_values": [seed, "fixed"] }] } })
}

fn single_color() -> Img2ColorConfig {
    Img2ColorConfig { num_colors: 1, accuracy: 1, ..Default::default() }
}

#[test]
fn solid_red_image() {
    let outputs = detect_colors(&solid(2, 2, [1.0, 0.0, 0.0]), &single_color(), None).unwrap();
    assert_eq!(outputs.plain_english_colors, "red");
    assert_eq!(outputs.rgb_colors, "rgb(255, 0, 0)");
    assert_eq!(outputs.hex_colors, "#ff0000");
    assert_eq!(outputs.xkcd_colors, "bright red");
    assert_eq!(outputs.common_colors, "red");
    assert_eq!(outputs.color_families, "warm");
}

#[test]
fn solid_red_image_complementary() {
    let config = Img2ColorConfig { get_complementary: true, ..single_color() };
    let outputs = detect_colors(&solid(2, 2, [1.0, 0.0, 0.0]), &config, None).unwrap();
    assert_eq!(outputs.rgb_colors, "rgb(0, 255, 255)");
    assert_eq!(outputs.hex_colors, "#00ffff");
    assert_eq!(outputs.plain_english_colors, "aqua");
}

#[test]
fn zero_colors_behaves_like_one() {
    let config = Img2ColorConfig { num_colors: 0, ..Default::default() };
    let outputs = detect_colors(&solid(2, 2, [0.0, 0.0, 1.0]), &config, None).unwrap();
    assert_eq!(outputs.hex_colors, "#0000ff");
}

#[test]
fn two_color_image_reports_both() {
    let config = Img2ColorConfig { num_colors: 2, ..Default::default() };
    let outputs = detect_colors(&split([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]), &config, Some(&seeded(7))).unwrap();
    let mut hex: Vec<_> = outputs.hex_colors.split(", ").collect();
    hex.sort();
    assert_eq!(hex, ["#000000", "#ffffff"]);
    let mut names: Vec<_> = outputs.plain_english_colors.split(", ").collect();
    names.sort();
    assert_eq!(names, ["black", "white"]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut data = Vec::new();
    for i in 0..64 {
        let t = i as f32 / 63.0;
        data.extend_from_slice(&[t, 1.0 - t, (t * 3.0).fract()]);
    }
    let tensor = ImageTensor::new([1, 8, 8, 3], data).unwrap();
    let meta = seeded(12345);
    for algorithm in KMeansAlgorithm::ALL {
        let config = Img2ColorConfig { num_colors: 4, k_means_algorithm: algorithm, ..Default::default() };
        let a = detect_colors(&tensor, &config, Some(&meta)).unwrap();
        let b = detect_colors(&tensor, &config, Some(&meta)).unwrap();
        assert_eq!(a, b, "{algorithm}");
        assert_eq!(a.hex_colors.split(", ").count(), 4);
    }
}

#[test]
fn exclusions_apply_per_channel() {
    let config = Img2ColorConfig { exclude_colors: "RED, #FF0000".into(), ..single_color() };
    let outputs = detect_colors(&solid(2, 2, [1.0, 0.0, 0.0]), &config, None).unwrap();
    assert_eq!(outputs.plain_english_colors, "");
    assert_eq!(outputs.hex_colors, "");
    // Same term also matches the common name, but not the rgb() string.
    assert_eq!(outputs.common_colors, "");
    assert_eq!(outputs.rgb_colors, "rgb(255, 0, 0)");
    assert_eq!(outputs.xkcd_colors, "bright red");
}

#[test]
fn unknown_exclusion_changes_nothing() {
    let tensor = solid(2, 2, [0.0, 0.5, 0.0]);
    let plain = detect_colors(&tensor, &single_color(), None).unwrap();
    let config = Img2ColorConfig { exclude_colors: "not a color".into(), ..single_color() };
    assert_eq!(detect_colors(&tensor, &config, None).unwrap(), plain);
}

#[test]
fn injected_classifier_fills_taxonomy_outputs() {
    let stub = |rgb: Srgb<u8>| NamedColorRecord {
        xkcd_color: format!("x{}", rgb.red),
        design_color: "design".into(),
        common_color: "common".into(),
        color_type: "type".into(),
        color_family: "family".into(),
    };
    let config = Img2ColorConfig { exclude_colors: "family".into(), ..single_color() };
    let outputs = detect_colors_with(&solid(1, 1, [1.0, 1.0, 1.0]), &config, None, &stub).unwrap();
    assert_eq!(
        outputs,
        ColorOutputs {
            plain_english_colors: "white".into(),
            rgb_colors: "rgb(255, 255, 255)".into(),
            hex_colors: "#ffffff".into(),
            xkcd_colors: "x255".into(),
            design_colors: "design".into(),
            common_colors: "common".into(),
            color_types: "type".into(),
            color_families: "".into(),
        }
    );
}

#[test]
fn hex_output_round_trips_to_rgb_output() {
    let config = Img2ColorConfig { num_colors: 2, ..Default::default() };
    let tensor = split([0.2, 0.4, 0.6], [0.9, 0.1, 0.3]);
    let outputs = detect_colors(&tensor, &config, Some(&seeded(99))).unwrap();
    let rgb: Vec<_> = outputs
        .hex_colors
        .split(", ")
        .map(|h| {
            let c = parse_hex(h).unwrap();
            format!("rgb({}, {}, {})", c.red, c.green, c.blue)
        })
        .collect();
    assert_eq!(rgb.join(", "), outputs.rgb_colors);
}

#[test]
fn only_first_batch_element_is_used() {
    let mut data = [1.0, 0.0, 0.0].repeat(4);
    data.extend([0.0, 0.0, 1.0].repeat(4));
    let tensor = ImageTensor::new([2, 2, 2, 3], data).unwrap();
    let outputs = detect_colors(&tensor, &single_color(), None).unwrap();
    assert_eq!(outputs.hex_colors, "#ff0000");
}

#[test]
fn solid_image_with_default_config_repeats_its_color() {
    let outputs = detect_colors(&solid(2, 2, [1.0, 0.0, 0.0]), &Img2ColorConfig::default(), None).unwrap();
    assert_eq!(outputs.hex_colors, ["#ff0000"; 5].join(", "));
    assert_eq!(outputs.plain_english_colors, ["red"; 5].join(", "));
    assert_eq!(outputs.rgb_colors.matches("rgb(255, 0, 0)").count(), 5);
}

#[test]
fn empty_image_is_an_error() {
    let empty = ImageTensor::new([1, 0, 4, 3], vec![]).unwrap();
    let err = detect_colors(&empty, &Img2ColorConfig::default(), None).unwrap_err();
    assert!(matches!(err, Img2ColorError::EmptyImage));
}

#[test]
fn malformed_metadata_is_not_an_error() {
    let meta = json!({ "workflow": { "nodes": [{ "type": 5 }, "junk", null] } });
    let outputs = detect_colors(&solid(2, 2, [1.0, 1.0, 0.0]), &single_color(), Some(&meta)).unwrap();
    assert_eq!(outputs.plain_english_colors, "yellow");
}

#[test]
fn encoded_png_input() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 20, Rgb([255, 0, 255])));
    let mut png = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png).unwrap();
    let outputs = detect_colors_bytes(&png, &single_color(), None, Some(8)).unwrap();
    assert_eq!(outputs.plain_english_colors, "fuchsia");
    assert_eq!(outputs.hex_colors, "#ff00ff");
}
