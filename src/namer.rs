//! Taxonomic color naming.
//!
//! A [`ColorClassifier`] maps an RGB value onto five naming granularities,
//! finest to coarsest. The pipeline only depends on the trait; the built-in
//! [`XkcdClassifier`] is one implementation of it.

use std::sync::OnceLock;

use palette::color_difference::Ciede2000;
use palette::{FromColor, Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

use crate::webcolors::parse_hex;

/// Names for one color at every granularity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColorRecord {
    /// Finest name, from the xkcd color survey.
    pub xkcd_color: String,
    pub design_color: String,
    pub common_color: String,
    /// Lightness/chroma descriptor such as `dark` or `pastel`.
    pub color_type: String,
    /// Coarsest bucket: `warm`, `cool` or `neutral`.
    pub color_family: String,
}

pub trait ColorClassifier {
    fn classify(&self, rgb: Srgb<u8>) -> NamedColorRecord;
}

impl<F> ColorClassifier for F
where
    F: Fn(Srgb<u8>) -> NamedColorRecord,
{
    fn classify(&self, rgb: Srgb<u8>) -> NamedColorRecord {
        self(rgb)
    }
}

// ------------------------------------------------------------
// xkcd survey table
// ------------------------------------------------------------

/// `(xkcd name, hex, design name)`
///
/// A hand-picked subset of the 949-color xkcd survey covering the main hues
/// and their light/dark variants. The design names and the common-name
/// groupings in [`common_name`] are this crate's own, not part of the survey.
const XKCD_COLORS: &[(&str, &str, &str)] = &[
    ("red", "#e50000", "red"),
    ("bright red", "#ff000d", "red"),
    ("scarlet", "#be0119", "scarlet"),
    ("cherry", "#cf0234", "crimson"),
    ("crimson", "#8c000f", "crimson"),
    ("blood red", "#980002", "crimson"),
    ("raspberry", "#b00149", "crimson"),
    ("ruby", "#ca0147", "crimson"),
    ("dark red", "#840000", "maroon"),
    ("maroon", "#650021", "maroon"),
    ("burgundy", "#610023", "burgundy"),
    ("wine", "#80013f", "burgundy"),
    ("brick red", "#8f1402", "rust"),
    ("rust", "#a83c09", "rust"),
    ("terracotta", "#ca6641", "rust"),
    ("dark orange", "#c65102", "rust"),
    ("coral", "#fc5a50", "coral"),
    ("salmon", "#ff796c", "coral"),
    ("blush", "#f29e8e", "peach"),
    ("peach", "#ffb07c", "peach"),
    ("apricot", "#ffb16d", "peach"),
    ("light orange", "#fdaa48", "peach"),
    ("orange", "#f97306", "orange"),
    ("bright orange", "#ff5b00", "orange"),
    ("tangerine", "#ff9408", "orange"),
    ("pumpkin", "#e17701", "orange"),
    ("amber", "#feb308", "gold"),
    ("gold", "#dbb40c", "gold"),
    ("mustard", "#ceb301", "mustard"),
    ("ochre", "#bf9005", "mustard"),
    ("dark yellow", "#d5b60a", "mustard"),
    ("yellow", "#ffff14", "yellow"),
    ("bright yellow", "#fffd01", "yellow"),
    ("lemon", "#fdff52", "yellow"),
    ("light yellow", "#fffe7a", "yellow"),
    ("butter yellow", "#fffd74", "yellow"),
    ("pale yellow", "#ffff84", "cream"),
    ("cream", "#ffffc2", "cream"),
    ("ivory", "#ffffcb", "cream"),
    ("off white", "#ffffe4", "white"),
    ("white", "#ffffff", "white"),
    ("chartreuse", "#c1f80a", "lime"),
    ("lime", "#aaff32", "lime"),
    ("lime green", "#89fe05", "lime"),
    ("bright green", "#01ff07", "lime"),
    ("neon green", "#0cff0c", "lime"),
    ("green", "#15b01a", "green"),
    ("kelly green", "#02ab2e", "green"),
    ("grass green", "#3f9b0b", "green"),
    ("emerald", "#01a049", "green"),
    ("jade", "#1fa774", "green"),
    ("dark green", "#033500", "forest"),
    ("forest green", "#06470c", "forest"),
    ("pine green", "#0a481e", "forest"),
    ("olive", "#6e750e", "olive"),
    ("olive green", "#677a04", "olive"),
    ("army green", "#4b5d16", "olive"),
    ("moss green", "#658b38", "olive"),
    ("khaki", "#aaa662", "olive"),
    ("sage", "#87ae73", "sage"),
    ("greenish grey", "#96ae8d", "sage"),
    ("light green", "#96f97b", "mint"),
    ("mint", "#9ffeb0", "mint"),
    ("mint green", "#8fff9f", "mint"),
    ("sea green", "#53fca1", "mint"),
    ("seafoam", "#80f9ad", "mint"),
    ("light teal", "#90e4c1", "mint"),
    ("teal", "#029386", "teal"),
    ("dark teal", "#014d4e", "teal"),
    ("turquoise", "#06c2ac", "turquoise"),
    ("aqua", "#13eac9", "turquoise"),
    ("cyan", "#00ffff", "aqua"),
    ("sky blue", "#75bbfd", "sky blue"),
    ("light blue", "#95d0fc", "sky blue"),
    ("baby blue", "#a2cffe", "sky blue"),
    ("powder blue", "#b1d1fc", "sky blue"),
    ("azure", "#069af3", "sky blue"),
    ("cerulean", "#0485d1", "blue"),
    ("blue", "#0343df", "blue"),
    ("bright blue", "#0165fc", "blue"),
    ("electric blue", "#0652ff", "blue"),
    ("royal blue", "#0504aa", "cobalt"),
    ("cobalt", "#1e488f", "cobalt"),
    ("sapphire", "#2138ab", "cobalt"),
    ("ultramarine", "#2000b1", "cobalt"),
    ("denim", "#3b638c", "steel blue"),
    ("steel blue", "#5a7d9a", "steel blue"),
    ("blue grey", "#607c8e", "steel blue"),
    ("dark blue", "#00035b", "navy"),
    ("navy blue", "#001146", "navy"),
    ("navy", "#01153e", "navy"),
    ("midnight blue", "#020035", "navy"),
    ("indigo", "#380282", "indigo"),
    ("periwinkle", "#8e82fe", "lavender"),
    ("lavender", "#c79fef", "lavender"),
    ("lilac", "#cea2fd", "lavender"),
    ("light purple", "#bf77f6", "lavender"),
    ("orchid", "#c875c4", "lavender"),
    ("violet", "#9a0eea", "violet"),
    ("bright purple", "#be03fd", "violet"),
    ("purple", "#7e1e9c", "purple"),
    ("grape", "#6c3461", "plum"),
    ("plum", "#580f41", "plum"),
    ("eggplant", "#380835", "plum"),
    ("aubergine", "#3d0734", "plum"),
    ("dark purple", "#35063e", "plum"),
    ("magenta", "#c20078", "magenta"),
    ("fuchsia", "#ed0dd9", "magenta"),
    ("neon pink", "#fe019a", "magenta"),
    ("hot pink", "#ff028d", "pink"),
    ("pink", "#ff81c0", "pink"),
    ("light pink", "#ffd1df", "pink"),
    ("pale pink", "#ffcfdc", "pink"),
    ("mauve", "#ae7181", "rose"),
    ("dark pink", "#cb416b", "rose"),
    ("rose", "#cf6275", "rose"),
    ("dusty rose", "#c0737a", "rose"),
    ("brown", "#653700", "brown"),
    ("sienna", "#a9561e", "brown"),
    ("umber", "#b26400", "brown"),
    ("dark brown", "#341c02", "chocolate"),
    ("chocolate", "#3d1c02", "chocolate"),
    ("mahogany", "#4a0100", "chocolate"),
    ("light brown", "#ad8150", "tan"),
    ("tan", "#d1b26f", "tan"),
    ("taupe", "#b9a281", "tan"),
    ("sand", "#e2ca76", "beige"),
    ("beige", "#e6daa6", "beige"),
    ("brownish grey", "#86775f", "gray"),
    ("warm grey", "#978a84", "gray"),
    ("cool grey", "#95a3a6", "gray"),
    ("grey", "#929591", "gray"),
    ("light grey", "#d8dcd6", "silver"),
    ("silver", "#c5c9c7", "silver"),
    ("slate", "#516572", "charcoal"),
    ("dark grey", "#363737", "charcoal"),
    ("charcoal", "#343837", "charcoal"),
    ("black", "#000000", "black"),
];

fn common_name(design: &str) -> &'static str {
    match design {
        "red" | "scarlet" | "crimson" | "maroon" | "burgundy" => "red",
        "rust" | "coral" | "peach" | "orange" => "orange",
        "gold" | "mustard" | "yellow" => "yellow",
        "lime" | "green" | "forest" | "olive" | "sage" | "mint" => "green",
        "teal" | "turquoise" | "aqua" => "teal",
        "sky blue" | "blue" | "cobalt" | "steel blue" | "navy" => "blue",
        "indigo" | "lavender" | "violet" | "purple" | "plum" => "purple",
        "magenta" | "pink" | "rose" => "pink",
        "brown" | "chocolate" | "tan" | "beige" => "brown",
        "cream" | "white" => "white",
        "black" => "black",
        _ => "gray",
    }
}

fn color_family(common: &str) -> &'static str {
    match common {
        "red" | "orange" | "yellow" | "pink" | "brown" => "warm",
        "green" | "teal" | "blue" | "purple" => "cool",
        _ => "neutral",
    }
}

/// Lightness/chroma bucket of a color.
fn color_type(lch: Lch) -> &'static str {
    if lch.chroma < 10.0 {
        "neutral"
    } else if lch.l < 35.0 {
        "dark"
    } else if lch.l > 75.0 && lch.chroma < 45.0 {
        "pastel"
    } else if lch.l > 70.0 {
        "light"
    } else if lch.chroma >= 60.0 {
        "bright"
    } else {
        "muted"
    }
}

struct Entry {
    lab: Lab,
    record: NamedColorRecord,
}

/// Nearest xkcd survey color by CIEDE2000, with the coarser names attached to
/// that survey entry.
///
/// Only the embedded subset of the survey is searched, so rarer survey names
/// never appear; inject another [`ColorClassifier`] for the full list.
pub struct XkcdClassifier {
    entries: Vec<Entry>,
}

impl XkcdClassifier {
    pub fn new() -> Self {
        let entries = XKCD_COLORS
            .iter()
            .filter_map(|&(name, hex, design)| {
                let rgb = parse_hex(hex)?.into_format::<f32>();
                let common = common_name(design);
                Some(Entry {
                    lab: Lab::from_color(rgb),
                    record: NamedColorRecord {
                        xkcd_color: name.to_string(),
                        design_color: design.to_string(),
                        common_color: common.to_string(),
                        color_type: color_type(Lch::from_color(rgb)).to_string(),
                        color_family: color_family(common).to_string(),
                    },
                })
            })
            .collect();
        Self { entries }
    }

    /// Process-wide instance; the Lab table is built once.
    pub fn shared() -> &'static XkcdClassifier {
        static SHARED: OnceLock<XkcdClassifier> = OnceLock::new();
        SHARED.get_or_init(XkcdClassifier::new)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for XkcdClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClassifier for XkcdClassifier {
    fn classify(&self, rgb: Srgb<u8>) -> NamedColorRecord {
        let lab = Lab::from_color(rgb.into_format::<f32>());
        self.entries
            .iter()
            .map(|e| (e.lab.difference(lab), e))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, e)| e.record.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_row_parses() {
        assert_eq!(XkcdClassifier::shared().len(), XKCD_COLORS.len());
    }

    #[test]
    fn exact_survey_colors_classify_to_themselves() {
        let classifier = XkcdClassifier::shared();
        for &(name, hex, design) in XKCD_COLORS {
            let record = classifier.classify(parse_hex(hex).unwrap());
            assert_eq!(record.xkcd_color, name);
            assert_eq!(record.design_color, design);
        }
    }

    #[test]
    fn green_record() {
        let record = XkcdClassifier::shared().classify(Srgb::new(0x15, 0xb0, 0x1a));
        assert_eq!(
            record,
            NamedColorRecord {
                xkcd_color: "green".into(),
                design_color: "green".into(),
                common_color: "green".into(),
                color_type: "bright".into(),
                color_family: "cool".into(),
            }
        );
    }

    #[test]
    fn achromatic_colors_are_neutral() {
        let classifier = XkcdClassifier::shared();
        for rgb in [Srgb::new(0, 0, 0), Srgb::new(255, 255, 255), Srgb::new(128, 128, 128)] {
            let record = classifier.classify(rgb);
            assert_eq!(record.color_type, "neutral", "{rgb:?}");
            assert_eq!(record.color_family, "neutral", "{rgb:?}");
        }
    }

    #[test]
    fn dark_colors_are_dark() {
        let record = XkcdClassifier::shared().classify(Srgb::new(0x03, 0x35, 0x00));
        assert_eq!(record.xkcd_color, "dark green");
        assert_eq!(record.color_type, "dark");
        assert_eq!(record.common_color, "green");
    }

    #[test]
    fn closures_are_classifiers() {
        let stub = |_rgb: Srgb<u8>| NamedColorRecord {
            xkcd_color: "stub".into(),
            ..Default::default()
        };
        assert_eq!(stub.classify(Srgb::new(1, 2, 3)).xkcd_color, "stub");
    }
}
