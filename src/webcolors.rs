//! Named web colors (CSS2, CSS2.1, CSS3 and HTML4) and nearest-name lookup.

use std::sync::OnceLock;

use palette::Srgb;

/// One entry of the merged dictionary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebColor {
    pub name: &'static str,
    pub rgb: Srgb<u8>,
}

const HTML4_HEX_TO_NAMES: &[(&str, &str)] = &[
    ("#00ffff", "aqua"),
    ("#000000", "black"),
    ("#0000ff", "blue"),
    ("#ff00ff", "fuchsia"),
    ("#008000", "green"),
    ("#808080", "gray"),
    ("#00ff00", "lime"),
    ("#800000", "maroon"),
    ("#000080", "navy"),
    ("#808000", "olive"),
    ("#800080", "purple"),
    ("#ff0000", "red"),
    ("#c0c0c0", "silver"),
    ("#008080", "teal"),
    ("#ffffff", "white"),
    ("#ffff00", "yellow"),
];

/// CSS2 adopted the HTML4 palette unchanged.
const CSS2_HEX_TO_NAMES: &[(&str, &str)] = HTML4_HEX_TO_NAMES;

/// CSS2.1 is HTML4 plus orange.
const CSS21_EXTRA: &[(&str, &str)] = &[("#ffa500", "orange")];

/// One name per hex code. Where CSS3 defines two names for a value the
/// lookup uses "cyan", "magenta" and the "gray" spellings.
const CSS3_HEX_TO_NAMES: &[(&str, &str)] = &[
    ("#f0f8ff", "aliceblue"),
    ("#faebd7", "antiquewhite"),
    ("#00ffff", "cyan"),
    ("#7fffd4", "aquamarine"),
    ("#f0ffff", "azure"),
    ("#f5f5dc", "beige"),
    ("#ffe4c4", "bisque"),
    ("#000000", "black"),
    ("#ffebcd", "blanchedalmond"),
    ("#0000ff", "blue"),
    ("#8a2be2", "blueviolet"),
    ("#a52a2a", "brown"),
    ("#deb887", "burlywood"),
    ("#5f9ea0", "cadetblue"),
    ("#7fff00", "chartreuse"),
    ("#d2691e", "chocolate"),
    ("#ff7f50", "coral"),
    ("#6495ed", "cornflowerblue"),
    ("#fff8dc", "cornsilk"),
    ("#dc143c", "crimson"),
    ("#00008b", "darkblue"),
    ("#008b8b", "darkcyan"),
    ("#b8860b", "darkgoldenrod"),
    ("#a9a9a9", "darkgray"),
    ("#006400", "darkgreen"),
    ("#bdb76b", "darkkhaki"),
    ("#8b008b", "darkmagenta"),
    ("#556b2f", "darkolivegreen"),
    ("#ff8c00", "darkorange"),
    ("#9932cc", "darkorchid"),
    ("#8b0000", "darkred"),
    ("#e9967a", "darksalmon"),
    ("#8fbc8f", "darkseagreen"),
    ("#483d8b", "darkslateblue"),
    ("#2f4f4f", "darkslategray"),
    ("#00ced1", "darkturquoise"),
    ("#9400d3", "darkviolet"),
    ("#ff1493", "deeppink"),
    ("#00bfff", "deepskyblue"),
    ("#696969", "dimgray"),
    ("#1e90ff", "dodgerblue"),
    ("#b22222", "firebrick"),
    ("#fffaf0", "floralwhite"),
    ("#228b22", "forestgreen"),
    ("#ff00ff", "magenta"),
    ("#dcdcdc", "gainsboro"),
    ("#f8f8ff", "ghostwhite"),
    ("#ffd700", "gold"),
    ("#daa520", "goldenrod"),
    ("#808080", "gray"),
    ("#008000", "green"),
    ("#adff2f", "greenyellow"),
    ("#f0fff0", "honeydew"),
    ("#ff69b4", "hotpink"),
    ("#cd5c5c", "indianred"),
    ("#4b0082", "indigo"),
    ("#fffff0", "ivory"),
    ("#f0e68c", "khaki"),
    ("#e6e6fa", "lavender"),
    ("#fff0f5", "lavenderblush"),
    ("#7cfc00", "lawngreen"),
    ("#fffacd", "lemonchiffon"),
    ("#add8e6", "lightblue"),
    ("#f08080", "lightcoral"),
    ("#e0ffff", "lightcyan"),
    ("#fafad2", "lightgoldenrodyellow"),
    ("#d3d3d3", "lightgray"),
    ("#90ee90", "lightgreen"),
    ("#ffb6c1", "lightpink"),
    ("#ffa07a", "lightsalmon"),
    ("#20b2aa", "lightseagreen"),
    ("#87cefa", "lightskyblue"),
    ("#778899", "lightslategray"),
    ("#b0c4de", "lightsteelblue"),
    ("#ffffe0", "lightyellow"),
    ("#00ff00", "lime"),
    ("#32cd32", "limegreen"),
    ("#faf0e6", "linen"),
    ("#800000", "maroon"),
    ("#66cdaa", "mediumaquamarine"),
    ("#0000cd", "mediumblue"),
    ("#ba55d3", "mediumorchid"),
    ("#9370db", "mediumpurple"),
    ("#3cb371", "mediumseagreen"),
    ("#7b68ee", "mediumslateblue"),
    ("#00fa9a", "mediumspringgreen"),
    ("#48d1cc", "mediumturquoise"),
    ("#c71585", "mediumvioletred"),
    ("#191970", "midnightblue"),
    ("#f5fffa", "mintcream"),
    ("#ffe4e1", "mistyrose"),
    ("#ffe4b5", "moccasin"),
    ("#ffdead", "navajowhite"),
    ("#000080", "navy"),
    ("#fdf5e6", "oldlace"),
    ("#808000", "olive"),
    ("#6b8e23", "olivedrab"),
    ("#ffa500", "orange"),
    ("#ff4500", "orangered"),
    ("#da70d6", "orchid"),
    ("#eee8aa", "palegoldenrod"),
    ("#98fb98", "palegreen"),
    ("#afeeee", "paleturquoise"),
    ("#db7093", "palevioletred"),
    ("#ffefd5", "papayawhip"),
    ("#ffdab9", "peachpuff"),
    ("#cd853f", "peru"),
    ("#ffc0cb", "pink"),
    ("#dda0dd", "plum"),
    ("#b0e0e6", "powderblue"),
    ("#800080", "purple"),
    ("#ff0000", "red"),
    ("#bc8f8f", "rosybrown"),
    ("#4169e1", "royalblue"),
    ("#8b4513", "saddlebrown"),
    ("#fa8072", "salmon"),
    ("#f4a460", "sandybrown"),
    ("#2e8b57", "seagreen"),
    ("#fff5ee", "seashell"),
    ("#a0522d", "sienna"),
    ("#c0c0c0", "silver"),
    ("#87ceeb", "skyblue"),
    ("#6a5acd", "slateblue"),
    ("#708090", "slategray"),
    ("#fffafa", "snow"),
    ("#00ff7f", "springgreen"),
    ("#4682b4", "steelblue"),
    ("#d2b48c", "tan"),
    ("#008080", "teal"),
    ("#d8bfd8", "thistle"),
    ("#ff6347", "tomato"),
    ("#40e0d0", "turquoise"),
    ("#ee82ee", "violet"),
    ("#f5deb3", "wheat"),
    ("#ffffff", "white"),
    ("#f5f5f5", "whitesmoke"),
    ("#ffff00", "yellow"),
    ("#9acd32", "yellowgreen"),
];

static WEB_COLORS: OnceLock<Vec<WebColor>> = OnceLock::new();

/// The merged dictionary, built on first use.
///
/// Tables are applied in the order CSS2, CSS2.1, CSS3, HTML4. A hex code
/// keeps the position where it first appeared and takes the name from the
/// last table defining it.
pub fn web_colors() -> &'static [WebColor] {
    WEB_COLORS.get_or_init(|| {
        merge_tables(&[
            CSS2_HEX_TO_NAMES,
            // CSS2.1
            HTML4_HEX_TO_NAMES,
            CSS21_EXTRA,
            CSS3_HEX_TO_NAMES,
            HTML4_HEX_TO_NAMES,
        ])
    })
}

fn merge_tables(tables: &[&[(&'static str, &'static str)]]) -> Vec<WebColor> {
    let mut merged: Vec<WebColor> = Vec::new();
    for table in tables {
        for &(hex, name) in table.iter() {
            let Some(rgb) = parse_hex(hex) else { continue };
            match merged.iter_mut().find(|e| e.rgb == rgb) {
                Some(existing) => existing.name = name,
                None => merged.push(WebColor { name, rgb }),
            }
        }
    }
    merged
}

/// Closest web color name by L1 distance over the merged dictionary.
pub fn nearest_web_color(rgb: Srgb<u8>) -> Option<&'static str> {
    nearest_in(rgb, web_colors()).map(|e| e.name)
}

/// Exhaustive L1 scan. Ties go to the earliest entry; an empty slice has no
/// nearest entry.
pub fn nearest_in(rgb: Srgb<u8>, entries: &[WebColor]) -> Option<&WebColor> {
    let mut best = None;
    let mut best_dist = u32::MAX;
    for entry in entries {
        let dist = l1_distance(rgb, entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best = Some(entry);
        }
    }
    best
}

#[inline]
fn l1_distance(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    (a.red.abs_diff(b.red) as u32) + (a.green.abs_diff(b.green) as u32) + (a.blue.abs_diff(b.blue) as u32)
}

/// `#rrggbb`, lowercase.
pub fn format_hex(c: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

/// Parse `#rrggbb` or `#rgb`, leading `#` optional, any case.
pub fn parse_hex(s: &str) -> Option<Srgb<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Srgb::new(r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).ok();
            Some(Srgb::new(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
