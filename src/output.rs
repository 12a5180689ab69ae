use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Lowercased color names the caller wants dropped from every output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    terms: HashSet<String>,
}

impl ExclusionSet {
    /// Parse a comma-separated list. Never fails; blank input is an empty set.
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn excludes(&self, value: &str) -> bool {
        self.terms.contains(&value.to_lowercase())
    }

    /// Drop excluded values and join the rest with `", "`.
    pub fn join<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter(|v| !self.excludes(v.as_ref()))
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The eight text outputs of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorOutputs {
    pub plain_english_colors: String,
    pub rgb_colors: String,
    pub hex_colors: String,
    pub xkcd_colors: String,
    pub design_colors: String,
    pub common_colors: String,
    pub color_types: String,
    pub color_families: String,
}

impl ColorOutputs {
    /// Output names in host order.
    pub const LABELS: [&'static str; 8] = [
        "plain_english_colors",
        "rgb_colors",
        "hex_colors",
        "xkcd_colors",
        "design_colors",
        "common_colors",
        "color_types",
        "color_families",
    ];

    pub fn into_array(self) -> [String; 8] {
        [
            self.plain_english_colors,
            self.rgb_colors,
            self.hex_colors,
            self.xkcd_colors,
            self.design_colors,
            self.common_colors,
            self.color_types,
            self.color_families,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Self::LABELS.into_iter().zip([
            self.plain_english_colors.as_str(),
            self.rgb_colors.as_str(),
            self.hex_colors.as_str(),
            self.xkcd_colors.as_str(),
            self.design_colors.as_str(),
            self.common_colors.as_str(),
            self.color_types.as_str(),
            self.color_families.as_str(),
        ])
    }
}

impl fmt::Display for ColorOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.iter() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
