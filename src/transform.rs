use palette::Srgb;

/// Truncate centroid channels to integers.
///
/// Truncation, not rounding: `254.9` becomes `254`. Float-to-int casts
/// saturate, so anything outside `[0, 255]` is pinned to the nearest bound.
pub fn centroids_to_rgb(centroids: &[[f32; 3]]) -> Vec<Srgb<u8>> {
    centroids
        .iter()
        .map(|&[r, g, b]| Srgb::new(r as u8, g as u8, b as u8))
        .collect()
}

#[inline]
pub fn complementary(c: Srgb<u8>) -> Srgb<u8> {
    Srgb::new(255 - c.red, 255 - c.green, 255 - c.blue)
}

/// Invert every color when `enabled`, otherwise hand the list back untouched.
pub fn apply_complementary(colors: Vec<Srgb<u8>>, enabled: bool) -> Vec<Srgb<u8>> {
    if !enabled {
        return colors;
    }
    colors.into_iter().map(complementary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truncates_each_channel() {
        let rgb = centroids_to_rgb(&[[254.9, 0.999, 127.5]]);
        assert_eq!(rgb, vec![Srgb::new(254, 0, 127)]);
    }

    #[test]
    fn out_of_range_values_saturate() {
        let rgb = centroids_to_rgb(&[[-3.0, 300.0, 255.0]]);
        assert_eq!(rgb, vec![Srgb::new(0, 255, 255)]);
    }

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(complementary(Srgb::new(255, 0, 0)), Srgb::new(0, 255, 255));
    }

    #[test]
    fn disabled_transform_is_identity() {
        let colors = vec![Srgb::new(1, 2, 3), Srgb::new(250, 128, 0)];
        assert_eq!(apply_complementary(colors.clone(), false), colors);
    }

    proptest! {
        #[test]
        fn complement_is_an_involution(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Srgb::new(r, g, b);
            prop_assert_eq!(complementary(complementary(c)), c);
        }
    }
}
