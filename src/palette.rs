// File: src/palette.rs

// Fixed brand colors for the chart. This file intentionally has NO
// dependency on the rendering crate so it can be used from core logic and
// tests.

use crate::model::Category;

/// Fill color for a category's bars and legend swatch ("#RRGGBB").
pub fn category_hex(category: Category) -> &'static str {
    match category {
        Category::Frontend => "#2E8B57", // Sea green
        Category::Backend => "#1FB8CD",  // Strong cyan
        Category::DevOps => "#D2BA4C",   // Moderate yellow
        Category::Testing => "#944454",  // Pink-red
    }
}

/// Milestone diamond fill.
pub const MILESTONE_HEX: &str = "#DB4545";

/// Dependency arrows: mid gray, drawn at 70% opacity.
pub const ARROW_RGB: (u8, u8, u8) = (128, 128, 128);
pub const ARROW_OPACITY: f64 = 0.7;

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into a u8 tuple.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// RGB tuple for a category fill. The table above is the single source of
/// truth; a malformed entry falls back to black rather than aborting a draw.
pub fn category_rgb(category: Category) -> (u8, u8, u8) {
    parse_hex_to_u8(category_hex(category)).unwrap_or((0, 0, 0))
}

pub fn milestone_rgb() -> (u8, u8, u8) {
    parse_hex_to_u8(MILESTONE_HEX).unwrap_or((0, 0, 0))
}

/// Determines if text on top of this color should be white (true) or black.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    // Perceptual luminance approximation
    let brightness =
        0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    brightness < 128.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex_to_u8("#2E8B57"), Some((0x2E, 0x8B, 0x57)));
        assert_eq!(parse_hex_to_u8("2E8B57"), Some((0x2E, 0x8B, 0x57)));
        assert_eq!(parse_hex_to_u8("#FFF"), None);
        assert_eq!(parse_hex_to_u8("#GGGGGG"), None);
    }

    #[test]
    fn test_category_colors_match_table_and_are_distinct() {
        assert_eq!(category_rgb(Category::Frontend), (0x2E, 0x8B, 0x57));
        assert_eq!(category_rgb(Category::Backend), (0x1F, 0xB8, 0xCD));
        assert_eq!(category_rgb(Category::DevOps), (0xD2, 0xBA, 0x4C));
        assert_eq!(category_rgb(Category::Testing), (0x94, 0x44, 0x54));

        let colors: Vec<_> = Category::iter().map(category_rgb).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(is_dark(0, 0, 0));
        assert!(!is_dark(255, 255, 255));
        // The darkest category fill should take white text.
        let (r, g, b) = category_rgb(Category::Testing);
        assert!(is_dark(r, g, b));
    }
}
