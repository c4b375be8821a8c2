/// Style for a single text role. Letter spacing is expressed in em so it
/// scales with the font size, matching how the values were designed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f32,
    pub font_weight: u16,
    pub letter_spacing_em: f32,
    pub color_hex: &'static str,
}

impl TextStyle {
    pub fn letter_spacing_px(&self) -> f32 {
        self.letter_spacing_em * self.font_size_px
    }

    /// Parses `#rrggbb` or `#rrggbbaa` into RGBA bytes. The table only holds
    /// well-formed values; anything else falls back to opaque white.
    pub fn color_rgba8(&self) -> [u8; 4] {
        let hex = self.color_hex.trim_start_matches('#');

        let channel = |index: usize| {
            hex.get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };

        match hex.len() {
            6 => match (channel(0), channel(2), channel(4)) {
                (Some(r), Some(g), Some(b)) => [r, g, b, 255],
                _ => [255, 255, 255, 255],
            },
            8 => match (channel(0), channel(2), channel(4), channel(6)) {
                (Some(r), Some(g), Some(b), Some(a)) => [r, g, b, a],
                _ => [255, 255, 255, 255],
            },
            _ => [255, 255, 255, 255],
        }
    }
}

/// Styles for the four text roles drawn on a flyer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreTypography {
    pub event_name: TextStyle,
    pub date: TextStyle,
    pub location: TextStyle,
    pub lineup: TextStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(color_hex: &'static str) -> TextStyle {
        TextStyle {
            font_size_px: 48.0,
            font_weight: 200,
            letter_spacing_em: 0.1,
            color_hex,
        }
    }

    #[test]
    fn parses_rgb_and_rgba_hex() {
        assert_eq!(style("#ff3366").color_rgba8(), [255, 51, 102, 255]);
        assert_eq!(style("#ffffff80").color_rgba8(), [255, 255, 255, 128]);
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(style("#ggg").color_rgba8(), [255, 255, 255, 255]);
        assert_eq!(style("red").color_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn letter_spacing_scales_with_font_size() {
        let style = style("#ffffff");
        assert!((style.letter_spacing_px() - 4.8).abs() < f32::EPSILON);
    }
}
