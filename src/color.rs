use std::fmt;

use crate::tone::Tone;

/// A color in the HSL model.
///
/// Hue is in degrees (`0..360`), saturation and lightness are percentages (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Color {
    /// Builds a color, wrapping the hue onto the color wheel and capping
    /// saturation and lightness at 100%.
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Color {
            hue: hue % 360,
            saturation: if saturation > 100 { 100 } else { saturation },
            lightness: if lightness > 100 { 100 } else { lightness },
        }
    }

    pub(crate) const fn with_tone(hue: u16, tone: Tone) -> Self {
        Self::hsl(hue, tone.saturation, tone.lightness)
    }

    pub const fn hue(&self) -> u16 {
        self.hue
    }

    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Converts to 8-bit sRGB channels, rounding each channel to the nearest integer.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let h = f64::from(self.hue) / 360.0;
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;

        if self.saturation == 0 {
            let gray = to_channel(l);
            return (gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Serializes as `#rrggbb` with lowercase hex digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_converts_primary_hues() {
        assert_eq!(Color::hsl(0, 100, 50).rgb(), (255, 0, 0));
        assert_eq!(Color::hsl(120, 100, 50).rgb(), (0, 255, 0));
        assert_eq!(Color::hsl(240, 100, 50).rgb(), (0, 0, 255));
    }

    #[test]
    fn it_converts_grays_without_saturation() {
        assert_eq!(Color::hsl(200, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::hsl(200, 0, 100).to_hex(), "#ffffff");
        assert_eq!(Color::hsl(17, 0, 50).to_hex(), "#808080");
    }

    #[test]
    fn it_formats_lowercase_hex() {
        assert_eq!(Color::hsl(0, 70, 60).to_hex(), "#e05252");
        assert_eq!(Color::hsl(180, 80, 35).to_hex(), "#12a1a1");
        assert_eq!(Color::hsl(300, 60, 70).to_hex(), "#e085e0");
        assert_eq!(Color::hsl(359, 70, 60).to_hex(), "#e05254");
    }

    #[test]
    fn it_normalizes_out_of_range_components() {
        let color = Color::hsl(400, 120, 150);
        assert_eq!(color.hue(), 40);
        assert_eq!(color.saturation(), 100);
        assert_eq!(color.lightness(), 100);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::hsl(234, 70, 60);
        assert_eq!(format!("{color}"), color.to_hex());
        assert_eq!(color.to_hex(), "#5260e0");
    }
}
