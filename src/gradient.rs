use std::fmt;

use crate::color::Color;
use crate::hash;
use crate::{Angle, GradientOptions};

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    from: Color,
    to: Color,
    angle: i32,
}

impl Gradient {
    pub const fn new(from: Color, to: Color, angle: i32) -> Self {
        Gradient { from, to, angle }
    }

    pub const fn start(&self) -> Color {
        self.from
    }

    pub const fn end(&self) -> Color {
        self.to
    }

    /// Angle in degrees, exactly as it will be printed.
    pub const fn angle(&self) -> i32 {
        self.angle
    }

    pub fn to_hex_pair(&self) -> (String, String) {
        (self.from.to_hex(), self.to.to_hex())
    }

    /// Renders as `linear-gradient(<angle>deg, #rrggbb, #rrggbb)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle, self.from, self.to
        )
    }
}

/// Both gradient stops for `input`, sharing the tone of `options.brightness`.
pub(crate) fn stops(input: &str, options: &GradientOptions) -> (Color, Color) {
    let (first, second) = hash::dual_hue(input);
    let tone = options.brightness.tone();
    (Color::with_tone(first, tone), Color::with_tone(second, tone))
}

pub(crate) fn build(input: &str, options: &GradientOptions) -> Gradient {
    let (from, to) = stops(input, options);
    let angle = match options.angle {
        Angle::Auto => i32::from(hash::angle_from_str(input)),
        // explicit angles are printed as given, without wrapping
        Angle::Degrees(degrees) => degrees,
    };
    Gradient::new(from, to, angle)
}
