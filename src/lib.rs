//! Deterministic colors for arbitrary strings.
//!
//! Every function in this crate is a pure function of its input: the same
//! string (and options) always yields the same color, gradient or CSS value,
//! which makes it suitable for identicon-style coloring of usernames, tags
//! and other identifiers without storing anything.
//!
//! ```
//! use hashtint::{string_to_color, string_to_css_gradient, Brightness, GradientOptions};
//!
//! assert_eq!(string_to_color("hello", Brightness::Normal), "#5260e0");
//!
//! let options = GradientOptions::builder().angle(45).build();
//! assert_eq!(
//!     string_to_css_gradient("hello", &options),
//!     "linear-gradient(45deg, #92e052, #65e052)"
//! );
//! ```
//!
//! Strings are hashed as their UTF-8 bytes.

#![forbid(unsafe_code)]

use bon::Builder;

mod color;
mod gradient;
mod hash;
mod parse;
mod tone;

#[cfg(feature = "debug")]
pub mod debug;

pub use color::Color;
pub use gradient::Gradient;
pub use parse::ParseAngleError;
pub use tone::Tone;

/// Named tone preset controlling saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    /// Deeper, more saturated colors
    Dark,
    /// Balanced tones
    #[default]
    Normal,
    /// Lighter, pastel-like colors
    Light,
}

/// Direction of a CSS gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Angle {
    /// Derive the angle from the input string
    #[default]
    Auto,
    /// A fixed angle in degrees, printed exactly as given
    Degrees(i32),
}

impl From<i32> for Angle {
    fn from(value: i32) -> Self {
        Self::Degrees(value)
    }
}

/// Options for gradient derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder)]
pub struct GradientOptions {
    /// Saturation and lightness preset shared by both stops
    #[builder(default, into)]
    brightness: Brightness,
    /// Gradient direction, derived from the input unless set
    #[builder(default, into)]
    angle: Angle,
}

impl GradientOptions {
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Both gradient stops as `#rrggbb` strings
    pub fn colors(&self, input: &str) -> (String, String) {
        let (from, to) = gradient::stops(input, self);
        (from.to_hex(), to.to_hex())
    }

    /// The full gradient, with the angle resolved
    pub fn gradient(&self, input: &str) -> Gradient {
        gradient::build(input, self)
    }

    /// The gradient as a CSS `linear-gradient(..)` value
    pub fn css_gradient(&self, input: &str) -> String {
        self.gradient(input).to_css()
    }
}

use gradient_options_builder::IsComplete;

impl<S: IsComplete> GradientOptionsBuilder<S> {
    /// Build and derive both gradient stops in a single step
    pub fn colors(self, input: &str) -> (String, String) {
        self.build().colors(input)
    }

    /// Build and derive the gradient in a single step
    pub fn gradient(self, input: &str) -> Gradient {
        self.build().gradient(input)
    }

    /// Build and render the CSS gradient in a single step
    pub fn css_gradient(self, input: &str) -> String {
        self.build().css_gradient(input)
    }
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The color derived from `input` for the given brightness.
pub fn color_of(input: &str, brightness: impl Into<Brightness>) -> Color {
    let hue = (hash::hash_to_int(input) % 360) as u16;
    Color::with_tone(hue, brightness.into().tone())
}

/// Converts a string into a single `#rrggbb` color.
///
/// The hue comes from the string's MD5 digest, saturation and lightness from
/// `brightness`.
pub fn string_to_color(input: &str, brightness: impl Into<Brightness>) -> String {
    color_of(input, brightness).to_hex()
}

/// Converts a string into the two `#rrggbb` stops of a gradient.
///
/// Both hues come from disjoint windows of the string's SHA-256 digest.
pub fn string_to_gradient(input: &str, options: &GradientOptions) -> (String, String) {
    options.colors(input)
}

/// Converts a string into a CSS value such as `linear-gradient(45deg, #a1b2c3, #d4e5f6)`.
///
/// Unless [`GradientOptions::angle`] is set, the angle comes from the
/// string's SHA-1 digest and lies in `0..360`.
pub fn string_to_css_gradient(input: &str, options: &GradientOptions) -> String {
    options.css_gradient(input)
}
