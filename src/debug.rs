use anstyle::{RgbColor, Style};

use crate::{Color, GradientOptions};

impl Color {
    /// The color as an `anstyle` truecolor value.
    pub fn to_ansi(&self) -> RgbColor {
        let (r, g, b) = self.rgb();
        RgbColor(r, g, b)
    }
}

fn block(color: Color) -> String {
    let style = Style::new().bg_color(Some(color.to_ansi().into()));
    format!("{style}  {style:#} {color}")
}

/// A single line previewing every color derived from `input`.
pub fn swatch(input: &str, options: &GradientOptions) -> String {
    let color = crate::color_of(input, options.brightness);
    let gradient = options.gradient(input);
    format!(
        "{input:?}: {}  {} -> {} @ {}deg",
        block(color),
        block(gradient.start()),
        block(gradient.end()),
        gradient.angle()
    )
}

/// Writes [`swatch`] to stderr, without escape codes when stderr is not a terminal.
pub fn print_swatch(input: &str, options: &GradientOptions) {
    anstream::eprintln!("{}", swatch(input, options));
}
