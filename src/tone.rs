use crate::Brightness;

/// Saturation and lightness percentages applied to every derived hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tone {
    pub saturation: u8,
    pub lightness: u8,
}

impl Brightness {
    /// Fixed saturation/lightness preset for this brightness.
    ///
    /// Darker presets are more saturated and less light, lighter presets the reverse.
    pub const fn tone(self) -> Tone {
        match self {
            Brightness::Dark => Tone {
                saturation: 80,
                lightness: 35,
            },
            Brightness::Normal => Tone {
                saturation: 70,
                lightness: 60,
            },
            Brightness::Light => Tone {
                saturation: 60,
                lightness: 70,
            },
        }
    }
}
