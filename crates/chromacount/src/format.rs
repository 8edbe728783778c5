//! Textual color formats.
use crate::error::{ColorFormatError, UnknownNameError};
use crate::Rgb;

/// The textual representations for displaying a color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// Uppercase hashed hexadecimal, e.g., `#FF8000`.
    #[default]
    Hex,
    /// The CSS `rgb()` function, e.g., `rgb(255, 128, 0)`.
    Rgb,
    /// The CSS `hsl()` function, e.g., `hsl(30, 100%, 50%)`.
    Hsl,
}

impl ColorFormat {
    /// All color formats in order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    const NAMES: &'static [&'static str] = &["HEX", "RGB", "HSL"];

    /// Get this color format's name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Format the color.
    pub fn apply(&self, color: &Rgb) -> String {
        match self {
            Self::Hex => color.to_string(),
            Self::Rgb => color.to_rgb_string(),
            Self::Hsl => color.to_hsl_string(),
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNameError::new(s, Self::NAMES))
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Rgb {
    /// Format this color in the given format.
    pub fn format(&self, format: ColorFormat) -> String {
        format.apply(self)
    }
}

/// Format a hexadecimal color in the named format.
///
/// This function parses the hexadecimal color and then formats it according
/// to the format name, which is one of `HEX`, `RGB`, or `HSL` in any case.
/// `HEX` passes the color through in uppercase, with or without `#` as given.
/// If the format name is unknown, this function returns the hexadecimal color
/// unchanged. If the color is malformed, it fails, whatever the format.
///
/// ```
/// # use chromacount::format_color;
/// # use chromacount::error::ColorFormatError;
/// assert_eq!(format_color("#ff8000", "hex")?, "#FF8000");
/// assert_eq!(format_color("ff8000", "HEX")?, "FF8000");
/// assert_eq!(format_color("#ff8000", "RGB")?, "rgb(255, 128, 0)");
/// assert_eq!(format_color("#ff8000", "HSL")?, "hsl(30, 100%, 50%)");
/// assert_eq!(format_color("#ff8000", "CMYK")?, "#ff8000");
/// assert!(format_color("#f80", "RGB").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn format_color(hex: &str, format: &str) -> Result<String, ColorFormatError> {
    let color = Rgb::parse(hex)?;
    Ok(match format.parse::<ColorFormat>() {
        Ok(ColorFormat::Hex) => hex.to_ascii_uppercase(),
        Ok(format) => format.apply(&color),
        Err(_) => hex.to_string(),
    })
}
