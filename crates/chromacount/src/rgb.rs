//! 24-bit sRGB colors and their HSL representation.
//!
//! [`Rgb`] is the workhorse of this crate. It parses from and formats to
//! hashed hexadecimal notation, converts to [`Hsl`], and computes relative
//! luminance, contrast ratios, and the best text color for a background.
use serde::{Deserialize, Serialize};

use crate::core::{
    format_hex, format_hsl, format_lower_hex, format_rgb, parse_hex, to_24bit,
    to_contrast_ratio, to_hsl, to_hue, to_relative_luminance,
};
use crate::error::ColorFormatError;
use crate::Float;

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A "true," 24-bit sRGB color.
///
/// # Examples
///
/// Rust code can create a new color with [`Rgb::new`] or by parsing a string
/// with six hexadecimal digits and an optional leading `#`. Parsing ignores
/// case but rejects the three-digit shorthand.
///
/// ```
/// # use chromacount::Rgb;
/// # use chromacount::error::ColorFormatError;
/// let sand: Rgb = "#eedcad".parse()?;
/// assert_eq!(sand, Rgb::new(0xee, 0xdc, 0xad));
/// assert_eq!(Rgb::parse("EEDCAD")?, sand);
/// assert_eq!(Rgb::parse("#edc"), Err(ColorFormatError::UnexpectedLength));
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #eedcad;"></div>
/// </div>
/// <br>
///
/// The display is uppercase hashed hexadecimal, which is also what serde
/// produces. The lowercase hexadecimal format yields lowercase digits.
///
/// ```
/// # use chromacount::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.to_string(), "#B6EBD4");
/// assert_eq!(format!("{:x}", sea_foam), "#b6ebd4");
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #b6ebd4;"></div>
/// </div>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Pure white.
    pub const WHITE: Rgb = Rgb([0xff, 0xff, 0xff]);

    /// Create a new color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hexadecimal notation.
    ///
    /// The string must consist of an optional `#` followed by exactly six
    /// hexadecimal digits in either case. White space is not trimmed.
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s).map(Self)
    }

    /// Create a new color from floating point coordinates on the `0..=255`
    /// scale, clamping and rounding each coordinate.
    pub fn from_coordinates(coordinates: &[Float; 3]) -> Self {
        Self(to_24bit(coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine this color's hue in degrees.
    ///
    /// The hue ranges `0.0..360.0` and is not rounded. Achromatic colors report
    /// zero.
    pub fn hue(&self) -> Float {
        to_hue(&self.0)
    }

    /// Convert this color to HSL with integer coordinates.
    ///
    /// ```
    /// # use chromacount::{Hsl, Rgb};
    /// assert_eq!(Rgb::new(0xff, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
    /// assert_eq!(Rgb::new(0x80, 0x80, 0x80).to_hsl(), Hsl::new(0, 0, 50));
    /// ```
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = to_hsl(&self.0);

        // Rounding 359.5 and up would produce 360, which is 0.
        Hsl {
            h: (h.round() as u16) % 360,
            s: s.round() as u8,
            l: l.round() as u8,
        }
    }

    /// Format this color as a CSS `rgb()` function, e.g., `rgb(255, 0, 0)`.
    pub fn to_rgb_string(&self) -> String {
        format_rgb(&self.0)
    }

    /// Format this color as a CSS `hsl()` function, e.g., `hsl(0, 100%, 50%)`.
    pub fn to_hsl_string(&self) -> String {
        self.to_hsl().to_string()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine this color's relative luminance as defined by WCAG 2.1.
    ///
    /// The result ranges `0..=1`, with black at 0 and white at 1.
    ///
    /// ```
    /// # use chromacount::{assert_close_enough, Rgb};
    /// assert_close_enough!(Rgb::WHITE.relative_luminance(), 1.0);
    /// assert_close_enough!(Rgb::BLACK.relative_luminance(), 0.0);
    /// ```
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.0)
    }

    /// Determine the WCAG contrast ratio between this and the other color.
    ///
    /// The contrast ratio is symmetric and ranges from 1 for colors with the
    /// same luminance to 21 for black and white.
    ///
    /// ```
    /// # use chromacount::{assert_close_enough, Rgb};
    /// assert_close_enough!(Rgb::WHITE.contrast_ratio(&Rgb::BLACK), 21.0);
    /// assert_close_enough!(Rgb::BLACK.contrast_ratio(&Rgb::WHITE), 21.0);
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// Determine the more readable text color on a background with this color.
    ///
    /// This method returns white if white text has strictly more contrast
    /// against this color than black text. Otherwise, including the case where
    /// both have the same contrast, it returns black.
    ///
    /// ```
    /// # use chromacount::Rgb;
    /// assert_eq!(Rgb::WHITE.best_text_color(), Rgb::BLACK);
    /// assert_eq!(Rgb::BLACK.best_text_color(), Rgb::WHITE);
    /// assert_eq!(Rgb::new(0x68, 0x72, 0xff).best_text_color(), Rgb::BLACK);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #6872ff;">
    ///     <span style="color: #000;">Do!</span>
    /// </div>
    /// </div>
    pub fn best_text_color(&self) -> Self {
        if self.contrast_ratio(&Self::WHITE) > self.contrast_ratio(&Self::BLACK) {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&self.0, f)
    }
}

impl std::fmt::UpperHex for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&self.0, f)
    }
}

impl std::fmt::LowerHex for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_lower_hex(&self.0, f)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// A color in HSL with integer coordinates.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. Since coordinates are rounded, converting to HSL is lossy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// The hue in degrees.
    pub h: u16,
    /// The saturation in percent.
    pub s: u8,
    /// The lightness in percent.
    pub l: u8,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hsl(self.h, self.s, self.l))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Hsl, Rgb};
    use crate::assert_close_enough;
    use crate::core::FloatExt;
    use crate::error::ColorFormatError;
    use crate::Float;
    use rand::Rng;

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        for hex in ["#000000", "#ffffff", "#0a1B2c", "#FF7F00"] {
            let color = Rgb::parse(hex)?;
            assert_eq!(format!("{:x}", color), hex.to_lowercase());
            assert_eq!(color.to_string(), hex.to_uppercase());
        }

        let mut rng = rand::rng();
        for _ in 0..500 {
            let hex = format!("#{:06x}", rng.random_range(0..=0xff_ff_ff_u32));
            let color: Rgb = hex.parse()?;
            assert_eq!(color.to_string().to_lowercase(), hex);
        }

        Ok(())
    }

    #[test]
    fn test_canonical_hash() -> Result<(), ColorFormatError> {
        // Formatting always adds the `#`, even if the parsed input lacked it.
        let color = Rgb::parse("7f7f7f")?;
        assert_eq!(color.to_string(), "#7F7F7F");
        assert_eq!(format!("{:x}", color), "#7f7f7f");
        Ok(())
    }

    #[test]
    fn test_from_coordinates() {
        assert_eq!(
            Rgb::from_coordinates(&[-3.0, 127.5, 270.0]),
            Rgb::new(0, 128, 255)
        );
    }

    #[test]
    fn test_hsl() {
        assert_eq!(Rgb::new(0xff, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb::new(0x80, 0x80, 0x80).to_hsl(), Hsl::new(0, 0, 50));
        assert_eq!(Rgb::new(0, 0xff, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb::new(0x33, 0x66, 0x99).to_hsl(), Hsl::new(210, 50, 40));
        assert_eq!(Rgb::WHITE.to_hsl(), Hsl::new(0, 0, 100));

        // Hue 359.53 rounds to 360, which wraps to 0
        assert_eq!(Rgb::new(0xff, 0, 0x02).to_hsl().h, 0);

        assert_eq!(Rgb::new(0xff, 0, 0).to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Rgb::new(0xff, 0, 0).to_rgb_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_luminance_and_contrast() {
        assert_close_enough!(Rgb::WHITE.relative_luminance(), 1.0);
        assert_close_enough!(Rgb::BLACK.relative_luminance(), 0.0);
        assert_close_enough!(Rgb::WHITE.contrast_ratio(&Rgb::BLACK), 21.0);

        let epsilon = 1.0 / <Float as FloatExt>::ROUNDING_FACTOR;
        let mut rng = rand::rng();
        for _ in 0..500 {
            let a = Rgb::new(rng.random(), rng.random(), rng.random());
            let b = Rgb::new(rng.random(), rng.random(), rng.random());
            let ratio = a.contrast_ratio(&b);

            assert_eq!(ratio, b.contrast_ratio(&a), "contrast should be symmetric");
            assert_eq!(a.contrast_ratio(&a), 1.0, "self-contrast should be 1");
            assert!(
                (1.0..=21.0 + epsilon).contains(&ratio),
                "contrast {} should be in 1..=21",
                ratio
            );
        }
    }

    #[test]
    fn test_best_text_color() {
        assert_eq!(Rgb::WHITE.best_text_color(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.best_text_color(), Rgb::WHITE);
        assert_eq!(Rgb::new(0x1e, 0x3a, 0x8a).best_text_color(), Rgb::WHITE);
        assert_eq!(Rgb::new(0xfd, 0xe0, 0x47).best_text_color(), Rgb::BLACK);
    }

    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let color = Rgb::new(0xb6, 0xeb, 0xd4);
        assert_eq!(serde_json::to_string(&color)?, "\"#B6EBD4\"");
        assert_eq!(serde_json::from_str::<Rgb>("\"b6ebd4\"")?, color);
        assert!(
            serde_json::from_str::<Rgb>("\"#b6e\"").is_err(),
            "shorthand should not deserialize"
        );
        Ok(())
    }
}
