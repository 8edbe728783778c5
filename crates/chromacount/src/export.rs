//! Export of palettes as style sheet and configuration snippets.
//!
//! All functions number colors starting with 1, except for the Tailwind
//! configuration, which uses the keys `100`, `101`, and so on. Colors are
//! written in uppercase hashed hexadecimal notation.
use serde_json::{json, Map, Value};

use crate::error::UnknownNameError;
use crate::Rgb;

/// Generate a CSS rule for `:root` with one custom property per color.
///
/// ```
/// # use chromacount::{export, Rgb};
/// let css = export::css_variables(&[Rgb::BLACK, Rgb::WHITE]);
/// assert_eq!(
///     css,
///     ":root {\n  --color-palette-1: #000000;\n  --color-palette-2: #FFFFFF;\n}"
/// );
/// ```
pub fn css_variables(colors: &[Rgb]) -> String {
    let mut css = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        css.push_str(&format!("  --color-palette-{}: {};\n", index + 1, color));
    }
    css.push('}');
    css
}

/// Generate one SCSS variable per color.
pub fn scss_variables(colors: &[Rgb]) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("$color-palette-{}: {};\n", index + 1, color))
        .collect()
}

/// Generate a Tailwind configuration extending the theme with a `palette`
/// color.
///
/// The result is pretty-printed JSON with two-space indentation. Shades are
/// keyed `100`, `101`, and so on, in palette order.
pub fn tailwind_config(colors: &[Rgb]) -> String {
    let palette: Map<String, Value> = colors
        .iter()
        .enumerate()
        .map(|(index, color)| ((index + 100).to_string(), Value::from(color.to_string())))
        .collect();

    let config = json!({
        "theme": {
            "extend": {
                "colors": {
                    "palette": palette
                }
            }
        }
    });

    format!("{:#}", config)
}

/// Generate a JSON document with the colors.
///
/// ```
/// # use chromacount::{export, Rgb};
/// assert_eq!(
///     export::json(&[Rgb::new(0xff, 0x80, 0)]),
///     "{\n  \"colors\": [\n    \"#FF8000\"\n  ]\n}"
/// );
/// ```
pub fn json(colors: &[Rgb]) -> String {
    let colors: Vec<String> = colors.iter().map(Rgb::to_string).collect();
    format!("{:#}", json!({ "colors": colors }))
}

// ====================================================================================================================

/// The supported export formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSS custom properties, see [`css_variables`].
    Css,
    /// SCSS variables, see [`scss_variables`].
    Scss,
    /// A Tailwind theme extension, see [`tailwind_config`].
    Tailwind,
    /// A JSON document, see [`json()`].
    Json,
}

impl ExportFormat {
    /// All export formats.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Tailwind,
        ExportFormat::Json,
    ];

    const NAMES: &'static [&'static str] = &["CSS", "SCSS", "TAILWIND", "JSON"];

    /// Get this export format's name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Get the file name for downloading the export.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Css => "chromacount.css",
            Self::Scss => "_palette.scss",
            Self::Tailwind => "tailwind.config.js",
            Self::Json => "palette.json",
        }
    }

    /// Get the MIME type for downloading the export.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Css => "text/css",
            Self::Scss => "text/x-scss",
            Self::Tailwind => "application/javascript",
            Self::Json => "application/json",
        }
    }

    /// Render the colors in this format.
    pub fn render(&self, colors: &[Rgb]) -> String {
        match self {
            Self::Css => css_variables(colors),
            Self::Scss => scss_variables(colors),
            Self::Tailwind => tailwind_config(colors),
            Self::Json => json(colors),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNameError::new(s, Self::NAMES))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
