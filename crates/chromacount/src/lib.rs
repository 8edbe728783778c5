//! # ChromaCount
//!
//! ChromaCount is the color science behind a palette extractor: Given the
//! dominant colors of an image, it answers whether text is legible on them,
//! how they look to people with color vision deficiencies, and how to take
//! them along into a style sheet.
//!
//!
//! ## 1. Overview
//!
//! ChromaCount's main abstractions are:
//!
//!   * [`Rgb`] implements **24-bit sRGB colors**. It parses and formats
//!     hashed hexadecimal notation, converts to [`Hsl`], and computes the
//!     WCAG 2.1 relative luminance and contrast ratio.
//!   * [`Rating`] and [`Compliance`] grade **contrast ratios** against the
//!     WCAG 2.1 thresholds for large text (3:1), normal text (4.5:1), and
//!     enhanced contrast (7:1).
//!   * [`SimulationMode`] **simulates color vision deficiencies**, i.e.,
//!     protanopia, deuteranopia, tritanopia, and achromatopsia.
//!   * [`Palette`] is an **ordered sequence of colors**, which can be viewed
//!     in [`SortOrder`]s by luminance or hue without losing the original order.
//!   * The [`export`] module renders palettes as **CSS, SCSS, Tailwind, and
//!     JSON** snippets.
//!   * The [`analysis`] and [`history`] modules are the **boundary to image
//!     analysis and persistence**: They parse an analysis service's answer and
//!     keep a bounded history of results.
//!
//!
//! ## 2. Contrast
//!
//! ```
//! # use chromacount::{Rating, Rgb};
//! # use chromacount::error::ColorFormatError;
//! let gray = Rgb::parse("#777777")?;
//! let ratio = gray.contrast_ratio(&Rgb::WHITE);
//! assert!(4.47 < ratio && ratio < 4.49);
//! assert_eq!(Rating::for_ratio(ratio), Rating::AaLarge);
//! assert_eq!(Rgb::parse("#1E3A8A")?.best_text_color(), Rgb::WHITE);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Contrast computations are symmetric. Ratios range from 1:1 for identical
//! colors to 21:1 for black and white.
//!
//!
//! ## 3. Palettes
//!
//! ```
//! # use chromacount::{Palette, Rgb, SimulationMode, SortOrder};
//! # use chromacount::export::ExportFormat;
//! # use chromacount::error::ColorFormatError;
//! let palette = Palette::parse(&["#DC2626", "#16A34A", "#1E3A8A"])?;
//! let by_hue = palette.sorted(SortOrder::Hue);
//! assert_eq!(by_hue, palette.colors());
//!
//! let seen = palette.simulate(SimulationMode::Achromatopsia);
//! assert!(seen.iter().all(|c| c[0] == c[1] && c[1] == c[2]));
//!
//! let css = ExportFormat::Css.render(palette.colors());
//! assert!(css.contains("--color-palette-3: #1E3A8A;"));
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 4. Precision
//!
//! The `f64` feature, which is enabled by default, selects `f64` as the
//! [`Float`] type for all computations. Without it, ChromaCount uses `f32`.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod analysis;
mod core;
pub mod error;
pub mod export;
mod format;
pub mod history;
mod palette;
mod rgb;
mod util;
mod vision;
mod wcag;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use format::{format_color, ColorFormat};
pub use palette::{sort_by_hue, sort_by_luminance, Palette, SortOrder};
pub use rgb::{Hsl, Rgb};
pub use vision::SimulationMode;
pub use wcag::{Compliance, Rating};
