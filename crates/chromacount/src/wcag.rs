//! WCAG 2.1 contrast ratings.
//!
//! A contrast ratio maps onto exactly one [`Rating`]. The thresholds are
//! the success criteria 1.4.3 (minimum) and 1.4.6 (enhanced):
//!
//! | Rating             | Contrast ratio   |
//! | ------------------ | ---------------- |
//! | [`Rating::Aaa`]     | `7 <= ratio`     |
//! | [`Rating::Aa`]      | `4.5 <= ratio < 7` |
//! | [`Rating::AaLarge`] | `3 <= ratio < 4.5` |
//! | [`Rating::Fail`]    | `ratio < 3`      |
//!
//! [`Compliance`] records the individual pass/fail flags for one foreground
//! and background pair.
use crate::{Float, Rgb};

/// The minimum contrast for AA large text, AAA large text, AA text, and AAA
/// text, respectively.
const AA_LARGE: Float = 3.0;
const AAA_LARGE: Float = 4.5;
const AA: Float = 4.5;
const AAA: Float = 7.0;

/// A WCAG conformance rating for text contrast.
///
/// Variants are ordered from worst to best.
///
/// ```
/// # use chromacount::{Rating, Rgb};
/// let gray = Rgb::new(0x77, 0x77, 0x77);
/// let ratio = gray.contrast_ratio(&Rgb::WHITE);
/// assert_eq!(Rating::for_ratio(ratio), Rating::AaLarge);
/// assert_eq!(Rating::AaLarge.label(), "AA Large");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    /// Insufficient contrast for any text.
    Fail,
    /// Sufficient contrast for large text only.
    AaLarge,
    /// Sufficient contrast for regular text.
    Aa,
    /// Enhanced contrast for regular text.
    Aaa,
}

/// The thresholds in descending order. The first threshold not exceeding a
/// ratio determines its rating.
const THRESHOLDS: [(Float, Rating); 3] = [
    (AAA, Rating::Aaa),
    (AA, Rating::Aa),
    (AA_LARGE, Rating::AaLarge),
];

impl Rating {
    /// Determine the rating for the given contrast ratio.
    ///
    /// Ratings are half-open intervals that together cover all ratios. A
    /// not-a-number ratio fails.
    pub fn for_ratio(ratio: Float) -> Self {
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| *threshold <= ratio)
            .map_or(Rating::Fail, |(_, rating)| *rating)
    }

    /// Determine the rating for the given foreground and background colors.
    pub fn for_colors(foreground: &Rgb, background: &Rgb) -> Self {
        Self::for_ratio(foreground.contrast_ratio(background))
    }

    /// Get the smallest contrast ratio with this rating.
    pub fn minimum_ratio(&self) -> Float {
        match self {
            Self::Fail => 1.0,
            Self::AaLarge => AA_LARGE,
            Self::Aa => AA,
            Self::Aaa => AAA,
        }
    }

    /// Get this rating's label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Determine whether this rating passes for at least large text.
    pub fn is_pass(&self) -> bool {
        *self != Self::Fail
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ====================================================================================================================

/// The WCAG compliance of a foreground color against a background color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Compliance {
    /// The text color.
    pub foreground: Rgb,
    /// The color behind the text.
    pub background: Rgb,
    /// The contrast ratio between the two colors.
    pub ratio: Float,
    /// Regular text meets AA, i.e., `4.5 <= ratio`.
    pub aa: bool,
    /// Large text meets AA, i.e., `3 <= ratio`.
    pub aa_large: bool,
    /// Regular text meets AAA, i.e., `7 <= ratio`.
    pub aaa: bool,
    /// Large text meets AAA, i.e., `4.5 <= ratio`.
    pub aaa_large: bool,
}

impl Compliance {
    /// Determine the compliance of the foreground against the background.
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let ratio = foreground.contrast_ratio(&background);
        Self {
            foreground,
            background,
            ratio,
            aa: AA <= ratio,
            aa_large: AA_LARGE <= ratio,
            aaa: AAA <= ratio,
            aaa_large: AAA_LARGE <= ratio,
        }
    }

    /// Get the rating for this pair.
    pub fn rating(&self) -> Rating {
        Rating::for_ratio(self.ratio)
    }
}

// ====================================================================================================================
