//! Palettes and their orderings.
use serde::{Deserialize, Serialize};

use crate::error::{ColorFormatError, UnknownNameError};
use crate::{Compliance, Rgb, SimulationMode};

/// Sort the colors by descending relative luminance, i.e., from brightest to
/// darkest.
///
/// The sort is stable: colors with the same luminance retain their relative
/// order.
pub fn sort_by_luminance(colors: &[Rgb]) -> Vec<Rgb> {
    let mut sorted = colors.to_vec();
    sorted.sort_by(|c1, c2| c2.relative_luminance().total_cmp(&c1.relative_luminance()));
    sorted
}

/// Sort the colors by ascending hue.
///
/// Achromatic colors have hue zero and hence sort with the reds. The sort is
/// stable: colors with the same hue retain their relative order.
pub fn sort_by_hue(colors: &[Rgb]) -> Vec<Rgb> {
    let mut sorted = colors.to_vec();
    sorted.sort_by(|c1, c2| c1.hue().total_cmp(&c2.hue()));
    sorted
}

// ====================================================================================================================

/// The orderings for displaying a palette.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// The palette's original order.
    #[default]
    Original,
    /// Brightest to darkest, see [`sort_by_luminance`].
    Luminance,
    /// Around the color wheel, see [`sort_by_hue`].
    Hue,
}

impl SortOrder {
    /// All sort orders.
    pub const ALL: [SortOrder; 3] = [SortOrder::Original, SortOrder::Luminance, SortOrder::Hue];

    const NAMES: &'static [&'static str] = &["ORIGINAL", "LUMINANCE", "HUE"];

    /// Get this sort order's name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl std::str::FromStr for SortOrder {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNameError::new(s, Self::NAMES))
    }
}

// ====================================================================================================================

/// An ordered sequence of colors.
///
/// A palette never changes its order. All orderings, simulations, and contrast
/// computations produce new values, so that the original order always remains
/// available.
///
/// ```
/// # use chromacount::{Palette, Rgb, SortOrder};
/// # use chromacount::error::ColorFormatError;
/// let palette = Palette::parse(&["#1E3A8A", "#FDE047", "#000000"])?;
/// let bright = palette.sorted(SortOrder::Luminance);
/// assert_eq!(bright[0], Rgb::new(0xfd, 0xe0, 0x47));
/// assert_eq!(palette.sorted(SortOrder::Original), palette.colors());
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a new palette with the given colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Parse a palette from hexadecimal colors.
    ///
    /// This method fails on the first malformed color.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, ColorFormatError> {
        colors
            .iter()
            .map(|s| Rgb::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Access the colors in their original order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the colors in the given order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Rgb> {
        match order {
            SortOrder::Original => self.colors.clone(),
            SortOrder::Luminance => sort_by_luminance(&self.colors),
            SortOrder::Hue => sort_by_hue(&self.colors),
        }
    }

    /// Simulate the colors in the given mode, preserving their order.
    pub fn simulate(&self, mode: SimulationMode) -> Vec<Rgb> {
        self.colors.iter().map(|c| mode.simulate(c)).collect()
    }

    /// Compute the compliance of every color against every color.
    ///
    /// The result has one row per foreground color and, within each row, one
    /// entry per background color, both in palette order.
    pub fn contrast_matrix(&self) -> Vec<Vec<Compliance>> {
        self.colors
            .iter()
            .map(|foreground| {
                self.colors
                    .iter()
                    .map(|background| Compliance::new(*foreground, *background))
                    .collect()
            })
            .collect()
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(value: Vec<Rgb>) -> Self {
        Self::new(value)
    }
}

impl AsRef<[Rgb]> for Palette {
    fn as_ref(&self) -> &[Rgb] {
        &self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ====================================================================================================================
