use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, as given by WCAG 2.1.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The threshold below which the sRGB transfer function is linear.
///
/// WCAG 2.x still uses the value from an early sRGB draft instead of the
/// standard's 0.04045. The two thresholds produce the same result for all
/// 24-bit colors.
const LINEAR_THRESHOLD: Float = 0.03928;

/// The flare added to both luminances before dividing them.
const FLARE: Float = 0.05;

/// Compute the relative luminance for the given 24-bit sRGB coordinates.
///
/// This function normalizes each coordinate to `0..=1`, linearizes it with
/// the piecewise sRGB transfer function, and computes the weighted sum. The
/// result ranges `0..=1`.
pub(crate) fn to_relative_luminance(coordinates: &[u8; 3]) -> Float {
    #[inline]
    fn linearize(value: u8) -> Float {
        let value = value as Float / 255.0;
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r) * c1 + linearize(g) * c2 + linearize(b) * c3
}

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// The arguments are interchangeable: the larger luminance always ends up in
/// the numerator. The result ranges `1..=21` for luminances in `0..=1` and
/// is exactly 1 for equal luminances.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);

    (lighter + FLARE) / (darker + FLARE)
}
