use crate::Float;

/// Convert floating point coordinates on the `0..=255` scale to 24-bit
/// representation.
///
/// This function clamps each coordinate to `0.0..=255.0` before rounding it to
/// the nearest integer. It is the only place where out-of-range intermediate
/// results become valid channel values; all computations before this step
/// remain unclamped.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        if value.is_nan() {
            0
        } else {
            value.clamp(0.0, 255.0).round() as u8
        }
    }

    [
        convert(coordinates[0]),
        convert(coordinates[1]),
        convert(coordinates[2]),
    ]
}

/// Convert 24-bit coordinates to floating point coordinates on the `0..=255`
/// scale.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    [rgb[0] as Float, rgb[1] as Float, rgb[2] as Float]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue of the 24-bit color in degrees.
///
/// The result ranges `0.0..360.0` and is not rounded. Achromatic colors, i.e.,
/// colors with three identical channels, have no meaningful hue and report
/// zero.
pub(crate) fn to_hue(rgb: &[u8; 3]) -> Float {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }

    let [rf, gf, bf] = from_24bit(rgb);
    let delta = (max - min) as Float;

    let sextant = if max == r {
        (gf - bf) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    sextant * 60.0
}

/// Convert the 24-bit color to HSL.
///
/// This function returns hue in degrees as well as saturation and lightness as
/// percentages. None of the coordinates are rounded. Achromatic colors have
/// zero hue and zero saturation.
pub(crate) fn to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b) as Float / 255.0;
    let min = r.min(g).min(b) as Float / 255.0;
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness * 100.0];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [to_hue(rgb), saturation * 100.0, lightness * 100.0]
}

// ====================================================================================================================
