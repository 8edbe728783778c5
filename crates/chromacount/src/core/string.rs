use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The leading `#` is optional. After it, there must be exactly six
/// hexadecimal digits in either case. Three-digit shorthand is rejected, as
/// are leading or trailing white space, signs, and non-ASCII characters.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;

        // from_str_radix tolerates a leading plus sign, we do not.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the coordinates in hashed hexadecimal notation with uppercase
/// digits.
pub(crate) fn format_hex(
    coordinates: &[u8; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *coordinates;
    f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
}

/// Format the coordinates in hashed hexadecimal notation with lowercase
/// digits.
pub(crate) fn format_lower_hex(
    coordinates: &[u8; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *coordinates;
    f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Format the coordinates as a CSS `rgb()` function with integer arguments.
pub(crate) fn format_rgb(coordinates: &[u8; 3]) -> String {
    let [r, g, b] = *coordinates;
    format!("rgb({}, {}, {})", r, g, b)
}

/// Format the hue, saturation, and lightness as a CSS `hsl()` function with
/// integer arguments.
pub(crate) fn format_hsl(h: u16, s: u8, l: u8) -> String {
    format!("hsl({}, {}%, {}%)", h, s, l)
}

// ====================================================================================================================
