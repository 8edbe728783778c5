mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance};

// conversion
pub(crate) use conversion::{from_24bit, to_24bit, to_hsl, to_hue};

// equality
#[cfg(test)]
pub(crate) use equality::within;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{multiply, FloatExt};

// string
pub(crate) use string::{format_hex, format_hsl, format_lower_hex, format_rgb, parse_hex};
