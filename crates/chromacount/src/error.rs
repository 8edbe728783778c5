//! Utility module with chromacount's errors.

/// An erroneous hexadecimal color.
///
/// Valid colors have an optional leading `#` followed by exactly six
/// hexadecimal digits. Both variants signal an invalid hex color; they only
/// differ in how the input went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color with the wrong number of characters after the optional `#`. For
    /// example, `#fff` uses the unsupported three-digit shorthand, whereas
    /// `#1234567` has a digit too many.
    UnexpectedLength,

    /// A color with the right length but an unsuitable character. For example,
    /// `#00ff0g` contains `g`, whereas `#💩00` contains a multi-byte character.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedLength => {
                f.write_str("hex color should have exactly 6 digits after optional `#`")
            }
            MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An unknown name.
///
/// This error indicates a string that does not name any variant of an
/// enumeration, e.g., a color format, export format, simulation mode, or sort
/// order. Matching is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNameError {
    pub name: String,
    pub expected: &'static [&'static str],
}

impl UnknownNameError {
    /// Create a new unknown name error.
    pub fn new(name: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            name: name.into(),
            expected,
        }
    }
}

impl std::fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "\"{}\" should be one of {}",
            self.name,
            self.expected.join(", ")
        ))
    }
}

impl std::error::Error for UnknownNameError {}

// ====================================================================================================================

/// The kinds of errors while analyzing an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    /// The analysis service failed to produce a response.
    Service,
    /// The response is not a JSON object with `colors` and `moodTags`.
    MalformedResponse,
    /// The color with the given index is not a valid hex color.
    InvalidColor(usize),
}

/// An error while analyzing an image.
#[derive(Debug)]
pub struct AnalysisError {
    kind: AnalysisErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AnalysisError {
    /// Create a new analysis error.
    pub fn new(
        kind: AnalysisErrorKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// Create a new analysis error without underlying cause.
    pub fn from_kind(kind: AnalysisErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Get this error's kind.
    pub fn kind(&self) -> AnalysisErrorKind {
        self.kind
    }
}

impl From<AnalysisError> for std::io::Error {
    fn from(value: AnalysisError) -> Self {
        std::io::Error::other(value)
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            AnalysisErrorKind::Service => f.write_str("could not analyze image"),
            AnalysisErrorKind::MalformedResponse => {
                f.write_str("could not parse analysis response")
            }
            AnalysisErrorKind::InvalidColor(index) => f.write_fmt(format_args!(
                "could not parse color {} of analysis response",
                index
            )),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

// ====================================================================================================================
