//! The boundary to the image analysis service.
//!
//! The actual analysis happens elsewhere, usually in a multimodal model behind
//! an HTTP endpoint. This module defines the [`Analyzer`] trait for plugging in
//! such a service and turns the model's textual answer into a validated
//! [`Analysis`].
use serde::Deserialize;

use crate::error::{AnalysisError, AnalysisErrorKind};
use crate::{Palette, Rgb};

/// The image formats accepted in data URLs.
const IMAGE_TYPES: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Strip the `data:image/...;base64,` prefix from a data URL.
///
/// Only PNG, JPEG, and WebP images are recognized. Any other string is
/// returned unchanged.
///
/// ```
/// # use chromacount::analysis::strip_data_url;
/// assert_eq!(strip_data_url("data:image/png;base64,iVBOR"), "iVBOR");
/// assert_eq!(strip_data_url("data:image/gif;base64,R0lG"), "data:image/gif;base64,R0lG");
/// ```
pub fn strip_data_url(s: &str) -> &str {
    s.strip_prefix("data:image/")
        .and_then(|rest| {
            IMAGE_TYPES
                .iter()
                .filter_map(|t| rest.strip_prefix(t))
                .find_map(|rest| rest.strip_prefix(";base64,"))
        })
        .unwrap_or(s)
}

/// Strip markdown code fences from a model's answer.
fn strip_code_fences(s: &str) -> String {
    s.replace("```json", "").replace("```", "").trim().to_string()
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    colors: Vec<String>,
    #[serde(default)]
    mood_tags: Vec<String>,
}

/// The validated result of analyzing an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub palette: Palette,
    pub mood_tags: Vec<String>,
}

impl Analysis {
    /// Parse a model's answer.
    ///
    /// The answer must be a JSON object with a `colors` array of hexadecimal
    /// colors and, optionally, a `moodTags` array of strings. Surrounding
    /// markdown code fences and white space are ignored. Every color must be
    /// valid; the first invalid color fails the entire analysis.
    ///
    /// ```
    /// # use chromacount::analysis::Analysis;
    /// # use chromacount::error::AnalysisError;
    /// let text = "```json\n{\"colors\": [\"#1E3A8A\"], \"moodTags\": [\"Calm\"]}\n```";
    /// let analysis = Analysis::from_model_text(text)?;
    /// assert_eq!(analysis.palette.len(), 1);
    /// assert_eq!(analysis.mood_tags, vec!["Calm"]);
    /// # Ok::<(), AnalysisError>(())
    /// ```
    pub fn from_model_text(text: &str) -> Result<Self, AnalysisError> {
        let cleaned = strip_code_fences(text);
        let raw: RawAnalysis = serde_json::from_str(&cleaned).map_err(|e| {
            tracing::debug!(error = %e, "analysis response is not valid JSON");
            AnalysisError::new(AnalysisErrorKind::MalformedResponse, Box::new(e))
        })?;

        let colors = raw
            .colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Rgb::parse(s).map_err(|e| {
                    tracing::debug!(index, color = %s, "analysis response has invalid color");
                    AnalysisError::new(AnalysisErrorKind::InvalidColor(index), Box::new(e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            colors = colors.len(),
            mood_tags = raw.mood_tags.len(),
            "parsed analysis"
        );
        Ok(Self {
            palette: Palette::new(colors),
            mood_tags: raw.mood_tags,
        })
    }
}

/// An image analysis service.
///
/// Implementations receive base64-encoded image data without data URL prefix
/// and return the dominant colors and mood tags. Implementations that receive
/// the model's textual answer should use [`Analysis::from_model_text`].
pub trait Analyzer {
    /// Analyze the image.
    fn analyze(&self, image_data: &str) -> Result<Analysis, AnalysisError>;
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{strip_data_url, Analysis};
    use crate::error::{AnalysisError, AnalysisErrorKind};
    use crate::Rgb;

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_url("data:image/jpg;base64,/9j/"), "/9j/");
        assert_eq!(strip_data_url("data:image/webp;base64,UklG"), "UklG");
        assert_eq!(strip_data_url("iVBORw0KGgo"), "iVBORw0KGgo");
        assert_eq!(
            strip_data_url("data:image/png,iVBOR"),
            "data:image/png,iVBOR"
        );
    }

    #[test]
    fn test_from_model_text() -> Result<(), AnalysisError> {
        let analysis = Analysis::from_model_text(
            r##"  {"colors": ["#1E3A8A", "fde047"], "moodTags": ["Calm", "Bright"]} "##,
        )?;
        assert_eq!(
            analysis.palette.colors(),
            &[Rgb::new(0x1e, 0x3a, 0x8a), Rgb::new(0xfd, 0xe0, 0x47)]
        );
        assert_eq!(analysis.mood_tags, vec!["Calm", "Bright"]);

        let analysis = Analysis::from_model_text(r##"```{"colors": []}```"##)?;
        assert!(analysis.palette.is_empty(), "palette should be empty");
        assert!(analysis.mood_tags.is_empty(), "mood tags default to empty");
        Ok(())
    }

    #[test]
    fn test_errors() {
        let result = Analysis::from_model_text("Here are your colors!");
        assert!(
            matches!(result, Err(ref e) if e.kind() == AnalysisErrorKind::MalformedResponse),
            "prose is not an analysis"
        );

        let result = Analysis::from_model_text(r##"{"moodTags": ["Calm"]}"##);
        assert!(
            matches!(result, Err(ref e) if e.kind() == AnalysisErrorKind::MalformedResponse),
            "colors are required"
        );

        let result = Analysis::from_model_text(r##"{"colors": ["#000000", "#FFF"]}"##);
        assert!(
            matches!(result, Err(ref e) if e.kind() == AnalysisErrorKind::InvalidColor(1)),
            "shorthand color should be rejected"
        );
    }
}
