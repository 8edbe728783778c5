//! A bounded history of analyzed palettes.
//!
//! The history is a newest-first list of [`PaletteRecord`]s, persisted as JSON
//! text in a [`HistoryStore`]. Storage is best effort: Failing to load the
//! history results in an empty history and failing to save it loses the
//! update. In either case, a warning is logged and the application carries on.
//!
//!
//! # Example
//!
//! ```
//! # use chromacount::analysis::Analysis;
//! # use chromacount::history::{History, HistoryOptions, MemoryStore, PaletteRecord};
//! # use chromacount::error::AnalysisError;
//! let options = HistoryOptions::builder().limit(2).build();
//! let mut history = History::new(MemoryStore::new(), options);
//!
//! for text in [r##"{"colors":["#000000"]}"##, r##"{"colors":["#FFFFFF"]}"##, r#"{"colors":[]}"#] {
//!     let analysis = Analysis::from_model_text(text)?;
//!     history.push(PaletteRecord::new(analysis, "data:image/png;base64,iVBOR"));
//! }
//!
//! let records = history.records();
//! assert_eq!(records.len(), 2);
//! assert!(records[0].colors.is_empty());
//! # Ok::<(), AnalysisError>(())
//! ```
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{strip_data_url, Analysis, Analyzer};
use crate::error::AnalysisError;
use crate::util::{Env, Environment};
use crate::Palette;

/// The environment variable overriding the history limit.
pub const LIMIT_VARIABLE: &str = "CHROMACOUNT_HISTORY_LIMIT";

/// An analyzed palette together with its image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRecord {
    pub id: Uuid,
    pub colors: Palette,
    pub mood_tags: Vec<String>,
    pub image_url: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl PaletteRecord {
    /// Create a new record for the analysis with a fresh identifier and the
    /// current time.
    pub fn new(analysis: Analysis, image_url: impl Into<String>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));

        Self {
            id: Uuid::new_v4(),
            colors: analysis.palette,
            mood_tags: analysis.mood_tags,
            image_url: image_url.into(),
            timestamp,
        }
    }
}

// ====================================================================================================================

/// Persistent storage for text values by key.
///
/// This trait mirrors the browser's local storage. Implementations only need
/// to store opaque strings; the history takes care of serialization.
pub trait HistoryStore {
    /// Load the value for the key, returning `None` if there is none.
    fn load(&self, key: &str) -> std::io::Result<Option<String>>;

    /// Save the value for the key.
    fn save(&mut self, key: &str, value: &str) -> std::io::Result<()>;

    /// Remove the value for the key.
    fn clear(&mut self, key: &str) -> std::io::Result<()>;
}

/// A store keeping values in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new, empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> std::io::Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// ====================================================================================================================

#[derive(Clone, Debug)]
struct OptionData {
    key: String,
    limit: usize,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            key: "chromacount_history".to_string(),
            limit: 5,
        }
    }
}

/// A builder of history options.
#[derive(Debug)]
pub struct HistoryOptionBuilder(OptionData);

impl HistoryOptionBuilder {
    /// Set the storage key.
    pub fn key(&mut self, key: impl Into<String>) -> &mut Self {
        self.0.key = key.into();
        self
    }

    /// Set the maximum number of records.
    ///
    /// A history holds at least one record. Hence this method treats zero as
    /// one.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        self.0.limit = limit.max(1);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> HistoryOptions {
        HistoryOptions(self.0.clone())
    }
}

/// The options for a history.
#[derive(Clone, Debug)]
pub struct HistoryOptions(OptionData);

impl Default for HistoryOptions {
    fn default() -> Self {
        Self(OptionData::new())
    }
}

impl HistoryOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> HistoryOptionBuilder {
        HistoryOptionBuilder(OptionData::new())
    }

    /// Create the default options but with the limit taken from the
    /// `CHROMACOUNT_HISTORY_LIMIT` environment variable.
    ///
    /// If the variable is undefined or not a positive number, this method
    /// uses the default limit.
    pub fn from_environment() -> Self {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env(env: &impl Environment) -> Self {
        let mut builder = Self::builder();
        if let Some(limit) = env
            .read_number::<usize>(LIMIT_VARIABLE)
            .filter(|limit| 0 < *limit)
        {
            builder.limit(limit);
        }
        builder.build()
    }

    /// Get the storage key.
    pub fn key(&self) -> &str {
        &self.0.key
    }

    /// Get the maximum number of records.
    pub fn limit(&self) -> usize {
        self.0.limit
    }
}

// ====================================================================================================================

/// A bounded, newest-first history of palette records.
#[derive(Debug)]
pub struct History<S> {
    store: S,
    options: HistoryOptions,
}

impl<S: HistoryStore> History<S> {
    /// Create a new history backed by the store.
    pub fn new(store: S, options: HistoryOptions) -> Self {
        Self { store, options }
    }

    /// Get the options.
    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the records, newest first.
    ///
    /// If the store has no history or the history cannot be loaded, this
    /// method returns an empty list.
    pub fn records(&self) -> Vec<PaletteRecord> {
        let key = self.options.key();
        let text = match self.store.load(key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(key, %error, "could not load palette history");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|error| {
            tracing::warn!(key, %error, "could not parse palette history");
            Vec::new()
        })
    }

    /// Add the record as the newest one, dropping the oldest records beyond
    /// the limit.
    pub fn push(&mut self, record: PaletteRecord) {
        let mut records = self.records();
        records.insert(0, record);
        records.truncate(self.options.limit());

        let key = self.options.key();
        let text = match serde_json::to_string(&records) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(key, %error, "could not serialize palette history");
                return;
            }
        };

        match self.store.save(key, &text) {
            Ok(()) => tracing::debug!(key, records = records.len(), "saved palette history"),
            Err(error) => tracing::warn!(key, %error, "could not save palette history"),
        }
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        let key = self.options.key();
        if let Err(error) = self.store.clear(key) {
            tracing::warn!(key, %error, "could not clear palette history");
        }
    }
}

/// Analyze the image and record the result in the history.
///
/// The image URL may be a data URL, whose prefix is removed before passing the
/// image data to the analyzer. The record keeps the URL as is.
pub fn analyze_and_record<A, S>(
    analyzer: &A,
    history: &mut History<S>,
    image_url: &str,
) -> Result<PaletteRecord, AnalysisError>
where
    A: Analyzer + ?Sized,
    S: HistoryStore,
{
    let analysis = analyzer.analyze(strip_data_url(image_url))?;
    let record = PaletteRecord::new(analysis, image_url);
    history.push(record.clone());
    Ok(record)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        analyze_and_record, History, HistoryOptions, HistoryStore, MemoryStore, PaletteRecord,
        LIMIT_VARIABLE,
    };
    use crate::analysis::{Analysis, Analyzer};
    use crate::error::{AnalysisError, AnalysisErrorKind};
    use crate::util::FakeEnv;
    use crate::{Palette, Rgb};
    use std::cell::RefCell;

    fn record(color: Rgb) -> PaletteRecord {
        PaletteRecord::new(
            Analysis {
                palette: Palette::new(vec![color]),
                mood_tags: vec!["Calm".to_string()],
            },
            "data:image/png;base64,iVBOR",
        )
    }

    struct BrokenStore;

    impl HistoryStore for BrokenStore {
        fn load(&self, _key: &str) -> std::io::Result<Option<String>> {
            Err(std::io::Error::other("quota exceeded"))
        }

        fn save(&mut self, _key: &str, _value: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("quota exceeded"))
        }

        fn clear(&mut self, _key: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("quota exceeded"))
        }
    }

    struct FixedAnalyzer {
        seen: RefCell<Vec<String>>,
        answer: &'static str,
    }

    impl Analyzer for FixedAnalyzer {
        fn analyze(&self, image_data: &str) -> Result<Analysis, AnalysisError> {
            self.seen.borrow_mut().push(image_data.to_string());
            Analysis::from_model_text(self.answer)
        }
    }

    #[test]
    fn test_record() -> Result<(), serde_json::Error> {
        let first = record(Rgb::BLACK);
        let second = record(Rgb::BLACK);
        assert_ne!(first.id, second.id, "ids should be unique");
        assert!(0 < first.timestamp, "timestamp should be set");

        let value = serde_json::to_value(&first)?;
        assert_eq!(value["colors"][0], "#000000");
        assert_eq!(value["moodTags"][0], "Calm");
        assert_eq!(value["imageUrl"], "data:image/png;base64,iVBOR");
        assert!(value["timestamp"].is_u64(), "timestamp should be a number");

        let copy: PaletteRecord = serde_json::from_value(value)?;
        assert_eq!(copy, first);
        Ok(())
    }

    #[test]
    fn test_push_and_limit() {
        let mut history = History::new(MemoryStore::new(), HistoryOptions::default());
        assert!(history.records().is_empty(), "new history should be empty");

        let colors: Vec<Rgb> = (0..7).map(|n| Rgb::new(n, n, n)).collect();
        for color in &colors {
            history.push(record(*color));
        }

        let records = history.records();
        assert_eq!(records.len(), 5);
        let newest: Vec<Rgb> = records.iter().map(|r| r.colors.colors()[0]).collect();
        assert_eq!(
            newest,
            colors.iter().rev().take(5).copied().collect::<Vec<_>>()
        );

        history.clear();
        assert!(history.records().is_empty(), "cleared history should be empty");
    }

    #[test]
    fn test_corrupt_and_broken_storage() {
        let mut store = MemoryStore::new();
        let options = HistoryOptions::default();
        assert!(
            store.save(options.key(), "{not json").is_ok(),
            "memory store accepts anything"
        );
        let mut history = History::new(store, options);
        assert!(history.records().is_empty(), "corrupt history should be empty");

        // Pushing replaces the corrupt data.
        history.push(record(Rgb::WHITE));
        assert_eq!(history.records().len(), 1);

        let mut history = History::new(BrokenStore, HistoryOptions::default());
        history.push(record(Rgb::WHITE));
        history.clear();
        assert!(history.records().is_empty(), "broken store has no records");
    }

    #[test]
    fn test_options() {
        let options = HistoryOptions::builder().key("recent").limit(0).build();
        assert_eq!(options.key(), "recent");
        assert_eq!(options.limit(), 1);

        let mut env = FakeEnv::new();
        assert_eq!(HistoryOptions::from_env(&env).limit(), 5);
        env.set(LIMIT_VARIABLE, "12");
        assert_eq!(HistoryOptions::from_env(&env).limit(), 12);
        env.set(LIMIT_VARIABLE, "0");
        assert_eq!(HistoryOptions::from_env(&env).limit(), 5);
        env.set(LIMIT_VARIABLE, "many");
        assert_eq!(HistoryOptions::from_env(&env).limit(), 5);
    }

    #[test]
    fn test_analyze_and_record() -> Result<(), AnalysisError> {
        let analyzer = FixedAnalyzer {
            seen: RefCell::new(Vec::new()),
            answer: r##"{"colors": ["#1E3A8A", "#FDE047"], "moodTags": ["Serene"]}"##,
        };
        let mut history = History::new(MemoryStore::new(), HistoryOptions::default());

        let record = analyze_and_record(&analyzer, &mut history, "data:image/webp;base64,UklG")?;
        assert_eq!(*analyzer.seen.borrow(), vec!["UklG".to_string()]);
        assert_eq!(record.image_url, "data:image/webp;base64,UklG");
        assert_eq!(record.colors.len(), 2);
        assert_eq!(history.records(), vec![record]);

        let failing = FixedAnalyzer {
            seen: RefCell::new(Vec::new()),
            answer: r#"{"colors": ["blue"]}"#,
        };
        let result = analyze_and_record(&failing, &mut history, "iVBOR");
        assert!(
            matches!(result, Err(ref e) if e.kind() == AnalysisErrorKind::InvalidColor(0)),
            "invalid color should fail"
        );
        assert_eq!(history.records().len(), 1, "failed analysis is not recorded");
        Ok(())
    }
}
