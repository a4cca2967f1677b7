//! Configuration for path-level reading/writing and for the PARF encoding.

use std::fmt;
use std::sync::Arc;

use crate::observability::{ArffObserver, Severity};
use crate::validation::ValidationOptions;

/// Default number of data cells per PARF physical line.
pub const DEFAULT_PARF_CHUNK_SIZE: usize = 500;

/// Supported on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArffFormat {
    /// Plain ARFF: one line per row.
    Arff,
    /// Row-chunked ARFF: wide rows are split across lines ending in a `&` cell.
    Parf,
}

impl ArffFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "arff" => Some(Self::Arff),
            "parf" => Some(Self::Parf),
            _ => None,
        }
    }
}

/// Options for the PARF encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParfOptions {
    /// Maximum data cells per physical line, not counting the `&` marker. Values below 1 are
    /// treated as 1.
    pub chunk_size: usize,
}

impl Default for ParfOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_PARF_CHUNK_SIZE,
        }
    }
}

/// Options controlling path-level reading and writing.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ArffOptions {
    /// If `None`, choose the format from the file extension.
    pub format: Option<ArffFormat>,
    /// Validation applied after parsing and before writing.
    pub validation: ValidationOptions,
    /// PARF chunking.
    pub parf: ParfOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ArffObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for ArffOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArffOptions")
            .field("format", &self.format)
            .field("validation", &self.validation)
            .field("parf", &self.parf)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ArffOptions {
    fn default() -> Self {
        Self {
            format: None,
            validation: ValidationOptions::default(),
            parf: ParfOptions::default(),
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}
