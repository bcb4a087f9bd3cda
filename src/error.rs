//! Error types for the slide deck.
use thiserror::Error;

/// Errors raised while loading the deck or preparing a chart.
///
/// Navigation itself never fails: redundant or out-of-range requests are
/// dropped without an error.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Deck config could not be parsed
    #[error("Failed to parse deck config: {0}")]
    Config(#[from] serde_json::Error),

    /// Deck config contains no slides
    #[error("Deck has no slides")]
    EmptyDeck,

    /// Radar chart with fewer than three axes
    #[error("Radar chart needs at least 3 axes (found: {0})")]
    TooFewAxes(usize),

    /// Labels and values are paired positionally
    #[error("Radar chart has {labels} labels but {values} values")]
    AxisMismatch { labels: usize, values: usize },

    /// Radar values are fractions of the full radius
    #[error("Radar value {value} on axis {axis} is outside [0, 1]")]
    ValueOutOfRange { axis: usize, value: f64 },

    /// A browser capability the feature depends on is unavailable
    #[error("Browser capability unavailable: {0}")]
    Dom(String),
}

/// Type alias for Results using DeckError
pub type Result<T> = std::result::Result<T, DeckError>;
