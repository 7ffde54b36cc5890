//! Error types for retention decisions

use thiserror::Error;

/// Errors produced while building a policy or reading timestamps.
///
/// All of these are deterministic input problems. None is retried and none
/// yields a partial result.
#[derive(Debug, Error)]
pub enum FilterError {
    /// At least one daily generation is required.
    #[error("at least 1 daily backup is required")]
    NoDailyRetention,

    /// A hand-built policy has no tiers.
    #[error("retention policy has no tiers")]
    EmptyPolicy,

    /// A tier spans zero days.
    #[error("retention tier {index} has a period of 0 days")]
    ZeroPeriod { index: usize },

    /// A tier asks for more generations than the calendar walk allows.
    #[error("retention tier {index} asks for {count} generations, at most {max} are allowed")]
    TooManyGenerations { index: usize, count: u32, max: u32 },

    /// An input line does not match the configured layout.
    #[error("line {position} ({line:?}) does not match layout {layout:?}: {source}")]
    Parse {
        line: String,
        position: usize,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type for retention operations
pub type Result<T> = std::result::Result<T, FilterError>;
