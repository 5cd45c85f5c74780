//! Error types for suimon.

use thiserror::Error;

use crate::{DataCategory, KindCode, PlanBounds, Strategy};

/// Result type alias for suimon operations.
pub type Result<T> = std::result::Result<T, SuimonError>;

/// Errors that reject a download before any request is sent.
#[derive(Error, Debug)]
pub enum SuimonError {
    /// Malformed user input.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The category/kind pair has no download strategy.
    #[error("Unsupported data kind: {category} kind {kind}")]
    Unsupported {
        /// The requested data category.
        category: DataCategory,
        /// The requested kind code.
        kind: KindCode,
    },

    /// The portal does not hold data for every year of the requested range.
    #[error("Invalid data range: {start}-{end} is not fully available")]
    RangeUnavailable {
        /// First requested year.
        start: i32,
        /// Last requested year.
        end: i32,
    },

    /// Bounds were parsed for a different axis than the strategy walks.
    #[error("Bounds {bounds} do not fit a {strategy} plan")]
    AxisMismatch {
        /// The strategy being planned.
        strategy: Strategy,
        /// The bounds supplied.
        bounds: PlanBounds,
    },
}

/// Errors for malformed user-entered values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input contains characters other than digits (and `/` for months).
    #[error("Invalid input: {0:?}")]
    InvalidCharacters(String),

    /// Input does not have the `YYYY/MM` shape.
    #[error("Invalid date format: {0:?} (expected YYYY/MM)")]
    InvalidFormat(String),

    /// Month outside 1..=12.
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// Start is after end.
    #[error("Invalid range: {start} > {end}")]
    InvalidRange {
        /// The start value as entered.
        start: String,
        /// The end value as entered.
        end: String,
    },

    /// Unknown data category name.
    #[error("Unknown data category: {0}")]
    UnknownCategory(String),

    /// Kind code is not a positive integer.
    #[error("Invalid kind code: {0:?}")]
    InvalidKind(String),
}
