use std::fmt;
use thiserror::Error;

/// Inline text shown whenever the price feed cannot be read.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch currency data from API";

/// Core error types for tokswap
#[derive(Debug, Error)]
pub enum Error {
    /// Bad user input (amount or currency pair)
    #[error("Validation error: {reason}")]
    Validation { reason: ValidationReason },

    /// Requested currency is absent from the current price table
    #[error("Lookup error: no price for {currency}")]
    Lookup { currency: String },

    /// Price feed unavailable or unreadable
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration could not be resolved
    #[error("Config error: {0}")]
    Config(String),
}

/// Why a conversion request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    NonPositiveAmount,
    InvalidAmount,
    SameCurrency,
    NonPositivePrice,
    OutOfRange,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonPositiveAmount => "non-positive amount",
            Self::InvalidAmount => "invalid amount",
            Self::SameCurrency => "same currency",
            Self::NonPositivePrice => "non-positive price",
            Self::OutOfRange => "result out of range",
        })
    }
}

/// Price feed failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(u16),

    #[error("feed payload could not be decoded: {0}")]
    Decode(String),

    #[error("feed contained no usable prices")]
    Empty,
}

impl Error {
    pub fn validation(reason: ValidationReason) -> Self {
        Self::Validation { reason }
    }

    pub fn lookup(currency: impl Into<String>) -> Self {
        Self::Lookup {
            currency: currency.into(),
        }
    }

    /// Short text for inline display next to the control that caused it.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation {
                reason: ValidationReason::NonPositiveAmount,
            } => "Amount should be greater than 0".to_string(),
            Self::Validation {
                reason: ValidationReason::InvalidAmount,
            } => "Please enter amount".to_string(),
            Self::Validation {
                reason: ValidationReason::SameCurrency,
            } => "Both currencies are the same".to_string(),
            Self::Validation {
                reason: ValidationReason::NonPositivePrice,
            } => "Price data is invalid".to_string(),
            Self::Validation {
                reason: ValidationReason::OutOfRange,
            } => "Amount is too large to convert".to_string(),
            Self::Lookup { currency } => format!("No price available for {currency}"),
            Self::Fetch(_) => FETCH_FAILED_MESSAGE.to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Serialization(e) => format!("Malformed data: {e}"),
            Self::Config(msg) => format!("Configuration problem: {msg}"),
        }
    }

    /// Whether the error came from bad input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Lookup { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
