//! Error types for number-to-words conversion

use crate::locale::Locale;
use thiserror::Error;

/// Errors produced by tokenization, locale lookup, and rendering
///
/// Every variant is a hard stop for the requested operation: nothing is
/// retried or masked, and no partial output is ever returned alongside an
/// error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input value is not a finite non-negative integer
    #[error("`{0}` is not a finite non-negative integer")]
    NotAnInteger(f64),

    /// The number needs more digit groups than the locale supports
    #[error("{digits} digits exceed the {max}-digit capacity of locale {locale}")]
    CapacityExceeded {
        /// Locale whose capacity was exceeded
        locale: Locale,
        /// Digit capacity required by the input
        digits: usize,
        /// Maximum digit count the locale supports
        max: usize,
    },

    /// The requested locale identifier has no registered grammar rules
    #[error("locale `{0}` is not registered")]
    UnknownLocale(String),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
