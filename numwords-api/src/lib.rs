//! Public API for numwords number-to-words conversion
//!
//! This crate provides a stable interface over the conversion engine that
//! hides internal implementation details.
//!
//! # Examples
//!
//! ```
//! use numwords_api::NumberSpeller;
//!
//! let speller = NumberSpeller::new();
//! assert_eq!(speller.to_words(42u32).unwrap(), "forty-two");
//!
//! let speller = NumberSpeller::with_locale("cs_CZ").unwrap();
//! assert_eq!(speller.to_words(100u32).unwrap(), "sto");
//! ```

#![warn(missing_docs)]

use numwords_core::GrammarEngine;

// Re-export key types
pub use numwords_core::{Error, Locale, Number, Result};

/// Main entry point for number-to-words conversion
///
/// A speller is bound to one locale at construction and can be reused for
/// any number of conversions, including across threads.
pub struct NumberSpeller {
    engine: GrammarEngine,
}

impl NumberSpeller {
    /// Create a speller for the default locale (American English)
    pub fn new() -> Self {
        Self::for_locale(Locale::default())
    }

    /// Create a speller for a known locale
    pub fn for_locale(locale: Locale) -> Self {
        NumberSpeller {
            engine: GrammarEngine::new(locale),
        }
    }

    /// Create a speller from a locale identifier string
    ///
    /// Identifiers are matched case-insensitively and accept `-` in place
    /// of `_` ("pt-BR", "ru"). Unknown identifiers fail with
    /// [`Error::UnknownLocale`] here, never later during conversion.
    pub fn with_locale(code: &str) -> Result<Self> {
        Ok(Self::for_locale(Locale::from_code(code)?))
    }

    /// Convert a non-negative integer into its word representation
    ///
    /// Accepts anything convertible into [`Number`], including `f64`
    /// values that carry an integral number. Fails with
    /// [`Error::NotAnInteger`] for fractional input and with
    /// [`Error::CapacityExceeded`] past the locale's digit capacity.
    pub fn to_words(&self, number: impl Into<Number>) -> Result<String> {
        self.engine.to_words(number)
    }

    /// The speller's locale
    pub fn locale(&self) -> Locale {
        self.engine.locale()
    }

    /// Digits per token group for this locale
    pub fn group_width(&self) -> u32 {
        self.engine.group_width()
    }

    /// Maximum digit capacity of this locale
    pub fn max_digits(&self) -> usize {
        self.engine.max_digits()
    }
}

impl Default for NumberSpeller {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot conversion for a locale identifier string
///
/// Convenience wrapper that builds a throwaway [`NumberSpeller`]; prefer
/// constructing a speller once when converting repeatedly.
pub fn to_words(number: impl Into<Number>, locale_code: &str) -> Result<String> {
    NumberSpeller::with_locale(locale_code)?.to_words(number)
}
