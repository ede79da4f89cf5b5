//! Locale grammar engines for number-to-words conversion
//!
//! This crate converts non-negative integers into their natural-language
//! word representation (1234 → "one thousand two hundred and thirty-four")
//! across twelve locales. It is built from two layers:
//!
//! - **Tokenizer**: a shared, locale-independent split of the input number
//!   into fixed-width digit groups, least-significant group first.
//! - **Locale grammar rules**: one rule set per locale that renders each
//!   digit group ("trio") into words and joins the groups with
//!   locale-specific connectors, spacing, and grammatical agreement.
//!
//! # Example
//!
//! ```rust
//! use numwords_core::{GrammarEngine, Locale};
//!
//! let engine = GrammarEngine::new(Locale::EnUs);
//! let words = engine.to_words(1234u32).unwrap();
//! assert_eq!(words, "one thousand two hundred and thirty-four");
//!
//! let engine = GrammarEngine::from_code("ru_RU").unwrap();
//! assert_eq!(engine.to_words(1000u32).unwrap(), "одна тысяча");
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod locale;
pub mod number;
pub mod tokenizer;
pub mod trio;

pub use engine::GrammarEngine;
pub use error::{Error, Result};
pub use locale::{GrammarRules, Locale};
pub use number::Number;
pub use tokenizer::{tokenize, DEFAULT_GROUP_WIDTH, RADIX};
pub use trio::{GroupContext, Trio};
