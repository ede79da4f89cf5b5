//! The locale grammar engine
//!
//! Orchestrates a full conversion: tokenize, check the locale's digit
//! capacity, handle zero, render every digit group most-significant first,
//! and join the groups with the locale's rules.

use crate::error::{Error, Result};
use crate::locale::{rules_for, GrammarRules, Locale};
use crate::number::Number;
use crate::tokenizer::tokenize;
use crate::trio::{GroupContext, Trio};

/// A number-to-words engine bound to one locale
///
/// Stateless apart from its rule set and static dictionary; one instance
/// can be constructed once and reused for any number of conversions,
/// including concurrently.
pub struct GrammarEngine {
    rules: Box<dyn GrammarRules>,
}

impl GrammarEngine {
    /// Create an engine for a known locale
    pub fn new(locale: Locale) -> Self {
        GrammarEngine {
            rules: rules_for(locale),
        }
    }

    /// Create an engine from a locale identifier string
    ///
    /// Fails with [`Error::UnknownLocale`] before any conversion is
    /// attempted.
    pub fn from_code(code: &str) -> Result<Self> {
        Ok(Self::new(Locale::from_code(code)?))
    }

    /// The engine's locale
    pub fn locale(&self) -> Locale {
        self.rules.locale()
    }

    /// Digits per token group
    pub fn group_width(&self) -> u32 {
        self.rules.group_width()
    }

    /// Maximum digit capacity of the locale
    pub fn max_digits(&self) -> usize {
        self.rules.max_digits()
    }

    /// Convert a non-negative integer into its word representation
    ///
    /// Fails with [`Error::NotAnInteger`] for non-integral input and with
    /// [`Error::CapacityExceeded`] when the number needs more digit groups
    /// than the locale supports. Both are raised before any rendering.
    pub fn to_words(&self, number: impl Into<Number>) -> Result<String> {
        let width = self.rules.group_width();
        let tokens = tokenize(number.into(), width)?;

        let digits = tokens.len() * width as usize;
        let max = self.rules.max_digits();
        if digits > max {
            return Err(Error::CapacityExceeded {
                locale: self.rules.locale(),
                digits,
                max,
            });
        }

        if tokens == [0] {
            return Ok(self.rules.zero_word().to_string());
        }

        tracing::trace!(
            locale = %self.rules.locale(),
            groups = tokens.len(),
            "rendering number"
        );

        let count = tokens.len();
        let mut groups: Vec<String> = Vec::with_capacity(count);
        for (index, &token) in tokens.iter().enumerate() {
            let ctx = GroupContext {
                index,
                count,
                lower_rendered: groups.iter().any(|group| !group.is_empty()),
            };
            // Most-significant group first in the output order.
            groups.insert(0, self.rules.render_group(Trio::from_group(token), ctx));
        }

        Ok(self.rules.join_groups(&groups))
    }
}
