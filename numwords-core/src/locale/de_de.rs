//! German grammar rules
//!
//! The unit 1 has three forms selected by position: standalone "eins"
//! (21 is "einundzwanzig" but 1 is "eins"), attributive "ein"
//! ("einhundert", "eintausend"), and feminine "eine" before "Million".
//! Groups below the millions attach without spaces.

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "null";
const ONES: [&str; 10] = [
    "", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];
const ONE_STANDALONE: &str = "eins";
const ONE_ATTRIBUTIVE: &str = "ein";
const ONE_FEMININE: &str = "eine";
const TEENS: [&str; 10] = [
    "zehn",
    "elf",
    "zwölf",
    "dreizehn",
    "vierzehn",
    "fünfzehn",
    "sechzehn",
    "siebzehn",
    "achtzehn",
    "neunzehn",
];
const TENS: [&str; 10] = [
    "",
    "",
    "zwanzig",
    "dreißig",
    "vierzig",
    "fünfzig",
    "sechzig",
    "siebzig",
    "achtzig",
    "neunzig",
];
const HUNDRED: &str = "hundert";
const THOUSAND: &str = "tausend";
const MILLION: (&str, &str) = ("Million", "Millionen");
const TENS_DELIMITER: &str = "und";

pub(crate) struct DeDeRules;

impl DeDeRules {
    /// Form of the unit 1, selected by group position and role.
    fn unit_word(
        digit: usize,
        ctx: GroupContext,
        tens_digit: usize,
        under_ten: bool,
        standalone: bool,
    ) -> &'static str {
        if digit == 1 {
            if ctx.index == 0 && standalone && tens_digit == 0 {
                ONE_STANDALONE
            } else if ctx.index >= 2 && standalone && under_ten {
                ONE_FEMININE
            } else {
                ONE_ATTRIBUTIVE
            }
        } else {
            ONES[digit]
        }
    }
}

impl GrammarRules for DeDeRules {
    fn locale(&self) -> Locale {
        Locale::DeDe
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let radix = if ctx.index == 1 {
            THOUSAND.to_string()
        } else if ctx.index >= 2 {
            if trio.value() == 1 {
                MILLION.0.to_string()
            } else {
                MILLION.1.to_string()
            }
        } else {
            String::new()
        };

        let hundred = if h > 0 {
            format!(
                "{}{HUNDRED}",
                Self::unit_word(h, ctx, t, trio.under_ten(), false)
            )
        } else {
            String::new()
        };

        let ten = if trio.is_teens() {
            TEENS[o].to_string()
        } else if t >= 2 {
            if o > 0 {
                format!(
                    "{}{TENS_DELIMITER}{}",
                    Self::unit_word(o, ctx, t, trio.under_ten(), false),
                    TENS[t]
                )
            } else {
                TENS[t].to_string()
            }
        } else {
            String::new()
        };

        let mut single = if t == 0 {
            Self::unit_word(o, ctx, t, trio.under_ten(), true).to_string()
        } else {
            String::new()
        };

        // Millions and above are separated from the magnitude word.
        if ctx.index >= 2 {
            single.push(' ');
        }

        let mut result = format!("{hundred}{ten}{single}{radix}");
        if ctx.index > 1 && ctx.lower_rendered {
            result.push(' ');
        }
        result
    }
}
