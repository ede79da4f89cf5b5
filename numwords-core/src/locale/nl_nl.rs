//! Dutch grammar rules
//!
//! The unit precedes the tens word joined by "en" ("drieentwintig",
//! written without the diaeresis). "duizend" glues directly onto its
//! multiplier ("tweeduizend") and drops a multiplier of exactly 1, while
//! "miljoen" is a separate word. Thousand groups are only space-separated
//! when a millions group precedes them.

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "nul";
const ONES: [&str; 10] = [
    "", "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen",
];
const TEENS: [&str; 10] = [
    "tien",
    "elf",
    "twaalf",
    "dertien",
    "veertien",
    "vijftien",
    "zestien",
    "zeventien",
    "achttien",
    "negentien",
];
const TENS: [&str; 10] = [
    "",
    "",
    "twintig",
    "dertig",
    "veertig",
    "vijftig",
    "zestig",
    "zeventig",
    "tachtig",
    "negentig",
];
const HUNDRED: &str = "honderd";
const THOUSAND: &str = "duizend";
const MILLION: &str = "miljoen";
const TENS_DELIMITER: &str = "en";

pub(crate) struct NlNlRules;

impl GrammarRules for NlNlRules {
    fn locale(&self) -> Locale {
        Locale::NlNl
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

        let mut result = if ctx.index == 1 && trio.value() == 1 {
            // "duizend", never "eenduizend".
            THOUSAND.to_string()
        } else {
            let mut hundred = if h == 1 {
                HUNDRED.to_string()
            } else if h >= 2 {
                format!("{}{HUNDRED}", ONES[h])
            } else {
                String::new()
            };
            if h > 0 && (t > 0 || o > 0) {
                hundred.push(' ');
            }

            let ten = if trio.is_teens() {
                TEENS[o].to_string()
            } else if t >= 2 {
                if o > 0 {
                    format!("{}{TENS_DELIMITER}{}", ONES[o], TENS[t])
                } else {
                    TENS[t].to_string()
                }
            } else {
                String::new()
            };

            let single = if t == 0 { ONES[o] } else { "" };

            let radix = match ctx.index {
                1 => THOUSAND.to_string(),
                2 => format!(" {MILLION}"),
                _ => String::new(),
            };

            format!("{hundred}{ten}{single}{radix}")
        };

        // Below the top group, units always detach, thousands only when a
        // millions group precedes them.
        if !ctx.is_top() && (ctx.index == 0 || (ctx.index == 1 && ctx.count > 2)) {
            result.insert(0, ' ');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::NlNl).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "nul");
        assert_eq!(words(12), "twaalf");
        assert_eq!(words(40), "veertig");
    }

    #[test]
    fn unit_precedes_the_tens_word() {
        assert_eq!(words(21), "eenentwintig");
        assert_eq!(words(23), "drieentwintig");
        assert_eq!(words(99), "negenennegentig");
    }

    #[test]
    fn hundreds_drop_the_unit_multiplier() {
        assert_eq!(words(100), "honderd");
        assert_eq!(words(101), "honderd een");
        assert_eq!(words(234), "tweehonderd vierendertig");
    }

    #[test]
    fn thousand_glues_onto_its_multiplier() {
        assert_eq!(words(1000), "duizend");
        assert_eq!(words(2000), "tweeduizend");
        assert_eq!(words(1234), "duizend tweehonderd vierendertig");
        assert_eq!(words(45_000), "vijfenveertigduizend");
    }

    #[test]
    fn millions_are_separate_words() {
        assert_eq!(words(1_000_000), "een miljoen");
        assert_eq!(
            words(2_345_678),
            "twee miljoen driehonderd vijfenveertigduizend zeshonderd achtenzeventig"
        );
    }
}
