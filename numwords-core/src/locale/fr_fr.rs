//! French grammar rules
//!
//! French hyphenates tens-ones composition and inserts "-et-" before a
//! final 1 ("vingt-et-un", "cent-et-un"). The multiplier is dropped for
//! "cent" and "mille" with a unit of 1, and "million" takes a plural "s"
//! when the group value exceeds one.

use super::{join_spaced, GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "zéro";
const ONES: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
    "quatre-vingt-dix",
];
const HUNDRED: &str = "cent";
const THOUSAND: &str = "mille";
const MILLION: &str = "million";
const TENS_DELIMITER: &str = "-";
const UNIT_DELIMITER: &str = "-et-";

pub(crate) struct FrFrRules;

impl GrammarRules for FrFrRules {
    fn locale(&self) -> Locale {
        Locale::FrFr
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        // Thousand elision: bare "mille", never "un mille".
        if ctx.index == 1 && trio.value() == 1 {
            return THOUSAND.to_string();
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let mut parts: Vec<String> = Vec::new();

        if h == 1 && t == 0 && o == 1 {
            // "cent-et-un", fused like the tens-unit case.
            parts.push(format!("{HUNDRED}{UNIT_DELIMITER}{}", ONES[1]));
        } else {
            if h == 1 {
                parts.push(HUNDRED.to_string());
            } else if h >= 2 {
                parts.push(format!("{} {HUNDRED}", ONES[h]));
            }

            if trio.is_teens() {
                parts.push(TEENS[o].to_string());
            } else if t >= 2 {
                if o == 1 {
                    parts.push(format!("{}{UNIT_DELIMITER}{}", TENS[t], ONES[o]));
                } else if o > 1 {
                    parts.push(format!("{}{TENS_DELIMITER}{}", TENS[t], ONES[o]));
                } else {
                    parts.push(TENS[t].to_string());
                }
            } else if o > 0 {
                parts.push(ONES[o].to_string());
            }
        }

        match ctx.index {
            1 => parts.push(THOUSAND.to_string()),
            2 => {
                if trio.value() > 1 {
                    parts.push(format!("{MILLION}s"));
                } else {
                    parts.push(MILLION.to_string());
                }
            }
            _ => {}
        }

        parts.join(" ")
    }

    fn join_groups(&self, groups: &[String]) -> String {
        join_spaced(groups)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::FrFr).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "zéro");
        assert_eq!(words(16), "seize");
        assert_eq!(words(17), "dix-sept");
        assert_eq!(words(80), "quatre-vingt");
        assert_eq!(words(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn final_one_takes_et() {
        assert_eq!(words(21), "vingt-et-un");
        assert_eq!(words(71), "soixante-dix-et-un");
        assert_eq!(words(101), "cent-et-un");
    }

    #[test]
    fn hundred_drops_the_unit_multiplier() {
        assert_eq!(words(100), "cent");
        assert_eq!(words(200), "deux cent");
        assert_eq!(words(345), "trois cent quarante-cinq");
    }

    #[test]
    fn thousand_elision() {
        assert_eq!(words(1000), "mille");
        assert_eq!(words(1001), "mille un");
        assert_eq!(words(1234), "mille deux cent trente-quatre");
        assert_eq!(words(2345), "deux mille trois cent quarante-cinq");
    }

    #[test]
    fn millions_take_plural_s() {
        assert_eq!(words(1_000_000), "un million");
        assert_eq!(words(2_000_000), "deux millions");
        assert_eq!(words(100_000_000), "cent millions");
        assert_eq!(words(1_000_001), "un million un");
    }
}
