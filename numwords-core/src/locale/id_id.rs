//! Indonesian grammar rules
//!
//! The unit 1 contracts to the prefix "se-" before a magnitude word:
//! "seratus" (100), "sepuluh" (10), "seribu" (1000). The "seribu"
//! contraction applies only when the thousand group itself is 1 and is
//! the leading group, otherwise "satu ribu" composition is used
//! ("satu juta satu ribu ...").

use super::{join_spaced, GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "nol";
const ONES: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];
const TEENS: [&str; 10] = [
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];
const TENS: [&str; 10] = [
    "",
    "",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "delapan puluh",
    "sembilan puluh",
];
const HUNDRED: &str = "ratus";
const HUNDRED_CONTRACTED: &str = "seratus";
const THOUSAND: &str = "ribu";
const THOUSAND_CONTRACTED: &str = "seribu";
const MILLION: &str = "juta";

pub(crate) struct IdIdRules;

impl GrammarRules for IdIdRules {
    fn locale(&self) -> Locale {
        Locale::IdId
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        // "seribu" only for a leading thousand group of exactly 1.
        if ctx.index == 1 && ctx.is_top() && trio.value() == 1 {
            return THOUSAND_CONTRACTED.to_string();
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let mut parts: Vec<String> = Vec::new();

        if h == 1 {
            parts.push(HUNDRED_CONTRACTED.to_string());
        } else if h >= 2 {
            parts.push(format!("{} {HUNDRED}", ONES[h]));
        }

        if trio.is_teens() {
            parts.push(TEENS[o].to_string());
        } else if t >= 2 {
            if o > 0 {
                parts.push(format!("{} {}", TENS[t], ONES[o]));
            } else {
                parts.push(TENS[t].to_string());
            }
        } else if o > 0 {
            parts.push(ONES[o].to_string());
        }

        match ctx.index {
            1 => parts.push(THOUSAND.to_string()),
            2 => parts.push(MILLION.to_string()),
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
        GrammarEngine::new(Locale::IdId).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "nol");
        assert_eq!(words(10), "sepuluh");
        assert_eq!(words(11), "sebelas");
        assert_eq!(words(21), "dua puluh satu");
    }

    #[test]
    fn hundreds_contract_the_unit() {
        assert_eq!(words(100), "seratus");
        assert_eq!(words(200), "dua ratus");
        assert_eq!(words(345), "tiga ratus empat puluh lima");
    }

    #[test]
    fn leading_thousand_contracts_to_seribu() {
        assert_eq!(words(1000), "seribu");
        assert_eq!(words(1500), "seribu lima ratus");
        assert_eq!(words(2000), "dua ribu");
        assert_eq!(words(10_000), "sepuluh ribu");
    }

    #[test]
    fn non_leading_thousand_group_stays_satu() {
        assert_eq!(words(1_001_000), "satu juta satu ribu");
        assert_eq!(words(101_000), "seratus satu ribu");
    }

    #[test]
    fn millions() {
        assert_eq!(words(1_000_000), "satu juta");
        assert_eq!(words(2_500_000), "dua juta lima ratus ribu");
    }
}
