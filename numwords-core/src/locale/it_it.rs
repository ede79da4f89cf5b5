//! Italian grammar rules
//!
//! Italian elides vowels at fusion points: tens drop the final vowel
//! before 1 and 8 ("ventuno", "ottantotto"), and the multiplier 1 vanishes
//! before "cento" and "mille". Magnitude words inflect ("mille"/"mila",
//! "milione"/"milioni") and groups attach without spaces below the
//! millions, with " e " linking a million group to what follows.

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "zero";
const ONES: [&str; 10] = [
    "", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove",
];
const ONE_BEFORE_MILLION: &str = "un";
const TEENS: [&str; 10] = [
    "dieci",
    "undici",
    "dodici",
    "tredici",
    "quattordici",
    "quindici",
    "sedici",
    "diciassette",
    "diciotto",
    "diciannove",
];
/// Full and vowel-elided forms of each tens word.
const TENS: [(&str, &str); 10] = [
    ("", ""),
    ("", ""),
    ("venti", "vent"),
    ("trenta", "trent"),
    ("quaranta", "quarant"),
    ("cinquanta", "cinquant"),
    ("sessanta", "sessant"),
    ("settanta", "settant"),
    ("ottanta", "ottant"),
    ("novanta", "novant"),
];
const HUNDRED: &str = "cento";
const THOUSAND: (&str, &str) = ("mille", "mila");
const MILLION: (&str, &str) = ("milione", "milioni");
const GROUP_CONJUNCTION: &str = " e ";

pub(crate) struct ItItRules;

impl GrammarRules for ItItRules {
    fn locale(&self) -> Locale {
        Locale::ItIt
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        // A thousand group of exactly 1 is the bare "mille".
        if ctx.index == 1 && trio.value() == 1 {
            return THOUSAND.0.to_string();
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let hundred = if h == 1 {
            HUNDRED.to_string()
        } else if h >= 2 {
            format!("{}{HUNDRED}", ONES[h])
        } else {
            String::new()
        };

        let ten = if trio.is_teens() {
            TEENS[o].to_string()
        } else if t >= 2 {
            if o == 1 || o == 8 {
                // Vowel elision at the fusion point.
                format!("{}{}", TENS[t].1, ONES[o])
            } else if o > 0 {
                format!("{}{}", TENS[t].0, ONES[o])
            } else {
                TENS[t].0.to_string()
            }
        } else {
            String::new()
        };

        let single = if t == 0 && o > 0 {
            if o == 1 && ctx.index >= 2 && trio.under_ten() {
                ONE_BEFORE_MILLION.to_string()
            } else {
                ONES[o].to_string()
            }
        } else {
            String::new()
        };

        let radix = match ctx.index {
            0 => String::new(),
            1 => THOUSAND.1.to_string(),
            _ => {
                if trio.value() == 1 {
                    MILLION.0.to_string()
                } else {
                    MILLION.1.to_string()
                }
            }
        };

        let body = format!("{hundred}{ten}{single}");
        let mut result = if ctx.index >= 2 {
            format!("{body} {radix}")
        } else {
            format!("{body}{radix}")
        };

        if ctx.index > 1 && ctx.lower_rendered {
            result.push_str(GROUP_CONJUNCTION);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::ItIt).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "zero");
        assert_eq!(words(1), "uno");
        assert_eq!(words(17), "diciassette");
        assert_eq!(words(30), "trenta");
    }

    #[test]
    fn tens_elide_before_one_and_eight() {
        assert_eq!(words(21), "ventuno");
        assert_eq!(words(88), "ottantotto");
        assert_eq!(words(25), "venticinque");
    }

    #[test]
    fn hundreds_drop_the_unit_multiplier() {
        assert_eq!(words(100), "cento");
        assert_eq!(words(108), "centootto");
        assert_eq!(words(200), "duecento");
    }

    #[test]
    fn thousand_inflects_between_mille_and_mila() {
        assert_eq!(words(1000), "mille");
        assert_eq!(words(1001), "milleuno");
        assert_eq!(words(2025), "duemilaventicinque");
        assert_eq!(words(100_000), "centomila");
        assert_eq!(words(101_000), "centounomila");
        assert_eq!(words(1234), "milleduecentotrentaquattro");
    }

    #[test]
    fn millions_agree_and_take_a_conjunction() {
        assert_eq!(words(1_000_000), "un milione");
        assert_eq!(words(2_000_000), "due milioni");
        assert_eq!(words(2_000_001), "due milioni e uno");
        assert_eq!(words(25_000_000), "venticinque milioni");
    }
}
