//! Czech grammar rules
//!
//! Czech inflects the hundreds word by multiplier ("sto", "dvěstě",
//! "třista", ...) and fuses the unit with the magnitude word for small
//! thousand/million groups ("dvatisíce", "pětmiliónů"). A standalone 2 is
//! the feminine "dvě". Groups are concatenated without spaces.

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "nula";
const FEMININE_TWO: &str = "dvě";

/// Plain units, thousand-fused units, million-fused units.
const ONES: [[&str; 10]; 3] = [
    [
        "", "jedna", "dva", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět",
    ],
    [
        "",
        "jedentisíc",
        "dvatisíce",
        "třitisíce",
        "čtyřitisíce",
        "pěttisíc",
        "šesttisíc",
        "sedmtisíc",
        "osmtisíc",
        "devěttisíc",
    ],
    [
        "",
        "jedenmilión",
        "dvamilióny",
        "třimilióny",
        "čtyřimilióny",
        "pětmiliónů",
        "šestmiliónů",
        "sedmmiliónů",
        "osmmiliónů",
        "devěmiliónů",
    ],
];
const TEENS: [&str; 10] = [
    "deset",
    "jedenáct",
    "dvanáct",
    "třináct",
    "čtrnáct",
    "patnáct",
    "šestnáct",
    "sedmnáct",
    "osmnáct",
    "devatenáct",
];
const TENS: [&str; 10] = [
    "",
    "",
    "dvacet",
    "třicet",
    "čtyřicet",
    "padesát",
    "šedesát",
    "sedmdesát",
    "osmdesát",
    "devadesát",
];
const HUNDREDS: [&str; 10] = [
    "",
    "sto",
    "dvěstě",
    "třista",
    "čtyřista",
    "pětset",
    "šestset",
    "sedmset",
    "osmset",
    "devětset",
];
const RADIX: [&str; 3] = ["", "tisíc", "miliónů"];

pub(crate) struct CsCzRules;

impl GrammarRules for CsCzRules {
    fn locale(&self) -> Locale {
        Locale::CsCz
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

        let mut radix = RADIX[ctx.index].to_string();

        let hundred = HUNDREDS[h];

        let ten = if trio.is_teens() {
            TEENS[o].to_string()
        } else if t >= 2 {
            format!("{}{}", TENS[t], ONES[0][o])
        } else {
            String::new()
        };

        let mut single = if t == 0 {
            ONES[0][o].to_string()
        } else {
            String::new()
        };

        if h == 0 && t == 0 && o == 2 {
            single = FEMININE_TWO.to_string();
        }

        // Unit-magnitude fusion for single-digit thousand/million groups.
        if ctx.index > 0 && trio.under_ten() {
            single = ONES[ctx.index][o].to_string();
            radix.clear();
        }

        format!("{hundred}{ten}{single}{radix}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::CsCz).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "nula");
        assert_eq!(words(5), "pět");
        assert_eq!(words(15), "patnáct");
        assert_eq!(words(22), "dvacetdva");
    }

    #[test]
    fn standalone_two_is_feminine() {
        assert_eq!(words(2), "dvě");
        // With hundreds present the plain form is used.
        assert_eq!(words(102), "stodva");
    }

    #[test]
    fn hundreds_inflect_by_multiplier() {
        assert_eq!(words(100), "sto");
        assert_eq!(words(200), "dvěstě");
        assert_eq!(words(300), "třista");
        assert_eq!(words(500), "pětset");
    }

    #[test]
    fn small_thousand_groups_fuse_with_the_radix() {
        assert_eq!(words(1000), "jedentisíc");
        assert_eq!(words(2000), "dvatisíce");
        assert_eq!(words(5000), "pěttisíc");
        assert_eq!(words(3_000_000), "třimilióny");
    }

    #[test]
    fn large_thousand_groups_keep_the_plain_radix() {
        assert_eq!(words(15_000), "patnácttisíc");
        assert_eq!(words(25_000), "dvacetpěttisíc");
    }

    #[test]
    fn groups_concatenate_without_spaces() {
        assert_eq!(words(1234), "jedentisícdvěstětřicetčtyři");
    }
}
