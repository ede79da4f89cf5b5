//! American English grammar rules
//!
//! English is the regular case the other locales deviate from: an
//! invariant "hundred" word, hyphenated tens-ones composition, invariant
//! magnitude words, and an "and" conjunction both after the hundreds word
//! and before a final group that has no hundreds digit.

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "zero";
const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const HUNDRED: &str = "hundred";
const RADIX: [&str; 3] = ["", "thousand", "million"];
const TENS_DELIMITER: &str = "-";
const CONJUNCTION: &str = "and";

pub(crate) struct EnUsRules;

impl GrammarRules for EnUsRules {
    fn locale(&self) -> Locale {
        Locale::EnUs
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

        let radix = if ctx.index > 0 {
            format!(" {}", RADIX[ctx.index])
        } else {
            String::new()
        };

        let mut hundred = if h > 0 {
            if t > 0 || o > 0 {
                format!("{} {} {} ", ONES[h], HUNDRED, CONJUNCTION)
            } else {
                format!("{} {}", ONES[h], HUNDRED)
            }
        } else {
            String::new()
        };

        let ten = if trio.is_teens() {
            TEENS[o].to_string()
        } else if t >= 2 {
            if o > 0 {
                format!("{}{}{}", TENS[t], TENS_DELIMITER, ONES[o])
            } else {
                TENS[t].to_string()
            }
        } else {
            String::new()
        };

        let single = if t == 0 {
            ONES[o].to_string()
        } else {
            String::new()
        };

        if !ctx.is_top() {
            hundred = format!(" {hundred}");
        }
        if ctx.index == 0 && !ctx.is_top() && h == 0 {
            // Conjunction before a final group without hundreds:
            // "one million and seven".
            hundred = format!(" {CONJUNCTION} ");
        }

        format!("{hundred}{ten}{single}{radix}")
    }
}
