//! Arabic grammar rules
//!
//! Follows the English composition shape with the Arabic dictionary, plus
//! leading-unit elision before the thousand word (1000 is "ألف", not
//! "واحد ألف").

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "صفر";
const ONES: [&str; 10] = [
    "",
    "واحد",
    "اثنان",
    "ثلاثة",
    "أربعة",
    "خمسة",
    "ستة",
    "سبعة",
    "ثمانية",
    "تسعة",
];
const TEENS: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];
const TENS: [&str; 10] = [
    "",
    "",
    "عشرون",
    "ثلاثون",
    "أربعون",
    "خمسون",
    "ستة وعشرون",
    "سبعة وعشرون",
    "ثمانية وعشرون",
    "تسعة وعشرون",
];
const HUNDRED: &str = "مائة";
const RADIX: [&str; 3] = ["", "ألف", "مليون"];
const TENS_DELIMITER: &str = "-";
const CONJUNCTION: &str = "و";

pub(crate) struct ArArRules;

impl GrammarRules for ArArRules {
    fn locale(&self) -> Locale {
        Locale::ArAr
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        // Leading-unit elision before the thousand word.
        if ctx.index == 1 && trio.value() == 1 {
            return RADIX[1].to_string();
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
            hundred = format!(" {CONJUNCTION} ");
        }

        format!("{hundred}{ten}{single}{radix}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::ArAr).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "صفر");
        assert_eq!(words(3), "ثلاثة");
        assert_eq!(words(11), "أحد عشر");
    }

    #[test]
    fn thousand_elides_leading_unit() {
        assert_eq!(words(1000), "ألف");
        assert_eq!(words(2000), "اثنان ألف");
    }

    #[test]
    fn conjunction_before_final_bare_group() {
        assert_eq!(words(1005), "ألف و خمسة");
    }

    #[test]
    fn hundreds_use_the_arabic_dictionary() {
        assert_eq!(words(100), "واحد مائة");
        assert_eq!(words(105), "واحد مائة و خمسة");
    }
}
