//! Russian grammar rules
//!
//! Units 1 and 2 agree in gender with the magnitude word: "тысяча" is
//! feminine ("одна тысяча", "две тысячи"), "миллион" masculine. Magnitude
//! words decline in three forms chosen by the group value: nominative
//! singular for 1, genitive singular for 2-4, genitive plural otherwise,
//! with 11-14 always taking the genitive plural.

use super::{join_spaced, GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "ноль";
const ONES_MASCULINE: [&str; 10] = [
    "",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
];
const ONES_FEMININE: [&str; 10] = [
    "",
    "одна",
    "две",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];
const THOUSANDS: [&str; 3] = ["тысяча", "тысячи", "тысяч"];
const MILLIONS: [&str; 3] = ["миллион", "миллиона", "миллионов"];

/// Declension by group value: singular, paucal (2-4), plural.
fn plural_form(value: u16, forms: [&'static str; 3]) -> &'static str {
    let last_two = value % 100;
    if (11..=14).contains(&last_two) {
        return forms[2];
    }
    match value % 10 {
        1 => forms[0],
        2..=4 => forms[1],
        _ => forms[2],
    }
}

pub(crate) struct RuRuRules;

impl GrammarRules for RuRuRules {
    fn locale(&self) -> Locale {
        Locale::RuRu
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

        let mut parts: Vec<&str> = Vec::new();

        if h > 0 {
            parts.push(HUNDREDS[h]);
        }

        if trio.is_teens() {
            parts.push(TEENS[o]);
        } else {
            if t >= 2 {
                parts.push(TENS[t]);
            }
            if o > 0 {
                // Thousands take the feminine unit forms.
                let ones = if ctx.index == 1 {
                    &ONES_FEMININE
                } else {
                    &ONES_MASCULINE
                };
                parts.push(ones[o]);
            }
        }

        match ctx.index {
            1 => parts.push(plural_form(trio.value(), THOUSANDS)),
            2 => parts.push(plural_form(trio.value(), MILLIONS)),
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
    use super::{plural_form, THOUSANDS};
    use crate::{GrammarEngine, Locale};

    fn words(n: u64) -> String {
        GrammarEngine::new(Locale::RuRu).to_words(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(words(0), "ноль");
        assert_eq!(words(1), "один");
        assert_eq!(words(13), "тринадцать");
        assert_eq!(words(42), "сорок два");
        assert_eq!(words(300), "триста");
    }

    #[test]
    fn thousands_take_feminine_units() {
        assert_eq!(words(1000), "одна тысяча");
        assert_eq!(words(2000), "две тысячи");
        assert_eq!(words(21_000), "двадцать одна тысяча");
    }

    #[test]
    fn magnitude_words_decline_by_group_value() {
        assert_eq!(words(5000), "пять тысяч");
        assert_eq!(words(11_000), "одиннадцать тысяч");
        assert_eq!(words(12_000), "двенадцать тысяч");
        assert_eq!(words(1_000_000), "один миллион");
        assert_eq!(words(2_000_000), "два миллиона");
        assert_eq!(words(5_000_000), "пять миллионов");
    }

    #[test]
    fn teens_in_the_hundreds_position_decline_as_plural() {
        // 111 ends in 1 but 11-14 force the genitive plural.
        assert_eq!(plural_form(111, THOUSANDS), "тысяч");
        assert_eq!(plural_form(121, THOUSANDS), "тысяча");
    }

    #[test]
    fn composite_numbers() {
        assert_eq!(words(1234), "одна тысяча двести тридцать четыре");
        assert_eq!(words(1001), "одна тысяча один");
        assert_eq!(
            words(123_456_789),
            "сто двадцать три миллиона четыреста пятьдесят шесть тысяч семьсот восемьдесят девять"
        );
    }
}
