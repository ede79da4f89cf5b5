//! Portuguese grammar rules, shared between the Brazilian and European
//! variants
//!
//! The two variants differ only in their teens dictionary ("quatorze" and
//! "dezesseis" in Brazil, "catorze" and "dezasseis" in Portugal). Both use
//! "cem" for exactly 100 and "cento" in composition, drop the multiplier
//! for a lone "mil", inflect "milhão"/"milhões", and connect every
//! following group with " e ".

use super::{GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "zero";
const ONES: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];
const TEENS_BR: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];
const TEENS_PT: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezasseis",
    "dezassete",
    "dezoito",
    "dezanove",
];
const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];
const HUNDRED_EXACT: &str = "cem";
const HUNDRED_COMPOSED: &str = "cento";
const THOUSAND: &str = "mil";
const MILLION: (&str, &str) = ("milhão", "milhões");
const CONJUNCTION: &str = " e ";

pub(crate) struct PortugueseRules {
    locale: Locale,
    teens: &'static [&'static str; 10],
}

impl PortugueseRules {
    pub(crate) fn brazilian() -> Self {
        Self {
            locale: Locale::PtBr,
            teens: &TEENS_BR,
        }
    }

    pub(crate) fn european() -> Self {
        Self {
            locale: Locale::PtPt,
            teens: &TEENS_PT,
        }
    }
}

impl GrammarRules for PortugueseRules {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        let radix = match ctx.index {
            1 => format!(" {THOUSAND}"),
            2 => {
                if trio.value() == 1 {
                    format!(" {}", MILLION.0)
                } else {
                    format!(" {}", MILLION.1)
                }
            }
            _ => String::new(),
        };

        // "mil", never "um mil".
        if ctx.index == 1 && trio.value() == 1 {
            return radix;
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let mut hundred = if h == 1 {
            if t > 0 || o > 0 {
                HUNDRED_COMPOSED.to_string()
            } else {
                HUNDRED_EXACT.to_string()
            }
        } else if h >= 2 {
            format!("{} {HUNDRED_COMPOSED}", ONES[h])
        } else {
            String::new()
        };
        if h > 0 && (t > 0 || o > 0) {
            hundred.push_str(CONJUNCTION);
        }

        let ten = if trio.is_teens() {
            self.teens[o].to_string()
        } else if t >= 2 {
            if o > 0 {
                format!("{}{CONJUNCTION}{}", TENS[t], ONES[o])
            } else {
                TENS[t].to_string()
            }
        } else {
            String::new()
        };

        let single = if t == 0 { ONES[o] } else { "" };

        let mut result = format!("{hundred}{ten}{single}{radix}");
        if !ctx.is_top() {
            result.insert_str(0, CONJUNCTION);
        }
        result
    }
}
