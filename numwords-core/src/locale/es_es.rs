//! European Spanish grammar rules
//!
//! The irregularities handled here, each as a named rule:
//!
//! - hundreds special case: exactly 100 is "cien", 101-199 use "ciento",
//!   other multipliers have their own table ("doscientos", ...);
//! - x21 fusion: 21 is the fused "veintiuno", apocopated to "veintiún"
//!   before a magnitude word;
//! - apocope: the unit 1 becomes "un" before a magnitude word
//!   ("treinta y un mil", "un millón");
//! - thousand elision: 1000 is bare "mil";
//! - plural "millones" is derived from "millón" by suffixing and then
//!   stripping the diacritic, not from a separate dictionary entry.

use super::{join_spaced, GrammarRules, Locale};
use crate::trio::{GroupContext, Trio};

const ZERO: &str = "cero";
const ONES: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];
const ONE_APOCOPE: &str = "un";
const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];
const TENS: [&str; 10] = [
    "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];
const HUNDRED_EXACT: &str = "cien";
const HUNDRED_COMPOSED: &str = "ciento";
const HUNDREDS: [&str; 9] = [
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];
const THOUSAND: &str = "mil";
const MILLION: &str = "millón";
const TWENTY_ONE_FUSED: &str = "veintiuno";
const TWENTY_ONE_APOCOPE: &str = "veintiún";
const TENS_CONJUNCTION: &str = "y";

/// Strip Spanish acute accents from a derived word form.
fn strip_accents(word: &str) -> String {
    word.chars()
        .map(|ch| match ch {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

pub(crate) struct EsEsRules;

impl EsEsRules {
    fn ones_word(digit: usize, ctx: GroupContext) -> &'static str {
        if digit == 1 && ctx.index > 0 {
            ONE_APOCOPE
        } else {
            ONES[digit]
        }
    }
}

impl GrammarRules for EsEsRules {
    fn locale(&self) -> Locale {
        Locale::EsEs
    }

    fn zero_word(&self) -> &'static str {
        ZERO
    }

    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String {
        if trio.is_zero() {
            return String::new();
        }

        // Thousand elision: bare "mil", never "un mil".
        if ctx.index == 1 && trio.value() == 1 {
            return THOUSAND.to_string();
        }

        let (h, t, o) = (
            trio.hundreds() as usize,
            trio.tens() as usize,
            trio.ones() as usize,
        );

        let mut parts: Vec<String> = Vec::new();

        if h == 1 && t == 0 && o == 0 {
            parts.push(HUNDRED_EXACT.to_string());
        } else if h == 1 {
            parts.push(HUNDRED_COMPOSED.to_string());
        } else if h >= 2 {
            parts.push(HUNDREDS[h - 1].to_string());
        }

        if t == 2 && o == 1 {
            // Fused 21, apocopated before magnitude words.
            let fused = if ctx.index == 0 {
                TWENTY_ONE_FUSED
            } else {
                TWENTY_ONE_APOCOPE
            };
            parts.push(fused.to_string());
        } else if trio.is_teens() {
            parts.push(TEENS[o].to_string());
        } else if t >= 2 {
            if o > 0 {
                parts.push(format!(
                    "{} {TENS_CONJUNCTION} {}",
                    TENS[t],
                    Self::ones_word(o, ctx)
                ));
            } else {
                parts.push(TENS[t].to_string());
            }
        } else if o > 0 {
            parts.push(Self::ones_word(o, ctx).to_string());
        }

        match ctx.index {
            1 => parts.push(THOUSAND.to_string()),
            2 => {
                if trio.value() == 1 {
                    parts.push(MILLION.to_string());
                } else {
                    parts.push(strip_accents(&format!("{MILLION}es")));
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
