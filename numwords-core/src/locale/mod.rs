//! Locale identifiers, the grammar-rules contract, and the rule registry
//!
//! Each supported locale contributes one [`GrammarRules`] implementation
//! bound to its own static dictionary. The registry in [`rules_for`] is the
//! only place that maps a locale identifier to a rule set; everything else
//! works against the trait.

use std::fmt;

use crate::error::{Error, Result};
use crate::tokenizer::DEFAULT_GROUP_WIDTH;
use crate::trio::{GroupContext, Trio};

mod ar_ar;
mod cs_cz;
mod de_de;
mod en_us;
mod es_es;
mod fr_fr;
mod id_id;
mod it_it;
mod nl_nl;
mod pt;
mod ru_ru;

/// Supported locales for number-to-words conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// Arabic
    ArAr,
    /// Czech
    CsCz,
    /// German
    DeDe,
    /// American English
    #[default]
    EnUs,
    /// European Spanish
    EsEs,
    /// French
    FrFr,
    /// Indonesian
    IdId,
    /// Italian
    ItIt,
    /// Dutch
    NlNl,
    /// Brazilian Portuguese
    PtBr,
    /// European Portuguese
    PtPt,
    /// Russian
    RuRu,
}

impl Locale {
    /// All supported locales, in identifier order
    pub const ALL: [Locale; 12] = [
        Locale::ArAr,
        Locale::CsCz,
        Locale::DeDe,
        Locale::EnUs,
        Locale::EsEs,
        Locale::FrFr,
        Locale::IdId,
        Locale::ItIt,
        Locale::NlNl,
        Locale::PtBr,
        Locale::PtPt,
        Locale::RuRu,
    ];

    /// Resolve a locale identifier string
    ///
    /// Accepts the canonical `xx_YY` form case-insensitively, `-` in place
    /// of `_`, and bare language codes where unambiguous. Unknown
    /// identifiers fail with [`Error::UnknownLocale`].
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_lowercase().replace('-', "_").as_str() {
            "ar" | "ar_ar" => Ok(Locale::ArAr),
            "cs" | "cs_cz" => Ok(Locale::CsCz),
            "de" | "de_de" => Ok(Locale::DeDe),
            "en" | "en_us" => Ok(Locale::EnUs),
            "es" | "es_es" => Ok(Locale::EsEs),
            "fr" | "fr_fr" => Ok(Locale::FrFr),
            "id" | "id_id" => Ok(Locale::IdId),
            "it" | "it_it" => Ok(Locale::ItIt),
            "nl" | "nl_nl" => Ok(Locale::NlNl),
            "pt_br" => Ok(Locale::PtBr),
            "pt" | "pt_pt" => Ok(Locale::PtPt),
            "ru" | "ru_ru" => Ok(Locale::RuRu),
            _ => Err(Error::UnknownLocale(code.to_string())),
        }
    }

    /// Canonical locale identifier
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ArAr => "ar_AR",
            Locale::CsCz => "cs_CZ",
            Locale::DeDe => "de_DE",
            Locale::EnUs => "en_US",
            Locale::EsEs => "es_ES",
            Locale::FrFr => "fr_FR",
            Locale::IdId => "id_ID",
            Locale::ItIt => "it_IT",
            Locale::NlNl => "nl_NL",
            Locale::PtBr => "pt_BR",
            Locale::PtPt => "pt_PT",
            Locale::RuRu => "ru_RU",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-locale grammar for rendering digit groups into words
///
/// Implementations are stateless apart from their static dictionaries, so
/// a rule set can be shared freely across threads.
pub trait GrammarRules: Send + Sync {
    /// The locale this rule set implements
    fn locale(&self) -> Locale;

    /// Digits per token group
    fn group_width(&self) -> u32 {
        DEFAULT_GROUP_WIDTH
    }

    /// Maximum digit capacity of this locale
    fn max_digits(&self) -> usize {
        9
    }

    /// The literal word for zero
    fn zero_word(&self) -> &'static str;

    /// Render one digit group into words
    ///
    /// A zero group must contribute no words and no magnitude suffix. The
    /// context carries the group position and whether lower groups already
    /// rendered words, which drives inter-group connectors and spacing.
    fn render_group(&self, trio: Trio, ctx: GroupContext) -> String;

    /// Join the rendered groups, most-significant first
    ///
    /// The default concatenates directly and trims; locales that build
    /// space-free group strings override this with [`join_spaced`].
    fn join_groups(&self, groups: &[String]) -> String {
        groups.concat().trim().to_string()
    }
}

/// Join non-empty group strings with single spaces
pub(crate) fn join_spaced(groups: &[String]) -> String {
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Construct the grammar rules registered for `locale`
pub(crate) fn rules_for(locale: Locale) -> Box<dyn GrammarRules> {
    tracing::debug!(locale = %locale, "constructing grammar rules");
    match locale {
        Locale::ArAr => Box::new(ar_ar::ArArRules),
        Locale::CsCz => Box::new(cs_cz::CsCzRules),
        Locale::DeDe => Box::new(de_de::DeDeRules),
        Locale::EnUs => Box::new(en_us::EnUsRules),
        Locale::EsEs => Box::new(es_es::EsEsRules),
        Locale::FrFr => Box::new(fr_fr::FrFrRules),
        Locale::IdId => Box::new(id_id::IdIdRules),
        Locale::ItIt => Box::new(it_it::ItItRules),
        Locale::NlNl => Box::new(nl_nl::NlNlRules),
        Locale::PtBr => Box::new(pt::PortugueseRules::brazilian()),
        Locale::PtPt => Box::new(pt::PortugueseRules::european()),
        Locale::RuRu => Box::new(ru_ru::RuRuRules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()).unwrap(), locale);
        }
    }

    #[test]
    fn lookup_is_case_and_separator_insensitive() {
        assert_eq!(Locale::from_code("EN_us").unwrap(), Locale::EnUs);
        assert_eq!(Locale::from_code("pt-BR").unwrap(), Locale::PtBr);
        assert_eq!(Locale::from_code("ru").unwrap(), Locale::RuRu);
    }

    #[test]
    fn unknown_identifier_fails() {
        assert_eq!(
            Locale::from_code("xx_XX"),
            Err(Error::UnknownLocale("xx_XX".to_string()))
        );
    }

    #[test]
    fn every_locale_has_registered_rules() {
        for locale in Locale::ALL {
            let rules = rules_for(locale);
            assert_eq!(rules.locale(), locale);
            assert_eq!(rules.group_width(), 3);
            assert_eq!(rules.max_digits(), 9);
            assert!(!rules.zero_word().is_empty());
        }
    }
}
