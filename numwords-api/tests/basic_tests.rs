//! Basic tests for numwords-api

use numwords_api::*;

#[test]
fn test_english_composition() {
    let speller = NumberSpeller::with_locale("en_US").unwrap();
    assert_eq!(
        speller.to_words(1234u32).unwrap(),
        "one thousand two hundred and thirty-four"
    );
}

#[test]
fn test_german_fused_tens() {
    assert_eq!(to_words(21u32, "de_DE").unwrap(), "einundzwanzig");
}

#[test]
fn test_russian_thousand_agreement() {
    let speller = NumberSpeller::with_locale("ru_RU").unwrap();
    assert_eq!(speller.to_words(1000u32).unwrap(), "одна тысяча");
    assert_eq!(speller.to_words(2000u32).unwrap(), "две тысячи");
    assert_eq!(speller.to_words(5000u32).unwrap(), "пять тысяч");
    assert_eq!(speller.to_words(11_000u32).unwrap(), "одиннадцать тысяч");
}

#[test]
fn test_spanish_fusion_and_hundreds() {
    let speller = NumberSpeller::with_locale("es_ES").unwrap();
    assert_eq!(speller.to_words(21u32).unwrap(), "veintiuno");
    assert_eq!(speller.to_words(100u32).unwrap(), "cien");
    let long = speller.to_words(121u32).unwrap();
    assert!(long.starts_with("ciento"));
    assert!(long.ends_with("veintiuno"));
}

#[test]
fn test_portuguese_hundred_forms() {
    let speller = NumberSpeller::with_locale("pt_PT").unwrap();
    assert_eq!(speller.to_words(100u32).unwrap(), "cem");
    assert!(speller.to_words(101u32).unwrap().starts_with("cento e "));
}

#[test]
fn test_capacity_boundary() {
    let speller = NumberSpeller::new();
    assert!(speller.to_words(999_999_999u64).is_ok());
    assert!(matches!(
        speller.to_words(1_000_000_000u64),
        Err(Error::CapacityExceeded { .. })
    ));
}

#[test]
fn test_fractional_input_is_rejected() {
    let speller = NumberSpeller::new();
    assert_eq!(speller.to_words(1.5f64), Err(Error::NotAnInteger(1.5)));
    assert_eq!(speller.to_words(7.0f64).unwrap(), "seven");
}

#[test]
fn test_unknown_locale_fails_at_construction() {
    assert!(matches!(
        NumberSpeller::with_locale("xx_XX"),
        Err(Error::UnknownLocale(_))
    ));
}

#[test]
fn test_locale_identifier_forms() {
    assert_eq!(
        NumberSpeller::with_locale("pt-BR").unwrap().locale(),
        Locale::PtBr
    );
    assert_eq!(
        NumberSpeller::with_locale("RU").unwrap().locale(),
        Locale::RuRu
    );
    assert_eq!(NumberSpeller::default().locale(), Locale::EnUs);
}

#[test]
fn test_conversion_is_repeatable() {
    let speller = NumberSpeller::with_locale("fr_FR").unwrap();
    let first = speller.to_words(987_654u64).unwrap();
    let second = speller.to_words(987_654u64).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_speller_constants() {
    let speller = NumberSpeller::for_locale(Locale::ItIt);
    assert_eq!(speller.group_width(), 3);
    assert_eq!(speller.max_digits(), 9);
}
