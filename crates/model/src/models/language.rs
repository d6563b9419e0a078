//! Language codes and per-language overrides.

use std::collections::BTreeMap;

use validator::{Validate, ValidationError};

use crate::shape::{Score, WireEnum, shape, string_enum};
use crate::validation::{count_selected, invalid};

/// Largest number of per-language overrides a job accepts.
pub const MAX_LANGUAGE_ID_SETTINGS: usize = 5;

string_enum! {
    /// Language and dialect of the media, as accepted by batch transcription.
    ///
    /// Variants order by declaration, which is the order keyed mappings use.
    pub enum LanguageCode {
        AfZa => "af-ZA",
        ArAe => "ar-AE",
        ArSa => "ar-SA",
        DaDk => "da-DK",
        DeCh => "de-CH",
        DeDe => "de-DE",
        EnAb => "en-AB",
        EnAu => "en-AU",
        EnGb => "en-GB",
        EnIe => "en-IE",
        EnIn => "en-IN",
        EnUs => "en-US",
        EnWl => "en-WL",
        EsEs => "es-ES",
        EsUs => "es-US",
        FaIr => "fa-IR",
        FrCa => "fr-CA",
        FrFr => "fr-FR",
        HeIl => "he-IL",
        HiIn => "hi-IN",
        IdId => "id-ID",
        ItIt => "it-IT",
        JaJp => "ja-JP",
        KoKr => "ko-KR",
        MsMy => "ms-MY",
        NlNl => "nl-NL",
        PtBr => "pt-BR",
        PtPt => "pt-PT",
        RuRu => "ru-RU",
        TaIn => "ta-IN",
        TeIn => "te-IN",
        TrTr => "tr-TR",
        ZhCn => "zh-CN",
        ZhTw => "zh-TW",
        ThTh => "th-TH",
        EnZa => "en-ZA",
        EnNz => "en-NZ",
        ViVn => "vi-VN",
        SvSe => "sv-SE",
        AbGe => "ab-GE",
        AstEs => "ast-ES",
        AzAz => "az-AZ",
        BaRu => "ba-RU",
        BeBy => "be-BY",
        BgBg => "bg-BG",
        BnIn => "bn-IN",
        BsBa => "bs-BA",
        CaEs => "ca-ES",
        CkbIq => "ckb-IQ",
        CkbIr => "ckb-IR",
        CsCz => "cs-CZ",
        CyWl => "cy-WL",
        ElGr => "el-GR",
        EtEt => "et-ET",
        EuEs => "eu-ES",
        FiFi => "fi-FI",
        GlEs => "gl-ES",
        GuIn => "gu-IN",
        HaNg => "ha-NG",
        HrHr => "hr-HR",
        HuHu => "hu-HU",
        HyAm => "hy-AM",
        IsIs => "is-IS",
        KaGe => "ka-GE",
        KabDz => "kab-DZ",
        KkKz => "kk-KZ",
        KnIn => "kn-IN",
        KyKg => "ky-KG",
        LgIn => "lg-IN",
        LtLt => "lt-LT",
        LvLv => "lv-LV",
        MhrRu => "mhr-RU",
        MiNz => "mi-NZ",
        MkMk => "mk-MK",
        MlIn => "ml-IN",
        MnMn => "mn-MN",
        MrIn => "mr-IN",
        MtMt => "mt-MT",
        NoNo => "no-NO",
        OrIn => "or-IN",
        PaIn => "pa-IN",
        PlPl => "pl-PL",
        PsAf => "ps-AF",
        RoRo => "ro-RO",
        RwRw => "rw-RW",
        SiLk => "si-LK",
        SkSk => "sk-SK",
        SlSi => "sl-SI",
        SoSo => "so-SO",
        SrRs => "sr-RS",
        SuId => "su-ID",
        SwBi => "sw-BI",
        SwKe => "sw-KE",
        SwRw => "sw-RW",
        SwTz => "sw-TZ",
        SwUg => "sw-UG",
        TlPh => "tl-PH",
        TtRu => "tt-RU",
        UgCn => "ug-CN",
        UkUa => "uk-UA",
        UzUz => "uz-UZ",
        WoSn => "wo-SN",
        ZuZa => "zu-ZA",
    }
}

shape! {
    /// Vocabulary, filter, and model overrides for one identified language.
    pub struct LanguageIdSettings {
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        language_model_name / with_language_model_name: String => "LanguageModelName",
    }
}

shape! {
    /// A language identified in multi-language media and how long it was spoken.
    pub struct LanguageCodeItem {
        language_code / with_language_code: LanguageCode => "LanguageCode",
        duration_in_seconds / with_duration_in_seconds: Score => "DurationInSeconds",
    }
}

/// A job names its language in exactly one way: a code, single-language
/// identification, or multi-language identification.
pub(crate) fn check_language_selection(
    language_code: bool,
    identify_language: bool,
    identify_multiple_languages: bool,
) -> Result<(), ValidationError> {
    match count_selected(&[language_code, identify_language, identify_multiple_languages]) {
        1 => Ok(()),
        0 => Err(invalid(
            "language_selection",
            "one of LanguageCode, IdentifyLanguage, or IdentifyMultipleLanguages is required",
        )),
        _ => Err(invalid(
            "language_selection",
            "LanguageCode, IdentifyLanguage, and IdentifyMultipleLanguages are mutually exclusive",
        )),
    }
}

/// Entry count and per-entry constraints of a `LanguageIdSettings` mapping.
pub(crate) fn check_language_id_settings(
    settings: Option<&BTreeMap<LanguageCode, LanguageIdSettings>>,
) -> Result<(), ValidationError> {
    let Some(settings) = settings else {
        return Ok(());
    };
    if settings.is_empty() || settings.len() > MAX_LANGUAGE_ID_SETTINGS {
        return Err(invalid(
            "language_id_settings",
            "LanguageIdSettings must hold between 1 and 5 entries",
        ));
    }
    if settings.keys().any(WireEnum::is_unknown) {
        return Err(invalid(
            "unknown_value",
            "LanguageIdSettings is keyed by a language code this client does not know",
        ));
    }
    if settings.values().any(|entry| entry.validate().is_err()) {
        return Err(invalid(
            "language_id_settings",
            "LanguageIdSettings holds an invalid entry",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_parse_and_render() {
        let code: LanguageCode = "en-US".parse().unwrap();
        assert_eq!(code, LanguageCode::EnUs);
        assert_eq!(code.to_string(), "en-US");
        assert!("en-us".parse::<LanguageCode>().is_err());
        assert!(LanguageCode::values().contains(&"ckb-IQ"));
    }

    #[test]
    fn test_language_code_unknown_from_response() {
        let code: LanguageCode = serde_json::from_str("\"xx-XX\"").unwrap();
        assert_eq!(code, LanguageCode::Unknown("xx-XX".to_string()));
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"xx-XX\"");
    }

    #[test]
    fn test_language_id_settings_name_pattern() {
        let settings = LanguageIdSettings::new().with_vocabulary_name("medical terms");
        assert!(settings.validate().is_err());
        let settings = LanguageIdSettings::new().with_vocabulary_name("medical-terms");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_language_selection_exactly_one() {
        assert!(check_language_selection(true, false, false).is_ok());
        assert!(check_language_selection(false, false, true).is_ok());
        assert!(check_language_selection(false, false, false).is_err());
        assert!(check_language_selection(true, true, false).is_err());
    }

    #[test]
    fn test_language_id_settings_entry_limits() {
        assert!(check_language_id_settings(None).is_ok());
        let mut settings = BTreeMap::new();
        assert!(check_language_id_settings(Some(&settings)).is_err());
        for code in [
            LanguageCode::EnUs,
            LanguageCode::EnGb,
            LanguageCode::FrFr,
            LanguageCode::DeDe,
            LanguageCode::EsEs,
        ] {
            settings.insert(code, LanguageIdSettings::new().with_vocabulary_name("terms"));
        }
        assert!(check_language_id_settings(Some(&settings)).is_ok());
        settings.insert(LanguageCode::ItIt, LanguageIdSettings::new());
        assert!(check_language_id_settings(Some(&settings)).is_err());
    }

    #[test]
    fn test_language_id_settings_invalid_entry() {
        let mut settings = BTreeMap::new();
        settings.insert(
            LanguageCode::EnUs,
            LanguageIdSettings::new().with_language_model_name(""),
        );
        assert!(check_language_id_settings(Some(&settings)).is_err());
    }

    #[test]
    fn test_language_id_settings_unknown_key() {
        let mut settings = BTreeMap::new();
        settings.insert(LanguageCode::EnUs, LanguageIdSettings::new());
        settings.insert(
            LanguageCode::from_wire("xx-YY"),
            LanguageIdSettings::new().with_vocabulary_name("terms"),
        );
        let err = check_language_id_settings(Some(&settings)).unwrap_err();
        assert_eq!(err.code, "unknown_value");
    }

    #[test]
    fn test_language_code_item_duration() {
        let item: LanguageCodeItem =
            serde_json::from_str(r#"{"LanguageCode":"fr-FR","DurationInSeconds":12.5}"#).unwrap();
        assert_eq!(item.language_code, Some(LanguageCode::FrFr));
        assert_eq!(item.duration_in_seconds.map(Score::get), Some(12.5));
        assert_eq!(item.to_string(), "{LanguageCode: fr-FR,DurationInSeconds: 12.5}");
    }
}
