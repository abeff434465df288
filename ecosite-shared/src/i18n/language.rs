//! Supported languages and their writing direction.

use serde::{Deserialize, Serialize};

/// Language used when neither a stored preference nor the browser locale
/// names a supported language.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Code of the right-to-left language the site ships.
pub const ARABIC_LANGUAGE: &str = "ar";

/// Writing direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    Ltr,
    /// Right to left, mirrors the layout
    Rtl,
}

impl Direction {
    /// Value for the document `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Whether the layout must be mirrored.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LanguageInfo {
    /// Code stored and applied, e.g. `ar`
    pub code: &'static str,
    /// Flag glyph shown in the language menu
    pub flag: &'static str,
    /// Name of the language in that language
    pub native_name: &'static str,
    /// Writing direction
    pub direction: Direction,
}

const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        code: FALLBACK_LANGUAGE,
        flag: "🇬🇧",
        native_name: "English",
        direction: Direction::Ltr,
    },
    LanguageInfo {
        code: ARABIC_LANGUAGE,
        flag: "🇸🇦",
        native_name: "العربية",
        direction: Direction::Rtl,
    },
];

/// All supported languages, in display order.
#[must_use]
pub fn supported_languages() -> &'static [LanguageInfo] {
    LANGUAGES
}

/// Get information about a supported language
#[must_use]
pub fn get_language_info(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|info| info.code == code)
}

/// Catalog entry for `code`, or the fallback language when `code` is unknown.
#[must_use]
pub fn resolve_language(code: &str) -> &'static LanguageInfo {
    get_language_info(code).unwrap_or_else(fallback_language)
}

/// Catalog entry of [`FALLBACK_LANGUAGE`].
#[must_use]
pub fn fallback_language() -> &'static LanguageInfo {
    &LANGUAGES[0]
}

/// Pick the language for a browser locale tag.
///
/// Any tag starting with `ar` (`ar-EG`, `arz-EG`, `AR`) selects Arabic;
/// everything else gets the fallback language.
#[must_use]
pub fn from_locale_tag(tag: &str) -> &'static LanguageInfo {
    let prefix = tag.trim().get(..ARABIC_LANGUAGE.len()).unwrap_or_default();
    if prefix.eq_ignore_ascii_case(ARABIC_LANGUAGE) {
        resolve_language(ARABIC_LANGUAGE)
    } else {
        fallback_language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_fallback_is_first_and_ltr() {
        let fallback = fallback_language();
        assert_eq!(fallback.code, FALLBACK_LANGUAGE);
        assert_eq!(fallback.direction, Direction::Ltr);
    }

    #[test]
    fn test_arabic_is_rtl() {
        let arabic = get_language_info(ARABIC_LANGUAGE).expect("arabic is supported");
        assert!(arabic.direction.is_rtl());
        assert_eq!(arabic.direction.as_attr(), "rtl");
    }

    #[test]
    fn test_codes_are_unique() {
        let languages = supported_languages();
        for (index, info) in languages.iter().enumerate() {
            assert!(
                languages[index + 1..].iter().all(|other| other.code != info.code),
                "duplicate language code {}",
                info.code
            );
        }
    }

    #[test_case("zz" ; "unknown code")]
    #[test_case("" ; "empty code")]
    #[test_case("EN" ; "codes are case sensitive")]
    fn test_resolve_unknown_falls_back(code: &str) {
        assert_eq!(resolve_language(code).code, FALLBACK_LANGUAGE);
    }

    #[test_case("ar-SA", "ar")]
    #[test_case("ar-EG", "ar")]
    #[test_case("ar", "ar")]
    #[test_case("AR_ae", "ar")]
    #[test_case("arz-EG", "ar" ; "egyptian arabic")]
    #[test_case("ary-MA", "ar" ; "moroccan arabic")]
    #[test_case(" ars", "ar" ; "najdi arabic with padding")]
    #[test_case("en-US", "en")]
    #[test_case("fr-FR", "en")]
    #[test_case("a", "en" ; "shorter than the prefix")]
    #[test_case("", "en")]
    fn test_from_locale_tag(tag: &str, expected: &str) {
        assert_eq!(from_locale_tag(tag).code, expected);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Rtl).unwrap();
        assert_eq!(json, "\"rtl\"");
    }
}
