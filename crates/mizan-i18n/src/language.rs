//! Supported language codes.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Languages the site ships translations for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Indonesian.
    Id,
    /// English.
    En,
    /// Arabic.
    Ar,
}

/// Language active on first run, before any preference has been stored.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Id;

impl LanguageCode {
    /// All supported languages in picker order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Id, Self::En, Self::Ar]
    }

    /// Two-letter code used as catalog selector and stored preference value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Native label for the language picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Bahasa Indonesia",
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Lowercase ISO 3166 country used for the picker flag.
    #[must_use]
    pub const fn flag_country(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "us",
            Self::Ar => "sa",
        }
    }

    /// Whether text in this language flows right to left.
    #[must_use]
    pub const fn is_right_to_left(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Text direction for layout in this language.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        if self.is_right_to_left() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Exact match against [`LanguageCode::code`]. Stored values go through this.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|language| language.code() == code)
    }

    /// Map a loose language tag (`EN`, `en-US`, ` ar `) to a supported language.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::from_code(base)
    }
}

impl Display for LanguageCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(self.code())
    }
}

/// Layout direction derived from the active language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Display for TextDirection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for language in LanguageCode::all() {
            assert_eq!(LanguageCode::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn from_code_is_exact() {
        assert_eq!(LanguageCode::from_code("EN"), None);
        assert_eq!(LanguageCode::from_code(" en"), None);
        assert_eq!(LanguageCode::from_code("xx"), None);
        assert_eq!(LanguageCode::from_code(""), None);
    }

    #[test]
    fn lang_tags_are_normalised() {
        assert_eq!(LanguageCode::from_lang_tag("en-US"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_lang_tag(" AR "), Some(LanguageCode::Ar));
        assert_eq!(LanguageCode::from_lang_tag("id_ID"), Some(LanguageCode::Id));
        assert_eq!(LanguageCode::from_lang_tag("fr-FR"), None);
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert!(LanguageCode::Ar.is_right_to_left());
        assert!(!LanguageCode::En.is_right_to_left());
        assert!(!LanguageCode::Id.is_right_to_left());
        assert_eq!(LanguageCode::Ar.direction().as_str(), "rtl");
        assert_eq!(LanguageCode::Id.direction().to_string(), "ltr");
    }

    #[test]
    fn serde_uses_lowercase_codes() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&LanguageCode::Ar)?, "\"ar\"");
        let parsed: LanguageCode = serde_json::from_str("\"en\"")?;
        assert_eq!(parsed, LanguageCode::En);
        Ok(())
    }
}
