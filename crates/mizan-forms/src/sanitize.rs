//! Shared input sanitization policy.
//!
//! # Design
//! - Every form field goes through [`sanitize`] with a [`SanitizeProfile`];
//!   profiles only add rules on top of the common base.
//! - Base rules: strip markup, strip script-capable schemes and inline
//!   handlers, collapse whitespace, cap the length in characters.
//! - Removal repeats until stable so nested fragments cannot reassemble.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

/// Rule set applied to one kind of field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizeProfile {
    /// Messages and notes.
    FreeText,
    /// Person names; links are removed.
    Name,
    /// Contact form fields; links removed and characters restricted.
    Contact,
}

impl SanitizeProfile {
    /// Maximum length in characters after cleaning.
    #[must_use]
    pub const fn max_chars(self) -> usize {
        match self {
            Self::FreeText | Self::Contact => 800,
            Self::Name => 240,
        }
    }

    const fn strips_urls(self) -> bool {
        matches!(self, Self::Name | Self::Contact)
    }

    const fn restricts_charset(self) -> bool {
        matches!(self, Self::Contact)
    }
}

static TAGS: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>?"));
static SCHEMES: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)javascript:|vbscript:|data:|\bon\w+\s*="));
static URLS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bhttps?://\S*|\bwww\.\S*"));
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| compile(r"[^\w\s@.\-]"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));
static FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)<|>|javascript:|vbscript:|data:|document\.|window\.|fetch\(|ajax\(|https?://")
});

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("sanitizer patterns are valid")
}

/// Clean `input` according to `profile`.
#[must_use]
pub fn sanitize(input: &str, profile: SanitizeProfile) -> String {
    let mut cleaned = strip_until_stable(&TAGS, input);
    cleaned = strip_until_stable(&SCHEMES, &cleaned);
    if profile.strips_urls() {
        cleaned = URLS.replace_all(&cleaned, "").into_owned();
    }
    if profile.restricts_charset() {
        cleaned = DISALLOWED_CHARS.replace_all(&cleaned, "").into_owned();
    }
    let collapsed = WHITESPACE.replace_all(cleaned.trim(), " ");
    truncate_chars(&collapsed, profile.max_chars())
}

/// Whether `input` carries markup, script hooks or links.
#[must_use]
pub fn contains_forbidden_patterns(input: &str) -> bool {
    FORBIDDEN.is_match(input)
}

/// Accept only absolute `http`/`https` URLs with a host.
#[must_use]
pub fn is_safe_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// Keep ASCII digits only, for amount inputs.
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

fn strip_until_stable(pattern: &Regex, input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = pattern.replace_all(&current, "");
        if next == current {
            return current;
        }
        current = next.into_owned();
    }
}

fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((cut, _)) => input[..cut].trim_end().to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_in_every_profile() {
        for profile in [
            SanitizeProfile::FreeText,
            SanitizeProfile::Name,
            SanitizeProfile::Contact,
        ] {
            assert_eq!(sanitize("<b>Budi</b>", profile), "Budi");
            assert_eq!(sanitize("<p>Budi</p> <i>Rahman</i>", profile), "Budi Rahman");
        }
    }

    #[test]
    fn free_text_keeps_punctuation() {
        assert_eq!(
            sanitize("Semoga  berkah,\n\tamin!", SanitizeProfile::FreeText),
            "Semoga berkah, amin!"
        );
    }

    #[test]
    fn unterminated_tags_are_dropped() {
        assert_eq!(sanitize("halo <img src=x", SanitizeProfile::FreeText), "halo");
    }

    #[test]
    fn scheme_tokens_are_removed_even_when_nested() {
        assert_eq!(
            sanitize("javajavascript:script:alert", SanitizeProfile::FreeText),
            "alert"
        );
        assert_eq!(sanitize("DATA:text/html", SanitizeProfile::FreeText), "text/html");
        assert_eq!(sanitize("x onclick=go()", SanitizeProfile::FreeText), "x go()");
        assert_eq!(sanitize("bonus=5", SanitizeProfile::FreeText), "bonus=5");
    }

    #[test]
    fn names_lose_links() {
        assert_eq!(
            sanitize("Siti https://spam.example/x www.spam.example", SanitizeProfile::Name),
            "Siti"
        );
        assert_eq!(
            sanitize("see https://mizan.example", SanitizeProfile::FreeText),
            "see https://mizan.example"
        );
    }

    #[test]
    fn contact_restricts_characters_but_keeps_unicode_letters() {
        assert_eq!(
            sanitize("ali@example.org; DROP TABLE!", SanitizeProfile::Contact),
            "ali@example.org DROP TABLE"
        );
        assert_eq!(sanitize("محمد-علي", SanitizeProfile::Contact), "محمد-علي");
    }

    #[test]
    fn length_is_capped_in_characters() {
        let long = "ع".repeat(300);
        let cleaned = sanitize(&long, SanitizeProfile::Name);
        assert_eq!(cleaned.chars().count(), 240);
    }

    #[test]
    fn forbidden_pattern_detection() {
        assert!(contains_forbidden_patterns("<div>"));
        assert!(contains_forbidden_patterns("call window.open"));
        assert!(contains_forbidden_patterns("HTTP://example.org"));
        assert!(!contains_forbidden_patterns("Program pendidikan anak yatim"));
    }

    #[test]
    fn safe_urls_are_http_only() {
        assert!(is_safe_url("https://rumahyatimmizan.org/laporan.pdf"));
        assert!(is_safe_url("http://example.org"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("/relative/path"));
        assert!(!is_safe_url(""));
    }

    #[test]
    fn digits_only_filters_amounts() {
        assert_eq!(digits_only("Rp 1.500.000,-"), "1500000");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("١٢٣"), "");
    }
}
