//! Navigation and language-picker model shared by the navbar and footer.
//!
//! # Design
//! - Plain data so the ordering and keys are testable without a browser.
//! - Labels are translation keys; components resolve them through the store.

use mizan_i18n::LanguageCode;

/// Class added to the document element while Arabic is active.
pub const ARABIC_FONT_CLASS: &str = "font-arabic";

/// Top-level pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// Foundation profile.
    About,
    /// Programs overview.
    Programs,
    /// Dormitory listing and sponsorship.
    Dormitories,
    /// Reports and publications.
    Publications,
    /// News feed.
    News,
    /// Donation funnel.
    Donation,
    /// Contact form.
    Contact,
    /// Admin dashboard shell.
    Admin,
}

impl Page {
    /// Every page in route order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Home,
            Self::About,
            Self::Programs,
            Self::Dormitories,
            Self::Publications,
            Self::News,
            Self::Donation,
            Self::Contact,
            Self::Admin,
        ]
    }

    /// Router path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Programs => "/programs",
            Self::Dormitories => "/asrama",
            Self::Publications => "/publications",
            Self::News => "/news",
            Self::Donation => "/donation",
            Self::Contact => "/contact",
            Self::Admin => "/admin",
        }
    }

    /// Translation key of the page title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Programs => "programs",
            Self::Dormitories => "asrama",
            Self::Publications => "publications",
            Self::News => "news",
            Self::Donation => "donation",
            Self::Contact => "contact",
            Self::Admin => "admin",
        }
    }

    /// Page served at `path`, if any.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalised = if trimmed.is_empty() { "/" } else { trimmed };
        Self::all().into_iter().find(|page| page.path() == normalised)
    }
}

/// One entry of the main navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Target page.
    pub page: Page,
    /// Accessible label; not translated.
    pub aria_label: &'static str,
}

/// Main navigation in display order. Donation is reached through the call to action.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        page: Page::Home,
        aria_label: "Navigate to home page",
    },
    NavItem {
        page: Page::About,
        aria_label: "Navigate to about page",
    },
    NavItem {
        page: Page::Programs,
        aria_label: "Navigate to programs page",
    },
    NavItem {
        page: Page::Dormitories,
        aria_label: "Navigate to asrama page",
    },
    NavItem {
        page: Page::Publications,
        aria_label: "Navigate to publications page",
    },
    NavItem {
        page: Page::News,
        aria_label: "Navigate to news page",
    },
    NavItem {
        page: Page::Contact,
        aria_label: "Navigate to contact page",
    },
];

/// Footer quick links in display order.
pub const FOOTER_LINKS: [Page; 6] = [
    Page::About,
    Page::Programs,
    Page::Dormitories,
    Page::Publications,
    Page::News,
    Page::Contact,
];

/// Language picker entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    /// Language selected by this entry.
    pub language: LanguageCode,
    /// Native label.
    pub label: &'static str,
    /// Flag image URL.
    pub flag_src: String,
    /// Whether this is the active language.
    pub active: bool,
}

/// Picker entries for `available`, marking `current`.
#[must_use]
pub fn language_options(available: &[LanguageCode], current: LanguageCode) -> Vec<LanguageOption> {
    available
        .iter()
        .map(|&language| LanguageOption {
            language,
            label: language.label(),
            flag_src: flag_src(language),
            active: language == current,
        })
        .collect()
}

/// Flag image for a language's country.
#[must_use]
pub fn flag_src(language: LanguageCode) -> String {
    format!("https://flagcdn.com/{}.svg", language.flag_country())
}

/// Font class to apply on the document element for `language`.
#[must_use]
pub const fn font_class(language: LanguageCode) -> Option<&'static str> {
    if language.is_right_to_left() {
        Some(ARABIC_FONT_CLASS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_i18n::TranslationCatalog;

    #[test]
    fn paths_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path("/missing"), None);
    }

    #[test]
    fn nav_titles_exist_in_every_language() {
        let catalog = TranslationCatalog::builtin();
        for language in catalog.languages() {
            let table = catalog.table(language);
            let pages = NAV_ITEMS.iter().map(|item| item.page).chain(FOOTER_LINKS);
            for page in pages {
                assert!(
                    table.is_some_and(|table| table.contains_key(page.title_key())),
                    "{language} lacks {}",
                    page.title_key()
                );
            }
        }
    }

    #[test]
    fn picker_marks_current_language() {
        let options = language_options(&LanguageCode::all(), LanguageCode::En);
        let active: Vec<LanguageCode> = options
            .iter()
            .filter(|option| option.active)
            .map(|option| option.language)
            .collect();
        assert_eq!(active, vec![LanguageCode::En]);
        assert_eq!(options[2].flag_src, "https://flagcdn.com/sa.svg");
        assert_eq!(options[0].label, "Bahasa Indonesia");
    }

    #[test]
    fn only_arabic_gets_font_class() {
        assert_eq!(font_class(LanguageCode::Ar), Some(ARABIC_FONT_CLASS));
        assert_eq!(font_class(LanguageCode::Id), None);
    }
}
