//! Context values shared with every component.

use std::cell::RefCell;
use std::rc::Rc;

use mizan_forms::Notice;
use mizan_i18n::{LanguageCode, LocalizationStore, TextDirection, TranslationCatalog};
use yew::prelude::*;

use crate::app::preferences::LocalStoragePreferences;

pub(crate) type SharedStore = Rc<RefCell<LocalizationStore<LocalStoragePreferences>>>;

/// Localization handle: the app-wide store plus the language it last rendered.
#[derive(Clone)]
pub(crate) struct I18nCtx {
    store: SharedStore,
    language: LanguageCode,
    on_select: Callback<LanguageCode>,
}

impl PartialEq for I18nCtx {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl I18nCtx {
    pub(crate) fn new(
        store: SharedStore,
        language: LanguageCode,
        on_select: Callback<LanguageCode>,
    ) -> Self {
        Self {
            store,
            language,
            on_select,
        }
    }

    /// Store over browser storage, used only when no provider is mounted.
    pub(crate) fn detached() -> Self {
        let store = LocalizationStore::initialize(
            TranslationCatalog::builtin(),
            LocalStoragePreferences,
        );
        let language = store.current_language();
        Self::new(Rc::new(RefCell::new(store)), language, Callback::noop())
    }

    pub(crate) fn t(&self, key: &str) -> String {
        self.store.borrow().text(key)
    }

    pub(crate) const fn language(&self) -> LanguageCode {
        self.language
    }

    pub(crate) const fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub(crate) fn available(&self) -> Vec<LanguageCode> {
        self.store.borrow().available_languages()
    }

    pub(crate) fn select(&self, language: LanguageCode) {
        self.on_select.emit(language);
    }
}

/// Toast dispatcher.
#[derive(Clone, PartialEq, Default)]
pub(crate) struct ToastCtx {
    pub(crate) notify: Callback<Notice>,
}

#[hook]
pub(crate) fn use_i18n() -> I18nCtx {
    use_context::<I18nCtx>().unwrap_or_else(I18nCtx::detached)
}

#[hook]
pub(crate) fn use_toasts() -> ToastCtx {
    use_context::<ToastCtx>().unwrap_or_default()
}
