/// Popup labels and their translations
use std::collections::HashMap;

/// Locales shipped with translated popup labels; English is built in
pub const SUPPORTED_LOCALES: [&str; 2] = ["fr", "de"];

/// Every translatable label of the popup, addressed by message key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    SearchCookieManager,
    SimpleCookieManager,
    DeleteCurrentCookies,
    DeleteContextCookies,
    DeleteCurrentLocalStorage,
    Options,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::SearchCookieManager,
        Label::SimpleCookieManager,
        Label::DeleteCurrentCookies,
        Label::DeleteContextCookies,
        Label::DeleteCurrentLocalStorage,
        Label::Options,
    ];

    /// Key in `_locales/<lang>/messages.json`
    pub fn message_key(&self) -> &'static str {
        match self {
            Label::SearchCookieManager => "search_cookie_manager",
            Label::SimpleCookieManager => "simple_cookie_manager",
            Label::DeleteCurrentCookies => "delete_current_cookies",
            Label::DeleteContextCookies => "delete_context_cookies",
            Label::DeleteCurrentLocalStorage => "delete_current_localstorage",
            Label::Options => "options",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Label::SearchCookieManager => "Search cookies for:",
            Label::SimpleCookieManager => "Manage all cookies",
            Label::DeleteCurrentCookies => "Delete cookies for this site",
            Label::DeleteContextCookies => "Delete cookies in this container",
            Label::DeleteCurrentLocalStorage => "Delete local storage for this site",
            Label::Options => "Options",
        }
    }
}

pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// Resolved text for every label
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    text: HashMap<Label, String>,
}

impl Labels {
    pub fn english() -> Labels {
        Labels {
            text: Label::ALL
                .iter()
                .map(|label| (*label, label.english().to_string()))
                .collect(),
        }
    }

    /// Translate the labels for `locale`
    ///
    /// Unsupported locales keep the English text without calling `lookup` at
    /// all. An empty message (missing key) also keeps the English text.
    pub fn resolve<F>(locale: &str, lookup: F) -> Labels
    where
        F: Fn(&str) -> String,
    {
        let mut labels = Labels::english();
        if !is_supported_locale(locale) {
            return labels;
        }

        for label in Label::ALL {
            let message = lookup(label.message_key());
            if !message.is_empty() {
                labels.text.insert(label, message);
            }
        }
        labels
    }

    pub fn get(&self, label: Label) -> &str {
        self.text.get(&label).map(String::as_str).unwrap_or_else(|| label.english())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}
