/// Snapshot of the tab the popup was opened over
use crate::error::MenuError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Shown when the page has no favicon
pub const FALLBACK_FAVICON: &str = "icons/icon48.png";

/// Store used by tabs outside any container
pub const DEFAULT_STORE_ID: &str = "firefox-default";

fn default_store_id() -> String {
    DEFAULT_STORE_ID.to_string()
}

/// Information about the active tab, as returned by `tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContext {
    pub url: String,
    #[serde(default = "default_store_id")]
    pub cookie_store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabContext {
    pub fn new(url: &str, cookie_store_id: &str, fav_icon_url: Option<&str>) -> TabContext {
        TabContext {
            url: url.to_string(),
            cookie_store_id: cookie_store_id.to_string(),
            fav_icon_url: fav_icon_url.map(str::to_string),
        }
    }

    /// Hostname of the tab url; empty for urls without a host (about:, data:)
    pub fn hostname(&self) -> Result<String, MenuError> {
        let parsed = Url::parse(&self.url)?;
        Ok(parsed.host_str().unwrap_or_default().to_string())
    }

    /// Icon to show next to the hostname, never empty
    pub fn favicon(&self) -> &str {
        match self.fav_icon_url.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => FALLBACK_FAVICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname() {
        let tab = TabContext::new("https://www.example.com:8443/path?q=1", "firefox-default", None);
        assert_eq!(tab.hostname().unwrap(), "www.example.com");
    }

    #[test]
    fn test_hostname_without_host() {
        let tab = TabContext::new("about:blank", "firefox-default", None);
        assert_eq!(tab.hostname().unwrap(), "");
    }

    #[test]
    fn test_hostname_invalid_url() {
        let tab = TabContext::new("not a url", "firefox-default", None);
        assert!(matches!(tab.hostname(), Err(MenuError::InvalidUrl(_))));
    }

    #[test]
    fn test_favicon_fallback() {
        let tab = TabContext::new("https://example.com", "firefox-default", None);
        assert_eq!(tab.favicon(), FALLBACK_FAVICON);

        let tab = TabContext::new("https://example.com", "firefox-default", Some(""));
        assert_eq!(tab.favicon(), FALLBACK_FAVICON);

        let tab = TabContext::new(
            "https://example.com",
            "firefox-default",
            Some("https://example.com/favicon.ico"),
        );
        assert_eq!(tab.favicon(), "https://example.com/favicon.ico");
    }

    #[test]
    fn test_deserialize_host_tab() {
        let json = r#"{
            "id": 7,
            "url": "https://example.com/",
            "cookieStoreId": "firefox-container-2",
            "favIconUrl": "https://example.com/favicon.ico",
            "active": true
        }"#;

        let tab: TabContext = serde_json::from_str(json).unwrap();

        assert_eq!(tab.cookie_store_id, "firefox-container-2");
        assert_eq!(tab.fav_icon_url.as_deref(), Some("https://example.com/favicon.ico"));
    }

    #[test]
    fn test_deserialize_missing_store_and_icon() {
        let tab: TabContext = serde_json::from_str(r#"{"url": "https://example.com/"}"#).unwrap();

        assert_eq!(tab.cookie_store_id, DEFAULT_STORE_ID);
        assert_eq!(tab.favicon(), FALLBACK_FAVICON);
    }
}
