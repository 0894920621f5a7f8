/// Filters handed to `cookies.getAll`
use crate::tab_context::TabContext;
use crate::version::Features;
use serde::Serialize;

/// Which cookies an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieScope {
    /// Cookies sent to the tab url, in the tab's store
    Domain,
    /// Every cookie in the tab's store (container)
    Container,
}

/// Query filter for the host cookie store
///
/// `first_party_domain` is `Some(None)` when the host supports first-party
/// isolation: it serializes as an explicit `null`, which asks the host for
/// cookies of every first-party domain. Older hosts reject the key, so it is
/// left out entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub store_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_party_domain: Option<Option<String>>,
}

impl CookieFilter {
    pub fn for_scope(scope: CookieScope, tab: &TabContext, features: Features) -> CookieFilter {
        let url = match scope {
            CookieScope::Domain => Some(tab.url.clone()),
            CookieScope::Container => None,
        };

        CookieFilter {
            url,
            store_id: tab.cookie_store_id.clone(),
            first_party_domain: features.first_party_domain().then_some(None),
        }
    }

    pub fn domain(tab: &TabContext, features: Features) -> CookieFilter {
        CookieFilter::for_scope(CookieScope::Domain, tab, features)
    }

    pub fn container(tab: &TabContext, features: Features) -> CookieFilter {
        CookieFilter::for_scope(CookieScope::Container, tab, features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn tab() -> TabContext {
        TabContext::new("https://www.example.com/page", "firefox-container-1", None)
    }

    #[test]
    fn test_domain_filter_recent_host() {
        let filter = CookieFilter::domain(&tab(), Features::from_version("60.0.1"));

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "url": "https://www.example.com/page",
                "storeId": "firefox-container-1",
                "firstPartyDomain": null,
            })
        );
    }

    #[test]
    fn test_domain_filter_old_host() {
        let filter = CookieFilter::domain(&tab(), Features::from_version("56.0"));
        let value = serde_json::to_value(&filter).unwrap();

        assert_eq!(value["url"], "https://www.example.com/page");
        assert_eq!(value["storeId"], "firefox-container-1");
        assert!(value.get("firstPartyDomain").is_none());
    }

    #[test]
    fn test_container_filter_never_has_url() {
        for version in ["56.0", "58.0", "59.0", "60.0.1"] {
            let filter = CookieFilter::container(&tab(), Features::from_version(version));
            let value = serde_json::to_value(&filter).unwrap();

            assert!(value.get("url").is_none(), "url present for {}", version);
            assert_eq!(value["storeId"], "firefox-container-1");
        }
    }

    #[test]
    fn test_first_party_domain_follows_version() {
        for (version, expected) in [("58.0", false), ("59.0", true), ("", false), ("71.0a1", true)] {
            let filter = CookieFilter::domain(&tab(), Features::from_version(version));
            let value = serde_json::to_value(&filter).unwrap();

            assert_eq!(value.get("firstPartyDomain").is_some(), expected, "version {:?}", version);
            if expected {
                assert_eq!(value["firstPartyDomain"], Value::Null);
            }
        }
    }
}
