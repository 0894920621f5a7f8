/// Cookie records returned by the host and the removal requests built from them
use serde::{Deserialize, Serialize};

/// A cookie as returned by `cookies.getAll`; unused fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub domain: String,
    #[serde(default = "root_path")]
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    pub store_id: String,
    #[serde(default)]
    pub first_party_domain: Option<String>,
}

fn root_path() -> String {
    "/".to_string()
}

/// Argument of `cookies.remove`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalDetails {
    pub url: String,
    pub name: String,
    pub store_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_party_domain: Option<String>,
}

impl Cookie {
    /// Url the cookie would be sent to, used to address it for removal
    ///
    /// Host-only and domain cookies look the same here: the leading dot of a
    /// domain cookie is dropped, which still matches it.
    pub fn removal_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        let host = self.domain.trim_start_matches('.');
        format!("{}://{}{}", scheme, host, self.path)
    }

    pub fn removal_details(&self) -> RemovalDetails {
        RemovalDetails {
            url: self.removal_url(),
            name: self.name.clone(),
            store_id: self.store_id.clone(),
            first_party_domain: self.first_party_domain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(domain: &str, path: &str, secure: bool) -> Cookie {
        Cookie {
            name: "sid".to_string(),
            domain: domain.to_string(),
            path: path.to_string(),
            secure,
            store_id: "firefox-default".to_string(),
            first_party_domain: None,
        }
    }

    #[test]
    fn test_removal_url_secure_domain_cookie() {
        assert_eq!(cookie(".example.com", "/a", true).removal_url(), "https://example.com/a");
    }

    #[test]
    fn test_removal_url_plain_host_cookie() {
        assert_eq!(cookie("www.example.com", "/", false).removal_url(), "http://www.example.com/");
    }

    #[test]
    fn test_removal_details_keep_first_party_domain() {
        let mut isolated = cookie("example.com", "/", true);
        isolated.first_party_domain = Some("example.com".to_string());

        let value = serde_json::to_value(isolated.removal_details()).unwrap();

        assert_eq!(value["url"], "https://example.com/");
        assert_eq!(value["name"], "sid");
        assert_eq!(value["storeId"], "firefox-default");
        assert_eq!(value["firstPartyDomain"], "example.com");
    }

    #[test]
    fn test_removal_details_without_first_party_domain() {
        let value = serde_json::to_value(cookie("example.com", "/", true).removal_details()).unwrap();
        assert!(value.get("firstPartyDomain").is_none());
    }

    #[test]
    fn test_deserialize_host_cookie() {
        let json = r#"{
            "name": "sid",
            "value": "abc",
            "domain": ".example.com",
            "hostOnly": false,
            "path": "/",
            "secure": true,
            "httpOnly": true,
            "session": true,
            "storeId": "firefox-container-3",
            "firstPartyDomain": ""
        }"#;

        let cookie: Cookie = serde_json::from_str(json).unwrap();

        assert_eq!(cookie.store_id, "firefox-container-3");
        assert_eq!(cookie.first_party_domain.as_deref(), Some(""));
        assert_eq!(cookie.removal_url(), "https://example.com/");
    }
}
