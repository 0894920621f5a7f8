/// Host version parsing and version-gated features
use regex::Regex;
use std::sync::OnceLock;

/// `browsingData.removeLocalStorage` accepts `hostnames` from this release on
pub const LOCAL_STORAGE_MIN_VERSION: u32 = 58;

/// `cookies.getAll` understands `firstPartyDomain` from this release on
pub const FIRST_PARTY_DOMAIN_MIN_VERSION: u32 = 59;

fn leading_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)").expect("static regex"))
}

/// Parse the major version from a host version string
///
/// Only the leading integer of the first dotted component counts, so
/// "60.0.1" and "60a1" are both 60. Returns None when there is no
/// leading integer at all.
pub fn major_version(version: &str) -> Option<u32> {
    let first = version.split('.').next()?;
    leading_digits()
        .captures(first)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Features the popup turns on depending on the host release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    pub major: Option<u32>,
}

impl Features {
    pub fn from_version(version: &str) -> Features {
        Features {
            major: major_version(version),
        }
    }

    fn at_least(&self, min: u32) -> bool {
        self.major.is_some_and(|major| major >= min)
    }

    pub fn local_storage(&self) -> bool {
        self.at_least(LOCAL_STORAGE_MIN_VERSION)
    }

    pub fn first_party_domain(&self) -> bool {
        self.at_least(FIRST_PARTY_DOMAIN_MIN_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_version() {
        assert_eq!(major_version("60.0.1"), Some(60));
        assert_eq!(major_version("56.0"), Some(56));
        assert_eq!(major_version("115"), Some(115));
        assert_eq!(major_version("60a1"), Some(60));
    }

    #[test]
    fn test_major_version_garbage() {
        assert_eq!(major_version(""), None);
        assert_eq!(major_version("nightly"), None);
        assert_eq!(major_version(".60"), None);
    }

    #[test]
    fn test_features_recent_release() {
        let features = Features::from_version("60.0.1");
        assert_eq!(features.major, Some(60));
        assert!(features.local_storage());
        assert!(features.first_party_domain());
    }

    #[test]
    fn test_features_old_release() {
        let features = Features::from_version("56.0");
        assert!(!features.local_storage());
        assert!(!features.first_party_domain());
    }

    #[test]
    fn test_features_boundaries() {
        let v58 = Features::from_version("58.0");
        assert!(v58.local_storage());
        assert!(!v58.first_party_domain());

        let v59 = Features::from_version("59.0b3");
        assert!(v59.local_storage());
        assert!(v59.first_party_domain());
    }

    #[test]
    fn test_features_unknown_version() {
        let features = Features::from_version("unknown");
        assert!(!features.local_storage());
        assert!(!features.first_party_domain());
    }
}
