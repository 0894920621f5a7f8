/// Persisted addon settings and how the manager page gets opened
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Keys read from `storage.local`
pub const SETTINGS_KEYS: [&str; 2] = ["addonSize", "open_in_new_tab"];

/// Page of the full cookie manager, relative to the extension root
pub const MANAGER_PAGE: &str = "cookies.html";

pub const OPTIMAL_WINDOW_WIDTH: u32 = 1280;
pub const OPTIMAL_WINDOW_HEIGHT: u32 = 810;

/// Narrower windows break the manager layout
pub const MIN_WINDOW_WIDTH: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonSize {
    pub width: u32,
    pub height: u32,
}

/// Settings written by the manager page, read-only here
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "addonSize", default)]
    pub addon_size: Option<AddonSize>,
    #[serde(default)]
    pub open_in_new_tab: Option<bool>,
}

impl Settings {
    pub fn opens_in_new_tab(&self) -> bool {
        self.open_in_new_tab == Some(true)
    }

    /// Size of the manager window
    ///
    /// The remembered size wins only if it is wide enough for the layout and
    /// at least as tall as the default; anything smaller falls back to the
    /// default size.
    pub fn window_size(&self) -> AddonSize {
        match self.addon_size {
            Some(size) if size.width >= MIN_WINDOW_WIDTH && size.height >= OPTIMAL_WINDOW_HEIGHT => size,
            _ => AddonSize {
                width: OPTIMAL_WINDOW_WIDTH,
                height: OPTIMAL_WINDOW_HEIGHT,
            },
        }
    }
}

/// Argument of `windows.create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWindowData {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl CreateWindowData {
    pub fn panel(url: String, size: AddonSize) -> CreateWindowData {
        CreateWindowData {
            kind: "panel".to_string(),
            url,
            width: size.width,
            height: size.height,
        }
    }
}

/// Url of the manager page
///
/// `parent_url` is the page whose cookies should be searched; None opens the
/// manager without a search. Windows get an extra `type=window` so the page
/// knows it may resize itself.
pub fn manager_url(parent_url: Option<&str>, as_window: bool) -> String {
    let encoded: String = form_urlencoded::byte_serialize(parent_url.unwrap_or_default().as_bytes()).collect();
    let mut url = format!("{}?parent_url={}", MANAGER_PAGE, encoded);
    if as_window {
        url.push_str("&type=window");
    }
    url
}
