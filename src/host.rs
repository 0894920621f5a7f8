/// Everything the popup asks of the browser
///
/// The browser implementation lives in `bridge`; tests drive the controller
/// with an in-memory host instead.
use crate::cookie_filter::CookieFilter;
use crate::cookies::{Cookie, RemovalDetails};
use crate::error::MenuError;
use crate::settings::{CreateWindowData, Settings};
use crate::tab_context::TabContext;

// Futures only ever run on the popup's single thread, so no Send bounds.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Active tab of the current window
    async fn active_tab(&self) -> Result<TabContext, MenuError>;

    /// `runtime.getBrowserInfo().version`, e.g. "60.0.1"
    async fn browser_version(&self) -> Result<String, MenuError>;

    async fn get_all_cookies(&self, filter: &CookieFilter) -> Result<Vec<Cookie>, MenuError>;

    async fn remove_cookie(&self, details: &RemovalDetails) -> Result<(), MenuError>;

    async fn clear_local_storage(&self, hostnames: &[String]) -> Result<(), MenuError>;

    /// Number of local storage items of the page in the active tab
    async fn local_storage_length(&self) -> Result<u32, MenuError>;

    async fn read_settings(&self) -> Result<Settings, MenuError>;

    async fn create_tab(&self, url: &str) -> Result<(), MenuError>;

    async fn create_window(&self, data: &CreateWindowData) -> Result<(), MenuError>;

    async fn open_options_page(&self) -> Result<(), MenuError>;

    fn ui_language(&self) -> String;

    /// Localized message for `key`, empty when there is none
    fn message(&self, key: &str) -> String;

    fn close_popup(&self);
}
