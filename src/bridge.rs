/// `Host` implemented over the WebExtension APIs
use crate::cookie_filter::CookieFilter;
use crate::cookies::{Cookie, RemovalDetails};
use crate::error::MenuError;
use crate::host::Host;
use crate::settings::{CreateWindowData, SETTINGS_KEYS, Settings};
use crate::tab_context::TabContext;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/menu.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getBrowserVersion() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getAllCookies(filter: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeCookie(details: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeLocalStorage(hostnames: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getLocalStorageLength() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getSettings(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createWindow(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<JsValue, JsValue>;

    fn getUILanguage() -> String;

    fn getMessage(key: &str) -> String;
}

/// Convert to a plain JS object; `None` inside `Some` becomes `null`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MenuError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    Ok(value.serialize(&serializer)?)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserHost;

impl Host for BrowserHost {
    async fn active_tab(&self) -> Result<TabContext, MenuError> {
        let tab_js = getActiveTab().await.map_err(MenuError::host)?;
        if tab_js.is_null() || tab_js.is_undefined() {
            return Err(MenuError::NoActiveTab);
        }
        Ok(serde_wasm_bindgen::from_value(tab_js)?)
    }

    async fn browser_version(&self) -> Result<String, MenuError> {
        let version_js = getBrowserVersion().await.map_err(MenuError::host)?;
        Ok(serde_wasm_bindgen::from_value(version_js)?)
    }

    async fn get_all_cookies(&self, filter: &CookieFilter) -> Result<Vec<Cookie>, MenuError> {
        let cookies_js = getAllCookies(to_js(filter)?).await.map_err(MenuError::host)?;
        Ok(serde_wasm_bindgen::from_value(cookies_js)?)
    }

    async fn remove_cookie(&self, details: &RemovalDetails) -> Result<(), MenuError> {
        removeCookie(to_js(details)?).await.map_err(MenuError::host)?;
        Ok(())
    }

    async fn clear_local_storage(&self, hostnames: &[String]) -> Result<(), MenuError> {
        removeLocalStorage(to_js(&hostnames)?).await.map_err(MenuError::host)?;
        Ok(())
    }

    async fn local_storage_length(&self) -> Result<u32, MenuError> {
        let length_js = getLocalStorageLength().await.map_err(MenuError::host)?;
        Ok(serde_wasm_bindgen::from_value(length_js)?)
    }

    async fn read_settings(&self) -> Result<Settings, MenuError> {
        let settings_js = getSettings(to_js(&SETTINGS_KEYS)?).await.map_err(MenuError::host)?;
        if settings_js.is_null() || settings_js.is_undefined() {
            return Ok(Settings::default());
        }
        Ok(serde_wasm_bindgen::from_value(settings_js)?)
    }

    async fn create_tab(&self, url: &str) -> Result<(), MenuError> {
        createTab(url).await.map_err(MenuError::host)?;
        log::info!("The tab has been created");
        Ok(())
    }

    async fn create_window(&self, data: &CreateWindowData) -> Result<(), MenuError> {
        createWindow(to_js(data)?).await.map_err(MenuError::host)?;
        log::info!("The panel has been created");
        Ok(())
    }

    async fn open_options_page(&self) -> Result<(), MenuError> {
        openOptionsPage().await.map_err(MenuError::host)?;
        Ok(())
    }

    fn ui_language(&self) -> String {
        getUILanguage()
    }

    fn message(&self, key: &str) -> String {
        getMessage(key)
    }

    fn close_popup(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to close");
            return;
        };
        if let Err(e) = window.close() {
            log::warn!("closing the popup failed: {:?}", e);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::version::Features;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_filter_keeps_explicit_null() {
        let tab = TabContext::new("https://example.com/", "firefox-default", None);
        let filter = CookieFilter::container(&tab, Features::from_version("60.0"));

        let value = to_js(&filter).unwrap();

        let key = JsValue::from_str("firstPartyDomain");
        assert!(js_sys::Reflect::has(&value, &key).unwrap());
        assert!(js_sys::Reflect::get(&value, &key).unwrap().is_null());
        assert!(!js_sys::Reflect::has(&value, &JsValue::from_str("url")).unwrap());
    }

    #[wasm_bindgen_test]
    fn test_settings_from_plain_object() {
        let raw = js_sys::JSON::parse(r#"{"addonSize": {"width": 900, "height": 900}}"#).unwrap();

        let settings: Settings = serde_wasm_bindgen::from_value(raw).unwrap();

        assert_eq!(settings.window_size().width, 900);
        assert!(!settings.opens_in_new_tab());
    }
}
