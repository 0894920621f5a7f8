/// Error type shared by the controller and the host bridge
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// A host API promise was rejected
    #[error("host call failed: {0}")]
    Host(String),

    /// A value could not be converted between Rust and JavaScript
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("no active tab in the current window")]
    NoActiveTab,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// An action was dispatched before the popup finished loading
    #[error("popup is not initialized")]
    NotReady,
}

impl MenuError {
    pub fn host(err: JsValue) -> MenuError {
        MenuError::Host(describe(&err))
    }
}

impl From<serde_wasm_bindgen::Error> for MenuError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        MenuError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for MenuError {
    fn from(err: url::ParseError) -> Self {
        MenuError::InvalidUrl(err.to_string())
    }
}

/// Best-effort text for a rejected promise value
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
