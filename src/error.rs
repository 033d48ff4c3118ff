/// Error types for the catalog enhancer
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while wiring the page or touching browser APIs
#[derive(Error, Debug)]
pub enum EnhancerError {
    /// A required element was not found on the page
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// A browser API call was rejected
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Reading or writing local storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failed to (de)serialize persisted or authored data
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration passed by the host page
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsValue> for EnhancerError {
    fn from(value: JsValue) -> Self {
        EnhancerError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<EnhancerError> for JsValue {
    fn from(err: EnhancerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
