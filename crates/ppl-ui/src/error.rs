//! Error types for the page scripts
//!
//! Missing page elements are not errors: every behavior silently skips
//! itself when its markup is absent. These cover browser failures and bad
//! page data.

use thiserror::Error;

/// Errors that can occur while binding or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No `window` global (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    DomOperation(String),

    /// Registering an event listener failed
    #[error("failed to add {event} listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// Page data or configuration was rejected
    #[error(transparent)]
    Core(#[from] ppl_core::Error),
}

impl UiError {
    /// Wrap a thrown JS value from a DOM call.
    pub fn dom(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        Self::DomOperation(format!("{context}: {value:?}"))
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::WindowNotAvailable.to_string(), "window is not available");

        let err = UiError::ListenerFailed {
            event: "click".to_string(),
            reason: "detached".to_string(),
        };
        assert_eq!(err.to_string(), "failed to add click listener: detached");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = ppl_core::Error::missing_year(2, "B", "arXiv");
        let err = UiError::from(core.clone());
        assert_eq!(err.to_string(), core.to_string());
    }
}
