use thiserror::Error;

/// Errors that can occur while loading a content page.
///
/// Rendering itself never fails; these only come from the layers around it
/// (decoding a page response, classifying the HTTP status that carried it,
/// validating options).
#[derive(Debug, Error)]
pub enum BlockpageError {
    /// The page response was not valid JSON or did not match the block model.
    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
    /// The content API reported that the page does not exist.
    #[error("Page not found: {page_id}")]
    NotFound {
        /// Identifier of the requested page.
        page_id: String,
    },
    /// The content API answered with a non-success status other than 404.
    #[error("HTTP error: status {status}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
    },
    /// Options supplied by the host could not be used.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl BlockpageError {
    /// Create a not-found error for a page id
    pub fn not_found(page_id: impl Into<String>) -> Self {
        Self::NotFound {
            page_id: page_id.into(),
        }
    }

    /// Returns true if the error means the page does not exist.
    ///
    /// Views use this to pick the 404 screen instead of the generic error one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, BlockpageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_http_status() {
        let err = BlockpageError::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP error: status 503");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected() {
        let err = BlockpageError::not_found("abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Page not found: abc");
    }

    #[test]
    fn wraps_json_errors() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: BlockpageError = json_err.into();
        assert!(err.to_string().starts_with("Invalid page data:"));
    }
}
