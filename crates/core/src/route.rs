//! Content page routing and fetch state.
//!
//! Content pages live under `/id/<pageId>` and their data under
//! `/id/<pageId>.json`. The host performs the request; this module only
//! derives the URL and turns the response into a [`FetchState`].

use crate::model::Page;
use crate::parse::parse_page;
use crate::{BlockpageError, Result};

/// First path segment of a content page route.
pub const PAGE_ROUTE_SEGMENT: &str = "id";

/// Extracts the page id from a route path such as `/id/abc123`.
///
/// Empty segments are ignored, so `//id//abc/` also yields `abc`. Extra
/// trailing segments are allowed.
///
/// # Examples
///
/// ```
/// use blockpage_core::route::page_id_from_path;
///
/// assert_eq!(page_id_from_path("/id/abc123"), Some("abc123"));
/// assert_eq!(page_id_from_path("/proyectos"), None);
/// assert_eq!(page_id_from_path("/id/"), None);
/// ```
pub fn page_id_from_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(PAGE_ROUTE_SEGMENT), Some(id)) => Some(id),
        _ => None,
    }
}

/// Path of the JSON document holding a page's data.
pub fn page_data_path(page_id: &str) -> String {
    format!("/{}/{}.json", PAGE_ROUTE_SEGMENT, page_id)
}

/// Turns a page data response into a typed page.
///
/// 404 maps to [`BlockpageError::NotFound`], other non-2xx statuses to
/// [`BlockpageError::Http`]; a 2xx body is decoded with [`parse_page`].
pub fn classify_response(page_id: &str, status: u16, body: &str) -> Result<Page> {
    match status {
        404 => Err(BlockpageError::not_found(page_id)),
        200..=299 => parse_page(body),
        status => Err(BlockpageError::Http { status }),
    }
}

/// Loading state of a content page.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No request issued yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Page data available.
    Success(Page),
    /// Request failed for a reason other than a missing page.
    Error,
    /// The page does not exist.
    NotFound,
}

impl FetchState {
    /// Maps the outcome of a page load to a state.
    pub fn from_result(result: Result<Page>) -> Self {
        match result {
            Ok(page) => Self::Success(page),
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(_) => Self::Error,
        }
    }

    /// Returns true while the page is not yet available.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_page_id() {
        assert_eq!(page_id_from_path("/id/abc"), Some("abc"));
        assert_eq!(page_id_from_path("id/abc/extra"), Some("abc"));
        assert_eq!(page_id_from_path("//id//abc/"), Some("abc"));
    }

    #[test]
    fn rejects_other_routes() {
        assert_eq!(page_id_from_path("/"), None);
        assert_eq!(page_id_from_path(""), None);
        assert_eq!(page_id_from_path("/id"), None);
        assert_eq!(page_id_from_path("/ids/abc"), None);
        assert_eq!(page_id_from_path("/foo/id/abc"), None);
    }

    #[test]
    fn builds_data_path() {
        assert_eq!(page_data_path("abc"), "/id/abc.json");
    }

    #[test]
    fn classifies_statuses() {
        let body = r#"{"current_page_title": "T", "blocks": []}"#;
        assert!(classify_response("p", 200, body).is_ok());
        assert!(classify_response("p", 404, body).unwrap_err().is_not_found());
        assert!(matches!(
            classify_response("p", 500, body),
            Err(BlockpageError::Http { status: 500 })
        ));
        assert!(matches!(
            classify_response("p", 200, "<html>"),
            Err(BlockpageError::Json(_))
        ));
    }

    #[test]
    fn maps_results_to_states() {
        let body = r#"{"current_page_title": "T", "blocks": []}"#;
        assert!(matches!(
            FetchState::from_result(classify_response("p", 200, body)),
            FetchState::Success(_)
        ));
        assert_eq!(
            FetchState::from_result(classify_response("p", 404, "")),
            FetchState::NotFound
        );
        assert_eq!(
            FetchState::from_result(classify_response("p", 502, "")),
            FetchState::Error
        );
        assert!(FetchState::Loading.is_pending());
        assert!(!FetchState::Error.is_pending());
    }
}
