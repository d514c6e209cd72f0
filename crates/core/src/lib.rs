#![deny(missing_docs)]
//! blockpage core: content page model, colour palette, link dispatch and routing.

/// Colour palette and token resolution.
pub mod color;
/// Core error type.
pub mod error;
/// Link classification for spans and action links.
pub mod link;
/// Content page data model.
pub mod model;
/// Page response decoding.
pub mod parse;
/// Route parsing and fetch state.
pub mod route;

pub use color::ColorStyle;
pub use error::{BlockpageError, Result};
pub use link::{NavigationAction, SpanLink};
pub use model::{Annotations, BlockKind, ContentBlock, Page, RichTextItem, plain_text};
pub use parse::{parse_page, parse_page_value};
pub use route::{FetchState, classify_response, page_data_path, page_id_from_path};
