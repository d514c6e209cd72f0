//! Page views for each loading state of a content page.
//!
//! Only the success state shows rendered blocks; the others show a heading,
//! a message and (for failures) a button back to the home page.

use crate::html::{escape_attr, escape_text, page_to_html};
use crate::renderer::{Options, RenderedPage, render_page};
use blockpage_core::{FetchState, NavigationAction, classify_response};
use serde::Serialize;

const LOADING_HEADING: &str = "Cargando página…";
const LOADING_MESSAGE: &str = "Accediendo a la página solicitada...";
const ERROR_HEADING: &str = "Ups…";
const ERROR_MESSAGE: &str = "No hemos podido cargar la página solicitada.";
const ERROR_ACTION: &str = "Volver al inicio";
const NOT_FOUND_HEADING: &str = "Error 404";
const NOT_FOUND_MESSAGE: &str = "Lo sentimos, la página que buscas no se ha encontrado.";
const NOT_FOUND_ACTION: &str = "Ir a la página de inicio";

/// How an action link is followed.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    /// Client-side navigation.
    Internal,
    /// New browsing context, `noopener,noreferrer`.
    External,
    /// Handed to the operating system.
    Device,
}

/// A button that navigates somewhere.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionLink {
    /// Button label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Dispatch kind.
    pub kind: LinkKind,
}

impl ActionLink {
    /// Builds a button from a raw link. Blank links yield `None`.
    pub fn new(label: impl Into<String>, link: &str) -> Option<Self> {
        let action = NavigationAction::resolve(link)?;
        let kind = match action {
            NavigationAction::Internal(_) => LinkKind::Internal,
            NavigationAction::External(_) => LinkKind::External,
            NavigationAction::Device(_) => LinkKind::Device,
        };
        Some(Self {
            label: label.into(),
            href: action.target().to_string(),
            kind,
        })
    }

    fn to_html(&self) -> String {
        let extra = match self.kind {
            LinkKind::Internal => " data-link=\"internal\"",
            LinkKind::External => " target=\"_blank\" rel=\"noopener noreferrer\"",
            LinkKind::Device => "",
        };
        format!(
            "<a class=\"button\" href=\"{}\"{}>{}</a>",
            escape_attr(&self.href),
            extra,
            escape_text(&self.label)
        )
    }
}

/// What the content route shows.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageView {
    /// Request pending.
    Loading {
        /// Heading text.
        heading: String,
        /// Body text.
        message: String,
    },
    /// Page loaded and rendered.
    Content {
        /// Rendered page.
        page: RenderedPage,
    },
    /// Loading failed.
    Error {
        /// Heading text.
        heading: String,
        /// Body text.
        message: String,
        /// Recovery button.
        action: Option<ActionLink>,
    },
    /// No such page, or not a content route.
    NotFound {
        /// Heading text.
        heading: String,
        /// Body text.
        message: String,
        /// Recovery button.
        action: Option<ActionLink>,
    },
}

impl PageView {
    /// Chooses the view for a route's page id and loading state.
    ///
    /// Without a page id the route is not a content page and always shows
    /// the 404 view.
    pub fn for_state(page_id: Option<&str>, state: &FetchState, options: &Options) -> Self {
        if page_id.is_none() {
            return Self::not_found(options);
        }

        match state {
            FetchState::Idle | FetchState::Loading => Self::Loading {
                heading: LOADING_HEADING.to_string(),
                message: LOADING_MESSAGE.to_string(),
            },
            FetchState::Success(page) => Self::Content {
                page: render_page(page, options),
            },
            FetchState::Error => Self::Error {
                heading: ERROR_HEADING.to_string(),
                message: ERROR_MESSAGE.to_string(),
                action: ActionLink::new(ERROR_ACTION, &options.home_path),
            },
            FetchState::NotFound => Self::not_found(options),
        }
    }

    /// Chooses the view for a completed page data request.
    pub fn from_response(page_id: &str, status: u16, body: &str, options: &Options) -> Self {
        let result = classify_response(page_id, status, body);
        if let Err(err) = &result
            && !err.is_not_found()
        {
            log::warn!("Error fetching page {}: {}", page_id, err);
        }
        Self::for_state(Some(page_id), &FetchState::from_result(result), options)
    }

    fn not_found(options: &Options) -> Self {
        Self::NotFound {
            heading: NOT_FOUND_HEADING.to_string(),
            message: NOT_FOUND_MESSAGE.to_string(),
            action: ActionLink::new(NOT_FOUND_ACTION, &options.home_path),
        }
    }

    /// Renders the view as HTML.
    pub fn to_html(&self) -> String {
        match self {
            Self::Loading { heading, message } => format!(
                "<main><h1>{}</h1><p>{}</p></main>",
                escape_text(heading),
                escape_text(message)
            ),
            Self::Content { page } => page_to_html(page),
            Self::Error {
                heading,
                message,
                action,
            }
            | Self::NotFound {
                heading,
                message,
                action,
            } => format!(
                "<main><h1>{}</h1><p>{}</p>{}</main>",
                escape_text(heading),
                escape_text(message),
                action.as_ref().map(ActionLink::to_html).unwrap_or_default()
            ),
        }
    }
}
