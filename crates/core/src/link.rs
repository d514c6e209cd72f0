//! Link dispatch.
//!
//! Two policies coexist on the site. Rich-text spans only distinguish
//! same-site routes (leading `/`) from everything else. Action links on
//! buttons and clickable headings also recognise device URIs (`mailto:`,
//! `tel:`, `sms:`, `geo:`), which are handed to the operating system instead
//! of a new browsing context.

/// Target of a link inside a rich-text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanLink<'a> {
    /// Same-site route, resolved by the host's client-side router.
    Internal(&'a str),
    /// Anything else, opened in a new browsing context without referrer.
    External(&'a str),
}

impl<'a> SpanLink<'a> {
    /// Classifies a span `href`. Absent and empty links yield `None`.
    pub fn classify(href: Option<&'a str>) -> Option<Self> {
        match href {
            None | Some("") => None,
            Some(href) if href.starts_with('/') => Some(Self::Internal(href)),
            Some(href) => Some(Self::External(href)),
        }
    }

    /// The raw link target.
    pub fn href(&self) -> &'a str {
        match self {
            Self::Internal(href) | Self::External(href) => href,
        }
    }
}

const DEVICE_SCHEMES: [&str; 4] = ["mailto:", "tel:", "sms:", "geo:"];
const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];

/// What activating an action link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Hand the URI to the operating system (mail client, dialer, maps).
    Device(String),
    /// Open in a new browsing context with `noopener,noreferrer`.
    External(String),
    /// Navigate within the site.
    Internal(String),
}

impl NavigationAction {
    /// Resolves an action link. The link is trimmed; blank links yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockpage_core::link::NavigationAction;
    ///
    /// assert_eq!(
    ///     NavigationAction::resolve(" TEL:+34600000000 "),
    ///     Some(NavigationAction::Device("TEL:+34600000000".to_string()))
    /// );
    /// assert_eq!(
    ///     NavigationAction::resolve("/proyectos"),
    ///     Some(NavigationAction::Internal("/proyectos".to_string()))
    /// );
    /// assert_eq!(NavigationAction::resolve("   "), None);
    /// ```
    pub fn resolve(link: &str) -> Option<Self> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }

        if has_scheme(link, &DEVICE_SCHEMES) {
            Some(Self::Device(link.to_string()))
        } else if has_scheme(link, &WEB_SCHEMES) {
            Some(Self::External(link.to_string()))
        } else {
            Some(Self::Internal(link.to_string()))
        }
    }

    /// The resolved link target.
    pub fn target(&self) -> &str {
        match self {
            Self::Device(t) | Self::External(t) | Self::Internal(t) => t,
        }
    }

    /// Returns true if the action leaves the site in a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

fn has_scheme(link: &str, schemes: &[&str]) -> bool {
    schemes.iter().any(|scheme| {
        link.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_links_dispatch_on_leading_slash() {
        assert_eq!(
            SpanLink::classify(Some("/proyectos")),
            Some(SpanLink::Internal("/proyectos"))
        );
        assert_eq!(
            SpanLink::classify(Some("https://example.com")),
            Some(SpanLink::External("https://example.com"))
        );
        assert_eq!(
            SpanLink::classify(Some("mailto:hola@example.com")),
            Some(SpanLink::External("mailto:hola@example.com"))
        );
        assert_eq!(SpanLink::classify(None), None);
        assert_eq!(SpanLink::classify(Some("")), None);
    }

    #[test]
    fn action_links_recognise_device_schemes() {
        for link in ["mailto:a@b.c", "tel:123", "SMS:123", "geo:40.4,-3.7"] {
            assert!(matches!(
                NavigationAction::resolve(link),
                Some(NavigationAction::Device(_))
            ));
        }
    }

    #[test]
    fn action_links_recognise_web_urls() {
        let action = NavigationAction::resolve("HTTPS://example.com").unwrap();
        assert!(action.opens_new_context());
        assert_eq!(action.target(), "HTTPS://example.com");
    }

    #[test]
    fn other_action_links_are_internal() {
        assert_eq!(
            NavigationAction::resolve("contacto"),
            Some(NavigationAction::Internal("contacto".to_string()))
        );
        assert_eq!(
            NavigationAction::resolve("httpfoo"),
            Some(NavigationAction::Internal("httpfoo".to_string()))
        );
    }

    #[test]
    fn multibyte_links_do_not_panic() {
        assert_eq!(
            NavigationAction::resolve("ñ"),
            Some(NavigationAction::Internal("ñ".to_string()))
        );
    }
}
