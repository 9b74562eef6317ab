//! Qualification of relative links against the scanned page's location.

use std::sync::LazyLock;

use regex_lite::Regex;
use url::Url;

use crate::error::{MfError, MfResult};

/// Any URI scheme: `http://`, but also `mailto:`, `data:` or `urn:`.
static ABSOLUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:")
        .unwrap_or_else(|e| unreachable!("absolute link pattern is a valid regex: {e}"))
});

/// The location of the scanned document: `scheme://host[:port]` plus path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    scheme: String,
    origin: String,
    path: String,
}

impl DocumentLocation {
    /// ## Summary
    /// Parses the document URL.
    ///
    /// ## Errors
    /// Returns an error if `location` is not an absolute URL with a host.
    pub fn parse(location: &str) -> MfResult<Self> {
        let url = Url::parse(location)?;
        let Some(host) = url.host_str() else {
            return Err(MfError::InvalidLocation(format!(
                "{location} has no host"
            )));
        };

        let origin = match url.port() {
            Some(port) => format!("{}://{host}:{port}", url.scheme()),
            None => format!("{}://{host}", url.scheme()),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            origin,
            path: url.path().to_string(),
        })
    }

    /// Path segments of the directory holding the document.
    fn directory_segments(&self) -> Vec<&str> {
        let mut parts: Vec<&str> = self.path.split('/').collect();
        parts.pop();
        parts
    }

    /// Resolves `href` to an absolute link.
    ///
    /// - links with a scheme are returned unchanged,
    /// - a leading `./` is dropped,
    /// - `//host/x` takes the document's scheme,
    /// - `/x` is appended to the origin,
    /// - a run of leading `../` climbs one directory per `../` in the link,
    /// - anything else is resolved against the document's directory.
    #[must_use]
    pub fn qualify(&self, href: &str) -> String {
        let href = href.trim();
        let href = href.strip_prefix("./").unwrap_or(href);

        if ABSOLUTE.is_match(href) {
            return href.to_string();
        }

        if href.starts_with("//") {
            return format!("{}:{href}", self.scheme);
        }

        if href.starts_with('/') {
            return format!("{}{href}", self.origin);
        }

        let rest = href.trim_start_matches("../");
        if rest.len() != href.len() && !rest.is_empty() && !rest.starts_with('/') {
            let references = href.matches("../").count();
            let mut parts = self.directory_segments();
            parts.truncate(parts.len().saturating_sub(references));
            return format!("{}{}{rest}", self.origin, join_path(&parts));
        }

        format!(
            "{}{}{href}",
            self.origin,
            join_path(&self.directory_segments())
        )
    }
}

/// `/a/b/` from `["", "a", "b"]`; `/` when empty.
fn join_path(parts: &[&str]) -> String {
    let mut path = String::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        path.push('/');
        path.push_str(part);
    }
    path.push('/');
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> DocumentLocation {
        DocumentLocation::parse("http://example.com:8080/events/2008/index.html")
            .expect("valid location")
    }

    #[test]
    fn absolute_passes_through() {
        assert_eq!(
            location().qualify("https://other.org/a?b=c"),
            "https://other.org/a?b=c"
        );
    }

    #[test]
    fn schemes_without_authority_pass_through() {
        let loc = location();
        assert_eq!(
            loc.qualify("data:image/png;base64,iVBORw0KGgo="),
            "data:image/png;base64,iVBORw0KGgo="
        );
        assert_eq!(
            loc.qualify("mailto:jane@example.com"),
            "mailto:jane@example.com"
        );
        assert_eq!(loc.qualify("urn:isbn:0451450523"), "urn:isbn:0451450523");
        assert_eq!(loc.qualify("tel:+1-555-0100"), "tel:+1-555-0100");
    }

    #[test]
    fn colon_later_in_path_is_relative() {
        assert_eq!(
            location().qualify("notes/10:30.html"),
            "http://example.com:8080/events/2008/notes/10:30.html"
        );
    }

    #[test]
    fn root_relative_uses_origin() {
        assert_eq!(
            location().qualify("/people/jane"),
            "http://example.com:8080/people/jane"
        );
    }

    #[test]
    fn protocol_relative_uses_scheme() {
        assert_eq!(
            location().qualify("//cdn.example.com/x.png"),
            "http://cdn.example.com/x.png"
        );
    }

    #[test]
    fn up_reference_walks_path() {
        assert_eq!(
            location().qualify("../jane.html"),
            "http://example.com:8080/events/jane.html"
        );
        assert_eq!(
            location().qualify("../../jane.html"),
            "http://example.com:8080/jane.html"
        );
    }

    #[test]
    fn up_reference_past_root_stops_at_root() {
        assert_eq!(
            location().qualify("../../../../jane.html"),
            "http://example.com:8080/jane.html"
        );
    }

    #[test]
    fn relative_uses_current_directory() {
        assert_eq!(
            location().qualify("jane.html"),
            "http://example.com:8080/events/2008/jane.html"
        );
        assert_eq!(
            location().qualify("./jane.html"),
            "http://example.com:8080/events/2008/jane.html"
        );
    }

    #[test]
    fn default_port_is_omitted() {
        let loc = DocumentLocation::parse("https://example.com/").expect("valid location");
        assert_eq!(loc.qualify("a"), "https://example.com/a");
    }

    #[test]
    fn location_without_host_is_rejected() {
        assert!(DocumentLocation::parse("mailto:jane@example.com").is_err());
        assert!(DocumentLocation::parse("not a url").is_err());
    }
}
