//! Shortcuts for the common negotiation questions.
//!
//! These take the header value as a plain string; fetching it from a request
//! is left to the caller. A value that fails to parse is treated like an
//! absent header: nothing is accepted and nothing is preferred.

use std::fmt;

use crate::codings::Codings;
use crate::parsing::CodingsParser;

/// Coding name used in `Accept-Encoding` for un-encoded responses, e.g.
/// `identity;q=0` rules out sending the body as-is.
pub const IDENTITY: &str = "identity";

/// The request headers that carry weighted preference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// `Accept`: media ranges.
    Accept,
    /// `Accept-Charset`: character sets.
    AcceptCharset,
    /// `Accept-Encoding`: content codings.
    AcceptEncoding,
    /// `Accept-Language`: language tags.
    AcceptLanguage,
}

impl HeaderKind {
    /// Every kind, in header-name order.
    pub const ALL: [Self; 4] = [
        Self::Accept,
        Self::AcceptCharset,
        Self::AcceptEncoding,
        Self::AcceptLanguage,
    ];

    /// Canonical header name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::AcceptCharset => "Accept-Charset",
            Self::AcceptEncoding => "Accept-Encoding",
            Self::AcceptLanguage => "Accept-Language",
        }
    }

    /// Look up a kind by header name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// [`accepts`] for a value of this header.
    pub fn accepts(self, value: &str, name: &str) -> bool {
        parse_or_empty(Some(self), value).accepts(name)
    }

    /// [`preferred_like`] for a value of this header.
    pub fn preferred_like(self, value: &str, prefix: &str) -> Option<String> {
        first_like(parse_or_empty(Some(self), value), prefix)
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `value` names `name` with a non-zero quality.
///
/// ```rust
/// use accept_codings::negotiate::accepts;
///
/// assert!(accepts("compress; q=0.5, gzip, *;q=0", "gzip"));
/// assert!(!accepts("gzip;q=0", "gzip"));
/// assert!(!accepts("gzip;q=fail", "gzip"));
/// ```
pub fn accepts(value: &str, name: &str) -> bool {
    parse_or_empty(None, value).accepts(name)
}

/// The most preferred accepted name starting with `prefix` (or `*`).
///
/// ```rust
/// use accept_codings::negotiate::preferred_like;
///
/// let language = preferred_like("da, en-gb;q=0.8, en;q=0.7", "en");
/// assert_eq!(language.as_deref(), Some("en-gb"));
/// ```
pub fn preferred_like(value: &str, prefix: &str) -> Option<String> {
    first_like(parse_or_empty(None, value), prefix)
}

fn first_like(mut codings: Codings, prefix: &str) -> Option<String> {
    let preferred = codings
        .sorted()
        .like(prefix)
        .into_iter()
        .next()
        .map(|coding| coding.name);
    log::debug!("preferred like {:?}: {:?}", prefix, preferred);
    preferred
}

fn parse_or_empty(kind: Option<HeaderKind>, value: &str) -> Codings {
    CodingsParser::parse(value).unwrap_or_else(|err| {
        match kind {
            Some(kind) => log::debug!("ignoring malformed {} header: {}", kind, err),
            None => log::debug!("ignoring malformed header value: {}", err),
        }
        Codings::new()
    })
}
