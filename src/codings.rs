//! An ordered list of codings and the queries used for negotiation.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::coding::Coding;
use crate::error::{AcceptError, Result};
use crate::parsing::CodingsParser;

/// Holds the codings of one header value.
///
/// Parsing keeps the order of appearance; call [`sorted`](Self::sorted) to
/// put the most preferred coding first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Codings(Vec<Coding>);

impl Codings {
    /// Parse a header value. See [`CodingsParser::parse`].
    pub fn parse(value: &str) -> Result<Self> {
        CodingsParser::parse(value)
    }

    /// An empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a coding at the end.
    pub fn push(&mut self, coding: Coding) {
        self.0.push(coding);
    }

    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<Coding> {
        self.0
    }

    /// Find a named coding without cloning it.
    pub fn find(&self, name: &str) -> Option<&Coding> {
        self.0.iter().find(|c| c.name == name)
    }

    /// Find a named coding. If not found, returns the default coding, which
    /// is never accepted.
    pub fn get(&self, name: &str) -> Coding {
        self.find(name).cloned().unwrap_or_default()
    }

    /// Whether the named coding is present with a non-zero quality.
    ///
    /// Wildcards are not expanded: `*` does not make `gzip` accepted.
    pub fn accepts(&self, name: &str) -> bool {
        self.find(name).is_some_and(Coding::is_accepted)
    }

    /// Accepted codings whose names begin with `prefix`, plus any `*`
    /// wildcards. Keeps the current order, so call after
    /// [`sorted`](Self::sorted) for the preferred match first.
    pub fn like(&self, prefix: &str) -> Self {
        self.0
            .iter()
            .filter(|c| c.is_accepted() && (c.name.starts_with(prefix) || c.name.starts_with('*')))
            .cloned()
            .collect()
    }

    /// Only the codings with a non-zero quality, in order.
    pub fn if_accepted(&self) -> Self {
        self.0.iter().filter(|c| c.is_accepted()).cloned().collect()
    }

    /// The names, in current order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name.as_str()).collect()
    }

    /// Sort by quality, highest first, and return `self`.
    ///
    /// This reorders the list in place. Wildcards rank just below an exact
    /// name of the same quality (`*` below `type/*`), and among equal
    /// qualities more attributes rank first. The sort is stable, so sorting
    /// twice gives the same order.
    pub fn sorted(&mut self) -> &mut Self {
        self.0.sort_by(|a, b| {
            b.biased_quality()
                .total_cmp(&a.biased_quality())
                .then_with(|| b.attributes.len().cmp(&a.attributes.len()))
        });
        self
    }

    /// A sorted copy; `self` keeps its order.
    pub fn ranked(&self) -> Self {
        let mut ranked = self.clone();
        ranked.sorted();
        ranked
    }
}

impl Deref for Codings {
    type Target = [Coding];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Coding>> for Codings {
    fn from(codings: Vec<Coding>) -> Self {
        Self(codings)
    }
}

impl FromIterator<Coding> for Codings {
    fn from_iter<I: IntoIterator<Item = Coding>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Codings {
    type Item = Coding;
    type IntoIter = std::vec::IntoIter<Coding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Codings {
    type Item = &'a Coding;
    type IntoIter = std::slice::Iter<'a, Coding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Codings {
    type Err = AcceptError;

    fn from_str(s: &str) -> Result<Self> {
        CodingsParser::parse(s)
    }
}

impl fmt::Display for Codings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coding) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coding)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codings(value: &str) -> Codings {
        Codings::parse(value).unwrap()
    }

    #[test]
    fn test_display() {
        let list = Codings::from(vec![
            Coding::new("text/html")
                .with_quality(0.4)
                .with_attribute("level", "2"),
            Coding::new("image/png").with_quality(0.1234),
            Coding::new("*/*").with_quality(0.0),
        ]);
        assert_eq!(
            list.to_string(),
            "text/html;level=2;q=0.4, image/png;q=0.123, */*;q=0"
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Codings::new().to_string(), "");
    }

    #[test]
    fn test_sorted_like() {
        let examples: &[(&str, &str, &[&str])] = &[
            ("", "en", &[]),
            ("text/plain", "text/", &["text/plain"]),
            (
                "text/plain;q=0.5, text/html",
                "text/",
                &["text/html", "text/plain;q=0.5"],
            ),
            (
                "text/html;level=2;q=0.4",
                "text/",
                &["text/html;level=2;q=0.4"],
            ),
            (
                "audio/*;q=0.2, audio/basic",
                "audio/",
                &["audio/basic", "audio/*;q=0.2"],
            ),
            (
                "text/*, text/plain, text/plain;format=flowed, */*",
                "text/",
                &["text/plain;format=flowed", "text/plain", "text/*", "*/*"],
            ),
        ];

        for (i, (value, prefix, expected)) in examples.iter().enumerate() {
            let mut list = codings(value);
            let found: Vec<String> = list
                .sorted()
                .like(prefix)
                .iter()
                .map(ToString::to_string)
                .collect();
            assert_eq!(found, *expected, "example {}", i);
        }
    }

    #[test]
    fn test_sorted_audio() {
        let mut list = codings("audio/*;q=0.2, audio/basic");
        assert_eq!(list.sorted().names(), ["audio/basic", "audio/*"]);
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let mut list = codings("b;q=0.5, a, */*, c;x=1, text/*;q=0.5, d;q=0.5");
        let once = list.sorted().clone();
        let twice = list.sorted().clone();
        assert_eq!(once.names(), twice.names());
        assert_eq!(once.names(), ["c", "a", "*/*", "b", "d", "text/*"]);
    }

    #[test]
    fn test_ranked_leaves_original() {
        let list = codings("gzip;q=0.5, br");
        let ranked = list.ranked();
        assert_eq!(ranked.names(), ["br", "gzip"]);
        assert_eq!(list.names(), ["gzip", "br"]);
    }

    #[test]
    fn test_if_accepted() {
        let examples: &[(&str, &[&str])] = &[
            ("", &[]),
            ("gzip;q=1.0, identity; q=0.5, *;q=0", &["gzip", "identity"]),
            ("*;q=0, gzip;q=1.0, identity; q=0", &["gzip"]),
        ];

        for (value, expected) in examples {
            assert_eq!(codings(value).if_accepted().names(), *expected);
        }
    }

    #[test]
    fn test_like_never_returns_rejected() {
        let list = codings("en;q=0, en-gb, *;q=0, en-us;q=0.1");
        let like = list.like("en");
        assert_eq!(like.names(), ["en-gb", "en-us"]);
        assert!(like.iter().all(Coding::is_accepted));
    }

    #[test]
    fn test_like_keeps_order() {
        let list = codings("*, en;q=0.5, en-gb");
        assert_eq!(list.like("en").names(), ["*", "en", "en-gb"]);
    }

    #[test]
    fn test_get() {
        let list = codings("compress;q=0.5, gzip, *;q=0");
        assert_eq!(list.get("compress").quality, 0.5);
        assert!(list.get("gzip").is_accepted());
        assert!(!list.get("*").is_accepted());

        let missing = list.get("missing");
        assert_eq!(missing, Coding::default());
        assert!(!missing.is_accepted());
    }

    #[test]
    fn test_get_first_match() {
        let list = codings("gzip;q=0.2, gzip;q=0.9");
        assert_eq!(list.get("gzip").quality, 0.2);
    }

    #[test]
    fn test_accepts() {
        let list = codings("compress;q=0.5, gzip, br;q=0, *");
        assert!(list.accepts("gzip"));
        assert!(list.accepts("compress"));
        assert!(!list.accepts("br"));
        assert!(!list.accepts("deflate"));
    }

    #[test]
    fn test_names_keep_repeats() {
        assert_eq!(codings("a, b, a").names(), ["a", "b", "a"]);
    }

    #[test]
    fn test_accept_media_ranges() {
        let mut list = codings(
            "text/html;q=1.0, text/*;q=0.8, image/gif;q=0.6, image/jpeg;q=0.7, image/*;q=0.5, */*;q=0.1",
        );
        let sorted = list.sorted();
        assert_eq!(sorted.like("text/").names(), ["text/html", "text/*", "*/*"]);
        assert_eq!(
            sorted.like("image/").names(),
            ["image/jpeg", "image/gif", "image/*", "*/*"]
        );
    }

    #[test]
    fn test_collect_and_iterate() {
        let list: Codings = ["gzip", "br"].iter().map(|n| Coding::new(n)).collect();
        let names: Vec<&str> = (&list).into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["gzip", "br"]);
        assert_eq!(list.into_inner().len(), 2);
    }
}
