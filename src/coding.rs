//! A single preference record from a header value.
//!
//! `text/html;level=2;q=0.4` is one coding: a name, any number of
//! attributes, and a quality factor.

use indexmap::IndexMap;
use std::fmt;

/// Penalty applied to `*` and `*/*` when ranking.
const ANY_WILDCARD_BIAS: f64 = 0.0002;

/// Penalty applied to `type/*` when ranking.
const SUBTYPE_WILDCARD_BIAS: f64 = 0.0001;

/// Combines a name (such as `gzip` or `text/html`) with optional attributes
/// and a quality factor between 0 and 1 inclusive.
///
/// The default value (empty name, quality 0) is what lookups return when
/// nothing matches; it is never accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coding {
    /// Lowercased coding, charset, language or media range.
    pub name: String,
    /// Quality factor in `[0, 1]`.
    pub quality: f64,
    /// Lowercased attributes in the order they appeared. Never contains `q`.
    pub attributes: IndexMap<String, String>,
}

impl Coding {
    /// Create a coding with quality 1 and no attributes.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            quality: 1.0,
            attributes: IndexMap::new(),
        }
    }

    /// Set the quality, clamped to `[0, 1]`.
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = clamp_quality(quality);
        self
    }

    /// Add an attribute. A `q` key sets the quality instead.
    ///
    /// A `q` value that is not a number leaves the quality unchanged and adds
    /// no attribute; use [`with_quality`](Self::with_quality) for a checked
    /// numeric value, or parse a header value to get a `MalformedQuality`
    /// error instead.
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        let key = key.trim().to_lowercase();
        let value = value.trim().to_lowercase();
        if key == "q" {
            if let Ok(q) = value.parse::<f64>() {
                self.quality = clamp_quality(q);
            }
        } else {
            self.attributes.insert(key, value);
        }
        self
    }

    /// A coding is accepted when its quality is above zero.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.quality > 0.0
    }

    /// True for `*`, `*/*` and `type/*`.
    pub fn is_wildcard(&self) -> bool {
        self.name.ends_with('*')
    }

    /// Quality with a small penalty for wildcards, used only to break ties.
    ///
    /// q-values carry at most three decimals, so both penalties are below the
    /// smallest step between two real qualities.
    pub(crate) fn biased_quality(&self) -> f64 {
        if self.name.starts_with('*') {
            self.quality - ANY_WILDCARD_BIAS
        } else if self.name.ends_with('*') {
            self.quality - SUBTYPE_WILDCARD_BIAS
        } else {
            self.quality
        }
    }
}

/// Clamp a parsed q-value into `[0, 1]`. NaN and `-0` become `0`.
pub(crate) fn clamp_quality(q: f64) -> f64 {
    if q.is_nan() || q <= 0.0 {
        0.0
    } else if q > 1.0 {
        1.0
    } else {
        q
    }
}

/// Round to three significant digits and drop trailing zeros.
fn format_quality(q: f64) -> String {
    let rounded = format!("{:.2e}", q).parse::<f64>().unwrap_or(q);
    rounded.to_string()
}

impl fmt::Display for Coding {
    /// Canonical form `name[;attr=val]*[;q=X]`; `q` is left out at 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            return Ok(());
        }

        f.write_str(&self.name)?;
        for (key, value) in &self.attributes {
            if value.is_empty() {
                write!(f, ";{}", key)?;
            } else {
                write!(f, ";{}={}", key, value)?;
            }
        }

        if self.quality < 1.0 {
            write!(f, ";q={}", format_quality(self.quality))?;
        }
        Ok(())
    }
}
