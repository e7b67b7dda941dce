//! Error types for header value parsing.
//!
//! This module provides the [`AcceptError`] type which covers every way a
//! content-negotiation header value can fail to parse.
//!
//! ## Error Categories
//!
//! | Error | Cause | Example |
//! |-------|-------|---------|
//! | [`MalformedQuality`] | `q` value is not a decimal number | `gzip;q=fail` |
//! | [`MalformedExtension`] | extension has more than one `=` | `text/html;a=b=c` |
//!
//! Names that are well-formed but meaningless (`this is not valid`) are never
//! errors; they simply produce records nobody will match.
//!
//! ## Example
//!
//! ```rust
//! use accept_codings::{AcceptError, Codings};
//!
//! match Codings::parse("gzip;q=fail") {
//!     Ok(codings) => println!("{} codings", codings.len()),
//!     Err(AcceptError::MalformedQuality { segment, .. }) => eprintln!("bad q in {segment:?}"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! [`MalformedQuality`]: AcceptError::MalformedQuality
//! [`MalformedExtension`]: AcceptError::MalformedExtension

use std::fmt;
use std::num::ParseFloatError;

/// Error type for header value parsing.
///
/// Parsing stops at the first malformed segment; the error carries that
/// segment verbatim, as it appeared between the commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptError {
    /// The `q` extension of a segment is not a valid decimal number.
    ///
    /// An empty `q=` also ends up here.
    MalformedQuality {
        /// The raw segment containing the bad q-value.
        segment: String,
        /// The underlying number parsing failure.
        source: ParseFloatError,
    },

    /// An extension field of a segment contains more than one `=`.
    MalformedExtension {
        /// The raw offending segment.
        segment: String,
    },
}

impl AcceptError {
    /// The raw header segment that failed to parse.
    pub fn segment(&self) -> &str {
        match self {
            Self::MalformedQuality { segment, .. } | Self::MalformedExtension { segment } => {
                segment
            }
        }
    }
}

impl fmt::Display for AcceptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedQuality { segment, source } => {
                write!(f, "Cannot parse q-value in '{}': {}", segment, source)
            }
            Self::MalformedExtension { segment } => {
                write!(f, "Cannot parse coding in '{}': too many values", segment)
            }
        }
    }
}

impl std::error::Error for AcceptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedQuality { source, .. } => Some(source),
            Self::MalformedExtension { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcceptError>;
