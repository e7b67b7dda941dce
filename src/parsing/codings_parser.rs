//! Header value parser.
//!
//! Grammar handled (RFC 7231 §5.3, without quoted strings):
//!
//! ```text
//! value     = segment *( "," segment )
//! segment   = name *( ";" extension )
//! extension = token [ "=" token ]      ; "q=<decimal>" sets the quality
//! ```
//!
//! Whitespace around every token, `;` and `=` is ignored, and everything is
//! lowercased before it is stored.

use indexmap::IndexMap;

use crate::coding::{clamp_quality, Coding};
use crate::codings::Codings;
use crate::error::{AcceptError, Result};

/// Parser for `Accept`-style header values.
pub struct CodingsParser;

impl CodingsParser {
    /// Separates codings.
    pub const SEGMENT_SEPARATOR: char = ',';
    /// Separates a name from its extensions.
    pub const FIELD_SEPARATOR: char = ';';
    /// Extension key holding the quality factor.
    pub const QUALITY_KEY: &'static str = "q";

    /// Parse a header value into codings, in the order they appear.
    ///
    /// Empty segments (`"gzip,,br"`, a trailing comma, a blank value) are
    /// dropped. The first malformed segment fails the whole value.
    pub fn parse(value: &str) -> Result<Codings> {
        match Self::parse_partial(value) {
            (codings, None) => Ok(codings),
            (_, Some(err)) => Err(err),
        }
    }

    /// Like [`parse`](Self::parse), but also hands back the codings read
    /// before the first malformed segment.
    pub fn parse_partial(value: &str) -> (Codings, Option<AcceptError>) {
        let mut codings = Codings::new();

        for segment in value.split(Self::SEGMENT_SEPARATOR) {
            match Self::parse_segment(segment) {
                Ok(Some(coding)) => codings.push(coding),
                Ok(None) => log::trace!("skipping segment without a name: {:?}", segment),
                Err(err) => {
                    log::debug!("stopped after {} codings: {}", codings.len(), err);
                    return (codings, Some(err));
                }
            }
        }

        (codings, None)
    }

    /// Parse one comma-separated segment. `None` when it has no name.
    fn parse_segment(segment: &str) -> Result<Option<Coding>> {
        let mut fields = segment.split(Self::FIELD_SEPARATOR);
        let name = fields
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase();
        if name.is_empty() {
            return Ok(None);
        }

        let mut quality = 1.0;
        let mut attributes = IndexMap::new();

        for field in fields {
            let field = field.trim().to_lowercase();

            match field.split_once('=') {
                Some((_, rhs)) if rhs.contains('=') => {
                    return Err(AcceptError::MalformedExtension {
                        segment: segment.to_string(),
                    });
                }
                Some((lhs, rhs)) => {
                    let (key, value) = (lhs.trim(), rhs.trim());
                    if key == Self::QUALITY_KEY {
                        quality = Self::parse_quality(segment, value)?;
                    } else {
                        attributes.insert(key.to_string(), value.to_string());
                    }
                }
                // `q` is reserved, so a bare `q` carries nothing to keep.
                None if field == Self::QUALITY_KEY => {
                    log::trace!("skipping bare q in {:?}", segment);
                }
                None => {
                    attributes.insert(field, String::new());
                }
            }
        }

        Ok(Some(Coding {
            name,
            quality,
            attributes,
        }))
    }

    fn parse_quality(segment: &str, value: &str) -> Result<f64> {
        value
            .parse::<f64>()
            .map(clamp_quality)
            .map_err(|source| AcceptError::MalformedQuality {
                segment: segment.to_string(),
                source,
            })
    }
}
