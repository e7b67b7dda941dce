//! Parsing and ranking of HTTP content-negotiation headers.
//!
//! Handles the values of `Accept`, `Accept-Charset`, `Accept-Encoding` and
//! `Accept-Language` as described in RFC 7231 §5.3. A value such as
//!
//! ```text
//! text/html;q=1.0, text/*;q=0.8, image/gif;q=0.6, */*;q=0.1
//! ```
//!
//! becomes a [`Codings`] list which can be sorted by preference, filtered by
//! prefix and queried by name.
//!
//! ## Example
//!
//! ```rust
//! use accept_codings::Codings;
//!
//! let mut codings = Codings::parse("da, en-gb;q=0.8, en;q=0.7, pt;q=0")?;
//! let sorted = codings.sorted();
//!
//! assert_eq!(sorted[0].name, "da");
//! assert_eq!(sorted.like("en").names(), ["en-gb", "en"]);
//! assert!(!sorted.accepts("pt"));
//! # Ok::<(), accept_codings::AcceptError>(())
//! ```
//!
//! ## Features
//! - Core library depends only on `indexmap` and the `log` facade
//! - `wasm` - Browser WASM bindings

mod coding;
mod codings;
pub mod error;
pub mod negotiate;
pub mod parsing;

#[cfg(feature = "wasm")]
mod wasm_bindings;


pub use coding::Coding;
pub use codings::Codings;
pub use error::{AcceptError, Result};
pub use negotiate::{HeaderKind, IDENTITY};
pub use parsing::CodingsParser;

#[cfg(feature = "wasm")]
pub use wasm_bindings::*;

/// Parse a header value. Shorthand for [`CodingsParser::parse`].
pub fn parse(value: &str) -> Result<Codings> {
    CodingsParser::parse(value)
}
