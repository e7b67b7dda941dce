//! Header value parsing.

pub mod codings_parser;

pub use codings_parser::CodingsParser;
