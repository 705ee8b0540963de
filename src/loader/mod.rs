//! Dictionary loading
//!
//! Turns a byte source (plain text or gzip-compressed text) into validated
//! entries, with a fallback chain across filesystem and embedded sources.

mod embedded;
mod gzip;
mod parse;
mod source;

pub use embedded::{COMMON_TSV, FULL_TSV};
pub use gzip::{GzipError, decode_gzip, is_gzip};
pub use parse::parse_entries;
pub use source::{ListTag, LoadError, SourceResolver, entries_from_bytes, entries_from_path};
