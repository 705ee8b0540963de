//! Word list source resolution
//!
//! Maps a list tag to bytes via a fallback chain: compressed files in each
//! search directory, then uncompressed files, then the embedded list. A
//! source that fails to decode falls through to the next candidate.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::embedded;
use super::gzip::{GzipError, decode_gzip, is_gzip};
use super::parse::parse_entries;
use crate::core::Entry;

/// Identifier for a bundled word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    /// Everyday vocabulary, the default
    Common,
    /// Superset list with rarer words
    Full,
}

impl ListTag {
    /// Parse a tag from its CLI name
    ///
    /// Returns `None` for unrecognized names (the CLI treats those as
    /// filesystem paths).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "common" => Some(Self::Common),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// The tag's canonical name, used as the source file stem
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Full => "full",
        }
    }

    const fn embedded(self) -> &'static str {
        match self {
            Self::Common => embedded::COMMON_TSV,
            Self::Full => embedded::FULL_TSV,
        }
    }
}

impl fmt::Display for ListTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for word list loading failures
#[derive(Debug)]
pub enum LoadError {
    /// No source in the fallback chain produced a usable list
    NoSource(ListTag),
    /// An explicitly named file could not be read
    Io(io::Error),
    /// An explicitly named file failed gzip decoding
    Gzip(GzipError),
    /// The source decoded but contained zero accepted entries
    EmptyLexicon,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSource(tag) => write!(f, "No usable source for word list '{tag}'"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Gzip(err) => write!(f, "Failed to decompress word list: {err}"),
            Self::EmptyLexicon => write!(f, "Word list contained no valid entries"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Gzip(err) => Some(err),
            Self::NoSource(_) | Self::EmptyLexicon => None,
        }
    }
}

/// Parse entries from raw bytes, decompressing first if gzip-wrapped
///
/// # Errors
/// Returns `GzipError` if the bytes carry the gzip magic but fail to decode.
pub fn entries_from_bytes(bytes: &[u8]) -> Result<Vec<Entry>, GzipError> {
    if is_gzip(bytes) {
        let decompressed = decode_gzip(bytes)?;
        Ok(parse_entries(&String::from_utf8_lossy(&decompressed)))
    } else {
        Ok(parse_entries(&String::from_utf8_lossy(bytes)))
    }
}

/// Load entries from an explicitly named file (the CLI's custom-path mode)
///
/// # Errors
/// Returns `LoadError` if the file cannot be read, fails gzip decoding, or
/// contains no valid entries.
pub fn entries_from_path(path: &Path) -> Result<Vec<Entry>, LoadError> {
    let bytes = fs::read(path).map_err(LoadError::Io)?;
    let entries = entries_from_bytes(&bytes).map_err(LoadError::Gzip)?;

    if entries.is_empty() {
        return Err(LoadError::EmptyLexicon);
    }
    Ok(entries)
}

/// Resolves list tags to entry collections via the fallback chain
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    search_dirs: Vec<PathBuf>,
}

impl SourceResolver {
    /// Create a resolver with no search directories (embedded lists only)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver searching the given directories, in order
    #[must_use]
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Append a search directory
    pub fn add_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_dirs.push(dir.into());
    }

    /// Resolve a tag to its entries
    ///
    /// Tries, in order: `<dir>/<tag>.tsv.gz` for each search directory,
    /// `<dir>/<tag>.tsv` for each search directory, then the embedded list.
    /// A candidate that is missing, fails to decode, or yields zero entries
    /// falls through to the next.
    ///
    /// # Errors
    /// Returns `LoadError::NoSource` only when every candidate fails.
    pub fn resolve(&self, tag: ListTag) -> Result<Vec<Entry>, LoadError> {
        let compressed_name = format!("{tag}.tsv.gz");
        let plain_name = format!("{tag}.tsv");

        for name in [&compressed_name, &plain_name] {
            for dir in &self.search_dirs {
                if let Some(entries) = try_candidate(&dir.join(name)) {
                    return Ok(entries);
                }
            }
        }

        let entries = parse_entries(tag.embedded());
        if entries.is_empty() {
            return Err(LoadError::NoSource(tag));
        }
        Ok(entries)
    }
}

/// Load one candidate file, treating every failure as "try the next source"
fn try_candidate(path: &Path) -> Option<Vec<Entry>> {
    let bytes = fs::read(path).ok()?;
    let entries = entries_from_bytes(&bytes).ok()?;

    if entries.is_empty() {
        return None;
    }
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn gzip_bytes(payload: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn list_tag_from_name() {
        assert_eq!(ListTag::from_name("common"), Some(ListTag::Common));
        assert_eq!(ListTag::from_name("full"), Some(ListTag::Full));
        assert_eq!(ListTag::from_name("./my/words.tsv"), None);
    }

    #[test]
    fn entries_from_plain_bytes() {
        let entries = entries_from_bytes(b"CAT\tfeline\nACT\n").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn entries_from_gzip_bytes() {
        let compressed = gzip_bytes(b"CAT\tfeline\nACT\n");
        let entries = entries_from_bytes(&compressed).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].definition.as_deref(), Some("feline"));
    }

    #[test]
    fn entries_from_corrupt_gzip_is_error() {
        let mut compressed = gzip_bytes(b"CAT\n");
        let len = compressed.len();
        compressed[len - 2] ^= 0xff;
        assert!(entries_from_bytes(&compressed).is_err());
    }

    #[test]
    fn resolver_falls_back_to_embedded() {
        let resolver = SourceResolver::new();
        let entries = resolver.resolve(ListTag::Common).unwrap();
        assert!(!entries.is_empty());
    }

    #[test]
    fn resolver_prefers_compressed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("common.tsv.gz"), gzip_bytes(b"ZEBRA\n")).unwrap();
        fs::write(dir.path().join("common.tsv"), b"HORSE\n").unwrap();

        let resolver = SourceResolver::with_dirs(vec![dir.path().to_path_buf()]);
        let entries = resolver.resolve(ListTag::Common).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "ZEBRA");
    }

    #[test]
    fn resolver_skips_corrupt_compressed_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut corrupt = gzip_bytes(b"ZEBRA\n");
        let len = corrupt.len();
        corrupt[len - 1] ^= 0xff; // broken ISIZE trailer
        fs::write(dir.path().join("common.tsv.gz"), corrupt).unwrap();
        fs::write(dir.path().join("common.tsv"), b"HORSE\n").unwrap();

        let resolver = SourceResolver::with_dirs(vec![dir.path().to_path_buf()]);
        let entries = resolver.resolve(ListTag::Common).unwrap();

        assert_eq!(entries[0].word, "HORSE");
    }

    #[test]
    fn resolver_skips_missing_dir() {
        let resolver =
            SourceResolver::with_dirs(vec![PathBuf::from("/nonexistent/words/dir")]);
        // Falls through to the embedded list
        assert!(resolver.resolve(ListTag::Full).is_ok());
    }

    #[test]
    fn entries_from_path_missing_file() {
        let result = entries_from_path(Path::new("/nonexistent/words.tsv"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn entries_from_path_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.tsv");
        fs::write(&path, b"12AB\nNOTAWORD8\n").unwrap();

        let result = entries_from_path(&path);
        assert!(matches!(result, Err(LoadError::EmptyLexicon)));
    }

    #[test]
    fn entries_from_path_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.tsv.gz");
        fs::write(&path, gzip_bytes(b"RETINAS\nSTAINER\n")).unwrap();

        let entries = entries_from_path(&path).unwrap();
        assert_eq!(entries.len(), 2);
    }
}
