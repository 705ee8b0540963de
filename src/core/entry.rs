//! Dictionary entry and word validation
//!
//! A playable word is 3-7 ASCII letters, stored uppercase. An `Entry` pairs
//! a validated word with its optional definition text.

use std::fmt;

/// Minimum accepted word length
pub const MIN_WORD_LEN: usize = 3;

/// Maximum accepted word length (the full pool size)
pub const MAX_WORD_LEN: usize = 7;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be {MIN_WORD_LEN}-{MAX_WORD_LEN} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Validate and normalize a word token
///
/// Trims surrounding whitespace and uppercases the result.
///
/// # Errors
/// Returns `WordError` if:
/// - Any character is not an ASCII letter
/// - Length is outside 3-7
///
/// # Examples
/// ```
/// use anagram_lexicon::core::normalize_word;
///
/// assert_eq!(normalize_word(" cat ").unwrap(), "CAT");
/// assert!(normalize_word("12AB").is_err());
/// assert!(normalize_word("OVERLONG").is_err());
/// ```
pub fn normalize_word(text: &str) -> Result<String, WordError> {
    let text = text.trim();

    if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(WordError::NonAlphabetic);
    }

    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
        return Err(WordError::InvalidLength(text.len()));
    }

    Ok(text.to_ascii_uppercase())
}

/// A validated dictionary entry
///
/// Immutable once constructed. A missing definition is `None`, never a
/// sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: Option<String>,
}

impl Entry {
    /// Create an entry from raw word and definition tokens
    ///
    /// The definition is trimmed; an empty definition becomes `None`.
    ///
    /// # Errors
    /// Returns `WordError` if the word token fails validation.
    pub fn new(word: &str, definition: Option<&str>) -> Result<Self, WordError> {
        let word = normalize_word(word)?;
        let definition = definition
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Ok(Self { word, definition })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_trims() {
        assert_eq!(normalize_word("cat").unwrap(), "CAT");
        assert_eq!(normalize_word("  Retinas  ").unwrap(), "RETINAS");
    }

    #[test]
    fn normalize_length_bounds() {
        assert!(matches!(
            normalize_word("at"),
            Err(WordError::InvalidLength(2))
        ));
        assert!(normalize_word("cat").is_ok());
        assert!(normalize_word("retinas").is_ok());
        assert!(matches!(
            normalize_word("overlong"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(normalize_word(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn normalize_rejects_non_alphabetic() {
        assert_eq!(normalize_word("12AB"), Err(WordError::NonAlphabetic));
        assert_eq!(normalize_word("ca-t"), Err(WordError::NonAlphabetic));
        assert_eq!(normalize_word("café"), Err(WordError::NonAlphabetic));
    }

    #[test]
    fn entry_keeps_definition() {
        let entry = Entry::new("cat", Some(" a small feline ")).unwrap();
        assert_eq!(entry.word, "CAT");
        assert_eq!(entry.definition.as_deref(), Some("a small feline"));
    }

    #[test]
    fn entry_empty_definition_is_none() {
        let entry = Entry::new("act", Some("   ")).unwrap();
        assert_eq!(entry.definition, None);

        let entry = Entry::new("act", None).unwrap();
        assert_eq!(entry.definition, None);
    }

    #[test]
    fn entry_rejects_invalid_word() {
        assert!(Entry::new("12AB", None).is_err());
        assert!(Entry::new("ab", Some("too short")).is_err());
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::InvalidLength(8).to_string(),
            "Word must be 3-7 letters, got 8"
        );
        assert_eq!(
            WordError::NonAlphabetic.to_string(),
            "Word must contain only ASCII letters"
        );
    }
}
