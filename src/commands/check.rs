//! Word validity check command

use crate::lexicon::LexiconEngine;

/// Result of checking a submitted word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    pub definition: Option<String>,
}

/// Check a word against the active lexicon
///
/// Never fails: an invalid or malformed word is a `valid: false` result,
/// matching the submission path of the game itself.
#[must_use]
pub fn check_word(engine: &LexiconEngine, word: &str) -> CheckResult {
    let valid = engine.is_valid(word);
    let definition = engine.definition(word).map(str::to_string);

    CheckResult {
        word: word.trim().to_ascii_uppercase(),
        valid,
        definition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{ListTag, SourceResolver};

    fn loaded_engine() -> LexiconEngine {
        let mut engine = LexiconEngine::new(SourceResolver::new());
        engine.load(ListTag::Common).unwrap();
        engine
    }

    #[test]
    fn check_valid_word_with_definition() {
        let engine = loaded_engine();
        let result = check_word(&engine, "cat");

        assert_eq!(result.word, "CAT");
        assert!(result.valid);
        assert!(result.definition.is_some());
    }

    #[test]
    fn check_valid_word_without_definition() {
        let engine = loaded_engine();
        let result = check_word(&engine, "ate");

        assert!(result.valid);
        assert_eq!(result.definition, None);
    }

    #[test]
    fn check_unknown_word() {
        let engine = loaded_engine();
        let result = check_word(&engine, "zyzzyva");

        assert!(!result.valid);
        assert_eq!(result.definition, None);
    }

    #[test]
    fn check_malformed_word_does_not_error() {
        let engine = loaded_engine();
        assert!(!check_word(&engine, "12AB").valid);
        assert!(!check_word(&engine, "").valid);
    }
}
