//! Round pool generation
//!
//! Picks the seven-letter word that seeds a round. Generic over the RNG so
//! tests can drive a seeded generator; the engine facade passes
//! `rand::rng()`.

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::lexicon::Lexicon;

/// Pick a uniform random seven-letter word
///
/// Returns `None` only if the lexicon has no seven-letter words - an
/// unplayable dictionary, reported distinctly from load failure.
pub fn random_seven_letter_word<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    rng: &mut R,
) -> Option<&'a str> {
    lexicon.seven_letter_words().choose(rng).map(String::as_str)
}

/// Pick a random word whose anagram class has two or more members
///
/// Uniform over qualifying classes, then uniform within the class. Used by
/// modes that exercise the multi-bingo display path. `None` if every class
/// is a singleton.
pub fn random_multi_anagram_word<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    rng: &mut R,
) -> Option<&'a str> {
    let multi_classes: Vec<&[String]> = lexicon
        .anagram_classes()
        .filter(|class| class.len() >= 2)
        .collect();

    let class = multi_classes.choose(rng)?;
    class.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_entries;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_lexicon() -> Lexicon {
        Lexicon::build(
            "test",
            parse_entries("CAT\nTRAIN\nRETINAS\nSTAINER\nEDITORS\nJOURNEY\n"),
        )
    }

    #[test]
    fn random_seven_letter_word_is_valid() {
        let lexicon = sample_lexicon();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = random_seven_letter_word(&lexicon, &mut rng).unwrap();
            assert_eq!(word.len(), 7);
            assert!(lexicon.is_valid(word));
        }
    }

    #[test]
    fn random_seven_letter_word_none_when_unplayable() {
        let lexicon = Lexicon::build("test", parse_entries("CAT\nTRAIN\n"));
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_seven_letter_word(&lexicon, &mut rng).is_none());
    }

    #[test]
    fn random_seven_letter_word_none_when_empty() {
        let lexicon = Lexicon::empty();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_seven_letter_word(&lexicon, &mut rng).is_none());
    }

    #[test]
    fn multi_anagram_word_comes_from_multi_class() {
        let lexicon = sample_lexicon();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let word = random_multi_anagram_word(&lexicon, &mut rng).unwrap();
            // RETINAS/STAINER is the only class with 2+ members here
            assert!(word == "RETINAS" || word == "STAINER");
        }
    }

    #[test]
    fn multi_anagram_word_none_without_multi_class() {
        let lexicon = Lexicon::build("test", parse_entries("EDITORS\nJOURNEY\n"));
        let mut rng = StdRng::seed_from_u64(42);
        assert!(random_multi_anagram_word(&lexicon, &mut rng).is_none());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let lexicon = sample_lexicon();

        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);

        assert_eq!(
            random_seven_letter_word(&lexicon, &mut first),
            random_seven_letter_word(&lexicon, &mut second)
        );
    }
}
