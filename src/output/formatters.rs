//! Formatting utilities for terminal output

/// Format pool letters with spacing, tile-style: `R E T A I N S`
#[must_use]
pub fn spaced_letters(pool: &str) -> String {
    let mut result = String::with_capacity(pool.len() * 2);
    for (i, ch) in pool.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch.to_ascii_uppercase());
    }
    result
}

/// Lay words out in fixed-width columns
///
/// Returns one string per output row. Words are assumed pre-sorted.
#[must_use]
pub fn word_grid(words: &[String], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let width = words.iter().map(String::len).max().unwrap_or(0) + 2;

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("retinas"), "R E T I N A S");
        assert_eq!(spaced_letters("CAT"), "C A T");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn word_grid_rows() {
        let words = vec![
            "ACT".to_string(),
            "CAT".to_string(),
            "RAT".to_string(),
            "TAR".to_string(),
            "TEA".to_string(),
        ];
        let rows = word_grid(&words, 3);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("ACT"));
        assert!(rows[0].contains("RAT"));
        assert!(rows[1].starts_with("TAR"));
    }

    #[test]
    fn word_grid_empty() {
        assert!(word_grid(&[], 4).is_empty());
    }

    #[test]
    fn word_grid_zero_columns_clamped() {
        let words = vec!["CAT".to_string()];
        assert_eq!(word_grid(&words, 0).len(), 1);
    }
}
