//! Hebrew letter handling: final-form equivalence and the filler alphabet.
//!
//! Five Hebrew consonants have a distinct shape used only at the end of a word
//! (e.g. `מ` / `ם`). For comparison purposes both shapes are the same letter, so
//! every comparison in the engine goes through [`normalize`]. Stored grid letters
//! are never normalized; normalization is for comparison only.

use std::collections::HashSet;
use std::sync::LazyLock;

// Character-set constants
pub(crate) const BASE_LETTERS: &str = "אבגדהוזחטיכלמנסעפצקרשת";
pub(crate) const FINAL_LETTERS: &str = "ךםןףץ";

/// (final form, base form)
pub(crate) const FINAL_PAIRS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

/// Letters used to fill cells that no word occupies: base letters plus final forms.
pub static FILL_ALPHABET: LazyLock<Vec<char>> =
    LazyLock::new(|| BASE_LETTERS.chars().chain(FINAL_LETTERS.chars()).collect());

static HEBREW_SET: LazyLock<HashSet<char>> = LazyLock::new(|| FILL_ALPHABET.iter().copied().collect());

pub trait HebrewChar {
    /// Comparison-canonical form: final letters map to their base letter,
    /// everything else maps to itself.
    fn normalized(&self) -> char;
    fn is_final_form(&self) -> bool;
    fn is_hebrew_letter(&self) -> bool;
}

impl HebrewChar for char {
    fn normalized(&self) -> char {
        FINAL_PAIRS
            .iter()
            .find(|(final_form, _)| final_form == self)
            .map_or(*self, |&(_, base)| base)
    }
    fn is_final_form(&self) -> bool {
        FINAL_PAIRS.iter().any(|(final_form, _)| final_form == self)
    }
    fn is_hebrew_letter(&self) -> bool {
        HEBREW_SET.contains(self)
    }
}

/// Free-function form of [`HebrewChar::normalized`].
#[must_use]
pub fn normalize(letter: char) -> char {
    letter.normalized()
}

/// Normalize every character of `word`.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.chars().map(normalize).collect()
}

/// True if `a` and `b` represent the same underlying letter.
#[must_use]
pub fn letters_equivalent(a: char, b: char) -> bool {
    a.normalized() == b.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_forms_collapse_to_base() {
        assert_eq!('ך'.normalized(), 'כ');
        assert_eq!('ם'.normalized(), 'מ');
        assert_eq!('ן'.normalized(), 'נ');
        assert_eq!('ף'.normalized(), 'פ');
        assert_eq!('ץ'.normalized(), 'צ');
    }

    #[test]
    fn test_base_letters_map_to_themselves() {
        for c in BASE_LETTERS.chars() {
            assert_eq!(c.normalized(), c, "base letter '{}' should be unchanged", c);
        }
    }

    #[test]
    fn test_unknown_chars_pass_through() {
        assert_eq!(normalize('a'), 'a');
        assert_eq!(normalize('Z'), 'Z');
        assert_eq!(normalize('7'), '7');
        assert_eq!(normalize(' '), ' ');
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("שלום"), "שלומ");
        assert_eq!(normalize_word("ארץ"), "ארצ");
        assert_eq!(normalize_word("אבג"), "אבג");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn test_is_final_form() {
        for c in FINAL_LETTERS.chars() {
            assert!(c.is_final_form());
        }
        assert!(!'כ'.is_final_form());
        assert!(!'a'.is_final_form());
    }

    #[test]
    fn test_letters_equivalent() {
        assert!(letters_equivalent('מ', 'ם'));
        assert!(letters_equivalent('ם', 'מ'));
        assert!(letters_equivalent('א', 'א'));
        assert!(!letters_equivalent('מ', 'נ'));
        assert!(!letters_equivalent('ם', 'ן'));
    }

    #[test]
    fn test_fill_alphabet_constants() {
        assert_eq!(BASE_LETTERS.chars().count(), 22);
        assert_eq!(FINAL_LETTERS.chars().count(), 5);
        assert_eq!(FILL_ALPHABET.len(), 27);
        assert!(FILL_ALPHABET.iter().all(|c| c.is_hebrew_letter()));
        assert!(!'a'.is_hebrew_letter());
    }

    #[test]
    fn test_every_final_pairs_with_a_base_letter() {
        for (final_form, base) in FINAL_PAIRS {
            assert!(FINAL_LETTERS.contains(final_form));
            assert!(BASE_LETTERS.contains(base));
        }
    }
}
