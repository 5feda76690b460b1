use crate::domain::model::{LetterFilter, StringValue};

/// Pythagorean values for `a..=z`, in cycles of nine.
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Value of a lowercase Latin letter, `None` for anything else.
pub fn letter_value(letter: char) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        Some(LETTER_VALUES[(letter as u8 - b'a') as usize])
    } else {
        None
    }
}

/// `y` is never a vowel here.
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

impl LetterFilter {
    pub fn accepts(self, letter: char) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Vowels => is_vowel(letter),
            LetterFilter::Consonants => !is_vowel(letter),
        }
    }
}

/// Lower-cases `text` and keeps only `a..=z`. Accented letters are dropped,
/// not transliterated.
pub fn clean_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
}

pub fn calculate_string_value(text: &str, filter: LetterFilter) -> StringValue {
    let mut total = 0;
    let mut parts = Vec::new();

    for letter in clean_letters(text).filter(|c| filter.accepts(*c)) {
        let value = letter_value(letter).unwrap_or(0);
        total += value;
        parts.push(format!("{}({})", letter.to_ascii_uppercase(), value));
    }

    StringValue {
        total,
        breakdown: format!("{} = {}", parts.join(" + "), total),
    }
}
