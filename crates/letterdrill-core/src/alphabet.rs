//! Letter ↔ number conversion for the 26-letter Latin alphabet.
//!
//! Every other module goes through these helpers for conversion, so the
//! A = 1 convention lives here and nowhere else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

const NATO_PHONETIC: [&str; ALPHABET_LEN as usize] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// A 1-based position in the alphabet: 1 = A, 26 = Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LetterIndex(u8);

impl LetterIndex {
    /// The index of `A`.
    pub const FIRST: LetterIndex = LetterIndex(1);
    /// The index of `Z`.
    pub const LAST: LetterIndex = LetterIndex(ALPHABET_LEN);

    /// Returns `None` unless `n` is in `1..=26`.
    pub fn new(n: i64) -> Option<Self> {
        if (1..=ALPHABET_LEN as i64).contains(&n) {
            Some(LetterIndex(n as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The uppercase letter at this position.
    pub fn letter(self) -> char {
        char::from(b'A' + self.0 - 1)
    }

    /// The NATO phonetic word for this letter.
    pub fn phonetic(self) -> &'static str {
        NATO_PHONETIC[usize::from(self.0 - 1)]
    }

    /// Contiguous ascending range `start..=end`. Empty when `start > end`.
    pub fn range(start: LetterIndex, end: LetterIndex) -> impl Iterator<Item = LetterIndex> {
        (start.0..=end.0).map(LetterIndex)
    }

    /// All 26 indices in order.
    pub fn all() -> impl Iterator<Item = LetterIndex> {
        Self::range(Self::FIRST, Self::LAST)
    }
}

impl fmt::Display for LetterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LetterIndex> for u8 {
    fn from(index: LetterIndex) -> u8 {
        index.0
    }
}

impl TryFrom<u8> for LetterIndex {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        LetterIndex::new(i64::from(n)).ok_or_else(|| format!("letter index out of range: {n}"))
    }
}

/// Convert a single letter (either case) to its 1-based index.
///
/// Returns `None` for empty input, more than one character, or anything
/// outside `A..=Z` after uppercasing.
pub fn letter_to_index(letter: &str) -> Option<LetterIndex> {
    let mut chars = letter.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    char_to_index(c)
}

/// Same as [`letter_to_index`] for a single `char`.
pub fn char_to_index(c: char) -> Option<LetterIndex> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(LetterIndex(upper as u8 - b'A' + 1))
    } else {
        None
    }
}

/// Convert a 1-based index to its uppercase letter, or `None` outside `1..=26`.
pub fn index_to_letter(index: i64) -> Option<char> {
    LetterIndex::new(index).map(LetterIndex::letter)
}

/// NATO phonetic word for a letter (either case), or `None` for non-letters.
pub fn phonetic_name(letter: char) -> Option<&'static str> {
    char_to_index(letter).map(LetterIndex::phonetic)
}

/// One row of the alphabet reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub letter: char,
    pub index: LetterIndex,
    pub phonetic: &'static str,
}

/// The full A–Z reference table.
pub fn index_table() -> Vec<IndexEntry> {
    LetterIndex::all()
        .map(|index| IndexEntry {
            letter: index.letter(),
            index,
            phonetic: index.phonetic(),
        })
        .collect()
}
