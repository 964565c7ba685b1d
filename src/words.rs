//! Wordlists that games pick their target words from.
//!
//! A [`Wordlist`] is validated on construction: every entry is exactly five
//! alphabetic characters, stored lowercase, and the list is never empty.
//! Because those invariants hold for every live value, the engine can pick a
//! target without re-checking them.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::Path,
};

use crate::{judge::WORD_LEN, WordlistError};

/// The wordlist bundled with the crate, for hosts that do not supply their
/// own.
pub const BUILTIN: &[&str] = &[
    "about", "adore", "agent", "alarm", "album", "alert", "alike", "amber", "angel", "angle",
    "apple", "apron", "arise", "aroma", "awake", "badge", "bagel", "banjo", "basil", "beach",
    "bench", "berry", "birch", "blaze", "blend", "bloom", "brave", "bread", "brick", "bride",
    "brisk", "brook", "brush", "cabin", "cable", "camel", "candy", "canoe", "cargo", "carve",
    "cedar", "chalk", "charm", "cheer", "chess", "choir", "cider", "claim", "clasp", "clerk",
    "cliff", "cloud", "clown", "cocoa", "comet", "coral", "couch", "crane", "creek", "crisp",
    "crumb", "curve", "daily", "dairy", "delta", "diary", "dodge", "dozen", "draft", "drain",
    "dream", "drift", "eagle", "elbow", "ember", "fable", "fairy", "fever", "flame", "fleet",
    "flint", "flock", "flour", "flute", "forge", "frost", "gauge", "giant", "gleam", "globe",
    "glory", "grace", "grain", "grape", "grasp", "grove", "hazel", "heart", "hedge", "honey",
    "ivory", "jewel", "joint", "knack", "ledge", "lemon", "linen", "lunar", "maple", "marsh",
    "medal", "mirth", "mossy", "mount", "night", "noble", "ocean", "olive", "onion", "orbit",
    "otter", "ounce", "panda", "pearl", "penny", "petal", "piano", "pivot", "plaza", "plumb",
    "polar", "porch", "prism", "quail", "quilt", "radio", "raven", "ridge", "river", "robin",
    "salsa", "scout", "shade", "shore", "slate", "spice", "stone", "storm", "swirl", "thyme",
    "tiger", "torch", "trail", "tulip", "twirl", "vivid", "wafer", "wharf", "whisk", "woven",
    "zebra", "zesty",
];

/// An ordered, validated list of lowercase five-letter words.
///
/// A game holds exactly one of these for its whole lifetime and picks a
/// fresh target from it on every restart. Construction fails rather than
/// producing an empty or partially-valid list.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::Wordlist;
///
/// let words = Wordlist::from_words(["CRANE", "slate"])?;
/// assert_eq!(words[0], "crane");
///
/// assert!(Wordlist::from_words(["toolong"]).is_err());
/// assert!(Wordlist::from_words::<_, &str>([]).is_err());
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Builds a wordlist from an iterator of words.
    ///
    /// Each word is lowercase-normalized. Returns an error if any word is
    /// not exactly five alphabetic characters, or if the iterator yields
    /// nothing.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for (i, word) in words.into_iter().enumerate() {
            list.push(normalize(word.as_ref(), i + 1)?);
        }
        Self::non_empty(list)
    }

    /// Reads a wordlist from a reader, one word per line.
    ///
    /// Lines are trimmed and blank lines are skipped; anything else must be
    /// a five-letter alphabetic word.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, WordlistError> {
        let mut list = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            list.push(normalize(word, i + 1)?);
        }
        Self::non_empty(list)
    }

    /// Reads a wordlist from a file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Returns the wordlist bundled with the crate.
    pub fn builtin() -> Self {
        Wordlist {
            words: BUILTIN.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    fn non_empty(words: Vec<String>) -> Result<Self, WordlistError> {
        if words.is_empty() {
            return Err(WordlistError::Empty);
        }
        log::debug!("wordlist holds {} words", words.len());
        Ok(Wordlist { words })
    }

    /// Returns the words as a slice, in their original order.
    pub fn as_slice(&self) -> &[String] {
        self.words.as_slice()
    }
}

impl Deref for Wordlist {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.words.as_slice()
    }
}

fn normalize(word: &str, line: usize) -> Result<String, WordlistError> {
    if word.chars().count() == WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(word.to_ascii_lowercase())
    } else {
        Err(WordlistError::InvalidWord {
            word: word.to_string(),
            line,
        })
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn builtin_is_valid() {
        let words = Wordlist::builtin();
        assert!(!words.is_empty());
        for word in words.iter() {
            assert_eq!(word.chars().count(), WORD_LEN);
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn from_words_normalizes_case() {
        let words = Wordlist::from_words(["APPLE", "Crane"]).unwrap();
        assert_eq!(words.as_slice(), ["apple", "crane"]);
    }

    #[test]
    fn from_words_rejects_bad_entries() {
        assert!(matches!(
            Wordlist::from_words(["apple", "pear"]),
            Err(WordlistError::InvalidWord { line: 2, .. })
        ));
        assert!(matches!(
            Wordlist::from_words(["ap1le"]),
            Err(WordlistError::InvalidWord { line: 1, .. })
        ));
    }

    #[test]
    fn empty_sources_are_refused() {
        assert!(matches!(
            Wordlist::from_words::<_, &str>([]),
            Err(WordlistError::Empty)
        ));
        assert!(matches!(
            Wordlist::from_reader(Cursor::new("\n  \n")),
            Err(WordlistError::Empty)
        ));
    }

    #[test]
    fn from_reader_skips_blank_lines() {
        let words = Wordlist::from_reader(Cursor::new("crane\n\n  slate  \n")).unwrap();
        assert_eq!(words.as_slice(), ["crane", "slate"]);
    }

    #[test]
    fn from_reader_reports_offending_line() {
        let err = Wordlist::from_reader(Cursor::new("crane\nslate\nxyz\n")).unwrap_err();
        match err {
            WordlistError::InvalidWord { word, line } => {
                assert_eq!(word, "xyz");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
