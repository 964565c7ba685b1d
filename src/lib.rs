#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod game;
pub use game::{GameEngine, GameStatus, GuessOutcome, GuessRecord, MAX_ATTEMPTS};

pub mod judge;
pub use judge::{Feedback, Judgment, MatchRule, WORD_LEN};

pub mod words;
pub use words::Wordlist;

pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_engine` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("the game rejected an operation")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("the wordlist could not be used")]
    Wordlist {
        #[from]
        kind: WordlistError,
    },
}

/// Errors raised while playing one round.
///
/// All of these are recoverable: the round state is exactly what it was
/// before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess is not exactly five characters long.
    #[error("the guess \"{0}\" is not exactly five letters long")]
    WrongLength(String),

    /// The guess contains a character outside of `a-z` and `A-Z`.
    #[error("the guess \"{0}\" contains a non-alphabetic character")]
    NotAlphabetic(String),

    /// The round already ended; call [`restart()`](GameEngine::restart())
    /// before guessing again.
    #[error("the round is already {0}")]
    RoundOver(GameStatus),
}

/// Errors raised while building a [`Wordlist`].
#[derive(Debug, Error)]
pub enum WordlistError {
    /// The source held no words, so a game could never pick a target.
    #[error("the wordlist contains no words")]
    Empty,

    /// An entry is not a five-letter alphabetic word.
    #[error("\"{word}\" (line {line}) is not a five-letter alphabetic word")]
    InvalidWord { word: String, line: usize },

    #[error("could not read the wordlist")]
    Io(#[from] std::io::Error),
}
