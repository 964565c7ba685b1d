//! The game engine for one round of play.
//!
//! A [`GameEngine`] owns a [`Wordlist`], the hidden target word, and the
//! history of judged guesses. It is a plain value with `&mut self`
//! operations: a host embedding it (one engine per session) gets exclusive
//! access per instance from the borrow rules, and the type is `Send` so each
//! session can carry its engine wherever it runs.

use std::fmt::Display;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    judge::{Feedback, MatchRule},
    words::Wordlist,
    GameError,
};

/// The maximum number of accepted guesses in one round.
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round stands.
///
/// This is always derived from the guess history, never stored: a round is
/// won as soon as any guess matched the target, lost once six guesses did
/// not, and in progress otherwise.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum GameStatus {
    /// Guesses are still being accepted.
    InProgress,

    /// A guess matched the target word.
    Won,

    /// Six guesses came and went without a match.
    Lost,
}

impl GameStatus {
    /// Returns true once the round has ended, in either direction.
    ///
    /// Callers should check this (or [`GameEngine::is_over()`]) before
    /// submitting, since a finished round rejects further guesses.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// One accepted guess and the feedback it earned.
///
/// Records are appended in submission order and cleared on restart. The
/// guess is stored lowercase-normalized, exactly as it was judged.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessRecord {
    guess: String,
    feedback: Feedback,
}

impl GuessRecord {
    /// The normalized guess.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The judgment for each letter of the guess, in order.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

impl Display for GuessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.guess)
    }
}

/// What [`GameEngine::submit_guess()`] returns for an accepted guess.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GuessOutcome {
    /// The judgment for each letter of the guess, in order.
    pub feedback: Feedback,

    /// The 1-based number of this attempt.
    pub attempt: usize,

    /// Where the round stands after this guess.
    pub status: GameStatus,
}

/// A single-player word-guessing round.
///
/// The engine owns its wordlist for its whole lifetime and plays one round
/// at a time: construction starts the first round, and
/// [`restart()`](GameEngine::restart()) begins a fresh one with a newly
/// drawn target. Randomness is injected, so callers control reproducibility.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use wordle_engine::{GameEngine, Wordlist};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let mut game = GameEngine::new(Wordlist::builtin(), &mut rng);
///
/// let outcome = game.submit_guess("crane")?;
/// assert_eq!(outcome.attempt, 1);
/// assert_eq!(game.history().len(), 1);
///
/// // Rejected guesses change nothing.
/// assert!(game.submit_guess("ap1le").is_err());
/// assert_eq!(game.attempts(), 1);
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    words: Wordlist,
    target: String,
    rule: MatchRule,
    history: Vec<GuessRecord>,
}

impl GameEngine {
    /// Creates an engine over `words` and starts its first round.
    ///
    /// The wordlist is non-empty by construction, so there is always a
    /// target to draw.
    pub fn new<R: Rng + ?Sized>(words: Wordlist, rng: &mut R) -> Self {
        let mut engine = GameEngine {
            words,
            target: String::new(),
            rule: MatchRule::default(),
            history: Vec::new(),
        };
        engine.start_new_game(rng);
        engine
    }

    /// Sets how repeated letters are graded. Defaults to
    /// [`MatchRule::Lenient`].
    pub fn with_rule(self, rule: MatchRule) -> Self {
        GameEngine { rule, ..self }
    }

    /// Starts a new round: draws a fresh target uniformly at random and
    /// clears the attempt history.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let index = rng.gen_range(0..self.words.len());
        self.target = self.words[index].clone();
        self.history.clear();
        log::debug!("started a new round");
        log::trace!("target is wordlist entry {}", index);
    }

    /// Starts a new round, leaving any `Won`/`Lost` state behind.
    ///
    /// Equivalent to [`start_new_game()`](GameEngine::start_new_game()); the
    /// terminal state is derived from the history, so clearing the history
    /// makes the engine accept guesses again.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.start_new_game(rng);
    }

    /// Validates and judges one guess.
    ///
    /// The guess must be exactly five alphabetic characters, in either case.
    /// Anything else is rejected with no state change: the attempt count and
    /// history are untouched, and the round continues. A guess submitted
    /// after the round ended is likewise rejected unchanged.
    ///
    /// An accepted guess is lowercase-normalized, judged, and appended to
    /// the history; the returned [`GuessOutcome`] carries the feedback, the
    /// attempt number, and where the round now stands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use wordle_engine::{GameEngine, GameStatus, Judgment::*, Wordlist};
    ///
    /// let words = Wordlist::from_words(["apple"])?;
    /// let mut game = GameEngine::new(words, &mut StdRng::seed_from_u64(0));
    ///
    /// let outcome = game.submit_guess("alpen")?;
    /// assert_eq!(outcome.feedback, [Correct, Present, Correct, Present, Absent]);
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    ///
    /// let outcome = game.submit_guess("APPLE")?;
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// assert_eq!(outcome.attempt, 2);
    /// #
    /// # Ok::<_, wordle_engine::WordleError>(())
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        let status = self.status();
        if status.is_over() {
            return Err(GameError::RoundOver(status));
        }

        let guess = normalize_guess(raw)?;
        let feedback = self.rule.judge(&guess, &self.target);
        self.history.push(GuessRecord { guess, feedback });

        Ok(GuessOutcome {
            feedback,
            attempt: self.history.len(),
            status: self.status(),
        })
    }

    /// Where the round stands.
    pub fn status(&self) -> GameStatus {
        if self.history.iter().any(|record| record.guess == self.target) {
            GameStatus::Won
        } else if self.history.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the round has ended, in either direction.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// The number of guesses accepted so far this round.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// The accepted guesses and their feedback, in submission order.
    pub fn history(&self) -> &[GuessRecord] {
        self.history.as_slice()
    }

    /// The target word, revealed only once the round is over.
    pub fn target(&self) -> Option<&str> {
        if self.is_over() {
            Some(self.target.as_str())
        } else {
            None
        }
    }

    /// How this engine grades repeated letters.
    pub fn rule(&self) -> MatchRule {
        self.rule
    }
}

fn normalize_guess(raw: &str) -> Result<String, GameError> {
    if raw.chars().count() != crate::judge::WORD_LEN {
        return Err(GameError::WrongLength(raw.to_string()));
    }
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GameError::NotAlphabetic(raw.to_string()));
    }
    Ok(raw.to_ascii_lowercase())
}
