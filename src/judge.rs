//! Per-letter judging of guesses against a target word.
//!
//! Judging is pure computation: no game state is read or written. The
//! [`GameEngine`](crate::GameEngine) calls into this module on every accepted
//! guess, but the functions here can also be used on their own, for instance
//! to replay a recorded round.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word, guess, and feedback sequence.
pub const WORD_LEN: usize = 5;

/// The feedback for one letter of a guess.
///
/// [`MatchRule::judge()`] returns an array of five of these, one per letter
/// of the guess in order. The engine returns them as plain data; rendering
/// (colors, markup, tiles) is entirely the caller's concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Judgment {
    /// The letter is in the target word, in this position.
    Correct,

    /// The letter is in the target word, but not in this position.
    Present,

    /// The letter is not in the target word.
    Absent,
}

/// The judgments for a whole guess, one per letter in order.
pub type Feedback = [Judgment; WORD_LEN];

/// How repeated letters in a guess are graded.
///
/// The rules agree whenever the guess repeats no letter more often than the
/// target holds it; they differ only on the surplus copies.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum MatchRule {
    /// Every misplaced letter that occurs anywhere in the target is marked
    /// [`Present`](Judgment::Present), no matter how many copies the target
    /// actually holds. With the target `sober`, guessing `spool` marks both
    /// `o`s `Present` even though `sober` has only one.
    Lenient,

    /// [`Present`](Judgment::Present) markings are limited to the number of
    /// unmatched copies of the letter in the target, with exact matches
    /// claiming their letter first. With the target `sober`, guessing
    /// `spool` marks the first `o` `Present` and the second `Absent`.
    Counted,
}

impl Default for MatchRule {
    fn default() -> Self {
        MatchRule::Lenient
    }
}

impl MatchRule {
    /// Judges `guess` against `target`, returning one [`Judgment`] per
    /// letter of the guess in order.
    ///
    /// Both strings must be five lowercase alphabetic characters; the engine
    /// normalizes its inputs before calling this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_engine::{Judgment::*, MatchRule};
    ///
    /// let feedback = MatchRule::Lenient.judge("alpen", "apple");
    /// assert_eq!(feedback, [Correct, Present, Correct, Present, Absent]);
    /// ```
    pub fn judge(self, guess: &str, target: &str) -> Feedback {
        debug_assert_eq!(guess.chars().count(), WORD_LEN);
        debug_assert_eq!(target.chars().count(), WORD_LEN);

        match self {
            MatchRule::Lenient => lenient(guess, target),
            MatchRule::Counted => counted(guess, target),
        }
    }
}

fn lenient(guess: &str, target: &str) -> Feedback {
    let mut feedback = [Judgment::Absent; WORD_LEN];

    for (i, (guess, answer)) in guess.chars().zip(target.chars()).enumerate() {
        if guess == answer {
            feedback[i] = Judgment::Correct;
        } else if target.contains(guess) {
            feedback[i] = Judgment::Present;
        }
    }

    feedback
}

fn counted(guess: &str, target: &str) -> Feedback {
    use std::cmp::Ordering;

    use itertools::Itertools;

    let mut claimed = String::new();
    let mut feedback = [Judgment::Absent; WORD_LEN];

    // go through exact matches first, since those claim their letter with
    // priority over earlier misplaced copies
    for (i, (guess, answer)) in guess
        .chars()
        .zip(target.chars())
        .enumerate()
        .sorted_unstable_by(|&(a_i, (a_guess, a_answer)), &(b_i, (b_guess, b_answer))| {
            let a_exact = a_guess == a_answer;
            let b_exact = b_guess == b_answer;
            match a_exact.cmp(&b_exact).reverse() {
                Ordering::Equal => a_i.cmp(&b_i),
                other => other,
            }
        })
    {
        if guess == answer {
            claimed.push(guess);
            feedback[i] = Judgment::Correct;
        } else {
            let in_target = target.chars().filter(|&c| c == guess).count();
            if in_target > 0 && claimed.chars().filter(|&c| c == guess).count() < in_target {
                claimed.push(guess);
                feedback[i] = Judgment::Present;
            }
        }
    }

    feedback
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn str_to_feedback(input: &str) -> Feedback {
        let mut res = [Judgment::Absent; WORD_LEN];
        for (i, c) in input.chars().enumerate() {
            match c {
                'c' => res[i] = Judgment::Correct,
                'p' => res[i] = Judgment::Present,
                _ => {}
            }
        }
        res
    }

    macro_rules! judge_test {
        ($fn_name:ident[$rule:ident: $target:expr => $( [$guess:expr, $res:expr] );*]) => {
            #[test]
            fn $fn_name() {
                $(assert_eq!(
                    MatchRule::$rule.judge($guess, $target),
                    str_to_feedback($res),
                    "{} against {}",
                    $guess,
                    $target,
                );)*
            }
        };
    }

    judge_test! { lenient_mixed [Lenient: "apple" =>
        ["alpen", "cpcp."];
        ["apple", "ccccc"];
        ["crane", "..p.c"];
        ["zzzzz", "....."]]
    }

    judge_test! { lenient_overcounts_repeats [Lenient: "sober" =>
        ["spool", "c.pp."];
        ["soaks", "cc..p"]]
    }

    // Cases the counted rule shares with the lenient rule.
    judge_test! { counted_mixed [Counted: "apple" =>
        ["alpen", "cpcp."];
        ["apple", "ccccc"];
        ["zzzzz", "....."]]
    }

    judge_test! { counted_limits_repeats [Counted: "sober" =>
        ["spool", "c.p.."];
        ["soaks", "cc..."]]
    }

    judge_test! { counted_exact_match_claims_first [Counted: "tills" =>
        ["sills", ".cccc"]]
    }

    judge_test! { counted_repeat_in_target [Counted: "spoon" =>
        ["odors", "p.c.p"]]
    }

    #[test]
    fn rules_agree_without_repeats() {
        for (guess, target) in [("crane", "slate"), ("moved", "apple"), ("girth", "right")] {
            assert_eq!(
                MatchRule::Lenient.judge(guess, target),
                MatchRule::Counted.judge(guess, target),
            );
        }
    }

    proptest! {
        #[test]
        fn exact_positions_are_correct(guess in "[a-z]{5}", target in "[a-z]{5}") {
            for rule in [MatchRule::Lenient, MatchRule::Counted] {
                let feedback = rule.judge(&guess, &target);
                for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
                    if g == t {
                        prop_assert_eq!(feedback[i], Judgment::Correct);
                    } else {
                        prop_assert_ne!(feedback[i], Judgment::Correct);
                    }
                }
            }
        }

        #[test]
        fn equal_words_grade_all_correct(word in "[a-z]{5}") {
            prop_assert_eq!(MatchRule::Lenient.judge(&word, &word), [Judgment::Correct; 5]);
            prop_assert_eq!(MatchRule::Counted.judge(&word, &word), [Judgment::Correct; 5]);
        }

        #[test]
        fn absent_means_absent_under_lenient(guess in "[a-z]{5}", target in "[a-z]{5}") {
            let feedback = MatchRule::Lenient.judge(&guess, &target);
            for (i, g) in guess.chars().enumerate() {
                if feedback[i] == Judgment::Absent {
                    prop_assert!(!target.contains(g));
                }
            }
        }

        #[test]
        fn counted_never_over_credits(guess in "[a-z]{5}", target in "[a-z]{5}") {
            let feedback = MatchRule::Counted.judge(&guess, &target);
            for letter in guess.chars() {
                let credited = guess
                    .chars()
                    .zip(feedback.iter())
                    .filter(|&(g, &j)| g == letter && j != Judgment::Absent)
                    .count();
                let in_target = target.chars().filter(|&c| c == letter).count();
                prop_assert!(credited <= in_target);
            }
        }
    }
}
