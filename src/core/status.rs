//! Letter-status evaluation shared by all games
//!
//! Classifies each position of a placed or guessed word against a target:
//! - `Correct`: right letter, right position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`: letter not available in the target
//!
//! The two-pass algorithm never marks more occurrences of a letter than the
//! target actually contains, so duplicate letters are scored exactly.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Per-position classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the target, but in another position
    Present,
    /// Letter not in the target (or all its occurrences already consumed)
    Absent,
}

/// Full feedback for one candidate word against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterStatus; WORD_LEN]);

impl Feedback {
    /// Evaluate `candidate` against `target`
    ///
    /// Pure function, total over all valid `Word` pairs. Both inputs are
    /// guaranteed 5 letters by construction.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume
    ///    those letters from the target's multiset
    /// 2. Second pass: mark `Present` only while the letter still has
    ///    unconsumed occurrences; everything else stays `Absent`
    ///
    /// # Examples
    /// ```
    /// use puzzlegen::core::{Word, Feedback, LetterStatus};
    ///
    /// let candidate = Word::new("alley").unwrap();
    /// let target = Word::new("llama").unwrap();
    /// let feedback = Feedback::evaluate(&candidate, &target);
    ///
    /// // A(present) L(correct) L(present) E(absent) Y(absent)
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Present,
    ///         LetterStatus::Absent,
    ///         LetterStatus::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(candidate: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LEN];
        let mut available = target.char_counts();

        // First pass: exact matches consume from the pool
        // Allow: index needed to access candidate[i], target[i], result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if candidate.chars()[i] == target.chars()[i] {
                result[i] = LetterStatus::Correct;

                let letter = candidate.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, bounded by what remains
        // Allow: index needed to access candidate[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == LetterStatus::Absent {
                let letter = candidate.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Per-position statuses, candidate order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions carrying the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterStatus::{Absent, Correct, Present};

    fn evaluate(candidate: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(candidate).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = evaluate("tigre", "chaud");
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count(Correct), 0);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn all_correct() {
        let feedback = evaluate("tigre", "tigre");
        assert!(feedback.is_all_correct());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn self_evaluation_always_perfect() {
        for word in ["tigre", "lions", "annee", "zzzzz", "aaaaa"] {
            assert!(evaluate(word, word).is_all_correct());
        }
    }

    #[test]
    fn duplicate_letters_never_overcounted() {
        // Target LLAMA has two L's and two A's. Candidate ALLEY must get
        // exactly one mark per available occurrence.
        let feedback = evaluate("alley", "llama");
        assert_eq!(
            feedback.statuses(),
            &[Present, Correct, Present, Absent, Absent]
        );

        // The Y and E get nothing, the second L consumed the remaining L
        assert_eq!(feedback.count(Correct) + feedback.count(Present), 3);
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // Target "salon" has a single S. The correct S at position 0
        // consumes it, so the later S's stay absent.
        let feedback = evaluate("sasse", "salon");
        assert_eq!(feedback.statuses()[0], Correct);
        assert_eq!(feedback.statuses()[2], Absent);
        assert_eq!(feedback.statuses()[3], Absent);
    }

    #[test]
    fn present_bounded_by_target_multiplicity() {
        // Candidate EEEEE vs target with two E's: exactly the correct-position
        // E plus one present, never more.
        let feedback = evaluate("eeeee", "beche");
        let marks = feedback.count(Correct) + feedback.count(Present);
        assert_eq!(marks, 2);
    }

    #[test]
    fn misplaced_letters_marked_present() {
        let feedback = evaluate("caner", "crane");
        assert_eq!(
            feedback.statuses(),
            &[Correct, Present, Present, Present, Present]
        );
    }

    #[test]
    fn emoji_rendering() {
        let feedback = evaluate("tigre", "tigre");
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");

        let feedback = evaluate("tigre", "chaud");
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜");
    }
}
