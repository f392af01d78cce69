//! Per-question session lifecycle.
//!
//! A round moves `unanswered -> answered-pending -> resolved` and returns to
//! `unanswered` only when a freshly fetched question is installed. The one
//! hard invariant in the client: at most one answer is ever admitted per
//! fetched question.

use crate::destination::{AnswerOutcome, Destination};
use crate::score::Score;

/// Progress of the current question's answer flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// No answer admitted yet.
    Unanswered,
    /// An answer was admitted; the verdict has not arrived.
    Pending,
    /// The verdict arrived and was folded into the score.
    Resolved,
}

/// The game session controller state: current question, recorded answer,
/// verdict, and the running score accumulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    destination: Option<Destination>,
    user_answer: Option<String>,
    result: Option<AnswerOutcome>,
    /// Latched by [`Round::select`]; only a new [`Round::begin`] clears it.
    answered: bool,
    score: Score,
}

impl Round {
    /// A round resuming from a server-provided score baseline.
    #[must_use]
    pub fn with_score(score: Score) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&AnswerOutcome> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub const fn answer_state(&self) -> AnswerState {
        match (&self.user_answer, &self.result) {
            (None, _) => AnswerState::Unanswered,
            (Some(_), None) => AnswerState::Pending,
            (Some(_), Some(_)) => AnswerState::Resolved,
        }
    }

    /// Install a freshly fetched question, discarding any stale selection and
    /// re-arming the admission guard.
    pub fn begin(&mut self, destination: Destination) {
        self.user_answer = None;
        self.result = None;
        self.answered = false;
        self.destination = Some(destination);
    }

    /// Admit the player's selection. Returns the label to submit exactly
    /// once; `None` when no question is loaded, the label is not one of the
    /// current options, or an answer was already admitted for this question.
    pub fn select(&mut self, label: &str) -> Option<String> {
        if self.answered {
            return None;
        }
        let destination = self.destination.as_ref()?;
        if !destination.has_option(label) {
            return None;
        }
        self.answered = true;
        self.user_answer = Some(label.to_string());
        Some(label.to_string())
    }

    /// Fold the backend verdict into the running score and keep it for
    /// rendering. Ignored unless an answer is pending, so a verdict arriving
    /// after [`Round::reset`] is silently discarded.
    pub fn resolve(&mut self, outcome: AnswerOutcome) {
        if self.answer_state() != AnswerState::Pending {
            return;
        }
        self.score.apply(&outcome);
        self.result = Some(outcome);
    }

    /// Clear selection and verdict ahead of the next fetch. The score
    /// accumulator is untouched, and the admission guard stays latched until
    /// a new question arrives.
    pub fn reset(&mut self) {
        self.user_answer = None;
        self.result = None;
    }
}
