use crate::destination::AnswerOutcome;
use crate::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Session-local score accumulator: total points plus correct/incorrect
/// counters, folded in memory from each answer outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub total: i32,
    pub correct: u32,
    pub incorrect: u32,
}

impl Score {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            correct: 0,
            incorrect: 0,
        }
    }

    /// Seed a resumed session from a server-provided profile baseline.
    #[must_use]
    pub const fn from_profile(profile: &UserProfile) -> Self {
        Self {
            total: profile.score,
            correct: profile.correct_answers,
            incorrect: profile.incorrect_answers,
        }
    }

    /// Fold one answer outcome into the accumulator. Points are additive;
    /// exactly one of the two counters moves per outcome.
    pub fn apply(&mut self, outcome: &AnswerOutcome) {
        self.total += outcome.points_earned;
        if outcome.correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Questions answered so far this session.
    #[must_use]
    pub const fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::Score;
    use crate::destination::AnswerOutcome;
    use crate::user::UserProfile;

    fn outcome(correct: bool, points: i32) -> AnswerOutcome {
        AnswerOutcome {
            correct,
            correct_answer: "Paris".to_string(),
            fun_fact: String::new(),
            points_earned: points,
        }
    }

    #[test]
    fn apply_is_additive_and_counters_are_exclusive() {
        let mut score = Score::new();
        score.apply(&outcome(true, 10));
        score.apply(&outcome(false, 0));
        score.apply(&outcome(true, 10));
        assert_eq!(score.total, 20);
        assert_eq!(score.correct, 2);
        assert_eq!(score.incorrect, 1);
        assert_eq!(score.answered(), 3);
    }

    #[test]
    fn counters_are_exhaustive_over_answered_questions() {
        let mut score = Score::new();
        for i in 0..7 {
            score.apply(&outcome(i % 2 == 0, 10));
        }
        assert_eq!(score.correct + score.incorrect, score.answered());
        assert_eq!(score.answered(), 7);
    }

    #[test]
    fn baseline_comes_from_profile() {
        let profile = UserProfile {
            username: "alice".to_string(),
            score: 30,
            correct_answers: 3,
            incorrect_answers: 1,
        };
        let score = Score::from_profile(&profile);
        assert_eq!(score.total, 30);
        assert_eq!(score.correct, 3);
        assert_eq!(score.incorrect, 1);
    }
}
