use serde::{Deserialize, Serialize};

/// One quiz question: a destination described by ordered clues plus the
/// multiple-choice option labels.
///
/// Clue order is meaningful; the UI reveals them progressively. The correct
/// answer never appears here; it is revealed only by the submission
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub destination_id: String,
    pub alias: String,
    #[serde(default)]
    pub clues: Vec<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Destination {
    /// Whether `label` is one of this question's answer options.
    #[must_use]
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|option| option == label)
    }
}

/// Backend verdict for one submitted answer. One-shot: rendered for the
/// current question, never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    #[serde(default)]
    pub fun_fact: String,
    #[serde(default)]
    pub points_earned: i32,
}

#[cfg(test)]
mod tests {
    use super::{AnswerOutcome, Destination};

    #[test]
    fn has_option_matches_exact_labels() {
        let destination = Destination {
            destination_id: "d1".to_string(),
            alias: "paris".to_string(),
            clues: vec!["A tower of iron".to_string()],
            options: vec!["Paris".to_string(), "Rome".to_string()],
        };
        assert!(destination.has_option("Paris"));
        assert!(!destination.has_option("paris"));
        assert!(!destination.has_option("London"));
    }

    #[test]
    fn outcome_parses_backend_payload() {
        let outcome: AnswerOutcome = serde_json::from_str(
            r#"{"correct":true,"correct_answer":"Paris","fun_fact":"The Eiffel Tower grows in summer.","points_earned":10}"#,
        )
        .expect("outcome should parse");
        assert!(outcome.correct);
        assert_eq!(outcome.points_earned, 10);
    }

    #[test]
    fn outcome_tolerates_missing_optional_fields() {
        let outcome: AnswerOutcome =
            serde_json::from_str(r#"{"correct":false,"correct_answer":"Paris"}"#)
                .expect("outcome should parse");
        assert!(outcome.fun_fact.is_empty());
        assert_eq!(outcome.points_earned, 0);
    }
}
