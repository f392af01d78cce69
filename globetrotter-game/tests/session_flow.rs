//! Full session flows over the round state machine, driven the way the web
//! controller drives it: fetch, answer, resolve, reset, next question.

use globetrotter_game::{
    AnswerOutcome, AnswerState, Destination, Round, Score, UserProfile, fallback_destination,
};

fn question(options: &[&str]) -> Destination {
    Destination {
        destination_id: "q1".to_string(),
        alias: "paris".to_string(),
        clues: vec![
            "The city of lights awaits your discovery".to_string(),
            "A tower of iron stands tall over the Seine".to_string(),
        ],
        options: options.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn fresh_session_correct_answer_scores_ten() {
    // fetchUser("alice") -> zeroed profile
    let profile = UserProfile::placeholder("alice");
    let mut round = Round::with_score(Score::from_profile(&profile));

    // fetchDestination() -> four options
    round.begin(question(&["Paris", "London", "Rome", "New York"]));
    assert_eq!(round.answer_state(), AnswerState::Unanswered);

    // handleAnswer("Paris") -> correct, 10 points
    let submitted = round.select("Paris").expect("first answer is admitted");
    assert_eq!(submitted, "Paris");
    round.resolve(AnswerOutcome {
        correct: true,
        correct_answer: "Paris".to_string(),
        fun_fact: "The Eiffel Tower grows in summer.".to_string(),
        points_earned: 10,
    });

    assert_eq!(round.score(), Score {
        total: 10,
        correct: 1,
        incorrect: 0
    });
}

#[test]
fn fresh_session_wrong_answer_then_retry_is_a_noop() {
    let profile = UserProfile::placeholder("alice");
    let mut round = Round::with_score(Score::from_profile(&profile));
    round.begin(question(&["Paris", "London", "Rome", "New York"]));

    // handleAnswer("Rome") -> incorrect, zero points
    round.select("Rome").expect("first answer is admitted");
    round.resolve(AnswerOutcome {
        correct: false,
        correct_answer: "Paris".to_string(),
        fun_fact: String::new(),
        points_earned: 0,
    });
    assert_eq!(round.score(), Score {
        total: 0,
        correct: 0,
        incorrect: 1
    });

    // A second handleAnswer("Paris") is a no-op: nothing to submit, score
    // unchanged.
    assert_eq!(round.select("Paris"), None);
    assert_eq!(round.score(), Score {
        total: 0,
        correct: 0,
        incorrect: 1
    });
}

#[test]
fn multi_question_session_keeps_counters_exhaustive() {
    let mut round = Round::default();
    let verdicts = [(true, 10), (false, 0), (true, 10), (false, 0), (true, 10)];

    for (i, (correct, points)) in verdicts.iter().enumerate() {
        let mut q = question(&["Paris", "London", "Rome", "New York"]);
        q.destination_id = format!("q{i}");
        round.begin(q);
        round.select("Paris").expect("one answer per question");
        round.resolve(AnswerOutcome {
            correct: *correct,
            correct_answer: "Paris".to_string(),
            fun_fact: String::new(),
            points_earned: *points,
        });
        round.reset();
    }

    let score = round.score();
    assert_eq!(score.total, 30);
    assert_eq!(score.correct, 3);
    assert_eq!(score.incorrect, 2);
    assert_eq!(score.correct + score.incorrect, score.answered());
}

#[test]
fn degraded_fetch_still_yields_a_playable_board() {
    // fetchDestination() failed; the controller substitutes the fixture.
    let mut round = Round::default();
    round.begin(fallback_destination());

    let destination = round.destination().expect("fixture installed");
    assert!(!destination.clues.is_empty());
    assert!(!destination.options.is_empty());

    // The fixture plays like any other question.
    assert!(round.select("Paris").is_some());
}

#[test]
fn abandoning_a_pending_answer_discards_the_late_verdict() {
    // Answer submitted, then the player navigates away (reset) before the
    // verdict lands. The late verdict must not touch the score.
    let mut round = Round::default();
    round.begin(question(&["Paris", "London"]));
    round.select("London").expect("admitted");
    round.reset();
    round.resolve(AnswerOutcome {
        correct: false,
        correct_answer: "Paris".to_string(),
        fun_fact: String::new(),
        points_earned: 0,
    });
    assert_eq!(round.score(), Score::new());
}
