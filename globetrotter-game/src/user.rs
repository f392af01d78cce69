use serde::{Deserialize, Serialize};

/// A player profile as returned by the backend.
///
/// The client holds a cached, possibly stale copy for the duration of a
/// browser session. Only the backend persists profiles; the client persists
/// nothing but the username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub incorrect_answers: u32,
}

impl UserProfile {
    /// Zeroed local stand-in used when the profile lookup fails, so screens
    /// downstream never block on backend availability.
    #[must_use]
    pub fn placeholder(username: &str) -> Self {
        Self {
            username: username.to_string(),
            score: 0,
            correct_answers: 0,
            incorrect_answers: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserProfile;

    #[test]
    fn placeholder_profile_is_zeroed() {
        let profile = UserProfile::placeholder("alice");
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.score, 0);
        assert_eq!(profile.correct_answers, 0);
        assert_eq!(profile.incorrect_answers, 0);
    }

    #[test]
    fn profile_parses_backend_payload() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"username":"bob","score":40,"correct_answers":4,"incorrect_answers":2}"#,
        )
        .expect("profile should parse");
        assert_eq!(profile.score, 40);
        assert_eq!(profile.correct_answers, 4);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username":"carol"}"#).expect("profile should parse");
        assert_eq!(profile.score, 0);
        assert_eq!(profile.incorrect_answers, 0);
    }
}
