//! Challenge sharing: wire types plus pure link/message construction.
//!
//! A challenge is a short opaque code minted by the backend for a challenger;
//! the code is the whole artifact. Expiry and status lifecycle are owned
//! entirely by the backend.

use serde::{Deserialize, Serialize};

/// A shareable challenge as stored by the backend. Creation responses may
/// carry only the code; the landing-page lookup returns the full shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default)]
    pub id: String,
    pub challenge_code: String,
    #[serde(default)]
    pub challenger_username: String,
    #[serde(default)]
    pub challenger_score: i32,
}

/// One row of the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    #[serde(default)]
    pub total_score: i32,
    #[serde(default)]
    pub rank: u32,
}

/// Relative route for a challenge landing page.
#[must_use]
pub fn challenge_path(code: &str) -> String {
    format!("/challenge/{code}")
}

/// Absolute shareable URL for a challenge code.
#[must_use]
pub fn share_url(origin: &str, code: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), challenge_path(code))
}

/// Prefilled invitation text for share targets.
#[must_use]
pub fn share_message(username: &str, score: i32, url: &str) -> String {
    format!(
        "{username} challenges you to beat {score} points in Globetrotter! \
         Can you guess these destinations? Play here: {url}"
    )
}

/// Shape check for challenge codes before hitting the backend: short opaque
/// alphanumeric tokens (the backend mints UUID prefixes).
#[must_use]
pub fn is_challenge_code(code: &str) -> bool {
    let code = code.trim();
    (4..=16).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{Challenge, challenge_path, is_challenge_code, share_message, share_url};

    #[test]
    fn share_url_joins_origin_and_code() {
        assert_eq!(
            share_url("https://globetrotter.example", "ab12cd34"),
            "https://globetrotter.example/challenge/ab12cd34"
        );
        assert_eq!(
            share_url("https://globetrotter.example/", "ab12cd34"),
            "https://globetrotter.example/challenge/ab12cd34"
        );
    }

    #[test]
    fn challenge_path_is_router_shaped() {
        assert_eq!(challenge_path("ab12cd34"), "/challenge/ab12cd34");
    }

    #[test]
    fn share_message_names_challenger_and_score() {
        let message = share_message("alice", 40, "https://g.example/challenge/ab12cd34");
        assert!(message.contains("alice"));
        assert!(message.contains("40 points"));
        assert!(message.ends_with("https://g.example/challenge/ab12cd34"));
    }

    #[test]
    fn code_shape_check_accepts_backend_tokens() {
        assert!(is_challenge_code("ab12cd34"));
        assert!(is_challenge_code("  ab12cd34 "));
        assert!(!is_challenge_code(""));
        assert!(!is_challenge_code("ab"));
        assert!(!is_challenge_code("has spaces in it"));
        assert!(!is_challenge_code("way-too-long-to-be-a-code"));
    }

    #[test]
    fn creation_response_parses_with_code_only() {
        let challenge: Challenge = serde_json::from_str(r#"{"challenge_code":"ab12cd34"}"#)
            .expect("creation response should parse");
        assert_eq!(challenge.challenge_code, "ab12cd34");
        assert!(challenge.challenger_username.is_empty());
    }

    #[test]
    fn lookup_response_parses_full_shape() {
        let challenge: Challenge = serde_json::from_str(
            r#"{"id":"65f0","challenge_code":"ab12cd34","challenger_username":"alice","challenger_score":40}"#,
        )
        .expect("lookup response should parse");
        assert_eq!(challenge.challenger_username, "alice");
        assert_eq!(challenge.challenger_score, 40);
    }
}
