//! HTTP client for the Globetrotter backend.
//!
//! A thin request wrapper plus one function per backend endpoint. Errors are
//! normalized into [`ApiError`]. Nothing here retries; callers decide
//! whether to retry by re-invoking.

use crate::paths::api_url;
use globetrotter_game::{AnswerOutcome, Challenge, Destination, LeaderboardEntry, UserProfile};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    fn network(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Structured error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Serialize)]
struct AuthBody<'a> {
    username: &'a str,
}

#[derive(Debug, Serialize)]
struct ScoreBody {
    points: i32,
}

#[derive(Debug, Serialize)]
struct AnswerBody<'a> {
    destination_id: &'a str,
    user_answer: &'a str,
    username: &'a str,
}

#[derive(Debug, Serialize)]
struct ChallengeBody<'a> {
    challenger_username: &'a str,
}

/// Map a non-success response to [`ApiError::Api`], preferring the backend's
/// structured `{detail}` payload and synthesizing a generic message from the
/// status code when there is none.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("API error: {status}"),
    };
    ApiError::Api { status, message }
}

async fn decode<T>(response: Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Create the user, or keep playing with an existing account: the backend
/// reports an already-taken username as a 400 and that case is a success
/// here.
///
/// # Errors
/// Returns an error for transport failures and for any other non-2xx status.
pub async fn auth_user(username: &str) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/api/users/auth"))
        .json(&AuthBody { username })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if response.ok() || response.status() == 400 {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Look up a profile by username.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses, or a malformed
/// body. Callers fall back to a placeholder profile.
pub async fn get_user(username: &str) -> Result<UserProfile, ApiError> {
    let response = Request::get(&api_url(&format!("/api/users/{username}")))
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

/// Fire-and-forget score increment. The body is discarded; only the status
/// matters.
///
/// # Errors
/// Returns an error for transport failures and non-2xx statuses; callers log
/// and drop it.
pub async fn update_score(username: &str, points: i32) -> Result<(), ApiError> {
    let response = Request::post(&api_url(&format!("/api/users/{username}/score")))
        .json(&ScoreBody { points })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Fetch a new question scoped to the player. The server may exclude
/// recently-seen destinations based on the `X-Username` header; that policy
/// is opaque to the client.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses, or a malformed
/// body. Callers apply the degraded-mode policy.
pub async fn random_destination(username: &str) -> Result<Destination, ApiError> {
    let response = Request::get(&api_url("/api/destinations/random"))
        .header("X-Username", username)
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

/// Submit one answer for the given question.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses, or a malformed
/// body. On failure the question stays answered-but-resultless.
pub async fn submit_answer(
    username: &str,
    destination_id: &str,
    answer: &str,
) -> Result<AnswerOutcome, ApiError> {
    let response = Request::post(&api_url("/api/destinations/answer"))
        .json(&AnswerBody {
            destination_id,
            user_answer: answer,
            username,
        })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

/// Mint a challenge code for the challenger's current backend score.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses, or a malformed
/// body.
pub async fn create_challenge(username: &str) -> Result<Challenge, ApiError> {
    let response = Request::post(&api_url("/api/challenges"))
        .json(&ChallengeBody {
            challenger_username: username,
        })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

/// Fetch challenge metadata for a landing page.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses (including
/// expired or removed challenges), or a malformed body.
pub async fn get_challenge(code: &str) -> Result<Challenge, ApiError> {
    let response = Request::get(&api_url(&format!("/api/challenges/{code}")))
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

/// Fetch the ranked leaderboard. Outside the core play flow; the home page
/// shows it opportunistically.
///
/// # Errors
/// Returns an error for transport failures, non-2xx statuses, or a malformed
/// body; the caller hides the panel.
pub async fn leaderboard() -> Result<Vec<LeaderboardEntry>, ApiError> {
    let response = Request::get(&api_url("/api/leaderboard"))
        .send()
        .await
        .map_err(ApiError::network)?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::ErrorBody;

    #[test]
    fn error_body_parses_backend_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Username already exists"}"#)
            .expect("error body should parse");
        assert_eq!(body.detail, "Username already exists");
    }
}
