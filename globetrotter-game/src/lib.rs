//! Globetrotter session engine
//!
//! Platform-agnostic session state for the Globetrotter travel quiz client.
//! This crate owns the per-question round lifecycle, the session score
//! accumulator, and the wire types of the backend contract, without UI or
//! platform-specific dependencies. All game logic proper (destination
//! selection, scoring rules, challenge persistence) lives in the backend;
//! what remains here is the client's view of it.

pub mod challenge;
pub mod destination;
pub mod fallback;
pub mod round;
pub mod score;
pub mod user;

pub use challenge::{
    Challenge, LeaderboardEntry, challenge_path, is_challenge_code, share_message, share_url,
};
pub use destination::{AnswerOutcome, Destination};
pub use fallback::{DegradedMode, fallback_destination};
pub use round::{AnswerState, Round};
pub use score::Score;
pub use user::UserProfile;
