//! Offline degradation policy.
//!
//! Destination fetch failures never dead-end the game. The default policy
//! substitutes one fixed local question so the board stays interactive while
//! the backend is unreachable; the alternative surfaces the failure to the UI
//! for an explicit retry control.

use crate::destination::Destination;

/// What the game controller does when a destination fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegradedMode {
    /// Substitute [`fallback_destination`] and keep playing.
    #[default]
    UseFixture,
    /// Surface the failure; the UI offers a retry control.
    Surface,
}

/// The fixed question served while the backend is unreachable.
#[must_use]
pub fn fallback_destination() -> Destination {
    Destination {
        destination_id: "1".to_string(),
        alias: "paris".to_string(),
        clues: vec![
            "The city of lights awaits your discovery".to_string(),
            "A tower of iron stands tall over the Seine".to_string(),
            "Lovers lock their devotion on bridges here".to_string(),
        ],
        options: vec![
            "Paris".to_string(),
            "London".to_string(),
            "Rome".to_string(),
            "New York".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_destination;

    #[test]
    fn fixture_has_clues_and_options() {
        let destination = fallback_destination();
        assert!(!destination.clues.is_empty());
        assert_eq!(destination.options.len(), 4);
        assert!(destination.has_option("Paris"));
    }
}
