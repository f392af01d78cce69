//! Helpers for constructing backend URLs against the configured base endpoint.

/// Base URL of the Globetrotter API.
///
/// When `API_BASE_URL` is set at compile time the value is used verbatim
/// (minus any trailing slash). Local builds without it fall back to the
/// development backend address.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("API_BASE_URL").unwrap_or(""))
}

/// Absolute URL for a relative API path.
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{}/{}", api_base(), path.trim_start_matches('/'))
}

const DEV_BASE: &str = "http://localhost:8000";

fn api_base_with(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        DEV_BASE.to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{api_base_with, api_url};

    #[test]
    fn falls_back_to_dev_base_when_unset() {
        assert_eq!(api_base_with(""), "http://localhost:8000");
        assert_eq!(api_base_with("  "), "http://localhost:8000");
    }

    #[test]
    fn trims_trailing_slash_from_configured_base() {
        assert_eq!(
            api_base_with("https://api.globetrotter.example/"),
            "https://api.globetrotter.example"
        );
    }

    #[test]
    fn api_url_joins_base_and_path() {
        assert_eq!(
            api_url("/api/destinations/random"),
            "http://localhost:8000/api/destinations/random"
        );
        assert_eq!(
            api_url("api/leaderboard"),
            "http://localhost:8000/api/leaderboard"
        );
    }
}
