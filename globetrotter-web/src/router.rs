use yew_router::prelude::*;

/// The three user-facing screens plus the catch-all.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game")]
    Game,
    #[at("/challenge/:code")]
    Challenge { code: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_recognize_expected_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/game"), Some(Route::Game));
        assert_eq!(
            Route::recognize("/challenge/ab12cd34"),
            Some(Route::Challenge {
                code: "ab12cd34".to_string()
            })
        );
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn challenge_route_round_trips_its_code() {
        let route = Route::Challenge {
            code: "ab12cd34".to_string(),
        };
        assert_eq!(route.to_path(), "/challenge/ab12cd34");
    }
}
