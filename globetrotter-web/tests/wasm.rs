#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn username_round_trips_through_local_storage() {
    globetrotter_web::storage::store_username("alice");
    assert_eq!(
        globetrotter_web::storage::load_username(),
        Some("alice".to_string())
    );
    globetrotter_web::storage::clear_username();
    assert_eq!(globetrotter_web::storage::load_username(), None);
}

#[wasm_bindgen_test]
fn blank_usernames_are_not_identities() {
    globetrotter_web::storage::store_username("   ");
    assert_eq!(globetrotter_web::storage::load_username(), None);
    globetrotter_web::storage::clear_username();
}
