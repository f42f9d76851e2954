//! Live API tests. Run with: `cargo test --features online --test api_live -- --nocapture`
#![cfg(feature = "online")]

use countries_rs::{Client, Config, CountrySource, FetchError};

fn client() -> Client {
    Client::new(&Config::default()).expect("client")
}

#[test]
fn all_countries_have_names_and_regions() {
    let rows = client().all().expect("fetch all");
    assert!(rows.len() > 200, "expected >200 countries, got {}", rows.len());
    assert!(rows.iter().all(|r| !r.name.common.is_empty()));
    assert!(rows.iter().any(|r| r.region == "Europe"));
}

#[test]
fn search_with_spaces_is_encoded() {
    let rows = client().by_name("united states").expect("fetch by name");
    assert!(rows.iter().any(|r| r.name.common == "United States"));
}

#[test]
fn search_without_match_is_not_found() {
    let err = client().by_name("zzzz-no-such-country").unwrap_err();
    assert!(matches!(err, FetchError::NotFound { .. }), "got {err:?}");
}
