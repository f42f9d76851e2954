use countries_rs::api::{FetchError, decode_body};
use countries_rs::models::{ApiResponse, CountryRecord};

#[test]
fn parse_sample_json() {
    let sample = r#"
    [
      {
        "name": {"common": "Peru", "official": "Republic of Peru", "nativeName": {}},
        "population": 32971846,
        "region": "Americas",
        "languages": {"aym": "Aymara", "que": "Quechua", "spa": "Spanish"}
      },
      {
        "name": {"common": "Antarctica", "official": "Antarctica"},
        "population": 1000,
        "region": "Antarctic",
        "languages": {}
      }
    ]
    "#;

    let records: Vec<CountryRecord> = serde_json::from_str(sample).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.common, "Peru");
    assert_eq!(records[0].name.official.as_deref(), Some("Republic of Peru"));
    assert_eq!(records[0].population, 32_971_846);
    let langs: Vec<&str> = records[0].language_names().collect();
    assert_eq!(langs, ["Aymara", "Quechua", "Spanish"]);

    // Empty language object is present but empty, not absent.
    assert_eq!(records[1].languages, Some(vec![]));
}

#[test]
fn null_languages_is_absent() {
    let r: CountryRecord = serde_json::from_str(
        r#"{"name":{"common":"X"},"population":5,"region":"R","languages":null}"#,
    )
    .unwrap();
    assert!(r.languages.is_none());
}

#[test]
fn response_distinguishes_list_and_error_object() {
    let list: ApiResponse = serde_json::from_str(r#"[]"#).unwrap();
    assert_eq!(list, ApiResponse::Countries(vec![]));

    let err: ApiResponse =
        serde_json::from_str(r#"{"status":404,"message":"Not Found"}"#).unwrap();
    match err {
        ApiResponse::Error(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.message, "Not Found");
        }
        other => panic!("expected error object, got {other:?}"),
    }
}

#[test]
fn not_found_without_json_body_still_maps_to_not_found() {
    let err = decode_body(404, "").unwrap_err();
    assert!(matches!(err, FetchError::NotFound { .. }));
    assert!(err.to_string().contains("no countries found"));
}

#[test]
fn client_error_status_is_reported() {
    let err = decode_body(400, r#"{"status":400,"message":"Bad Request"}"#).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 400 }));
}
