//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! Two endpoints are used: `/all` and `/name/{query}`. Both answer with a JSON array of
//! country objects, or with an error object such as `{"status":404,"message":"Not Found"}`.
//!
//! ### Notes
//! - Every request carries a `fields` filter; the live `/all` endpoint refuses unfiltered
//!   requests and the crate only reads four fields anyway.
//! - Failures are returned as [`FetchError`] and logged as warnings here, at the boundary.
//!   Nothing is retried.
//!
//! Typical usage:
//! ```no_run
//! # use countries_rs::{Client, Config};
//! # use countries_rs::api::CountrySource;
//! let client = Client::new(&Config::default())?;
//! let peru = client.by_name("peru")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::models::{ApiResponse, CountryRecord};
use anyhow::Context;
use log::{debug, error, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Fields requested from the API.
pub const FIELDS: &str = "name,population,region,languages";

// Unreserved characters stay as-is; everything else in a path segment is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Why a fetch produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API reported that nothing matched (HTTP 404).
    #[error("no countries found: {message}")]
    NotFound { message: String },

    /// Any other non-success HTTP status.
    #[error("request failed with HTTP {status}")]
    Status { status: u16 },

    /// A success status whose body is an API error object.
    #[error("rest countries api error {status}: {message}")]
    Api { status: u16, message: String },

    /// The body was neither a country list nor an API error.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Source of country lists. [`Client`] talks to the live API; tests plug in fixtures.
pub trait CountrySource {
    /// Every country.
    fn all(&self) -> Result<Vec<CountryRecord>, FetchError>;
    /// Countries whose name contains `query`.
    fn by_name(&self, query: &str) -> Result<Vec<CountryRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("countries_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// URL of the list-all endpoint.
    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, FIELDS)
    }

    /// URL of the name search endpoint; `query` is trimmed and percent-encoded.
    ///
    /// `None` when the query cannot be a path segment of its own: empty, or only dots
    /// (`.`/`..` are resolved away by URL parsing, escaped or not).
    pub fn name_url(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.chars().all(|c| c == '.') {
            return None;
        }
        Some(format!(
            "{}/name/{}?fields={}",
            self.base_url,
            encode_segment(query),
            FIELDS
        ))
    }

    /// GET `url` and decode a country list.
    pub fn fetch_url(&self, url: &str) -> Result<Vec<CountryRecord>, FetchError> {
        debug!("GET {url}");
        let result = self
            .http
            .get(url)
            .send()
            .and_then(|resp| {
                let status = resp.status().as_u16();
                resp.text().map(|body| (status, body))
            })
            .map_err(FetchError::from)
            .and_then(|(status, body)| decode_body(status, &body));

        match &result {
            Ok(records) => debug!("GET {url}: {} countries", records.len()),
            Err(err) => {
                error!("GET {url}: {err}");
                warn!("failed to load countries");
            }
        }
        result
    }
}

impl CountrySource for Client {
    fn all(&self) -> Result<Vec<CountryRecord>, FetchError> {
        self.fetch_url(&self.all_url())
    }

    fn by_name(&self, query: &str) -> Result<Vec<CountryRecord>, FetchError> {
        match self.name_url(query) {
            Some(url) => self.fetch_url(&url),
            None => {
                warn!("not searching for {query:?}: not a usable name");
                Err(FetchError::NotFound {
                    message: format!("{:?} is not a searchable name", query.trim()),
                })
            }
        }
    }
}

/// Percent-encode `s` for use as one URL path segment.
pub fn encode_segment(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, SEGMENT).to_string()
}

/// Interpret an HTTP status and body from a country endpoint.
pub fn decode_body(status: u16, body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    let parsed = serde_json::from_str::<ApiResponse>(body);

    if !(200..300).contains(&status) {
        if status == 404 {
            let message = match parsed {
                Ok(ApiResponse::Error(e)) => e.message,
                _ => "Not Found".to_string(),
            };
            return Err(FetchError::NotFound { message });
        }
        return Err(FetchError::Status { status });
    }

    match parsed {
        Ok(ApiResponse::Countries(records)) => Ok(records),
        Ok(ApiResponse::Error(e)) if e.status == 404 => {
            Err(FetchError::NotFound { message: e.message })
        }
        Ok(ApiResponse::Error(e)) => Err(FetchError::Api {
            status: e.status,
            message: e.message,
        }),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}
