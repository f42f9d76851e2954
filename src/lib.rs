//! countries_rs
//!
//! A small Rust library for fetching country data from the REST Countries API and
//! summarizing it: population totals, countries per region and countries per language.
//! Pairs with the `countries` CLI and the `countries-gui` desktop app.
//!
//! ### Features
//! - List every country or search by (partial) name
//! - Render a statistics block plus country, region and language tables into any [`Surface`]
//! - Print as plain text, export as an HTML fragment, save records as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use countries_rs::{Client, Config, Controller, Page};
//!
//! let client = Client::new(&Config::default())?;
//! let controller = Controller::new(client, "en");
//! let mut page = Page::new();
//! controller.search("peru", &mut page);
//! println!("{}", page.to_text());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod format;
pub mod models;
pub mod render;
pub mod stats;
pub mod storage;

pub use api::{Client, CountrySource, FetchError};
pub use config::Config;
pub use controller::{Action, Controller, Outcome};
pub use models::CountryRecord;
pub use render::{Page, Surface, TableKind};
pub use stats::{Aggregate, Tally};
