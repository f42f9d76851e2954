//! The two user actions: list every country, and search by name.
//!
//! Each action is independent. It fetches, renders into the surface it is given and
//! reports what happened as an [`Outcome`]; there is no shared in-flight state.

use crate::api::{CountrySource, FetchError};
use crate::models::CountryRecord;
use crate::render::{self, Surface};
use crate::stats::Aggregate;
use log::{info, warn};

/// Message shown when search is triggered with an empty field.
pub const EMPTY_QUERY_ALERT: &str = "Please enter a country name";

/// Result of one user action.
#[derive(Debug)]
pub enum Outcome {
    /// Data was fetched and rendered.
    Rendered {
        records: Vec<CountryRecord>,
        aggregate: Aggregate,
    },
    /// The search matched nothing; an empty page and a notice were rendered.
    NoResults,
    /// Search with a blank query; the user was alerted and nothing was fetched.
    EmptyQuery,
    /// The fetch failed; the surface was left untouched.
    Failed(FetchError),
}

/// A user action, kept so a front end can repeat it (e.g. after a locale change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListAll,
    Search(String),
}

/// Wires a [`CountrySource`] to the renderer.
pub struct Controller<C> {
    source: C,
    locale: String,
}

impl<C: CountrySource> Controller<C> {
    pub fn new(source: C, locale: impl Into<String>) -> Self {
        Self {
            source,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Perform `action` against `surface`.
    pub fn run<S: Surface + ?Sized>(&self, action: &Action, surface: &mut S) -> Outcome {
        match action {
            Action::ListAll => self.list_all(surface),
            Action::Search(q) => self.search(q, surface),
        }
    }

    /// Fetch every country and render it.
    pub fn list_all<S: Surface + ?Sized>(&self, surface: &mut S) -> Outcome {
        match self.source.all() {
            Ok(records) => {
                info!("rendering {} countries", records.len());
                let aggregate = render::render(surface, &records, &self.locale);
                Outcome::Rendered { records, aggregate }
            }
            Err(err) => {
                warn!("error fetching all countries: {err}");
                Outcome::Failed(err)
            }
        }
    }

    /// Search countries by name, render the matches and describe the first match's languages.
    pub fn search<S: Surface + ?Sized>(&self, query: &str, surface: &mut S) -> Outcome {
        let query = query.trim();
        if query.is_empty() {
            surface.alert(EMPTY_QUERY_ALERT);
            return Outcome::EmptyQuery;
        }

        let records = match self.source.by_name(query) {
            Ok(records) => records,
            Err(FetchError::NotFound { .. }) => Vec::new(),
            Err(err) => {
                warn!("error fetching country by name: {err}");
                return Outcome::Failed(err);
            }
        };

        let agg = render::render(surface, &records, &self.locale);
        let Some(first) = records.first() else {
            info!("no countries match {query:?}");
            surface.append_paragraph(vec![format!("No countries match \"{query}\".")]);
            return Outcome::NoResults;
        };

        surface.append_paragraph(language_report(&agg, &first.name.common));
        Outcome::Rendered {
            records,
            aggregate: agg,
        }
    }
}

/// Lines describing `country`'s languages and how many other countries share each one.
pub fn language_report(agg: &Aggregate, country: &str) -> Vec<String> {
    let languages = agg.languages_of(country).unwrap_or_default();
    if languages.is_empty() {
        return vec![format!("Languages spoken in {country}: none listed")];
    }

    let mut lines = vec![format!(
        "Languages spoken in {country}: {}",
        languages.join(", ")
    )];
    for lang in languages {
        lines.push(format!(
            "Other countries that speak {lang}: {}",
            agg.other_speakers(lang)
        ));
    }
    lines
}
