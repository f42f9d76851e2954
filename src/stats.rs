use crate::models::CountryRecord;
use serde::{Deserialize, Serialize};

/// Counts keyed by label, kept in first-seen order.
///
/// Lookups are linear; the label sets here (regions, languages) stay in the hundreds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `label`, appending it if this is its first occurrence.
    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, n)| (l.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Country common name -> its language names in API order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryLanguageIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl CountryLanguageIndex {
    /// Record `languages` for `country`. A repeated name replaces the earlier entry in place.
    pub fn insert(&mut self, country: &str, languages: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| c == country) {
            Some((_, langs)) => *langs = languages,
            None => self.entries.push((country.to_string(), languages)),
        }
    }

    pub fn get(&self, country: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, langs)| langs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(c, l)| (c.as_str(), l.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the countries table, before number formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRow {
    pub name: String,
    pub population: u64,
    pub region: String,
}

/// Everything derived from one list of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub rows: Vec<CountryRow>,
    pub total_population: u64,
    pub regions: Tally,
    pub languages: Tally,
    pub country_languages: CountryLanguageIndex,
}

impl Aggregate {
    pub fn country_count(&self) -> usize {
        self.rows.len()
    }

    /// Mean population, `None` for an empty list.
    pub fn average_population(&self) -> Option<f64> {
        match self.rows.len() {
            0 => None,
            n => Some(self.total_population as f64 / n as f64),
        }
    }

    /// Languages recorded for `country`, if it had any.
    pub fn languages_of(&self, country: &str) -> Option<&[String]> {
        self.country_languages.get(country)
    }

    /// How many other countries in this aggregate list `language`.
    pub fn other_speakers(&self, language: &str) -> usize {
        self.languages.get(language).saturating_sub(1)
    }
}

/// Compute totals, region and language tallies and the per-country language index.
///
/// Pure function of `records`; nothing carries over between calls.
pub fn aggregate(records: &[CountryRecord]) -> Aggregate {
    let mut out = Aggregate::default();
    for rec in records {
        out.total_population = out.total_population.saturating_add(rec.population);

        if rec.languages.is_some() {
            // One count per country, even if two codes share a display name.
            let mut names: Vec<String> = Vec::new();
            for name in rec.language_names() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
            for lang in &names {
                out.languages.increment(lang);
            }
            out.country_languages.insert(&rec.name.common, names);
        }

        out.rows.push(CountryRow {
            name: rec.name.common.clone(),
            population: rec.population,
            region: rec.region.clone(),
        });
        out.regions.increment(&rec.region);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order() {
        let mut t = Tally::new();
        for l in ["b", "a", "b", "c", "a", "b"] {
            t.increment(l);
        }
        let got: Vec<(&str, usize)> = t.iter().collect();
        assert_eq!(got, [("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(t.get("missing"), 0);
    }

    #[test]
    fn index_replaces_duplicate_country() {
        let mut idx = CountryLanguageIndex::default();
        idx.insert("X", vec!["A".into()]);
        idx.insert("Y", vec![]);
        idx.insert("X", vec!["B".into()]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get("X"), Some(&["B".to_string()][..]));
    }

    #[test]
    fn language_listed_twice_counts_once_per_country() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"name":{"common":"X"},"population":1,"region":"R",
                "languages":{"eng":"English","en2":"English","fra":"French"}}"#,
        )
        .unwrap();
        let agg = aggregate(&[rec]);
        assert_eq!(agg.languages.get("English"), 1);
        assert_eq!(agg.other_speakers("English"), 0);
        assert_eq!(
            agg.languages_of("X").unwrap(),
            ["English".to_string(), "French".to_string()]
        );
    }

    #[test]
    fn empty_input_has_no_average() {
        let agg = aggregate(&[]);
        assert_eq!(agg.country_count(), 0);
        assert_eq!(agg.total_population, 0);
        assert!(agg.average_population().is_none());
        assert!(agg.regions.is_empty());
        assert!(agg.languages.is_empty());
    }
}
