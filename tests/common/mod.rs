#![allow(dead_code)]

use countries_rs::models::{CountryName, CountryRecord};

/// Build a record; `languages` are `(code, name)` pairs, `None` for no `languages` key.
pub fn country(
    name: &str,
    population: u64,
    region: &str,
    languages: Option<&[(&str, &str)]>,
) -> CountryRecord {
    CountryRecord {
        name: CountryName {
            common: name.into(),
            official: None,
        },
        population,
        region: region.into(),
        languages: languages.map(|pairs| {
            pairs
                .iter()
                .map(|(c, n)| (c.to_string(), n.to_string()))
                .collect()
        }),
    }
}

pub fn peru() -> CountryRecord {
    country("Peru", 33_000_000, "Americas", Some(&[("spa", "Spanish")]))
}

/// A small mixed sample: two regions, shared and unique languages, one record without languages.
pub fn sample() -> Vec<CountryRecord> {
    vec![
        country(
            "Spain",
            47_000_000,
            "Europe",
            Some(&[("spa", "Spanish"), ("cat", "Catalan")]),
        ),
        peru(),
        country(
            "Switzerland",
            8_600_000,
            "Europe",
            Some(&[("fra", "French"), ("gsw", "Swiss German")]),
        ),
        country("Bouvet Island", 0, "Antarctic", None),
        country("France", 67_000_000, "Europe", Some(&[("fra", "French")])),
    ]
}
