//! Locale-aware number formatting for the tables and the summary block.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Integer with thousands grouping, e.g. `33000000` -> `33,000,000` for `en`.
pub fn group_integer(n: u64, locale_tag: &str) -> String {
    n.to_formatted_string(map_locale(locale_tag))
}

/// Average with exactly two decimals and no grouping (`33000000.00`),
/// or `N/A` when there is nothing to average.
pub fn average(avg: Option<f64>) -> String {
    match avg {
        Some(x) if x.is_finite() => format!("{:.2}", x),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_english_and_german() {
        assert_eq!(group_integer(33_000_000, "en"), "33,000,000");
        assert_eq!(group_integer(33_000_000, "de"), "33.000.000");
        assert_eq!(group_integer(999, "en"), "999");
    }

    #[test]
    fn average_has_two_decimals_and_no_grouping() {
        assert_eq!(average(Some(1234.5)), "1234.50");
        assert_eq!(average(Some(33_000_000.0)), "33000000.00");
        assert_eq!(average(Some(2.0 / 3.0)), "0.67");
        assert_eq!(average(Some(0.0)), "0.00");
    }

    #[test]
    fn average_without_data_is_na() {
        assert_eq!(average(None), "N/A");
        assert_eq!(average(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert_eq!(map_locale("xx").name(), Locale::en.name());
        assert_eq!(map_locale("de-DE").name(), Locale::de.name());
    }
}
