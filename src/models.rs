use serde::{Deserialize, Serialize};

/// Name block of a country record. Only `common` is used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// One country as returned by the REST Countries API (v3.1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    /// `(code, display name)` pairs in the order the API lists them.
    /// `None` when the record carries no `languages` key at all.
    #[serde(
        default,
        deserialize_with = "de_ordered_languages",
        serialize_with = "ser_ordered_languages",
        skip_serializing_if = "Option::is_none"
    )]
    pub languages: Option<Vec<(String, String)>>,
}

impl CountryRecord {
    /// Language display names in API order (empty when none are listed).
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flatten()
            .map(|(_, name)| name.as_str())
    }
}

/// Error object the API returns instead of a list, e.g. on a search without matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Any JSON body the country endpoints may answer with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Countries(Vec<CountryRecord>),
    Error(ApiError),
}

/// Serde helper: read a JSON object into an ordered list of `(key, value)` pairs.
///
/// A plain map type would lose the key order the API sends, which drives the order
/// of the language columns and of the language tally.
fn de_ordered_languages<'de, D>(deserializer: D) -> Result<Option<Vec<(String, String)>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Option<Vec<(String, String)>>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "an object mapping language codes to language names, or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((code, name)) = map.next_entry::<String, String>()? {
                pairs.push((code, name));
            }
            Ok(Some(pairs))
        }
    }

    deserializer.deserialize_any(PairsVisitor)
}

fn ser_ordered_languages<S>(
    languages: &Option<Vec<(String, String)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;
    match languages {
        Some(pairs) => {
            let mut map = serializer.serialize_map(Some(pairs.len()))?;
            for (code, name) in pairs {
                map.serialize_entry(code, name)?;
            }
            map.end()
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_keep_document_order() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"name":{"common":"Switzerland"},"population":8654622,"region":"Europe",
                "languages":{"gsw":"Swiss German","fra":"French","ita":"Italian","roh":"Romansh"}}"#,
        )
        .unwrap();
        let names: Vec<&str> = rec.language_names().collect();
        assert_eq!(names, ["Swiss German", "French", "Italian", "Romansh"]);
    }

    #[test]
    fn missing_languages_is_none() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"name":{"common":"Antarctica"},"population":1000,"region":"Antarctic"}"#,
        )
        .unwrap();
        assert!(rec.languages.is_none());
        assert_eq!(rec.language_names().count(), 0);
    }

    #[test]
    fn serialize_keeps_language_order() {
        let rec = CountryRecord {
            name: CountryName {
                common: "Peru".into(),
                official: None,
            },
            population: 1,
            region: "Americas".into(),
            languages: Some(vec![
                ("que".into(), "Quechua".into()),
                ("aym".into(), "Aymara".into()),
            ]),
        };
        let s = serde_json::to_string(&rec).unwrap();
        assert!(s.find("Quechua").unwrap() < s.find("Aymara").unwrap());
    }
}
