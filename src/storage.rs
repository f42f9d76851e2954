use crate::models::CountryRecord;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells a spreadsheet would evaluate as a formula.
fn guard_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save records as CSV with header. Languages are joined with `; ` in API order.
pub fn save_csv<P: AsRef<Path>>(records: &[CountryRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.serialize(("name", "population", "region", "languages"))?;
    for r in records {
        let languages: Vec<&str> = r.language_names().collect();
        wtr.serialize((
            guard_cell(&r.name.common),
            r.population,
            guard_cell(&r.region),
            guard_cell(&languages.join("; ")),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save records as a pretty JSON array in the API's own shape.
pub fn save_json<P: AsRef<Path>>(records: &[CountryRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
