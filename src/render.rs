//! Writing an [`Aggregate`] into a UI surface.
//!
//! A surface owns one statistics block and three tables (countries, regions, languages).
//! [`render`] replaces all of it on every call. [`Page`] is the in-memory surface both
//! front ends draw from; it can also be printed as text or exported as an HTML fragment.

use crate::format;
use crate::models::CountryRecord;
use crate::stats::{self, Aggregate};
use serde::{Deserialize, Serialize};

/// The three tables of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Countries,
    Regions,
    Languages,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Countries, TableKind::Regions, TableKind::Languages];

    pub fn title(self) -> &'static str {
        match self {
            TableKind::Countries => "Countries",
            TableKind::Regions => "Regions",
            TableKind::Languages => "Languages",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            TableKind::Countries => &["Name", "Population", "Region"],
            TableKind::Regions => &["Region", "Countries"],
            TableKind::Languages => &["Language", "Countries"],
        }
    }

    /// Element id used in the HTML export.
    pub fn html_id(self) -> &'static str {
        match self {
            TableKind::Countries => "countriesTable",
            TableKind::Regions => "regionTable",
            TableKind::Languages => "languagesTable",
        }
    }
}

/// Anything the renderer and the controller can write to.
pub trait Surface {
    /// Empty the statistics block and every table body.
    fn clear(&mut self);
    fn push_row(&mut self, table: TableKind, cells: Vec<String>);
    /// Replace the statistics block.
    fn set_summary(&mut self, lines: Vec<String>);
    /// Add a paragraph below the current statistics.
    fn append_paragraph(&mut self, lines: Vec<String>);
    /// Blocking notice to the user.
    fn alert(&mut self, message: &str);
}

/// Aggregate `records` and write them to `surface`, replacing what was there.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    records: &[CountryRecord],
    locale: &str,
) -> Aggregate {
    surface.clear();
    let agg = stats::aggregate(records);

    for row in &agg.rows {
        surface.push_row(
            TableKind::Countries,
            vec![
                row.name.clone(),
                format::group_integer(row.population, locale),
                row.region.clone(),
            ],
        );
    }

    surface.set_summary(vec![
        format!("Total countries: {}", agg.country_count()),
        format!(
            "Total population: {}",
            format::group_integer(agg.total_population, locale)
        ),
        format!(
            "Average population: {}",
            format::average(agg.average_population())
        ),
    ]);

    for (region, n) in agg.regions.iter() {
        surface.push_row(TableKind::Regions, vec![region.to_string(), n.to_string()]);
    }
    for (lang, n) in agg.languages.iter() {
        surface.push_row(TableKind::Languages, vec![lang.to_string(), n.to_string()]);
    }

    agg
}

/// In-memory surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Paragraphs of the statistics block; each paragraph is a list of lines.
    pub statistics: Vec<Vec<String>>,
    pub countries: Vec<Vec<String>>,
    pub regions: Vec<Vec<String>>,
    pub languages: Vec<Vec<String>>,
    /// Last alert raised and not yet dismissed.
    pub alert: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, table: TableKind) -> &[Vec<String>] {
        match table {
            TableKind::Countries => &self.countries,
            TableKind::Regions => &self.regions,
            TableKind::Languages => &self.languages,
        }
    }

    fn rows_mut(&mut self, table: TableKind) -> &mut Vec<Vec<String>> {
        match table {
            TableKind::Countries => &mut self.countries,
            TableKind::Regions => &mut self.regions,
            TableKind::Languages => &mut self.languages,
        }
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Plain text: statistics paragraphs, then each table with aligned columns.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for para in &self.statistics {
            for line in para {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        for table in TableKind::ALL {
            out.push_str(table.title());
            out.push('\n');
            out.push_str(&text_table(table.headers(), self.rows(table)));
            out.push('\n');
        }
        out
    }

    /// HTML fragment with the element ids of the original page layout.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div id=\"statistics\">\n");
        for para in &self.statistics {
            let body: Vec<String> = para.iter().map(|l| escape_html(l)).collect();
            out.push_str(&format!("  <p>{}</p>\n", body.join("<br>")));
        }
        out.push_str("</div>\n");

        for table in TableKind::ALL {
            out.push_str(&format!("<table id=\"{}\">\n  <thead><tr>", table.html_id()));
            for h in table.headers() {
                out.push_str(&format!("<th>{h}</th>"));
            }
            out.push_str("</tr></thead>\n  <tbody>\n");
            for row in self.rows(table) {
                out.push_str("    <tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", escape_html(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("  </tbody>\n</table>\n");
        }
        out
    }
}

impl Surface for Page {
    fn clear(&mut self) {
        self.statistics.clear();
        self.countries.clear();
        self.regions.clear();
        self.languages.clear();
    }

    fn push_row(&mut self, table: TableKind, cells: Vec<String>) {
        self.rows_mut(table).push(cells);
    }

    fn set_summary(&mut self, lines: Vec<String>) {
        self.statistics = vec![lines];
    }

    fn append_paragraph(&mut self, lines: Vec<String>) {
        self.statistics.push(lines);
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

fn text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            match widths.get_mut(i) {
                Some(cur) => *cur = (*cur).max(w),
                None => widths.push(w),
            }
        }
    }

    let mut out = aligned_line(headers.iter().copied(), &widths);
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&aligned_line(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

fn aligned_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_table_aligns_columns() {
        let rows = vec![
            vec!["Peru".to_string(), "33,000,000".to_string(), "Americas".to_string()],
            vec!["Chile".to_string(), "19,000,000".to_string(), "Americas".to_string()],
        ];
        let t = text_table(&["Name", "Population", "Region"], &rows);
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines[0], "Name  | Population | Region");
        assert_eq!(lines[1], "------+------------+---------");
        assert_eq!(lines[2], "Peru  | 33,000,000 | Americas");
    }

    #[test]
    fn escape_html_covers_markup() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
