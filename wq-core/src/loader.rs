//! CSV text to [`Record`]s.
//!
//! Columns are located by header name, case-insensitively, so exports with
//! slightly different headings load the same way. Numeric fields are parsed
//! leniently: anything that does not parse becomes `None` and is excluded
//! later by the aggregator instead of failing the whole load.
//!
//! # Example CSV
//! ```text
//! Parameter,Site,Year,Average,Min,Max,Count
//! Secchi,Lake A,2020,5.1,3.2,6.8,12
//! ```

use crate::record::Record;
use csv::StringRecord;

const PARAMETER_HEADERS: &[&str] = &["parameter", "param", "characteristic"];
const SITE_HEADERS: &[&str] = &["site", "site_name", "sitename", "location"];
const YEAR_HEADERS: &[&str] = &["year"];
const AVERAGE_HEADERS: &[&str] = &["average", "avg", "mean"];
const MIN_HEADERS: &[&str] = &["min", "minimum"];
const MAX_HEADERS: &[&str] = &["max", "maximum"];
const COUNT_HEADERS: &[&str] = &["count", "n", "samples"];

#[derive(Debug)]
struct Columns {
    parameter: usize,
    site: usize,
    year: usize,
    average: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
    count: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_ascii_lowercase().as_str()))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| anyhow::anyhow!("missing required column '{}'", names[0]))
        };
        Ok(Self {
            parameter: require(PARAMETER_HEADERS)?,
            site: require(SITE_HEADERS)?,
            year: require(YEAR_HEADERS)?,
            average: find(AVERAGE_HEADERS),
            min: find(MIN_HEADERS),
            max: find(MAX_HEADERS),
            count: find(COUNT_HEADERS),
        })
    }
}

/// Parse a numeric field, `None` for blank or unparseable text.
pub fn parse_number(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parse a year, accepting integral floats such as `2020.0`.
pub fn parse_year(field: &str) -> Option<i32> {
    let value = parse_number(field)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

/// Load records from CSV text with a header row.
///
/// Rows without a parameter or site are skipped. Malformed numeric fields
/// are kept as `None`.
pub fn parse_records(csv_data: &str) -> anyhow::Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::locate(rdr.headers()?)?;
    let mut records = Vec::new();
    let mut skipped = 0u32;

    for result in rdr.records() {
        let r = result?;
        let text = |i: usize| r.get(i).unwrap_or("").trim();
        let number = |i: Option<usize>| i.and_then(|i| parse_number(text(i)));

        let parameter = text(columns.parameter);
        let site = text(columns.site);
        if parameter.is_empty() || site.is_empty() {
            skipped += 1;
            continue;
        }

        records.push(Record {
            parameter: parameter.to_string(),
            site: site.to_string(),
            year: parse_year(text(columns.year)),
            average: number(columns.average),
            min: number(columns.min),
            max: number(columns.max),
            count: number(columns.count),
        });
    }

    log::info!(
        "[WQ] loader: Loaded {} records, skipped {} without parameter or site",
        records.len(),
        skipped
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Parameter,Site,Year,Average,Min,Max,Count
Secchi,Lake A,2020,5.1,3.2,6.8,12
 Secchi , Lake A ,2021,not-a-number,,7.0,4
Secchi,Lake B,2021.0,4.4,,,
Secchi,,2021,4.4,,,
Secchi,Lake C,20x1,4.4,,,
";

    #[test]
    fn loads_rows_and_trims_fields() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].parameter, "Secchi");
        assert_eq!(records[0].average, Some(5.1));
        assert_eq!(records[0].count, Some(12.0));
        assert_eq!(records[1].site, "Lake A");
    }

    #[test]
    fn malformed_numbers_become_none() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records[1].average, None);
        assert_eq!(records[1].min, None);
        assert_eq!(records[1].max, Some(7.0));
        assert_eq!(records[3].year, None);
    }

    #[test]
    fn integral_float_years_are_accepted() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records[2].year, Some(2021));
        assert_eq!(parse_year("2021.5"), None);
        assert_eq!(parse_year("NaN"), None);
    }

    #[test]
    fn header_aliases_are_case_insensitive() {
        let csv = "SITE,PARAM,year,MEAN,n\nA,pH,2020,7.2,3\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].site, "A");
        assert_eq!(records[0].parameter, "pH");
        assert_eq!(records[0].average, Some(7.2));
        assert_eq!(records[0].count, Some(3.0));
        assert_eq!(records[0].min, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = parse_records("Parameter,Year\npH,2020\n").unwrap_err();
        assert!(err.to_string().contains("site"));
    }
}
