//! CSV writer for report rows.
//!
//! RFC-4180-style quoting: fields containing the delimiter, quotes, or
//! newlines are wrapped in double quotes with inner quotes doubled.

use std::io::Write;

use crate::errors::ReportError;

use super::rows::ReportRow;

const HEADER: &[&str] = &[
    "Analyte",
    "Date",
    "Result",
    "Mean (Target)",
    "SD",
    "Unit",
    "Z-Score",
    "Westgard Status",
    "+1 SD",
    "-1 SD",
    "+2 SD",
    "-2 SD",
    "+3 SD",
    "-3 SD",
];

/// Write rows as CSV, header included, dates in ISO-8601.
pub fn write_csv<W: Write>(mut out: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    writeln!(out, "{}", HEADER.join(","))?;
    for row in rows {
        let fields = [
            escape(&row.analyte),
            row.date.to_string(),
            row.value.to_string(),
            row.mean.to_string(),
            row.sd.to_string(),
            escape(&row.unit),
            row.z_score.to_string(),
            escape(&row.westgard_status),
            row.plus_1sd.to_string(),
            row.minus_1sd.to_string(),
            row.plus_2sd.to_string(),
            row.minus_2sd.to_string(),
            row.plus_3sd.to_string(),
            row.minus_3sd.to_string(),
        ];
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()?;
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(status: &str) -> ReportRow {
        ReportRow {
            analyte: "Glucose".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            value: 101.0,
            mean: 100.0,
            sd: 10.0,
            unit: "mg/dL".into(),
            z_score: 0.1,
            westgard_status: status.into(),
            plus_1sd: 110.0,
            minus_1sd: 90.0,
            plus_2sd: 120.0,
            minus_2sd: 80.0,
            plus_3sd: 130.0,
            minus_3sd: 70.0,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[row("OK")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Analyte,Date,Result"));
        assert_eq!(
            lines.next().unwrap(),
            "Glucose,2025-05-01,101,100,10,mg/dL,0.1,OK,110,90,120,80,130,70"
        );
    }

    #[test]
    fn quotes_fields_containing_the_delimiter() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[row("2-2s, 4-1s")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"2-2s, 4-1s\""));
    }

    #[test]
    fn doubles_inner_quotes() {
        assert_eq!(escape("a\"b"), "\"a\"\"b\"");
        assert_eq!(escape("plain"), "plain");
    }
}
