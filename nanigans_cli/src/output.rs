use anyhow::{bail, Result};
use nanigans_lib::types::{Record, Response};
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

// -- Row builders --

/// Union of record keys, in first-seen order.
fn build_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn build_rows(records: &[Record], columns: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| columns.iter().map(|c| format_cell(r.get(c))).collect())
        .collect()
}

fn build_table(records: &[Record]) -> tabled::Table {
    let columns = build_columns(records);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in build_rows(records, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

// -- Table output --

pub fn print_records_table(records: &[Record]) {
    println!("{}", build_table(records));
}

// -- Markdown output --

pub fn print_records_markdown(records: &[Record]) {
    let mut table = build_table(records);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_records_csv(records: &[Record]) -> Result<()> {
    let columns = build_columns(records);
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(&columns)?;
    for row in build_rows(records, &columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints whatever was fetched, then fails if the response carries errors.
pub fn print_response(resp: &Response, format: &OutputFormat) -> Result<()> {
    if resp.data.is_empty() {
        eprintln!("No records returned");
    } else {
        eprintln!("{} records", resp.data.len());
        match format {
            OutputFormat::Table => print_records_table(&resp.data),
            OutputFormat::Json => print_json(&resp.data),
            OutputFormat::Csv => print_records_csv(&resp.data)?,
            OutputFormat::Markdown => print_records_markdown(&resp.data),
        }
    }

    for err in &resp.errors {
        match err.status {
            Some(status) => eprintln!("error (HTTP {}): {}", status, err.message),
            None => eprintln!("error: {}", err.message),
        }
    }
    if resp.is_error() {
        bail!(
            "{} request(s) failed; results may be incomplete",
            resp.errors.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            json!({ "adPlan": "Spring", "clicks": 10, "fbSpend": "1234.50" })
                .as_object()
                .unwrap()
                .clone(),
            json!({ "adPlan": "Summer", "impressions": 900, "fbSpend": null })
                .as_object()
                .unwrap()
                .clone(),
        ]
    }

    #[test]
    fn columns_in_first_seen_order() {
        assert_eq!(
            build_columns(&records()),
            vec!["adPlan", "clicks", "fbSpend", "impressions"]
        );
    }

    #[test]
    fn rows_fill_missing_cells() {
        let records = records();
        let rows = build_rows(&records, &build_columns(&records));
        assert_eq!(rows[0], vec!["Spring", "10", "1234.50", ""]);
        assert_eq!(rows[1], vec!["Summer", "", "", "900"]);
    }

    #[test]
    fn table_contains_headers_and_values() {
        let rendered = build_table(&records()).to_string();
        assert!(rendered.contains("adPlan"));
        assert!(rendered.contains("impressions"));
        assert!(rendered.contains("Summer"));
    }

    #[test]
    fn nested_values_render_as_json() {
        let v = json!({ "a": [1, 2] });
        assert_eq!(format_cell(Some(&v)), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn response_with_errors_fails() {
        let resp: Response = serde_json::from_value(json!({
            "data": [],
            "errors": ["quota exceeded"]
        }))
        .unwrap();
        assert!(print_response(&resp, &OutputFormat::Json).is_err());
    }

    #[test]
    fn clean_response_succeeds() {
        let resp = Response {
            data: records(),
            errors: Vec::new(),
        };
        assert!(print_response(&resp, &OutputFormat::Json).is_ok());
    }
}
