use std::io::Write;

use anyhow::Result;
use mymarketnews_api::types::{ReportSummary, Table};
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::Tabled;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct ReportRow {
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    slug_name: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
}

// -- Row builders --

fn build_report_rows(reports: &[ReportSummary]) -> Vec<ReportRow> {
    reports
        .iter()
        .map(|r| ReportRow {
            slug_id: r.slug_id.clone(),
            slug_name: r.slug_name.clone().unwrap_or_default(),
            title: r.title().unwrap_or_default().to_string(),
            published: r.published_date.clone().unwrap_or_default(),
        })
        .collect()
}

/// Header row plus one string row per record, columns in first-seen order.
fn table_records(table: &Table) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = table.columns();
    let rows = table
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| record.get(c).map(cell).unwrap_or_default())
                .collect()
        })
        .collect();
    (columns, rows)
}

pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_table(table: &Table) -> String {
    let (columns, rows) = table_records(table);
    let mut builder = Builder::default();
    builder.push_record(columns);
    for row in rows {
        builder.push_record(row);
    }
    builder.build().to_string()
}

fn render_list(header: &str, items: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record([header.to_string()]);
    for item in items {
        builder.push_record([item.clone()]);
    }
    builder.build().to_string()
}

// -- Table output --

pub fn print_table(table: &Table) {
    if table.is_empty() {
        eprintln!("No rows");
        return;
    }
    println!("{}", render_table(table));
}

pub fn print_reports_table(reports: &[ReportSummary]) {
    println!("{}", tabled::Table::new(build_report_rows(reports)));
}

pub fn print_list(header: &str, items: &[String]) {
    println!("{}", render_list(header, items));
}

// -- CSV output --

fn write_table_csv<W: Write>(table: &Table, out: W) -> Result<()> {
    let (columns, rows) = table_records(table);
    let mut wtr = csv::Writer::from_writer(out);
    if !columns.is_empty() {
        wtr.write_record(&columns)?;
    }
    for row in rows {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_table_csv(table: &Table) -> Result<()> {
    write_table_csv(table, std::io::stdout())
}

pub fn print_reports_csv(reports: &[ReportSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_report_rows(reports) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_list_csv(header: &str, items: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record([header])?;
    for item in items {
        wtr.write_record([item])?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn market_table() -> Table {
        Table::from_json(&json!({
            "results": [
                {"commodity": "Lettuce, Green Leaf", "region": "National", "weighted_avg_price": 18.75},
                {"commodity": "Lettuce, Green Leaf", "region": "National", "organic": null, "package": "cartons 24s"}
            ]
        }))
    }

    fn csv_of(table: &Table) -> String {
        let mut buf = Vec::new();
        write_table_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(cell(&json!("Butter")), "Butter");
        assert_eq!(cell(&json!(null)), "");
        assert_eq!(cell(&json!(18.75)), "18.75");
        assert_eq!(cell(&json!(true)), "true");
    }

    #[test]
    fn test_table_records_fill_missing_cells() {
        let (columns, rows) = table_records(&market_table());
        assert_eq!(
            columns,
            vec!["commodity", "region", "weighted_avg_price", "organic", "package"]
        );
        assert_eq!(rows[0], vec!["Lettuce, Green Leaf", "National", "18.75", "", ""]);
        assert_eq!(rows[1], vec!["Lettuce, Green Leaf", "National", "", "", "cartons 24s"]);
    }

    #[test]
    fn test_csv_table_output() {
        let csv = csv_of(&market_table());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "commodity,region,weighted_avg_price,organic,package"
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Lettuce, Green Leaf\",National,18.75,,"
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_csv_header_follows_server_order() {
        let doc: Value = serde_json::from_str(
            r#"[{"report_begin_date": "07/19/2021", "commodity": "Butter", "avg_price": 2.5}]"#,
        )
        .unwrap();
        let csv = csv_of(&Table::from_json(&doc));
        assert_eq!(
            csv.lines().next().unwrap(),
            "report_begin_date,commodity,avg_price"
        );
    }

    #[test]
    fn test_csv_empty_table() {
        assert_eq!(csv_of(&Table::default()), "");
    }

    #[test]
    fn test_render_table_contains_headers_and_cells() {
        let rendered = render_table(&market_table());
        assert!(rendered.contains("weighted_avg_price"));
        assert!(rendered.contains("Lettuce, Green Leaf"));
        assert!(rendered.contains("cartons 24s"));
    }

    #[test]
    fn test_render_list() {
        let rendered = render_list("Field", &["commodity".to_string(), "region".to_string()]);
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("commodity"));
        assert!(rendered.contains("region"));
    }

    #[test]
    fn test_build_report_rows_mapping() {
        let reports: Vec<ReportSummary> = serde_json::from_value(json!([
            {"slug_id": 2466, "slug_name": "AMS_2466", "report_title": "Cold Storage", "published_date": "07/28/2021"},
            {"slug_id": "1095", "title": "Shipping Point Trends"}
        ]))
        .unwrap();
        let rows = build_report_rows(&reports);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].slug_id, "2466");
        assert_eq!(rows[0].slug_name, "AMS_2466");
        assert_eq!(rows[0].title, "Cold Storage");
        assert_eq!(rows[1].slug_name, "");
        assert_eq!(rows[1].title, "Shipping Point Trends");
        assert_eq!(rows[1].published, "");
    }

    #[test]
    fn test_csv_report_headers() {
        let reports: Vec<ReportSummary> =
            serde_json::from_value(json!([{"slug_id": "1095", "slug_name": "FV_GR110"}])).unwrap();
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in build_report_rows(&reports) {
            wtr.serialize(row).unwrap();
        }
        let csv = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Slug,Name,Title,Published");
        assert_eq!(lines.next().unwrap(), "1095,FV_GR110,,");
    }
}
