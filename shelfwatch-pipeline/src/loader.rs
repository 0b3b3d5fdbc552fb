//! CSV report loaders.
//!
//! Reads inventory and sales exports into `RawTable`s without interpreting
//! columns. Header resolution happens in the schema layer, so differently
//! labeled exports from different POS systems load unchanged.

use std::io::Read;

use shelfwatch_tabular::RawTable;

use crate::error::{LoadError, LoadResult};

/// Load a report from a CSV reader, preserving original headers.
pub fn load_report<R: Read>(reader: R) -> LoadResult<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(LoadError::Header)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Parse {
            line: line_num + 2,
            source: e,
        })?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable::new(headers, rows))
}

/// Load a report from a CSV file path.
pub fn load_report_file(path: &str) -> LoadResult<RawTable> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Open {
        path: path.to_string(),
        source: e,
    })?;
    load_report(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Product,Room,Available,Unit Cost,Expiration Date
Blue Dream 3.5g,Vault,120,4.25,2026-09-12
Sour Diesel 1g,Quarantine,40,2.10,2026-05-30
OG Kush 3.5g,Vault,8,$5.00,
";

    #[test]
    fn loads_headers_verbatim() {
        let table = load_report(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            table.headers,
            vec!["Product", "Room", "Available", "Unit Cost", "Expiration Date"]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn trims_cells() {
        let csv_data = "Product , Available\n  Blue Dream , 12 \n";
        let table = load_report(csv_data.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Product", "Available"]);
        assert_eq!(table.cell(0, 0), "Blue Dream");
        assert_eq!(table.cell(0, 1), "12");
    }

    #[test]
    fn ragged_rows_load_without_error() {
        let csv_data = "Product,Available,Unit Cost\nBlue Dream,12\n";
        let table = load_report(csv_data.as_bytes()).unwrap();
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_report_file("does/not/exist.csv").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
