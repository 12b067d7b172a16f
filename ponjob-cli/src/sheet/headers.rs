//! Header-row detection and column mapping
//!
//! Field sheets come from many hands: the header row sits at a different
//! index per workbook and the labels drift ("CABLE ID", "Cable ID #",
//! "CABLE ID NUMBER"). Detection therefore normalizes every cell and matches
//! the required labels by substring, leftmost match first.

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use calamine::Data;

use super::grid::data_to_string;

/// Columns every test sheet must provide, matched fuzzily by label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SheetField {
    Terminal,
    CableId,
    PowerTestStrand,
    OtdrTestStrand,
}

impl SheetField {
    pub const ALL: [SheetField; 4] = [
        SheetField::Terminal,
        SheetField::CableId,
        SheetField::PowerTestStrand,
        SheetField::OtdrTestStrand,
    ];

    /// Label as it nominally appears in the sheet
    pub fn label(&self) -> &'static str {
        match self {
            SheetField::Terminal => "TERMINAL",
            SheetField::CableId => "CABLE ID",
            SheetField::PowerTestStrand => "POWER TEST STRAND",
            SheetField::OtdrTestStrand => "OTDR TEST STRAND",
        }
    }

    /// Normalized form of the label, the thing substring matching runs on
    fn token(&self) -> String {
        normalize_token(self.label())
    }
}

/// Resolved column index per required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    pub terminal: usize,
    pub cable_id: usize,
    pub power_strand: usize,
    pub otdr_strand: usize,
}

impl HeaderMap {
    pub fn column(&self, field: SheetField) -> usize {
        match field {
            SheetField::Terminal => self.terminal,
            SheetField::CableId => self.cable_id,
            SheetField::PowerTestStrand => self.power_strand,
            SheetField::OtdrTestStrand => self.otdr_strand,
        }
    }
}

/// Field-to-column assignments being collected during a scan
#[derive(Debug, Clone, Default)]
struct FieldColumns([Option<usize>; 4]);

impl FieldColumns {
    fn get(&self, field: SheetField) -> Option<usize> {
        self.0[field as usize]
    }

    /// First assignment wins; later matching columns are ignored
    fn assign(&mut self, field: SheetField, col: usize) {
        if self.0[field as usize].is_none() {
            self.0[field as usize] = Some(col);
        }
    }

    fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    fn into_header_map(self) -> Option<HeaderMap> {
        Some(HeaderMap {
            terminal: self.get(SheetField::Terminal)?,
            cable_id: self.get(SheetField::CableId)?,
            power_strand: self.get(SheetField::PowerTestStrand)?,
            otdr_strand: self.get(SheetField::OtdrTestStrand)?,
        })
    }

    fn describe_partial(&self) -> String {
        SheetField::ALL
            .iter()
            .map(|field| {
                let found = match self.get(*field) {
                    Some(col) => format!("column {}", col),
                    None => "missing".to_string(),
                };
                format!("{}: {}", field.label(), found)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Canonical comparison token for a cell or label: uppercase, `[A-Z0-9]` only
pub fn normalize_token(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Find the first row where every required field label matches some cell.
///
/// A row satisfies a field when the field's normalized label is a substring
/// of the cell's normalized token. Satisfaction is strictly per row: a field
/// seen in an earlier row does not carry over, and the scan stops at the
/// first fully satisfying row. When no row satisfies all fields, the error
/// carries every normalized token observed, to aid diagnosis.
pub fn locate_header_row(grid: &[Vec<Data>]) -> Result<usize> {
    let mut seen_tokens = BTreeSet::new();

    for (row_idx, row) in grid.iter().enumerate() {
        let mut columns = FieldColumns::default();
        for (col_idx, cell) in row.iter().enumerate() {
            if matches!(cell, Data::Empty) {
                continue;
            }
            let token = normalize_token(&data_to_string(cell));
            if token.is_empty() {
                continue;
            }
            for field in SheetField::ALL {
                if token.contains(&field.token()) {
                    columns.assign(field, col_idx);
                }
            }
            seen_tokens.insert(token);
        }
        if columns.is_complete() {
            log::info!("Header row detected at index {}", row_idx);
            return Ok(row_idx);
        }
    }

    let labels: Vec<&str> = SheetField::ALL.iter().map(|f| f.label()).collect();
    bail!(
        "Header row not found; expected labels like {:?}. Normalized headers seen: {:?}",
        labels,
        seen_tokens
    );
}

/// Resolve each required field to a concrete column of the header row.
///
/// The first column (by position) whose normalized label contains the
/// field's normalized label wins, so "CABLEID" resolves against a column
/// labelled "CABLE ID NUMBER". Deterministic for a given header row.
pub fn map_columns(header_row: &[Data]) -> Result<HeaderMap> {
    let labels: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_token(&data_to_string(cell)))
        .collect();

    let mut columns = FieldColumns::default();
    for field in SheetField::ALL {
        let token = field.token();
        if let Some(col) = labels.iter().position(|label| label.contains(&token)) {
            columns.assign(field, col);
        }
    }

    match columns.clone().into_header_map() {
        Some(map) => Ok(map),
        None => bail!("Column mapping failed. Found: {}", columns.describe_partial()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    fn header_cells() -> Vec<Data> {
        vec![
            s("TERMINAL"),
            s("CABLE ID"),
            s("POWER TEST STRAND"),
            s("OTDR TEST STRAND(S)"),
        ]
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Cable ID #"), "CABLEID");
        assert_eq!(normalize_token("otdr test strand(s)"), "OTDRTESTSTRANDS");
        assert_eq!(normalize_token("  "), "");
    }

    #[test]
    fn test_locate_header_row_skips_noise_rows() {
        let grid = vec![
            vec![s("PON TEST SHEET"), Data::Empty],
            vec![Data::Empty, s("some note")],
            vec![],
            header_cells(),
            vec![s("A1"), s("CAB1"), Data::Int(7), s("9-10")],
        ];
        assert_eq!(locate_header_row(&grid).unwrap(), 3);
    }

    #[test]
    fn test_locate_header_row_first_satisfying_row_wins() {
        let grid = vec![header_cells(), header_cells()];
        assert_eq!(locate_header_row(&grid).unwrap(), 0);
    }

    #[test]
    fn test_locate_header_row_requires_single_row_satisfaction() {
        // Fields split across two rows never satisfy detection
        let grid = vec![
            vec![s("TERMINAL"), s("CABLE ID")],
            vec![s("POWER TEST STRAND"), s("OTDR TEST STRAND")],
        ];
        let err = locate_header_row(&grid).unwrap_err();
        assert!(err.to_string().contains("Header row not found"));
    }

    #[test]
    fn test_locate_header_row_reports_seen_tokens() {
        let grid = vec![vec![s("Cable ID"), s("Notes")]];
        let err = locate_header_row(&grid).unwrap_err().to_string();
        assert!(err.contains("CABLEID"));
        assert!(err.contains("NOTES"));
    }

    #[test]
    fn test_map_columns_substring_match() {
        let header = vec![
            s("TERMINAL NAME"),
            s("CABLE ID NUMBER"),
            s("POWER TEST STRAND #"),
            s("OTDR TEST STRAND(S)"),
        ];
        let map = map_columns(&header).unwrap();
        assert_eq!(map.terminal, 0);
        assert_eq!(map.cable_id, 1);
        assert_eq!(map.power_strand, 2);
        assert_eq!(map.otdr_strand, 3);
    }

    #[test]
    fn test_map_columns_first_match_by_position() {
        let header = vec![s("CABLE ID"), s("CABLE ID (OLD)"), s("TERMINAL"), s("POWER TEST STRAND"), s("OTDR TEST STRAND")];
        let map = map_columns(&header).unwrap();
        assert_eq!(map.cable_id, 0);
        assert_eq!(map.terminal, 2);
    }

    #[test]
    fn test_map_columns_reports_partial_map() {
        let header = vec![s("TERMINAL"), s("CABLE ID")];
        let err = map_columns(&header).unwrap_err().to_string();
        assert!(err.contains("Column mapping failed"));
        assert!(err.contains("TERMINAL: column 0"));
        assert!(err.contains("POWER TEST STRAND: missing"));
    }

    #[test]
    fn test_header_map_column_accessor() {
        let map = HeaderMap { terminal: 4, cable_id: 3, power_strand: 2, otdr_strand: 1 };
        assert_eq!(map.column(SheetField::Terminal), 4);
        assert_eq!(map.column(SheetField::OtdrTestStrand), 1);
    }
}
