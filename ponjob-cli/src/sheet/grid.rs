//! Workbook loading and cell coercion helpers

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};

/// Worksheet every job export is driven from
pub const TEST_SHEET_NAME: &str = "PON TEST SHEET";

/// Cell holding the CFAS number in the sheet template (X2)
const CFAS_CELL: (usize, usize) = (1, 23);

/// Raw sheet rows, header-free
pub type Grid = Vec<Vec<Data>>;

/// Load the "PON TEST SHEET" worksheet from an xlsx file as a raw grid
pub fn load_test_sheet(path: &Path) -> Result<Grid> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let range = workbook
        .worksheet_range(TEST_SHEET_NAME)
        .with_context(|| format!("Failed to read sheet: {}", TEST_SHEET_NAME))?;

    log::info!("Loaded {} rows from {}", range.height(), path.display());

    Ok(range.rows().map(|row| row.to_vec()).collect())
}

/// Stringify a cell value; whole floats render without the trailing ".0"
pub fn data_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Check if it's a whole number
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a cell to an integer; floats truncate, strings must parse
pub fn data_to_int(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Stringify the cell at `col`, or "" when the row is short
pub fn cell_string(row: &[Data], col: usize) -> String {
    row.get(col).map(data_to_string).unwrap_or_default()
}

/// CFAS prefill from the sheet template, when the cell is filled
pub fn cfas_prefill(grid: &[Vec<Data>]) -> Option<String> {
    let (row, col) = CFAS_CELL;
    let value = cell_string(grid.get(row)?, col);
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_to_string_whole_float() {
        assert_eq!(data_to_string(&Data::Float(7.0)), "7");
        assert_eq!(data_to_string(&Data::Float(7.5)), "7.5");
    }

    #[test]
    fn test_data_to_string_empty() {
        assert_eq!(data_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_data_to_int_coercions() {
        assert_eq!(data_to_int(&Data::Int(12)), Some(12));
        assert_eq!(data_to_int(&Data::Float(7.0)), Some(7));
        assert_eq!(data_to_int(&Data::Float(7.9)), Some(7));
        assert_eq!(data_to_int(&Data::String(" 12 ".to_string())), Some(12));
        assert_eq!(data_to_int(&Data::String("12a".to_string())), None);
        assert_eq!(data_to_int(&Data::Empty), None);
    }

    #[test]
    fn test_cell_string_short_row() {
        let row = vec![Data::String("A1".to_string())];
        assert_eq!(cell_string(&row, 0), "A1");
        assert_eq!(cell_string(&row, 5), "");
    }

    #[test]
    fn test_cfas_prefill() {
        let mut row = vec![Data::Empty; 24];
        row[23] = Data::String(" CF123 ".to_string());
        let grid = vec![vec![Data::Empty], row];
        assert_eq!(cfas_prefill(&grid), Some("CF123".to_string()));

        let empty_grid = vec![vec![Data::Empty]];
        assert_eq!(cfas_prefill(&empty_grid), None);
    }
}
