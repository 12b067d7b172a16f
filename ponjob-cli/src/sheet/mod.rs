//! PON TEST SHEET loading, header detection and column mapping

pub mod grid;
pub mod headers;

pub use grid::{Grid, cell_string, cfas_prefill, load_test_sheet};
pub use headers::{HeaderMap, SheetField, locate_header_row, map_columns, normalize_token};
