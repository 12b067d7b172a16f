//! The grid-to-records pipeline
//!
//! Single synchronous pass: locate the header row, resolve columns, then
//! build records from every row below the header. Holds no state across
//! calls; identical inputs produce identical record sequences.

use anyhow::Result;
use calamine::Data;

use crate::sheet::{locate_header_row, map_columns};

use super::metadata::JobMetadata;
use super::records::{ExtractedRow, TestRecord, build_records};

/// OPM / iOLM tallies for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordCounts {
    pub opm: usize,
    pub iolm: usize,
}

/// Run header detection, column mapping and record building over a grid.
///
/// Fails only on detection or mapping problems; rows whose values do not
/// parse are skipped per rule, never aborting the run.
pub fn generate_records(grid: &[Vec<Data>], meta: &JobMetadata) -> Result<Vec<TestRecord>> {
    let header_row = locate_header_row(grid)?;
    let map = map_columns(&grid[header_row])?;

    let mut records = Vec::new();
    for row in &grid[header_row + 1..] {
        let extracted = ExtractedRow::from_row(row, &map);
        records.extend(build_records(meta, &extracted));
    }

    log::info!("Generated {} records from {} data rows", records.len(), grid.len() - header_row - 1);
    Ok(records)
}

/// Tally records by test type, before any export filtering
pub fn count_records(records: &[TestRecord]) -> RecordCounts {
    RecordCounts {
        opm: records.iter().filter(|r| r.is_opm()).count(),
        iolm: records.iter().filter(|r| r.is_iolm()).count(),
    }
}
