//! Export filtering, first-row blanking and CSV serialization

use std::io::Write;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use super::records::TestRecord;

/// Column header of the job CSV, in schema order
pub const CSV_HEADER: [&str; 14] = [
    "name",
    "assignees",
    "company",
    "customer",
    "dueDate",
    "testPointName",
    "identifier_Cable ID",
    "identifier_Fiber ID",
    "identifier_ALoc",
    "identifier_ZLoc",
    "identifier_WireCenterClli",
    "testType_01",
    "testType_02",
    "testConfigurations",
];

/// Which test types to keep in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_opm: bool,
    pub include_iolm: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { include_opm: true, include_iolm: true }
    }
}

/// Keep records whose test type is enabled, preserving order, then blank the
/// job-level columns (name, assignees, company, testConfigurations) on every
/// row after the first: those values are entered once and implied thereafter
/// in the export convention.
pub fn filter_records(records: &[TestRecord], options: ExportOptions) -> Vec<TestRecord> {
    let mut filtered: Vec<TestRecord> = records
        .iter()
        .filter(|r| (r.is_opm() && options.include_opm) || (r.is_iolm() && options.include_iolm))
        .cloned()
        .collect();

    for record in filtered.iter_mut().skip(1) {
        record.name.clear();
        record.assignees.clear();
        record.company.clear();
        record.test_configurations.clear();
    }

    filtered
}

/// Serialize records under the fixed 14-column header.
///
/// The header is written explicitly so an empty record set still produces a
/// valid, header-only CSV.
pub fn write_csv<W: Write>(records: &[TestRecord], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;
    for record in records {
        wtr.serialize(record).context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Export file name convention
pub fn export_file_name(cfas: &str) -> String {
    format!("{}_job.csv", cfas)
}
