//! Test-record construction from extracted sheet rows

use calamine::Data;
use serde::Serialize;

use crate::sheet::HeaderMap;
use crate::sheet::grid::{cell_string, data_to_int};

use super::metadata::{COMPANY, JobMetadata};
use super::ports::expand_ports;

/// Test-type markers for the two export columns
pub const OPM: &str = "OPM";
pub const IOLM: &str = "iOLM";

/// One data row below the header, columns picked per the header map
#[derive(Debug, Clone)]
pub struct ExtractedRow {
    pub terminal: String,
    pub cable_id: String,
    pub power_strand: Data,
    pub otdr_strand: Data,
}

impl ExtractedRow {
    pub fn from_row(row: &[Data], map: &HeaderMap) -> Self {
        ExtractedRow {
            terminal: cell_string(row, map.terminal).trim().to_string(),
            cable_id: cell_string(row, map.cable_id).trim().to_string(),
            power_strand: row.get(map.power_strand).cloned().unwrap_or(Data::Empty),
            otdr_strand: row.get(map.otdr_strand).cloned().unwrap_or(Data::Empty),
        }
    }
}

/// One row of the fixed 14-column job export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    pub name: String,
    pub assignees: String,
    pub company: String,
    pub customer: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    #[serde(rename = "testPointName")]
    pub test_point_name: String,
    #[serde(rename = "identifier_Cable ID")]
    pub cable_id: String,
    #[serde(rename = "identifier_Fiber ID")]
    pub fiber_id: i64,
    #[serde(rename = "identifier_ALoc")]
    pub a_loc: String,
    #[serde(rename = "identifier_ZLoc")]
    pub z_loc: String,
    #[serde(rename = "identifier_WireCenterClli")]
    pub wire_center_clli: String,
    #[serde(rename = "testType_01")]
    pub test_type_01: String,
    #[serde(rename = "testType_02")]
    pub test_type_02: String,
    #[serde(rename = "testConfigurations")]
    pub test_configurations: String,
}

impl TestRecord {
    /// OPM record: carries the job-level fields (CFAS, assignee, company,
    /// test configs) alongside the per-row identifiers
    fn opm(meta: &JobMetadata, row: &ExtractedRow, port: i64) -> TestRecord {
        TestRecord {
            name: meta.cfas.clone(),
            assignees: meta.tech_id.clone(),
            company: COMPANY.to_string(),
            customer: String::new(),
            due_date: String::new(),
            test_point_name: format!("{} - {}_1_{}", port, row.terminal, row.cable_id),
            cable_id: row.cable_id.clone(),
            fiber_id: port,
            a_loc: meta.clli.clone(),
            z_loc: meta.co.clone(),
            wire_center_clli: meta.pfp.clone(),
            test_type_01: OPM.to_string(),
            test_type_02: String::new(),
            test_configurations: meta.test_config(),
        }
    }

    /// iOLM record: job-level fields stay empty, per-row identifiers populated
    fn iolm(meta: &JobMetadata, row: &ExtractedRow, port: i64, ordinal: usize) -> TestRecord {
        TestRecord {
            name: String::new(),
            assignees: String::new(),
            company: String::new(),
            customer: String::new(),
            due_date: String::new(),
            test_point_name: format!("{} - {}_{}_{}", port, row.terminal, ordinal, row.cable_id),
            cable_id: row.cable_id.clone(),
            fiber_id: port,
            a_loc: meta.clli.clone(),
            z_loc: meta.co.clone(),
            wire_center_clli: meta.pfp.clone(),
            test_type_01: String::new(),
            test_type_02: IOLM.to_string(),
            test_configurations: String::new(),
        }
    }

    pub fn is_opm(&self) -> bool {
        self.test_type_01 == OPM
    }

    pub fn is_iolm(&self) -> bool {
        self.test_type_02 == IOLM
    }
}

/// Build every record one extracted row produces.
///
/// The two rules are independent and may both fire: an integer power strand
/// yields one OPM record, and a string OTDR strand yields one iOLM record
/// per expanded port. A rule whose input does not parse contributes nothing
/// and never fails the row.
pub fn build_records(meta: &JobMetadata, row: &ExtractedRow) -> Vec<TestRecord> {
    let mut records = Vec::new();

    match data_to_int(&row.power_strand) {
        Some(port) => records.push(TestRecord::opm(meta, row, port)),
        None => log::debug!(
            "No integer power strand for terminal '{}'; no OPM record",
            row.terminal
        ),
    }

    // OPM occupies ordinal 1 in the naming scheme; iOLM entries start at 2
    for (i, port) in expand_ports(&row.otdr_strand).into_iter().enumerate() {
        records.push(TestRecord::iolm(meta, row, port, i + 2));
    }

    records
}
