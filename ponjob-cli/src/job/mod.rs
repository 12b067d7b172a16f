//! Job-record generation: metadata, port expansion, record building, export

pub mod export;
pub mod metadata;
pub mod pipeline;
pub mod ports;
pub mod records;

pub use export::{ExportOptions, export_file_name, filter_records, write_csv};
pub use metadata::JobMetadata;
pub use pipeline::{RecordCounts, count_records, generate_records};
pub use records::TestRecord;
