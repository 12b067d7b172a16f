//! Inspect command: report header detection results without writing anything

use anyhow::Result;
use colored::*;

use crate::cli::InspectArgs;
use crate::job::metadata::JobMetadata;
use crate::job::pipeline::{count_records, generate_records};
use crate::sheet::grid::load_test_sheet;
use crate::sheet::headers::{SheetField, locate_header_row, map_columns};

pub fn run(args: InspectArgs) -> Result<()> {
    let grid = load_test_sheet(&args.sheet)?;

    let header_row = locate_header_row(&grid)?;
    let map = map_columns(&grid[header_row])?;

    println!("{} index {}", "Header row:".bold(), header_row);
    for field in SheetField::ALL {
        println!("  {} -> column {}", field.label(), map.column(field));
    }

    let data_rows = grid.len() - header_row - 1;
    println!("{} {}", "Data rows below header:".bold(), data_rows);

    // Counts only depend on the sheet, so placeholder metadata is fine here
    let records = generate_records(&grid, &JobMetadata::default())?;
    let counts = count_records(&records);
    println!(
        "{} {} OPM and {} iOLM test points",
        "Would generate:".bold(),
        counts.opm.to_string().cyan(),
        counts.iolm.to_string().cyan()
    );

    Ok(())
}
