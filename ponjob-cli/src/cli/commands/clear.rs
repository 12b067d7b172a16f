//! Clear command: forget remembered form defaults

use anyhow::Result;
use colored::*;

use crate::config::RememberedDefaults;

pub fn run() -> Result<()> {
    if RememberedDefaults::clear()? {
        println!("{}", "Remembered form defaults cleared.".green());
    } else {
        println!("No remembered defaults to clear.");
    }
    Ok(())
}
