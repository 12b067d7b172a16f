//! Generate command: collect metadata, run the pipeline, write the job CSV

use std::fs::File;

use anyhow::{Context, Result, bail};
use calamine::Data;
use colored::*;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::GenerateArgs;
use crate::config::RememberedDefaults;
use crate::job::export::{ExportOptions, export_file_name, filter_records, write_csv};
use crate::job::metadata::{IOLM_CONFIGS, JobMetadata, MAIL_DOMAIN, OPM_CONFIGS};
use crate::job::pipeline::{count_records, generate_records};
use crate::sheet::grid::{cfas_prefill, load_test_sheet};

pub fn run(args: GenerateArgs) -> Result<()> {
    let grid = load_test_sheet(&args.sheet)?;

    let defaults = match RememberedDefaults::load() {
        Ok(defaults) => defaults,
        Err(e) => {
            log::warn!("Could not load remembered defaults: {}", e);
            RememberedDefaults::default()
        }
    };

    let (meta, remember) = collect_metadata(&args, &grid, &defaults)?;

    let records = generate_records(&grid, &meta)?;
    let counts = count_records(&records);

    if records.is_empty() {
        println!("{}", "No valid test points were generated from the data.".yellow());
        return Ok(());
    }

    let options = ExportOptions {
        include_opm: !args.no_opm,
        include_iolm: !args.no_iolm,
    };
    let filtered = filter_records(&records, options);

    let out_path = args.out_dir.join(export_file_name(&meta.cfas));
    let file = File::create(&out_path)
        .with_context(|| format!("Failed to create {}", out_path.display()))?;
    write_csv(&filtered, file)?;

    if let Err(e) = remember.save() {
        log::warn!("Could not save remembered defaults: {}", e);
    }

    println!(
        "{} {} OPM and {} iOLM test points generated.",
        "Done:".green().bold(),
        counts.opm,
        counts.iolm
    );
    println!(
        "Job CSV written to {}",
        out_path.display().to_string().cyan()
    );
    Ok(())
}

/// Resolve every metadata field from flags, prompts or remembered defaults.
///
/// Returns the run metadata (technician UID already mail-domain qualified)
/// plus the raw values to remember for the next run.
fn collect_metadata(
    args: &GenerateArgs,
    grid: &[Vec<Data>],
    defaults: &RememberedDefaults,
) -> Result<(JobMetadata, RememberedDefaults)> {
    let cfas = match &args.cfas {
        Some(value) => value.trim().to_string(),
        None if args.non_interactive => String::new(),
        None => {
            let prefill = cfas_prefill(grid).unwrap_or_default();
            prompt_text("CFAS #", &prefill)?
        }
    };
    if cfas.is_empty() {
        bail!("CFAS # is required");
    }

    let tech = resolve_text(&args.tech, "Technician UID", &defaults.tech, args.non_interactive)?;
    let clli = resolve_text(&args.clli, "Wire Center CLLI", &defaults.clli, args.non_interactive)?;
    let co = resolve_text(&args.co, "Central Office", &defaults.co, args.non_interactive)?;
    let pfp = resolve_text(&args.pfp, "PFP", &defaults.pfp, args.non_interactive)?;

    let iolm_config =
        resolve_config(&args.iolm_config, "iOLM Config", IOLM_CONFIGS, args.non_interactive)?;
    let opm_config =
        resolve_config(&args.opm_config, "OPM Config", OPM_CONFIGS, args.non_interactive)?;

    let remember = RememberedDefaults {
        tech: tech.clone(),
        clli: clli.clone(),
        co: co.clone(),
        pfp: pfp.clone(),
    };

    let meta = JobMetadata {
        cfas,
        tech_id: format!("{}{}", tech, MAIL_DOMAIN),
        clli,
        co,
        pfp,
        iolm_config,
        opm_config,
    };

    Ok((meta, remember))
}

/// Flag value wins; otherwise prompt with the remembered default, or fall
/// back to empty in non-interactive mode (these fields are free text)
fn resolve_text(
    flag: &Option<String>,
    label: &str,
    default: &str,
    non_interactive: bool,
) -> Result<String> {
    match flag {
        Some(value) => Ok(value.trim().to_string()),
        None if non_interactive => Ok(String::new()),
        None => prompt_text(label, default),
    }
}

fn prompt_text(label: &str, initial: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", label))?;
    Ok(value.trim().to_string())
}

/// Configurations are a fixed menu; flag values must name one of them and
/// non-interactive runs take the first entry, like the form's select box
fn resolve_config(
    flag: &Option<String>,
    label: &str,
    options: &[&str],
    non_interactive: bool,
) -> Result<String> {
    if let Some(value) = flag {
        return match options.iter().find(|option| option.eq_ignore_ascii_case(value)) {
            Some(option) => Ok(option.to_string()),
            None => bail!("Unknown {}: '{}'. Options: {}", label, value, options.join(", ")),
        };
    }
    if non_interactive {
        return Ok(options[0].to_string());
    }

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(options)
        .default(0)
        .interact()
        .with_context(|| format!("Failed to read {}", label))?;
    Ok(options[index].to_string())
}
