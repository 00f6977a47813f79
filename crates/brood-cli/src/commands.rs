use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use brood_cli::config::{AppConfig, load_config};
use brood_cli::pipeline::{CodingRequest, plan_child, request_error};
use brood_cli::render::{
    NormalizedRow, render_normalized, render_plain, render_population, render_table,
};
use brood_core::{LineageIndex, LineageSource, normalize, today_at_offset};
use brood_ingest::load_broods;
use brood_validate::RuleEngine;

use crate::cli::{CodeArgs, NormalizeArgs, OutputFormatArg, PopulationArgs};

/// Normalize every ID and print the results. Returns `false` when any ID was
/// rejected.
pub fn run_normalize(args: &NormalizeArgs) -> Result<bool> {
    let rows: Vec<NormalizedRow> = args
        .ids
        .iter()
        .map(String::as_str)
        .map(normalize_row)
        .collect();
    let all_ok = rows.iter().all(|row| row.error.is_none());
    match args.format {
        OutputFormatArg::Table => println!("{}", render_normalized(&rows)),
        OutputFormatArg::Text => {
            for row in &rows {
                match (&row.full_id, &row.error) {
                    (Some(full_id), _) => println!("{}\t{full_id}", row.input),
                    (None, Some(error)) => println!("{}\terror: {error}", row.input),
                    (None, None) => println!("{}", row.input),
                }
            }
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&rows).context("serialize results")?;
            println!("{json}");
        }
    }
    Ok(all_ok)
}

fn normalize_row(raw: &str) -> NormalizedRow {
    match normalize(raw) {
        Ok((identifier, has_date)) => NormalizedRow {
            input: raw.to_string(),
            core: Some(identifier.to_string()),
            full_id: Some(identifier.full_id()),
            has_date,
            error: None,
        },
        Err(error) => NormalizedRow {
            input: raw.to_string(),
            core: None,
            full_id: None,
            has_date: false,
            error: Some(error.to_string()),
        },
    }
}

pub fn run_code(args: &CodeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let index = load_index(&args.data)?;
    let engine = RuleEngine::new(config.policy.clone());
    let today = today_at_offset(config.utc_offset_minutes);

    let request = CodingRequest {
        mother_input: &args.mother,
        date_suffix: args.date.as_deref(),
        today,
    };
    let result = plan_child(&index, &request, &engine, &config.known_sets)
        .map_err(|error| request_error(error, &args.mother))?;
    let mother = index.get(&result.mother_id);

    match args.format {
        OutputFormatArg::Table => println!("{}", render_table(&result, mother)),
        OutputFormatArg::Text => println!("{}", render_plain(&result, mother)),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize decision")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_population(args: &PopulationArgs, config_path: Option<&Path>) -> Result<()> {
    let AppConfig {
        known_sets, policy, ..
    } = load_config(config_path)?;
    let index = load_index(&args.data)?;

    let labels: BTreeSet<_> = index
        .set_labels()
        .into_iter()
        .chain(known_sets.iter().copied())
        .collect();
    let counts: Vec<_> = labels
        .into_iter()
        .map(|label| (label, index.alive_count_by_set(label)))
        .collect();
    println!("{}", render_population(&counts, &policy, &known_sets));
    Ok(())
}

fn load_index(path: &Path) -> Result<LineageIndex> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let records = load_broods(path).context("load broods")?;
    let index = LineageIndex::new(records);
    info!(
        records = index.len(),
        skipped = index.skipped(),
        "lineage index built"
    );
    Ok(index)
}
