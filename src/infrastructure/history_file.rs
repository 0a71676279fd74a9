//! Loading recorded spin sequences for replay
//!
//! Accepts one outcome per line or comma-separated rows. A first row with no
//! integer field at all is a header and skipped; any other non-integer field
//! is an error.

use crate::domain::roulette::Outcome;
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn load_history(path: &Path) -> Result<Vec<Outcome>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open history file {}", path.display()))?;
    let history = read_history(file)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;

    info!("Loaded {} outcomes from {}", history.len(), path.display());
    Ok(history)
}

pub fn read_history<R: Read>(reader: R) -> Result<Vec<Outcome>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut history = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed row {}", row + 1))?;
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();

        if row == 0 && fields.iter().all(|f| f.parse::<i64>().is_err()) {
            continue;
        }

        for field in fields {
            let Ok(value) = field.parse::<i64>() else {
                bail!("Row {}: '{}' is not an integer", row + 1, field);
            };
            let outcome =
                Outcome::new(value).with_context(|| format!("Row {}", row + 1))?;
            history.push(outcome);
        }
    }

    Ok(history)
}
