use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::spectral::SpectralDistribution;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measured SPD from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row `wavelength,value`, one sample per record
/// * `.json` – `{ "wavelengths": [...], "values": [...] }`
pub fn load_spd(path: &Path) -> Result<SpectralDistribution> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawSpd {
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

fn load_json(path: &Path) -> Result<SpectralDistribution> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: RawSpd = serde_json::from_str(&text).context("parsing JSON")?;

    SpectralDistribution::new(raw.wavelengths, raw.values)
        .context("validating spectral data")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<SpectralDistribution> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?;

    let wavelength_idx = headers
        .iter()
        .position(|h| h == "wavelength")
        .context("CSV missing 'wavelength' column")?;
    let value_idx = headers
        .iter()
        .position(|h| h == "value")
        .context("CSV missing 'value' column")?;

    let mut wavelengths = Vec::new();
    let mut values = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        wavelengths.push(parse_float(record.get(wavelength_idx), row_no, "wavelength")?);
        values.push(parse_float(record.get(value_idx), row_no, "value")?);
    }

    SpectralDistribution::new(wavelengths, values).context("validating spectral data")
}

fn parse_float(field: Option<&str>, row: usize, col: &str) -> Result<f64> {
    let tok = field.unwrap_or("").trim();
    tok.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{tok}' is not a number"))
}
