use std::io::Write;

use anyhow::{Context, Result};

/// Formats one forecast path as a comma-separated line.
pub fn format_row(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes each path as one line to `out`.
pub fn write_rows<W: Write>(out: &mut W, rows: &[Vec<f64>]) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", format_row(row)).context("failed to write forecast")?;
    }
    Ok(())
}
