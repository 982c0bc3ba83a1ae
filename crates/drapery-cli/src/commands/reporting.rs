//! Console and JSON reporting shared by the CLI commands.

use anyhow::{Context, Result};
use colored::Colorize;
use drapery_backend_texture::{GenerateError, PleatMapSet};
use drapery_spec::BackendError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One written map in a JSON report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MapEntry {
    pub channel: String,
    pub path: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
}

/// All maps written for one family.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FamilyEntry {
    pub family: String,
    pub maps: Vec<MapEntry>,
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code, e.g. `PLEAT_002`, or `CLI_001` for CLI-level failures
    pub code: String,
    pub message: String,
}

/// CLI-level error code used when a failure did not come from the backend.
pub const CLI_ERROR: &str = "CLI_001";

impl JsonError {
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let code = err
            .downcast_ref::<GenerateError>()
            .map(|e| e.code())
            .unwrap_or(CLI_ERROR);
        Self {
            code: code.to_string(),
            message: format!("{:#}", err),
        }
    }
}

pub(crate) fn family_entry(set: &PleatMapSet, paths: &[PathBuf]) -> FamilyEntry {
    let maps = set
        .maps
        .iter()
        .zip(paths)
        .map(|(map, path)| MapEntry {
            channel: map.channel.as_str().to_string(),
            path: path.display().to_string(),
            description: map.description.clone(),
            width: map.width,
            height: map.height,
            hash: map.hash.clone(),
        })
        .collect();
    FamilyEntry {
        family: set.family.clone(),
        maps,
    }
}

/// Print one line per written map.
pub(crate) fn print_family(entry: &FamilyEntry) {
    println!("{} {}", "Family:".cyan().bold(), entry.family);
    for map in &entry.maps {
        println!(
            "  {} {} ({}x{}) {}",
            "+".green(),
            map.path,
            map.width,
            map.height,
            map.description.dimmed()
        );
        println!("    {} {}", "hash:".dimmed(), &map.hash[..16.min(map.hash.len())]);
    }
}

pub(crate) fn print_warning(message: &str) {
    eprintln!("  {} {}", "!".yellow(), message);
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))
}
