//! Preset command implementation
//!
//! Resolves the pleating preset for a pleat style, optionally adjusted for a
//! material family.

use anyhow::{Context, Result};
use colored::Colorize;
use drapery_spec::{preset_for_material, MaterialFamily, PleatId, PleatingPreset};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting;

/// Preset lookup result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PresetOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialFamily>,
    pub preset: PleatingPreset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Look up a preset. Unknown pleat ids fall back to `wave` with a warning;
/// unknown material families are an error.
pub fn resolve(pleat: &str, material: Option<&str>) -> Result<PresetOutput> {
    let material = material
        .map(|m| m.parse::<MaterialFamily>())
        .transpose()
        .context("Failed to resolve material family")?;
    let (pleat_id, fell_back) = PleatId::parse_or_default(pleat);
    let warning =
        fell_back.then(|| format!("unknown pleat id '{}', using '{}'", pleat, pleat_id));

    Ok(PresetOutput {
        material,
        preset: preset_for_material(material, pleat_id),
        warning,
    })
}

/// Run the preset command
///
/// # Returns
/// Exit code: 0 success
pub fn run(pleat: &str, material: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let output = resolve(pleat, material)?;

    if json_output {
        reporting::print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(warning) = &output.warning {
        reporting::print_warning(warning);
    }

    let preset = &output.preset;
    println!("{} {}", "Preset:".cyan().bold(), preset.label);
    println!("  {} {}", "pleat:".dimmed(), preset.pleat_id);
    if let Some(material) = output.material {
        println!("  {} {}", "material:".dimmed(), material);
    }
    println!("  {} {}px", "tile width:".dimmed(), preset.tile_width_px);
    if let Some(strength) = preset.height_strength {
        println!("  {} {}", "height strength:".dimmed(), strength);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_preset() {
        let output = resolve("doubleFlex", None).unwrap();
        assert_eq!(output.preset.tile_width_px, 160);
        assert_eq!(output.preset.height_strength, Some(0.2));
        assert_eq!(output.warning, None);
    }

    #[test]
    fn test_material_override() {
        let output = resolve("wave", Some("sheer-basic")).unwrap();
        assert_eq!(output.material, Some(MaterialFamily::SheerBasic));
        assert_eq!(output.preset.tile_width_px, 240);
        assert_eq!(output.preset.height_strength, Some(0.25));
    }

    #[test]
    fn test_unknown_pleat_falls_back() {
        let output = resolve("box-pleat", Some("velvet")).unwrap();
        assert_eq!(output.preset.pleat_id, PleatId::Wave);
        assert_eq!(output.preset.tile_width_px, 220);
        assert!(output.warning.is_some());
    }

    #[test]
    fn test_unknown_material_rejected() {
        assert!(resolve("flex", Some("tweed")).is_err());
    }

    #[test]
    fn test_json_shape() {
        let output = resolve("flex", Some("curtain-basic")).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["material"], "curtain-basic");
        assert_eq!(value["preset"]["pleat_id"], "flex");
        assert_eq!(value["preset"]["tile_width_px"], 200);
        assert!(value.get("warning").is_none());
    }
}
