//! Generate-all command implementation
//!
//! Generates the placeholder maps for every pleat style plus the flex and
//! flex25d height-field maps. Placeholders are written in parallel under
//! `<out_root>/placeholder/`, then the height fields under `<out_root>/`.

use anyhow::{Context, Result};
use colored::Colorize;
use drapery_backend_texture::{
    generate_flex25d_maps, generate_flex_maps, generate_placeholder_maps, save_all_parallel,
    PleatMapSet, PLACEHOLDER_DIR,
};
use drapery_spec::{Flex25dParams, PlaceholderParams, PleatFamilyConfig, PleatId};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::reporting::{self, FamilyEntry, JsonError};

/// Summary report for `drapery generate-all --json`.
#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    pub success: bool,
    pub total_families: usize,
    pub total_maps: usize,
    pub runtime_seconds: f64,
    pub families: Vec<FamilyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Every shipped map set, grouped by output root.
#[derive(Debug)]
pub struct DefaultSets {
    /// One placeholder set per pleat style, written under `placeholder/`.
    pub placeholders: Vec<PleatMapSet>,
    /// Flex and flex25d height-field sets, written at the output root.
    pub height_fields: Vec<PleatMapSet>,
}

/// Build every shipped map set with default coefficients.
pub fn generate_default_sets() -> Result<DefaultSets> {
    let placeholders = PleatId::ALL
        .into_iter()
        .map(|pleat| {
            generate_placeholder_maps(pleat, &PlaceholderParams::for_pleat(pleat))
                .with_context(|| format!("Failed to generate {} placeholder maps", pleat))
        })
        .collect::<Result<Vec<_>>>()?;
    let height_fields = vec![
        generate_flex_maps(&PleatFamilyConfig::flex()).context("Failed to generate flex maps")?,
        generate_flex25d_maps(&Flex25dParams::default())
            .context("Failed to generate flex25d maps")?,
    ];
    Ok(DefaultSets {
        placeholders,
        height_fields,
    })
}

/// Write `sets`, one parallel batch per output root, returning one report
/// entry per family.
pub fn write_sets(sets: &DefaultSets, out_root: &Path) -> Result<Vec<FamilyEntry>> {
    let placeholder_root = out_root.join(PLACEHOLDER_DIR);

    let mut families = Vec::with_capacity(sets.placeholders.len() + sets.height_fields.len());
    for (batch, root) in [
        (&sets.placeholders, placeholder_root.as_path()),
        (&sets.height_fields, out_root),
    ] {
        let written = save_all_parallel(batch, root)
            .with_context(|| format!("Failed to write maps under {}", root.display()))?;
        families.extend(
            batch
                .iter()
                .zip(&written)
                .map(|(set, paths)| reporting::family_entry(set, paths)),
        );
    }
    Ok(families)
}

/// Generate and write every set with default coefficients.
pub fn generate_all(out_root: &Path) -> Result<Vec<FamilyEntry>> {
    write_sets(&generate_default_sets()?, out_root)
}

/// Run the generate-all command
///
/// # Arguments
/// * `out_root` - Output root directory (default: current directory)
/// * `json_output` - Whether to print a JSON summary instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 failure
pub fn run(out_root: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = Path::new(out_root.unwrap_or("."));

    if json_output {
        let (families, error) = match generate_all(out_root) {
            Ok(families) => (families, None),
            Err(err) => (Vec::new(), Some(JsonError::from_anyhow(&err))),
        };
        let success = error.is_none();
        let summary = GenerationSummary {
            success,
            total_families: families.len(),
            total_maps: families.iter().map(|f| f.maps.len()).sum(),
            runtime_seconds: start.elapsed().as_secs_f64(),
            families,
            error,
        };
        reporting::print_json(&summary)?;
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    println!("{} all pleat families", "Generating:".cyan().bold());
    println!("{} {}", "Output root:".cyan().bold(), out_root.display());
    println!();

    let families = generate_all(out_root)?;
    for family in &families {
        reporting::print_family(family);
    }

    let total_maps: usize = families.iter().map(|f| f.maps.len()).sum();
    println!(
        "\n{} {} families, {} maps in {:.2}s",
        "SUCCESS".green().bold(),
        families.len(),
        total_maps,
        start.elapsed().as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drapery_backend_texture::MapChannel;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn small_sets() -> DefaultSets {
        let placeholders = PleatId::ALL
            .into_iter()
            .map(|pleat| {
                let params = PlaceholderParams {
                    map_width: 4,
                    map_height: 32,
                    weave_size: 8,
                    ..PlaceholderParams::for_pleat(pleat)
                };
                generate_placeholder_maps(pleat, &params).unwrap()
            })
            .collect();
        let flex = PleatFamilyConfig {
            width: 48,
            height: 80,
            ..PleatFamilyConfig::flex()
        };
        let flex25d = Flex25dParams {
            width: 54,
            height: 64,
            ..Flex25dParams::default()
        };
        DefaultSets {
            placeholders,
            height_fields: vec![
                generate_flex_maps(&flex).unwrap(),
                generate_flex25d_maps(&flex25d).unwrap(),
            ],
        }
    }

    #[test]
    fn test_flex_placeholder_and_height_field_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let sets = small_sets();
        let families = write_sets(&sets, dir.path()).unwrap();

        let names: Vec<_> = families.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(names, ["wave", "flex", "doubleFlex", "flex", "flex25d"]);

        let placeholder_ramp = sets.placeholders[1].get(MapChannel::PleatRamp).unwrap();
        let flex_ramp = sets.height_fields[0].get(MapChannel::PleatRamp).unwrap();
        assert_eq!(
            fs::read(dir.path().join("placeholder/flex/pleatRamp.png")).unwrap(),
            placeholder_ramp.data
        );
        assert_eq!(
            fs::read(dir.path().join("flex/pleatRamp.png")).unwrap(),
            flex_ramp.data
        );
    }
}
