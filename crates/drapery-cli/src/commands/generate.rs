//! Generate command implementation
//!
//! Generates the maps of a single pleat family and writes them under
//! `<out_root>/<family>/`, or `<out_root>/placeholder/<family>/` for
//! placeholder maps.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use drapery_backend_texture::{
    generate_flex25d_maps, generate_flex_maps, generate_placeholder_maps, save_pleat_maps,
    PleatMapSet, PLACEHOLDER_DIR,
};
use drapery_spec::recipe::from_json;
use drapery_spec::{Flex25dParams, PlaceholderParams, PleatFamilyConfig, PleatId};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::reporting::{self, FamilyEntry, JsonError};

/// Which generator a `--family`/`--variant` pair resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Flex height-field maps.
    Flex,
    /// Flex 2.5D variant with explicit X arms.
    Flex25d,
    /// Sinusoidal placeholder maps for a pleat style.
    Placeholder(PleatId),
}

/// A resolved target, plus a warning when the family name was not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub target: Target,
    pub warning: Option<String>,
}

/// Resolve a family name and optional variant to a generator.
///
/// `flex` and `flex25d` pick the height-field generators. Any other name is
/// a pleat id and gets placeholder maps; unknown ids fall back to `wave`.
pub fn resolve_target(family: &str, variant: Option<&str>) -> Result<Resolved> {
    let placeholder = match variant {
        None => false,
        Some("placeholder") => true,
        Some(other) => bail!("unknown variant: {} (expected placeholder)", other),
    };

    let target = match (family, placeholder) {
        ("flex", false) => Target::Flex,
        ("flex25d", false) => Target::Flex25d,
        ("flex25d", true) => bail!("flex25d has no placeholder variant"),
        _ => {
            let (pleat, fell_back) = PleatId::parse_or_default(family);
            let warning = fell_back.then(|| {
                format!("unknown pleat family '{}', using '{}'", family, pleat)
            });
            return Ok(Resolved {
                target: Target::Placeholder(pleat),
                warning,
            });
        }
    };

    Ok(Resolved {
        target,
        warning: None,
    })
}

/// Directory the family directory of `target` is created in.
pub fn target_root(target: Target, out_root: &Path) -> PathBuf {
    match target {
        Target::Placeholder(_) => out_root.join(PLACEHOLDER_DIR),
        Target::Flex | Target::Flex25d => out_root.to_path_buf(),
    }
}

/// Generate the map set for a target, reading coefficient overrides from
/// `config` when given.
pub fn generate_set(target: Target, config: Option<&Path>) -> Result<PleatMapSet> {
    let source = config.map(reporting::read_config).transpose()?;

    let set = match target {
        Target::Flex => {
            let config = match &source {
                Some(json) => from_json::<PleatFamilyConfig>(json)
                    .context("Failed to parse flex config")?,
                None => PleatFamilyConfig::flex(),
            };
            generate_flex_maps(&config)
        }
        Target::Flex25d => {
            let params = match &source {
                Some(json) => {
                    from_json::<Flex25dParams>(json).context("Failed to parse flex25d config")?
                }
                None => Flex25dParams::default(),
            };
            generate_flex25d_maps(&params)
        }
        Target::Placeholder(pleat) => {
            let params = match &source {
                Some(json) => from_json::<PlaceholderParams>(json)
                    .context("Failed to parse placeholder config")?,
                None => PlaceholderParams::for_pleat(pleat),
            };
            generate_placeholder_maps(pleat, &params)
        }
    };

    set.context("Map generation failed")
}

/// Machine-readable result of `drapery generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FamilyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
    pub duration_ms: u64,
}

/// Run the generate command
///
/// # Arguments
/// * `family` - Family name (`flex`, `flex25d`, or a pleat id)
/// * `variant` - Optional variant (`placeholder`)
/// * `out_root` - Output root directory (default: current directory)
/// * `config` - Optional JSON coefficient overrides
/// * `json_output` - Whether to print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 failure
pub fn run(
    family: &str,
    variant: Option<&str>,
    out_root: Option<&str>,
    config: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let out_root = Path::new(out_root.unwrap_or("."));
    let config = config.map(Path::new);

    if json_output {
        return run_json(family, variant, out_root, config);
    }

    let start = Instant::now();
    let resolved = resolve_target(family, variant)?;
    if let Some(warning) = &resolved.warning {
        reporting::print_warning(warning);
    }

    println!("{} {}", "Generating:".cyan().bold(), family);
    println!("{} {}", "Output root:".cyan().bold(), out_root.display());
    if let Some(path) = config {
        println!("{} {}", "Config:".dimmed(), path.display());
    }

    let set = generate_set(resolved.target, config)?;
    let root = target_root(resolved.target, out_root);
    let paths = save_pleat_maps(&set, &root)
        .with_context(|| format!("Failed to write maps under {}", root.display()))?;

    reporting::print_family(&reporting::family_entry(&set, &paths));
    println!(
        "\n{} {} map(s) in {}ms",
        "SUCCESS".green().bold(),
        paths.len(),
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    family: &str,
    variant: Option<&str>,
    out_root: &Path,
    config: Option<&Path>,
) -> Result<ExitCode> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let outcome = resolve_target(family, variant).and_then(|resolved| {
        warnings.extend(resolved.warning);
        let set = generate_set(resolved.target, config)?;
        let root = target_root(resolved.target, out_root);
        let paths = save_pleat_maps(&set, &root)
            .with_context(|| format!("Failed to write maps under {}", root.display()))?;
        Ok(reporting::family_entry(&set, &paths))
    });

    let (output, code) = match outcome {
        Ok(entry) => (
            GenerateOutput {
                success: true,
                warnings,
                result: Some(entry),
                error: None,
                duration_ms: start.elapsed().as_millis() as u64,
            },
            ExitCode::SUCCESS,
        ),
        Err(err) => (
            GenerateOutput {
                success: false,
                warnings,
                result: None,
                error: Some(JsonError::from_anyhow(&err)),
                duration_ms: start.elapsed().as_millis() as u64,
            },
            ExitCode::from(1),
        ),
    };

    reporting::print_json(&output)?;
    Ok(code)
}
