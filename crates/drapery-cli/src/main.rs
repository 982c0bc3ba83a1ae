//! Drapery CLI - pleat texture generation from the command line
//!
//! This binary generates pleat map families, inspects the live pleat sampler
//! and resolves pleating presets.

use clap::{Parser, Subcommand};
use drapery_spec::SampleGridParams;
use std::process::ExitCode;

// Use modules from the library crate
use drapery_cli::commands;

/// Drapery - Procedural Pleat Texture Generator
#[derive(Parser)]
#[command(name = "drapery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the maps of one pleat family
    Generate {
        /// Family to generate (flex, flex25d, or a pleat id such as wave or doubleFlex)
        #[arg(short, long)]
        family: String,

        /// Generator variant
        #[arg(long, value_parser = ["placeholder"])]
        variant: Option<String>,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// JSON file with coefficient overrides
        #[arg(short, long)]
        config: Option<String>,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate every placeholder family plus flex and flex25d
    GenerateAll {
        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the live pleat sampler over a raster or at one pixel
    Sample {
        /// Raster width in pixels
        #[arg(long)]
        width: u32,

        /// Raster height in pixels
        #[arg(long)]
        height: u32,

        /// Pixels per pleat (clamped to at least 1)
        #[arg(long, default_value_t = 220.0)]
        tile: f64,

        /// Swap the pleat and cross axes
        #[arg(long)]
        flip: bool,

        /// Lateral jitter strength, typically 0..1
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,

        /// Header gather / hem relax strength, typically 0..1
        #[arg(long, default_value_t = 0.0)]
        taper: f64,

        /// Pixel column for a point query (requires --y)
        #[arg(short, long, requires = "y")]
        x: Option<u32>,

        /// Pixel row for a point query (requires --x)
        #[arg(short, long, requires = "x")]
        y: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Resolve the pleating preset for a pleat style
    Preset {
        /// Pleat id (wave, flex, doubleFlex); unknown ids fall back to wave
        #[arg(short, long)]
        pleat: String,

        /// Material family, e.g. sheer-basic or blackout-basic
        #[arg(short, long)]
        material: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            family,
            variant,
            out_root,
            config,
            json,
        } => commands::generate::run(
            &family,
            variant.as_deref(),
            out_root.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::GenerateAll { out_root, json } => {
            commands::generate_all::run(out_root.as_deref(), json)
        }
        Commands::Sample {
            width,
            height,
            tile,
            flip,
            jitter,
            taper,
            x,
            y,
            json,
        } => {
            let params = SampleGridParams::new(width, height, tile)
                .with_flip(flip)
                .with_jitter(jitter)
                .with_taper(taper);
            commands::sample::run(&params, x.zip(y), json)
        }
        Commands::Preset {
            pleat,
            material,
            json,
        } => commands::preset::run(&pleat, material.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
