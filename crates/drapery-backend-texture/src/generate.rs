//! Main entry point for pleat map generation.
//!
//! Each generator validates its parameters, synthesizes float buffers,
//! encodes them to PNG in memory and returns a [`PleatMapSet`]. Writing to
//! disk is a separate, final step.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use drapery_spec::{
    BackendError, Flex25dParams, PlaceholderParams, PleatFamilyConfig, PleatId, SpecError,
};
use rayon::prelude::*;
use thiserror::Error;

use crate::flex::FlexHeightField;
use crate::flex25d::Flex25dSynthesizer;
use crate::maps::{GrayscaleBuffer, TextureBuffer};
use crate::placeholder::generate_placeholders;
use crate::png::{self, MapEncoding, PngConfig, PngError};

/// Directory under the output root that holds placeholder families.
pub const PLACEHOLDER_DIR: &str = "placeholder";

/// Errors from pleat map generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Png(_) => "PLEAT_001",
            GenerateError::Io(_) => "PLEAT_002",
            GenerateError::InvalidParameter(_) => "PLEAT_003",
            GenerateError::Spec(_) => "PLEAT_004",
        }
    }

    fn category(&self) -> &'static str {
        "texture"
    }
}

/// What a map encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapChannel {
    PleatRamp,
    Occlusion,
    Translucency,
    Normal,
    WeaveDetail,
}

impl MapChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapChannel::PleatRamp => "pleat_ramp",
            MapChannel::Occlusion => "occlusion",
            MapChannel::Translucency => "translucency",
            MapChannel::Normal => "normal",
            MapChannel::WeaveDetail => "weave_detail",
        }
    }
}

/// Result of generating a single map.
#[derive(Debug, Clone)]
pub struct MapResult {
    pub channel: MapChannel,
    /// File name inside the family directory, e.g. `pleatRamp.png`.
    pub file_name: String,
    pub description: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub data: Vec<u8>,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
}

/// All maps for one pleat family.
#[derive(Debug, Clone)]
pub struct PleatMapSet {
    /// Family name, used as the output directory.
    pub family: String,
    pub maps: Vec<MapResult>,
}

impl PleatMapSet {
    /// Find a map by channel.
    pub fn get(&self, channel: MapChannel) -> Option<&MapResult> {
        self.maps.iter().find(|m| m.channel == channel)
    }
}

/// Generate the flex height-field maps.
///
/// Tone, occlusion and translucency are written as gray replicated to RGBA;
/// the normal map is RGBA with opaque alpha.
pub fn generate_flex_maps(config: &PleatFamilyConfig) -> Result<PleatMapSet, GenerateError> {
    config.validate()?;

    let field = FlexHeightField::new(config);
    let buffers = field.synthesize();
    let normals = field.normal_deriver().derive(&buffers.height);

    let png_config = PngConfig::default();
    let maps = vec![
        encode_gray(
            MapChannel::PleatRamp,
            "pleatRamp.png",
            "tone ramp (pinch + belly)",
            &buffers.ramp,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Occlusion,
            "occlusion.png",
            "ambient occlusion (pinch wedges)",
            &buffers.occlusion,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Translucency,
            "translucencyMask.png",
            "transmission map (belly bloom)",
            &buffers.translucency,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_color(
            MapChannel::Normal,
            "normal.png",
            "helper normal map from height field",
            &normals,
            &png_config,
        )?,
    ];

    Ok(PleatMapSet {
        family: config.name.clone(),
        maps,
    })
}

/// Generate the flex 2.5D variant maps.
///
/// Tone, occlusion and translucency are single-channel gray; the normal map
/// is RGBA.
pub fn generate_flex25d_maps(params: &Flex25dParams) -> Result<PleatMapSet, GenerateError> {
    params.validate()?;
    if params.name.is_empty() {
        return Err(GenerateError::InvalidParameter(
            "name must not be empty".to_string(),
        ));
    }

    let synth = Flex25dSynthesizer::new(params);
    let buffers = synth.synthesize();
    let normals = synth.derive_normals(&buffers.height);

    let png_config = PngConfig::default();
    let maps = vec![
        encode_gray(
            MapChannel::PleatRamp,
            "pleatRamp.png",
            "tone ramp (X arms + belly)",
            &buffers.ramp,
            MapEncoding::Gray,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Occlusion,
            "occlusion.png",
            "broad ambient occlusion",
            &buffers.occlusion,
            MapEncoding::Gray,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Translucency,
            "translucency.png",
            "light transmission",
            &buffers.translucency,
            MapEncoding::Gray,
            &png_config,
        )?,
        encode_color(
            MapChannel::Normal,
            "normal.png",
            "tangent-space normal map",
            &normals,
            &png_config,
        )?,
    ];

    Ok(PleatMapSet {
        family: params.name.clone(),
        maps,
    })
}

/// Generate the placeholder maps for a pleat style.
pub fn generate_placeholder_maps(
    pleat: PleatId,
    params: &PlaceholderParams,
) -> Result<PleatMapSet, GenerateError> {
    params.validate()?;
    if params.pleat != pleat {
        return Err(GenerateError::InvalidParameter(format!(
            "placeholder parameters are for '{}', not '{}'",
            params.pleat, pleat
        )));
    }

    let buffers = generate_placeholders(params);
    let png_config = PngConfig::default();
    let maps = vec![
        encode_gray(
            MapChannel::PleatRamp,
            "pleatRamp.png",
            "Vertical pleat shadow ramp",
            &buffers.pleat_ramp,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_gray(
            MapChannel::WeaveDetail,
            "weaveDetail.png",
            "Tileable weave pattern",
            &buffers.weave_detail,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Translucency,
            "translucencyMask.png",
            "Transmission mask for sheers",
            &buffers.translucency_mask,
            MapEncoding::Rgba,
            &png_config,
        )?,
        encode_gray(
            MapChannel::Occlusion,
            "occlusion.png",
            "Ambient occlusion",
            &buffers.occlusion,
            MapEncoding::Rgba,
            &png_config,
        )?,
    ];

    Ok(PleatMapSet {
        family: pleat.as_str().to_string(),
        maps,
    })
}

/// Write a map set to `out_root/<family>/`, returning the written paths.
pub fn save_pleat_maps(set: &PleatMapSet, out_root: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let separator = |c: char| c == '/' || c == '\\';
    if set.family.is_empty() || set.family.contains(separator) || set.family == ".." {
        return Err(GenerateError::InvalidParameter(format!(
            "family '{}' is not a valid directory name",
            set.family
        )));
    }

    let dir = out_root.join(&set.family);
    fs::create_dir_all(&dir)?;

    let mut paths = Vec::with_capacity(set.maps.len());
    for map in &set.maps {
        let path = dir.join(&map.file_name);
        fs::write(&path, &map.data)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Write several map sets concurrently.
///
/// Family names must be unique within a batch; each set then owns its
/// directory and the writes share no paths. Results keep the order of `sets`.
pub fn save_all_parallel(
    sets: &[PleatMapSet],
    out_root: &Path,
) -> Result<Vec<Vec<PathBuf>>, GenerateError> {
    let mut seen = HashSet::with_capacity(sets.len());
    if let Some(dup) = sets.iter().find(|&set| !seen.insert(set.family.as_str())) {
        return Err(GenerateError::InvalidParameter(format!(
            "family '{}' appears more than once in a parallel save",
            dup.family
        )));
    }

    sets.par_iter()
        .map(|set| save_pleat_maps(set, out_root))
        .collect()
}

fn encode_gray(
    channel: MapChannel,
    file_name: &str,
    description: &str,
    buffer: &GrayscaleBuffer,
    encoding: MapEncoding,
    config: &PngConfig,
) -> Result<MapResult, GenerateError> {
    let (data, hash) = png::write_grayscale_to_vec_with_hash(buffer, encoding, config)?;
    Ok(MapResult {
        channel,
        file_name: file_name.to_string(),
        description: description.to_string(),
        width: buffer.width,
        height: buffer.height,
        data,
        hash,
    })
}

fn encode_color(
    channel: MapChannel,
    file_name: &str,
    description: &str,
    buffer: &TextureBuffer,
    config: &PngConfig,
) -> Result<MapResult, GenerateError> {
    let (data, hash) = png::write_texture_to_vec_with_hash(buffer, MapEncoding::Rgba, config)?;
    Ok(MapResult {
        channel,
        file_name: file_name.to_string(),
        description: description.to_string(),
        width: buffer.width,
        height: buffer.height,
        data,
        hash,
    })
}
