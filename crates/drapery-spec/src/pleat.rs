//! Pleat catalog: pleat ids, material families, and pleating presets.
//!
//! Each pleat style has a horizontal tile width that matches its texture maps,
//! and individual material families may override the width and relief strength.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Pleat style identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PleatId {
    /// Wave pleat: broad, even S-curve folds.
    Wave,
    /// Flex pleat: pinched header with a spreading belly.
    Flex,
    /// Double flex pleat: the densest fold pattern.
    DoubleFlex,
}

impl PleatId {
    /// All catalog pleats in display order.
    pub const ALL: [PleatId; 3] = [PleatId::Wave, PleatId::Flex, PleatId::DoubleFlex];

    /// Returns the canonical string id (`wave`, `flex`, `doubleFlex`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PleatId::Wave => "wave",
            PleatId::Flex => "flex",
            PleatId::DoubleFlex => "doubleFlex",
        }
    }

    /// Parse a pleat id, falling back to [`PleatId::Wave`] for unknown input.
    ///
    /// The second element is `true` when the fallback was used, so callers
    /// can warn about it.
    pub fn parse_or_default(s: &str) -> (PleatId, bool) {
        match s.parse() {
            Ok(id) => (id, false),
            Err(_) => (PleatId::Wave, true),
        }
    }
}

impl fmt::Display for PleatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PleatId {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wave" => Ok(PleatId::Wave),
            "flex" => Ok(PleatId::Flex),
            "doubleFlex" => Ok(PleatId::DoubleFlex),
            other => Err(SpecError::UnknownPleat(other.to_string())),
        }
    }
}

/// Fabric material family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialFamily {
    Sheer,
    Linen,
    Blackout,
    BlackoutBasic,
    Cotton,
    Velvet,
    Silk,
    CurtainLinen,
    SheerLinen,
    CurtainBasic,
    SheerBasic,
}

impl MaterialFamily {
    /// Returns the canonical kebab-case id.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialFamily::Sheer => "sheer",
            MaterialFamily::Linen => "linen",
            MaterialFamily::Blackout => "blackout",
            MaterialFamily::BlackoutBasic => "blackout-basic",
            MaterialFamily::Cotton => "cotton",
            MaterialFamily::Velvet => "velvet",
            MaterialFamily::Silk => "silk",
            MaterialFamily::CurtainLinen => "curtain-linen",
            MaterialFamily::SheerLinen => "sheer-linen",
            MaterialFamily::CurtainBasic => "curtain-basic",
            MaterialFamily::SheerBasic => "sheer-basic",
        }
    }
}

impl fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialFamily {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s {
            "sheer" => MaterialFamily::Sheer,
            "linen" => MaterialFamily::Linen,
            "blackout" => MaterialFamily::Blackout,
            "blackout-basic" => MaterialFamily::BlackoutBasic,
            "cotton" => MaterialFamily::Cotton,
            "velvet" => MaterialFamily::Velvet,
            "silk" => MaterialFamily::Silk,
            "curtain-linen" => MaterialFamily::CurtainLinen,
            "sheer-linen" => MaterialFamily::SheerLinen,
            "curtain-basic" => MaterialFamily::CurtainBasic,
            "sheer-basic" => MaterialFamily::SheerBasic,
            other => return Err(SpecError::UnknownMaterialFamily(other.to_string())),
        };
        Ok(family)
    }
}

/// Pleating preset for a pleat style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PleatingPreset {
    /// Pleat style identifier.
    pub pleat_id: PleatId,
    /// Display name.
    pub label: String,
    /// Horizontal tile width in pixels (controls pleat spacing).
    pub tile_width_px: u32,
    /// Height map strength (controls relief shading).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_strength: Option<f64>,
}

impl PleatingPreset {
    /// Base preset for a pleat style, without material overrides.
    pub fn base(pleat: PleatId) -> Self {
        let (label, tile_width_px) = match pleat {
            PleatId::Wave => ("Wave Pleat", 220),
            PleatId::Flex => ("Flex Pleat", 200),
            PleatId::DoubleFlex => ("Double Flex Pleat", 160),
        };
        Self {
            pleat_id: pleat,
            label: label.to_string(),
            tile_width_px,
            height_strength: Some(0.2),
        }
    }
}

/// Partial preset overrides. Unset fields keep the preset value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_width_px: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_strength: Option<f64>,
}

/// Designer overrides keyed by material family and pleat.
fn material_override(family: MaterialFamily, pleat: PleatId) -> Option<PresetOverrides> {
    use MaterialFamily::*;
    use PleatId::*;

    let (tile, strength) = match (family, pleat) {
        (SheerBasic, Wave) => (240, 0.25),
        (SheerBasic, Flex) => (160, 0.15),
        (SheerBasic, DoubleFlex) => (180, 0.25),
        (SheerLinen, Wave) => (220, 0.35),
        (CurtainBasic, Wave) => (180, 0.25),
        (CurtainBasic, Flex) => (200, 0.10),
        (CurtainBasic, DoubleFlex) => (160, 0.15),
        (BlackoutBasic, Wave) => (180, 0.28),
        (BlackoutBasic, Flex) => (200, 0.12),
        (BlackoutBasic, DoubleFlex) => (160, 0.18),
        _ => return None,
    };

    Some(PresetOverrides {
        tile_width_px: Some(tile),
        height_strength: Some(strength),
    })
}

/// Get the pleating preset for a pleat, with optional per-material overrides.
pub fn preset_for_material(family: Option<MaterialFamily>, pleat: PleatId) -> PleatingPreset {
    let base = PleatingPreset::base(pleat);
    let Some(overrides) = family.and_then(|f| material_override(f, pleat)) else {
        return base;
    };

    PleatingPreset {
        tile_width_px: overrides.tile_width_px.unwrap_or(base.tile_width_px),
        height_strength: overrides.height_strength.or(base.height_strength),
        ..base
    }
}

/// Apply debug overrides to a preset.
///
/// Only the tile width is overridable here; relief strength is owned by the
/// material table.
pub fn apply_overrides(preset: PleatingPreset, overrides: Option<&PresetOverrides>) -> PleatingPreset {
    let Some(overrides) = overrides else {
        return preset;
    };

    PleatingPreset {
        tile_width_px: overrides.tile_width_px.unwrap_or(preset.tile_width_px),
        ..preset
    }
}

/// How a pleat texture is laid out relative to the curtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PleatTextureOrientation {
    /// Texture columns run down the curtain (cross axis on U).
    #[default]
    Transposed,
    /// Texture columns run across the pleats (pleat coordinate on U).
    Natural,
}

/// Map a `(cross_axis, pleat_coord)` sample to texture UV for an orientation.
pub fn map_pleat_uv(
    orientation: PleatTextureOrientation,
    cross_axis: f64,
    pleat_coord: f64,
) -> (f64, f64) {
    match orientation {
        PleatTextureOrientation::Natural => (pleat_coord, cross_axis),
        PleatTextureOrientation::Transposed => (cross_axis, pleat_coord),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pleat_id_round_trip_strings() {
        for pleat in PleatId::ALL {
            assert_eq!(pleat.as_str().parse::<PleatId>().unwrap(), pleat);
        }
        let json = serde_json::to_string(&PleatId::DoubleFlex).unwrap();
        assert_eq!(json, "\"doubleFlex\"");
    }

    #[test]
    fn test_unknown_pleat_falls_back_to_wave() {
        assert_eq!(PleatId::parse_or_default("pinch"), (PleatId::Wave, true));
        assert_eq!(PleatId::parse_or_default("flex"), (PleatId::Flex, false));
        assert!("pinch".parse::<PleatId>().is_err());
    }

    #[test]
    fn test_base_presets() {
        assert_eq!(PleatingPreset::base(PleatId::Wave).tile_width_px, 220);
        assert_eq!(PleatingPreset::base(PleatId::Flex).tile_width_px, 200);
        assert_eq!(PleatingPreset::base(PleatId::DoubleFlex).tile_width_px, 160);
        assert_eq!(PleatingPreset::base(PleatId::Flex).label, "Flex Pleat");
    }

    #[test]
    fn test_material_overrides() {
        let sheer = preset_for_material(Some(MaterialFamily::SheerBasic), PleatId::Wave);
        assert_eq!(sheer.tile_width_px, 240);
        assert_eq!(sheer.height_strength, Some(0.25));

        let linen_flex = preset_for_material(Some(MaterialFamily::SheerLinen), PleatId::Flex);
        assert_eq!(linen_flex, PleatingPreset::base(PleatId::Flex));

        let velvet = preset_for_material(Some(MaterialFamily::Velvet), PleatId::DoubleFlex);
        assert_eq!(velvet, PleatingPreset::base(PleatId::DoubleFlex));

        assert_eq!(
            preset_for_material(None, PleatId::Wave),
            PleatingPreset::base(PleatId::Wave)
        );
    }

    #[test]
    fn test_apply_overrides_only_touches_tile_width() {
        let preset = PleatingPreset::base(PleatId::Wave);
        let overrides = PresetOverrides {
            tile_width_px: Some(300),
            height_strength: Some(0.9),
        };
        let applied = apply_overrides(preset.clone(), Some(&overrides));
        assert_eq!(applied.tile_width_px, 300);
        assert_eq!(applied.height_strength, preset.height_strength);
        assert_eq!(apply_overrides(preset.clone(), None), preset);
    }

    #[test]
    fn test_material_family_parsing() {
        assert_eq!(
            "curtain-basic".parse::<MaterialFamily>().unwrap(),
            MaterialFamily::CurtainBasic
        );
        assert!("tweed".parse::<MaterialFamily>().is_err());
        let json = serde_json::to_string(&MaterialFamily::BlackoutBasic).unwrap();
        assert_eq!(json, "\"blackout-basic\"");
    }

    #[test]
    fn test_map_pleat_uv() {
        assert_eq!(
            map_pleat_uv(PleatTextureOrientation::Natural, 0.25, 0.75),
            (0.75, 0.25)
        );
        assert_eq!(
            map_pleat_uv(PleatTextureOrientation::Transposed, 0.25, 0.75),
            (0.25, 0.75)
        );
    }
}
