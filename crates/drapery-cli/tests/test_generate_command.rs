//! Generate command end to end: resolve, generate, write, inspect the tree.

use std::fs;

use drapery_cli::commands::generate::{self, resolve_target, Target};
use drapery_spec::{PlaceholderParams, PleatId};
use pretty_assertions::assert_eq;

#[test]
fn test_generate_flex_with_config_writes_family_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("flex.json");
    fs::write(&config, r#"{ "width": 24, "height": 32 }"#).unwrap();
    let out_root = dir.path().join("out");

    generate::run("flex", None, out_root.to_str(), config.to_str(), false).unwrap();

    let mut names: Vec<_> = fs::read_dir(out_root.join("flex"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["normal.png", "occlusion.png", "pleatRamp.png", "translucencyMask.png"]
    );
}

#[test]
fn test_generate_placeholder_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let params = PlaceholderParams {
        map_width: 4,
        map_height: 32,
        weave_size: 8,
        ..PlaceholderParams::for_pleat(PleatId::DoubleFlex)
    };
    let config = dir.path().join("double.json");
    fs::write(&config, serde_json::to_string(&params).unwrap()).unwrap();

    let resolved = resolve_target("doubleFlex", Some("placeholder")).unwrap();
    assert_eq!(resolved.target, Target::Placeholder(PleatId::DoubleFlex));

    let set = generate::generate_set(resolved.target, Some(config.as_path())).unwrap();
    assert_eq!(set.family, "doubleFlex");
    assert_eq!(set.maps.len(), 4);
}

#[test]
fn test_generate_placeholder_config_for_wrong_pleat_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("wave.json");
    let params = PlaceholderParams {
        map_width: 4,
        map_height: 32,
        weave_size: 8,
        ..PlaceholderParams::for_pleat(PleatId::Wave)
    };
    fs::write(&config, serde_json::to_string(&params).unwrap()).unwrap();

    let err = generate::generate_set(Target::Placeholder(PleatId::Flex), Some(config.as_path()))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Map generation failed"));
}

#[test]
fn test_generate_json_reports_failure_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("flex.json");
    fs::write(&config, r#"{ "width": 1 }"#).unwrap();

    // The JSON path reports the failure in its output instead of bailing.
    assert!(generate::run("flex", None, dir.path().to_str(), config.to_str(), true).is_ok());
    assert!(!dir.path().join("flex").exists());
}
