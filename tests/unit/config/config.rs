use super::*;

#[test]
fn empty_json_is_all_defaults() {
    let cfg = OverlayConfig::from_json(b"{}").unwrap();
    assert_eq!(cfg, OverlayConfig::default());
    assert_eq!(cfg.fit.width_factor, 1.8);
    assert_eq!(
        cfg.catalog().unwrap().candidates(FaceShape::Round)[0],
        PathBuf::from("glasses/round/1.png")
    );
}

#[test]
fn explicit_catalog_is_rooted() {
    let cfg = OverlayConfig::from_json(
        br#"{"assets_root": "/srv/g", "catalog": {"default": ["d.png"], "oval": ["o.png"]}}"#,
    )
    .unwrap();
    let cat = cfg.catalog().unwrap();
    assert_eq!(cat.candidates(FaceShape::Oval), &[PathBuf::from("/srv/g/o.png")]);
    assert_eq!(cat.candidates(FaceShape::Square), &[PathBuf::from("/srv/g/d.png")]);
}

#[test]
fn catalog_without_default_is_rejected_at_parse() {
    let err = OverlayConfig::from_json(br#"{"catalog": {"oval": ["o.png"]}}"#).unwrap_err();
    assert!(matches!(err, GlassioError::Validation(_)));
    assert!(err.to_string().contains("default"));

    let cfg = OverlayConfig {
        catalog: Some(BTreeMap::from([(FaceShape::Oval, vec![PathBuf::from("o.png")])])),
        ..OverlayConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(GlassioError::Validation(_))));
}

#[test]
fn bad_fit_values_are_rejected() {
    let err = OverlayConfig::from_json(br#"{"fit": {"width_factor": 0.0}}"#).unwrap_err();
    assert!(matches!(err, GlassioError::Validation(_)));

    let err = OverlayConfig::from_json(br#"{"fitt": {}}"#).unwrap_err();
    assert!(matches!(err, GlassioError::Serde(_)));
}

#[test]
fn from_path_resolves_root_next_to_file() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("glassio.json");
    std::fs::write(&path, br#"{"assets_root": "frames"}"#).unwrap();

    let cfg = OverlayConfig::from_path(&path).unwrap();
    assert_eq!(cfg.assets_root, dir.join("frames"));
}
