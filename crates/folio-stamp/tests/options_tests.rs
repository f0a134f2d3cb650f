use folio_stamp::*;

#[test]
fn test_default_config() {
    let config = FolioConfig::default();
    assert_eq!(config.position.corner_vertical, CornerVertical::Top);
    assert_eq!(config.position.corner_horizontal, CornerHorizontal::Right);
    assert_eq!(config.appearance.color, "#000000");
    assert_eq!(config.appearance.transparency, 100.0);
    assert_eq!(config.appearance.font_size, 12.0);
    assert_eq!(config.numbering.start_number, 1);
    assert_eq!(config.numbering.direction, Direction::First);
    assert_eq!(config.numbering.numbering_type, NumberingType::Numbers);
    assert_eq!(config.numbering.zero_padding, 6);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let cases: Vec<Box<dyn Fn(&mut FolioConfig)>> = vec![
        Box::new(|c| c.numbering.start_number = 0),
        Box::new(|c| c.numbering.start_number = 10_000),
        Box::new(|c| c.numbering.zero_padding = 0),
        Box::new(|c| c.numbering.zero_padding = 11),
        Box::new(|c| c.appearance.font_size = 5.0),
        Box::new(|c| c.appearance.font_size = 73.0),
        Box::new(|c| c.appearance.transparency = -1.0),
        Box::new(|c| c.appearance.transparency = f64::NAN),
        Box::new(|c| c.appearance.color = "black".to_string()),
        Box::new(|c| c.position.offset_x = 10.5),
        Box::new(|c| c.position.offset_y = -11.0),
        Box::new(|c| c.position.randomness_x = 6.0),
        Box::new(|c| c.position.randomness_rotation = 31.0),
        Box::new(|c| c.position.rotation = f64::INFINITY),
    ];

    for (index, mutate) in cases.iter().enumerate() {
        let mut config = FolioConfig::default();
        mutate(&mut config);
        assert!(
            matches!(config.validate(), Err(FolioError::ConfigValidation(_))),
            "case {} should fail validation",
            index
        );
    }
}

#[test]
fn test_validation_accepts_range_edges() {
    let mut config = FolioConfig::default();
    config.numbering.start_number = 9999;
    config.numbering.zero_padding = 10;
    config.appearance.font_size = 72.0;
    config.appearance.transparency = 0.0;
    config.appearance.color = "#fff".to_string();
    config.position.offset_x = -10.0;
    config.position.randomness_rotation = 30.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_uses_camel_case_and_lowercase_enums() {
    let json = serde_json::to_value(FolioConfig::default()).unwrap();
    assert_eq!(json["position"]["cornerVertical"], "top");
    assert_eq!(json["position"]["cornerHorizontal"], "right");
    assert_eq!(json["appearance"]["fontSize"], 12.0);
    assert_eq!(json["numbering"]["numberingType"], "numbers");
    assert_eq!(json["numbering"]["zeroPadding"], 6);
}

#[test]
fn test_json_accepts_partial_and_legacy_keys() {
    let json = r#"{
        "position": { "positionX": 1.5, "positionY": -2, "cornerVertical": "bottom" },
        "numbering": { "numberingType": "mixed", "direction": "last" }
    }"#;
    let config: FolioConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.position.offset_x, 1.5);
    assert_eq!(config.position.offset_y, -2.0);
    assert_eq!(config.position.corner_vertical, CornerVertical::Bottom);
    assert_eq!(config.position.corner_horizontal, CornerHorizontal::Right);
    assert_eq!(config.numbering.numbering_type, NumberingType::Mixed);
    assert_eq!(config.numbering.direction, Direction::Last);
    assert_eq!(config.appearance, AppearanceConfig::default());
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.json");

    let mut config = FolioConfig::default();
    config.apply(ConfigUpdate::Appearance(AppearanceUpdate {
        color: Some("#1a2b3c".to_string()),
        transparency: Some(35.0),
        ..Default::default()
    }));
    config.apply(ConfigUpdate::Numbering(NumberingUpdate {
        start_number: Some(42),
        ..Default::default()
    }));

    config.save(&path).await.unwrap();
    let loaded = FolioConfig::load(&path).await.unwrap();
    assert_eq!(loaded, config);
}

#[tokio::test]
async fn test_load_rejects_malformed_json() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        FolioConfig::load(&path).await,
        Err(FolioError::ConfigValidation(_))
    ));
}

#[tokio::test]
async fn test_flat_config_is_not_read() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.json");
    std::fs::write(&path, r#"{ "positionX": 2.5, "transparency": 10 }"#).unwrap();

    let loaded = FolioConfig::load(&path).await.unwrap();
    assert_eq!(loaded, FolioConfig::default());
}
