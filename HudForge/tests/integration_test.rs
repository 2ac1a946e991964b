use hudforge::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn map(value: serde_json::Value) -> NestedMap {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_color_properties() {
    assert_eq!(pulse("10 20 30 200").unwrap(), "10 20 30 150");
    assert_eq!(pulse("10 20 30 40").unwrap(), "10 20 30 40");
    assert_eq!(dim("10 20 30 40").unwrap(), "10 20 30 100");
    assert_eq!(gray("200 100 40 255").unwrap(), "50 25 10 255");
}

#[test]
fn test_invalid_color_is_reported() {
    let err = hex_to_rgba("#12").unwrap_err();
    assert!(matches!(err, Error::InvalidColorFormat { ref input, .. } if input == "#12"));
}

#[test]
fn test_text_properties() {
    assert_eq!(comment_line("foo"), "//foo");
    assert_eq!(comment_line("//foo"), "//foo");
    assert_eq!(uncomment_line("//foo//bar"), "foobar");
    assert_eq!(find_lines(&["a b", "a\tb", "c d"], "a b"), vec![0, 1]);
}

#[test]
fn test_merge_example() {
    let mut target = map(json!({"a": {"x": 1}, "b": 2}));
    let source = map(json!({"a": {"x": 9, "y": 8}, "c": 3}));

    merge(&mut target, &source).unwrap();

    assert_eq!(target, map(json!({"a": {"x": 9, "y": 8}, "b": 2, "c": 3})));
}

#[test]
fn test_ensure_nested_path_example() {
    let mut root = NestedMap::new();
    let inner = ensure_nested_path(&mut root, ["a", "b", "c"]).unwrap();
    assert!(inner.is_empty());
    assert_eq!(root, map(json!({"a": {"b": {"c": {}}}})));
}

#[test]
fn test_quality_colors_from_picker() {
    // Picker hex -> scheme colors for every quality triple
    let mut scheme = NestedMap::new();
    let base = hex_to_rgba("#CF6A32").unwrap();

    let colors = ensure_nested_path(&mut scheme, ["Scheme", "Colors"]).unwrap();
    for quality in ITEM_RARITIES {
        quality.write_variants(colors, &base).unwrap();
    }

    let colors = scheme["Scheme"].as_mapping().unwrap()["Colors"]
        .as_mapping()
        .unwrap();
    assert_eq!(colors.len(), 48);
    assert_eq!(colors["QualityColorStrange"].as_str(), Some("207 106 50 255"));
    assert_eq!(colors["DimmQualityColorStrange"].as_str(), Some("207 106 50 100"));
    assert_eq!(colors["QualityColorStrange_GreyedOut"].as_str(), Some("51 26 12 255"));
}

#[test]
fn test_preset_merge_keeps_user_overrides() {
    let mut preset = map(json!({
        "Scheme": {
            "Colors": {"Health": "255 255 255 255", "Ammo": "235 226 202 255"},
            "Fonts": {"Default": "TF2 Build"}
        },
        "Version": 1
    }));
    let user = map(json!({
        "Scheme": {"Colors": {"Health": "0 255 0 255", "Uber": "180 80 200 255"}},
        "Version": 2,
        "Author": "someone"
    }));

    merge(&mut preset, &user).unwrap();

    assert_eq!(
        preset,
        map(json!({
            "Scheme": {
                "Colors": {
                    "Health": "0 255 0 255",
                    "Ammo": "235 226 202 255",
                    "Uber": "180 80 200 255"
                },
                "Fonts": {"Default": "TF2 Build"}
            },
            "Version": 2,
            "Author": "someone"
        }))
    );
}

#[test]
fn test_toggle_matching_lines() {
    let content = "\"HudWeaponAmmo\"\n{\n\t\"visible\"\t\"1\"\n\t\"enabled\" \"1\"\n}";
    let mut lines: Vec<String> = content.lines().map(String::from).collect();

    for index in find_lines(&lines, "\"visible\" \"1\"") {
        lines[index] = comment_line(&lines[index]);
    }
    assert_eq!(lines[2], "//\t\"visible\"\t\"1\"");

    lines[2] = uncomment_line(&lines[2]);
    assert_eq!(lines.join("\n"), content);
}

#[test]
fn test_control_file_names() {
    let control: ControlFiles =
        serde_json::from_value(json!({"FileName": "resource/ui/hudplayerhealth.res"})).unwrap();
    assert_eq!(
        control.file_names(),
        FileNames::Single("resource/ui/hudplayerhealth".to_string())
    );
}
