//! Snapshot files on disk

use std::fs;

use serde_json::Value;
use tempfile::TempDir;
use tricolor_core::{ColorState, Error, Lab, Rgb8, SnapshotStore, Xyz};

fn temp_store() -> (TempDir, SnapshotStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path().join("saved_color.json"));
    (dir, store)
}

#[test]
fn test_saved_file_layout() {
    let (_dir, store) = temp_store();
    store.save(&ColorState::from_rgb(Rgb8::new(255, 0, 0))).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["hex", "lab", "rgb", "xyz"]);

    assert_eq!(object["rgb"], serde_json::json!([255, 0, 0]));
    assert_eq!(object["hex"], "#ff0000");
    let y = object["xyz"][1].as_f64().unwrap();
    assert!((y - 21.2673).abs() < 1e-4);
    let l = object["lab"][0].as_f64().unwrap();
    assert!((l - 53.2408).abs() < 1e-4);
}

#[test]
fn test_hand_written_file_is_trusted() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        r##"{
  "rgb": [10, 20, 30],
  "xyz": [1, 2, 3],
  "lab": [40.5, -3.25, 7],
  "hex": "#abcdef"
}"##,
    )
    .unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.rgb(), Rgb8::new(10, 20, 30));
    assert_eq!(state.xyz(), Xyz::new(1.0, 2.0, 3.0));
    assert_eq!(state.lab(), Lab::new(40.5, -3.25, 7.0));
    // hex is recomputed from rgb, the stored string only has to be well formed
    assert_eq!(state.hex(), "#0a141e");
}

#[test]
fn test_out_of_gamut_state_survives_store() {
    let (_dir, store) = temp_store();
    let mut state = ColorState::new();
    assert!(state.set_from_lab(Lab::new(50.0, -128.0, 127.0)).is_clipped());

    store.save(&state).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.lab(), Lab::new(50.0, -128.0, 127.0));
}

#[test]
fn test_non_finite_state_is_not_saved() {
    let (_dir, store) = temp_store();
    store.save(&ColorState::from_rgb(Rgb8::new(1, 2, 3))).unwrap();

    let mut state = ColorState::new();
    let _ = state.set_from_xyz(Xyz::new(f64::NAN, 50.0, 50.0));
    assert!(matches!(store.save(&state), Err(Error::NonFinite)));

    let _ = state.set_from_lab(Lab::new(1e120, 0.0, 0.0));
    assert!(matches!(store.save(&state), Err(Error::NonFinite)));

    // The previous snapshot is left untouched
    assert_eq!(store.load().unwrap().rgb(), Rgb8::new(1, 2, 3));
}

#[test]
fn test_missing_file() {
    let (_dir, store) = temp_store();
    assert!(matches!(store.load(), Err(Error::NotFound(_))));
}

#[test]
fn test_malformed_files() {
    let cases = [
        ("empty", ""),
        ("not json", "rgb = [1, 2, 3]"),
        ("array", "[1, 2, 3]"),
        (
            "missing hex",
            r#"{"rgb": [0, 0, 0], "xyz": [0, 0, 0], "lab": [0, 0, 0]}"#,
        ),
        (
            "rgb too large",
            r##"{"rgb": [0, 256, 0], "xyz": [0, 0, 0], "lab": [0, 0, 0], "hex": "#000000"}"##,
        ),
        (
            "short xyz",
            r##"{"rgb": [0, 0, 0], "xyz": [0, 0], "lab": [0, 0, 0], "hex": "#000000"}"##,
        ),
        (
            "string lab",
            r##"{"rgb": [0, 0, 0], "xyz": [0, 0, 0], "lab": "0,0,0", "hex": "#000000"}"##,
        ),
        (
            "bad hex",
            r#"{"rgb": [0, 0, 0], "xyz": [0, 0, 0], "lab": [0, 0, 0], "hex": "000000"}"#,
        ),
        (
            "uppercase hex",
            r##"{"rgb": [0, 0, 0], "xyz": [0, 0, 0], "lab": [0, 0, 0], "hex": "#ABCDEF"}"##,
        ),
    ];

    for (name, contents) in cases {
        let (_dir, store) = temp_store();
        fs::write(store.path(), contents).unwrap();

        match store.load() {
            Err(Error::MalformedSnapshot(_)) => {}
            other => panic!("{}: expected MalformedSnapshot, got {:?}", name, other),
        }
    }
}

#[test]
fn test_store_path_is_a_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SnapshotStore::new(dir.path());

    assert!(!store.exists());
    assert!(matches!(store.load(), Err(Error::Io(_))));
}
