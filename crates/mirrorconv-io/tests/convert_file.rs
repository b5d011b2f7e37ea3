//! Integration tests: convert mirror documents on disk end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};

use mirrorconv_io::{ConvertSummary, IoError, convert_file};
use mirrorconv_pipeline::{ConvertError, MirrorDocument, Point};
use pretty_assertions::assert_eq;

const EXAMPLE: &str =
    r#"{"mirrors":[{"start_pos":[540,960],"end_pos":[0,0],"absorption_factor":0.5}]}"#;

/// A small scene in pixel space, similar to what the simulator ships.
const SCENE: &str = r#"{
    "mirrors": [
        {"start_pos": [100, 200], "end_pos": [300, 400], "absorption_factor": 0},
        {"start_pos": [1080, 0], "end_pos": [1080, 1920], "absorption_factor": 1},
        {"start_pos": [0.5, 12.25], "end_pos": [900, 1700], "absorption_factor": 0.35}
    ]
}"#;

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn example_to_fractions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.json", EXAMPLE);
    let output = dir.path().join("out.json");

    let summary = convert_file(&input, &output, true).expect("conversion should succeed");

    assert_eq!(
        summary,
        ConvertSummary {
            mirrors: 1,
            to_fractions: true,
            in_place: false,
        }
    );
    assert_eq!(
        read_output(&output),
        r#"{"mirrors":[{"start_pos":[0.5,0.5],"end_pos":[0.0,0.0],"absorption_factor":0.5}]}"#,
    );
}

#[test]
fn example_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.json", EXAMPLE);
    let output = dir.path().join("out.json");

    convert_file(&input, &output, false).unwrap();

    assert_eq!(
        read_output(&output),
        r#"{"mirrors":[{"start_pos":[540.0,960.0],"end_pos":[0.0,0.0],"absorption_factor":0.5}]}"#,
    );
}

#[test]
fn scene_to_fractions_preserves_order_and_absorption() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "scene.json", SCENE);
    let output = dir.path().join("scene.frac.json");

    convert_file(&input, &output, true).unwrap();

    let before: MirrorDocument = serde_json::from_str(SCENE).unwrap();
    let after: MirrorDocument = serde_json::from_str(&read_output(&output)).unwrap();
    assert_eq!(after.mirrors.len(), before.mirrors.len());
    for (b, a) in before.mirrors.iter().zip(&after.mirrors) {
        assert_eq!(
            a.start_pos,
            Point::new(b.start_pos.x / 1080.0, b.start_pos.y / 1920.0)
        );
        assert_eq!(a.end_pos, Point::new(b.end_pos.x / 1080.0, b.end_pos.y / 1920.0));
        assert_eq!(a.absorption_factor, b.absorption_factor);
    }

    // Integer absorption factors stay integers on disk.
    let text = read_output(&output);
    assert!(text.contains(r#""absorption_factor":0}"#), "got {text}");
    assert!(text.contains(r#""absorption_factor":1}"#), "got {text}");
    assert!(text.contains(r#""absorption_factor":0.35}"#), "got {text}");
}

#[test]
fn pass_through_in_place_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(dir.path(), "mirrors.json", SCENE);

    let first = convert_file(&path, &path, false).unwrap();
    assert!(first.in_place);
    let once = read_output(&path);

    convert_file(&path, &path, false).unwrap();
    let twice = read_output(&path);

    assert_eq!(once, twice);
}

#[test]
fn untagged_in_place_divides_again() {
    // Untagged documents carry no record of having been converted, so
    // a second in-place run divides again. The run logs a warning but
    // is not refused.
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(dir.path(), "mirrors.json", EXAMPLE);

    convert_file(&path, &path, true).unwrap();
    convert_file(&path, &path, true).unwrap();

    let doc: MirrorDocument = serde_json::from_str(&read_output(&path)).unwrap();
    assert_eq!(
        doc.mirrors[0].start_pos,
        Point::new(0.5 / 1080.0, 0.5 / 1920.0)
    );
}

#[test]
fn tagged_in_place_refuses_second_division() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(
        dir.path(),
        "mirrors.json",
        r#"{"coord_format":"pixels","mirrors":[{"start_pos":[540,960],"end_pos":[0,0],"absorption_factor":0.5}]}"#,
    );

    convert_file(&path, &path, true).unwrap();
    let converted = read_output(&path);
    assert_eq!(
        converted,
        r#"{"coord_format":"fractions","mirrors":[{"start_pos":[0.5,0.5],"end_pos":[0.0,0.0],"absorption_factor":0.5}]}"#,
    );

    let err = convert_file(&path, &path, true).unwrap_err();
    assert!(matches!(
        err,
        IoError::Convert(ConvertError::AlreadyFractional)
    ));
    // The file is left as it was after the first run.
    assert_eq!(read_output(&path), converted);
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.json", EXAMPLE);
    let output = write_input(dir.path(), "out.json", &" ".repeat(1000));

    convert_file(&input, &output, false).unwrap();

    assert!(read_output(&output).starts_with(r#"{"mirrors":"#));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(
        &dir.path().join("missing.json"),
        &dir.path().join("out.json"),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, IoError::Read { .. }));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn invalid_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.json", r#"{"mirrors": ["#);
    let err = convert_file(&input, &dir.path().join("out.json"), true).unwrap_err();
    assert!(matches!(err, IoError::Parse { .. }));
}

#[test]
fn missing_mirror_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "in.json",
        r#"{"mirrors":[{"end_pos":[0,0],"absorption_factor":0.5}]}"#,
    );
    let err = convert_file(&input, &dir.path().join("out.json"), false).unwrap_err();
    assert!(matches!(err, IoError::Parse { .. }));
    assert!(err.to_string().contains("start_pos"), "got {err}");
}

#[test]
fn array_form_mirror_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.json", r#"{"mirrors":[[[540,960],[0,0],0.5]]}"#);
    let output = dir.path().join("out.json");

    let err = convert_file(&input, &output, true).unwrap_err();

    assert!(matches!(err, IoError::Parse { .. }));
    assert!(!output.exists());
}

#[test]
fn array_form_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "in.json",
        r#"[null,[{"start_pos":[540,960],"end_pos":[0,0],"absorption_factor":0.5}]]"#,
    );
    let output = dir.path().join("out.json");

    let err = convert_file(&input, &output, false).unwrap_err();

    assert!(matches!(err, IoError::Parse { .. }));
    assert!(!output.exists());
}
