use std::fs;

use dat_core::{parse_lines, ParseOptions};
use dat_engine::{
    build_json_export, ensure_output_dir, write_json_export, AtomicFileWriter, ExportOptions,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let first = writer.write("thread.json", b"hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("thread.json", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn writer_fails_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("thread.json", b"data").is_err());
    assert!(!temp.path().join("thread.json").exists());
}

#[test]
fn json_export_numbers_posts_from_one() {
    let lines = [
        "名無し<>sage<>2024/01/01 ID:aaa<>最初<>スレタイ",
        "short<>line",
        "名無し<><>2024/01/01 BE:42<>&gt;&gt;1 &gt;&gt;1<>",
    ];
    let records = parse_lines(&lines, &ParseOptions::default());
    let value = build_json_export(&records);

    assert_eq!(value["title"], "スレタイ");
    assert_eq!(value["post_count"], 2);
    assert_eq!(value["posts"][0]["number"], 1);
    assert_eq!(value["posts"][0]["user_id"], "aaa");
    assert_eq!(value["posts"][1]["number"], 2);
    assert!(value["posts"][1]["user_id"].is_null());
    assert_eq!(value["posts"][1]["be_id"], "42");
    assert_eq!(value["posts"][1]["reply_targets"], serde_json::json!([1, 1]));
}

#[test]
fn json_export_is_written_to_disk() {
    let temp = TempDir::new().unwrap();
    let records = parse_lines(&["a<>b<>c<>d"], &ParseOptions::default());
    let options = ExportOptions {
        filename: "out.json".to_string(),
        pretty: false,
    };
    let path = write_json_export(&temp.path().join("exports"), &records, &options).unwrap();

    let written = fs::read_to_string(path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["post_count"], 1);
    assert_eq!(parsed["posts"][0]["body"], "d");
}
