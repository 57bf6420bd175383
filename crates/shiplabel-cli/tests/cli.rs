//! Command-line behavior of the `shiplabel` binary.

use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;

fn shiplabel() -> Command {
    Command::cargo_bin("shiplabel").unwrap()
}

fn write_label(path: &Path, lines: &[&str]) {
    label_document(lines).save(path).unwrap();
}

fn label_document(lines: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

#[test]
fn no_arguments_prints_usage() {
    shiplabel()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn two_arguments_prints_usage() {
    shiplabel()
        .args(["a.pdf", "b.pdf"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn flags_are_read_as_paths() {
    let dir = tempfile::tempdir().unwrap();

    shiplabel()
        .current_dir(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Error opening PDF: --help"));
}

#[test]
fn missing_file_prints_empty_array() {
    let dir = tempfile::tempdir().unwrap();

    shiplabel()
        .arg(dir.path().join("missing.pdf"))
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Error opening PDF: "));
}

#[test]
fn invalid_pdf_prints_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("label.pdf");
    std::fs::write(&path, "BILL TO / SHIP TO\nRohan\n").unwrap();

    shiplabel()
        .arg(&path)
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Error opening PDF: failed to parse PDF"));
}

#[test]
fn prints_names_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("label.pdf");
    write_label(
        &path,
        &[
            "BILL TO / SHIP TO",
            "Rafey Khan, House No 12, Sector 5",
            "bill to / ship to",
            "Mariam Fatima - Flat 302",
        ],
    );

    shiplabel()
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("[\"Mariam Fatima\",\"Rafey Khan\"]\n");
}

#[test]
fn leading_hyphen_is_read_as_path() {
    let dir = tempfile::tempdir().unwrap();
    write_label(&dir.path().join("-label.pdf"), &["BILL TO / SHIP TO", "Rohan"]);

    shiplabel()
        .current_dir(dir.path())
        .arg("-label.pdf")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("[\"Rohan\"]\n");
}

#[test]
fn double_dash_counts_as_argument() {
    shiplabel()
        .args(["--", "a.pdf"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extraction_panic_is_reported_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("label.pdf");
    let mut doc = label_document(&["BILL TO / SHIP TO", "Rohan"]);
    let page_id = doc.get_pages()[&1];
    doc.get_object_mut(page_id).unwrap().as_dict_mut().unwrap().remove(b"MediaBox");
    doc.save(&path).unwrap();

    shiplabel()
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Error opening PDF: "))
        .stderr(predicate::str::contains("panicked").not());
}
