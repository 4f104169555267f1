use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use classdraft::{
    ClassdraftError, ImportMode,
    document::{Document, Entity, RelationKind},
};
use classdraft_cli::{Args, run};

/// Directory holding the recognized-text samples, at the workspace root
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .txt files from a directory
fn collect_txt_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        base: None,
        mode: None,
        config: None,
        log_level: "off".to_string(),
    }
}

fn read_output(path: &Path) -> Document {
    let json = fs::read_to_string(path).expect("Failed to read output document");
    serde_json::from_str(&json).expect("Output should be a valid document")
}

fn entity<'a>(document: &'a Document, name: &str) -> &'a Entity {
    document
        .entity(name)
        .unwrap_or_else(|| panic!("Expected entity `{name}` in output"))
}

#[test]
fn e2e_smoke_test_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let samples = collect_txt_files(samples_dir());
    assert!(!samples.is_empty(), "No samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &samples {
        let output_filename = format!(
            "{}.json",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(sample_path, &output_path)) {
            Ok(()) => {
                let document = read_output(&output_path);
                if document.entities().is_empty() || !document.is_consistent() {
                    failed_samples.push((sample_path.clone(), "unusable document".to_string()));
                }
            }
            Err(e) => failed_samples.push((sample_path.clone(), e.to_string())),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nSamples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("✅ All {} samples passed", samples.len());
}

#[test]
fn e2e_shop_sample_content() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("shop.json");

    run(&args(&samples_dir().join("shop.txt"), &output_path)).expect("Failed to run");
    let document = read_output(&output_path);

    let names: Vec<_> = document.entity_names().collect();
    assert_eq!(names, ["Customer", "Order", "LineItem", "Product"]);

    let customer = entity(&document, "Customer");
    assert_eq!(customer.stereotype(), Some("entity"));
    let attrs: Vec<_> = customer.attrs().iter().map(|a| a.name()).collect();
    assert_eq!(attrs, ["id", "email", "nickname"]);

    let order = entity(&document, "Order");
    assert!(order.attr("total").is_none(), "sized types look like calls");
    assert_eq!(order.attr("status").map(|a| a.ty()), Some("OrderStatus"));

    let kinds: Vec<_> = document
        .relations()
        .iter()
        .map(|r| (r.from(), r.to(), r.kind()))
        .collect();
    assert!(kinds.contains(&("Customer", "Order", RelationKind::Association)));
    assert!(kinds.contains(&("Order", "LineItem", RelationKind::Composition)));
    assert!(kinds.contains(&("Order", "Product", RelationKind::Aggregation)));
}

#[test]
fn e2e_merge_into_base() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let base_path = temp_dir.path().join("base.json");
    let output_path = temp_dir.path().join("merged.json");

    fs::write(
        &base_path,
        r#"{
            "entities": [
                {"name": "Invoice", "attrs": [{"name": "number", "type": "uuid"}]},
                {"name": "Ledger"}
            ],
            "relations": [{"from": "Payment", "to": "Invoice", "kind": "dependency", "toCard": "1"}],
            "constraints": [{"rule": "invoice.number unique"}]
        }"#,
    )
    .unwrap();

    let mut merge_args = args(&samples_dir().join("noisy.txt"), &output_path);
    merge_args.base = Some(base_path.to_string_lossy().to_string());
    run(&merge_args).expect("Failed to merge");

    let document = read_output(&output_path);
    let names: Vec<_> = document.entity_names().collect();
    assert_eq!(names, ["Invoice", "Ledger", "Payment"]);

    let invoice = entity(&document, "Invoice");
    assert_eq!(invoice.attr("number").map(|a| a.ty()), Some("uuid"));
    assert!(invoice.attr("dueOn").is_some());

    assert_eq!(document.relations().len(), 1);
    assert_eq!(document.constraints().len(), 1);
}

#[test]
fn e2e_replace_ignores_base() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let base_path = temp_dir.path().join("base.json");
    let output_path = temp_dir.path().join("replaced.json");
    fs::write(&base_path, r#"{"entities": [{"name": "Ledger"}]}"#).unwrap();

    let mut replace_args = args(&samples_dir().join("shapes.txt"), &output_path);
    replace_args.base = Some(base_path.to_string_lossy().to_string());
    replace_args.mode = Some(ImportMode::Replace);
    run(&replace_args).expect("Failed to replace");

    let document = read_output(&output_path);
    assert!(document.entity("Ledger").is_none());
    assert!(entity(&document, "Shape").is_interface());
    assert!(entity(&document, "Polygon").is_abstract());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let result = run(&args(
        &temp_dir.path().join("absent.txt"),
        &temp_dir.path().join("out.json"),
    ));

    assert!(matches!(result, Err(ClassdraftError::Io(_))));
}

#[test]
fn e2e_malformed_base_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let base_path = temp_dir.path().join("base.json");
    fs::write(&base_path, "{ not json").unwrap();

    let mut bad_args = args(
        &samples_dir().join("shop.txt"),
        &temp_dir.path().join("out.json"),
    );
    bad_args.base = Some(base_path.to_string_lossy().to_string());

    assert!(matches!(run(&bad_args), Err(ClassdraftError::Document(_))));
}
