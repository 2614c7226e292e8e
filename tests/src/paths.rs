#![cfg(test)]
use argtype_common::config::Config;
use argtype_core::{self as argtype, Converted, Kind, Value};
use std::fs::File;
use std::path::PathBuf;
use tempfile::TempDir;

fn workspace() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = ["test1.txt", "test2.txt"]
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            File::create(&path).unwrap();
            path
        })
        .collect();
    (dir, files)
}

#[test]
fn file_lists_from_a_list_string() {
    let (_dir, files) = workspace();
    let raw = format!("[{}, {}]", files[0].display(), files[1].display());

    assert_eq!(argtype::files_list(raw.as_str()).unwrap(), files);
    assert_eq!(argtype::files_filtered_list(raw.as_str()).unwrap(), files);
}

#[test]
fn filtered_file_list_keeps_order() {
    let (dir, files) = workspace();
    let missing = dir.path().join("test3.txt");
    let raw = vec![files[1].clone(), missing.clone(), files[0].clone()];

    let kept = argtype::files_filtered_list(&raw).unwrap();
    assert_eq!(kept, vec![files[1].clone(), files[0].clone()]);
    assert!(argtype::files_list(&raw).is_err());
    assert!(argtype::files_filtered_list(vec![missing]).unwrap().is_empty());
}

#[test]
fn folders_through_kinds() {
    let (dir, files) = workspace();
    let config = Config::default();
    let created = dir.path().join("a").join("b");

    let Converted::Path(path) = Kind::FolderExistsOrCreate
        .check(&Value::from(&created), &config)
        .unwrap()
    else {
        panic!("expected a path");
    };
    assert_eq!(path, created);
    assert!(Kind::FolderExists.matches(&Value::from(&created), &config));
    assert!(!Kind::FolderExists.matches(&Value::from(&files[0]), &config));
    assert!(Kind::FolderExistsOrCreate.check(&Value::from(&files[0]), &config).is_err());
}
