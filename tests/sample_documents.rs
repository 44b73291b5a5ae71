//! Integration tests using the sample documents under docs/samples

use serde_json::json;
use vdf::vdf::processor::vdf_sources::VdfSources;
use vdf::{lookup, parse, Value};

fn read_sample(name: &str) -> String {
    VdfSources::get_string(name).expect("Failed to read sample document")
}

#[test]
fn test_all_samples_parse() {
    for name in VdfSources::list_samples() {
        let doc = parse(&read_sample(name))
            .unwrap_or_else(|e| panic!("Sample {} failed to parse: {}", name, e));
        assert_eq!(doc.len(), 1, "Sample {} should have a single root", name);
    }
}

#[test]
fn test_library_folders() {
    let doc = parse(&read_sample("libraryfolders.vdf")).unwrap();
    let folders = doc["libraryfolders"].as_object().unwrap();
    assert_eq!(folders.len(), 2);

    let paths: Vec<&str> = folders
        .values()
        .filter_map(|folder| folder.get("path").and_then(Value::as_str))
        .collect();
    assert_eq!(paths, vec!["SteamLibrary", "mnt.games.SteamLibrary"]);

    let apps = lookup(&doc, &["libraryfolders", "0", "apps"])
        .and_then(Value::as_object)
        .unwrap();
    assert_eq!(apps.keys().collect::<Vec<_>>(), vec!["228980", "294100"]);

    assert_eq!(
        lookup(&doc, &["libraryfolders", "0", "label"]).and_then(Value::as_str),
        Some("")
    );
}

#[test]
fn test_app_manifest() {
    let doc = parse(&read_sample("appmanifest.acf")).unwrap();
    let root = Value::Object(doc);

    assert_eq!(
        root.pointer("/AppState/name").and_then(Value::as_str),
        Some("RimWorld")
    );
    assert_eq!(
        serde_json::to_value(root.pointer("/AppState/InstalledDepots").unwrap()).unwrap(),
        json!({"294101": {"manifest": "7340553837493913201", "size": "521938911"}})
    );
}

#[test]
fn test_app_workshop() {
    let doc = parse(&read_sample("appworkshop.acf")).unwrap();
    let installed = lookup(&doc, &["AppWorkshop", "WorkshopItemsInstalled"])
        .and_then(Value::as_object)
        .unwrap();

    let mut ids: Vec<(&str, u64)> = installed
        .iter()
        .filter_map(|(id, entry)| {
            let updated = entry.get("timeupdated")?.as_str()?.parse().ok()?;
            Some((id.as_str(), updated))
        })
        .collect();
    ids.sort();
    assert_eq!(ids, vec![("1541721856", 1700001234), ("818773962", 1709931200)]);
}

#[test]
fn test_commented_sample_treeviz() {
    let output = VdfSources::get_processed("comments.vdf", "ast-treeviz").unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    └─ § settings
      ├─ § audio
      │ ├─ ◦ device: default
      │ └─ ◦ volume: 0.8
      └─ § video
        ├─ ◦ fullscreen: 1
        ├─ ◦ height: 1080
        └─ ◦ width: 1920
    ");
}

#[test]
fn test_commented_sample_matches_stripped_copy() {
    let source = read_sample("comments.vdf");
    let stripped: String = source
        .lines()
        .map(|line| match line.find('/') {
            Some(i) => &line[..i],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(parse(&source).unwrap(), parse(&stripped).unwrap());
}

#[test]
fn test_parsing_samples_is_deterministic() {
    let source = read_sample("appworkshop.acf");
    assert_eq!(parse(&source).unwrap(), parse(&source).unwrap());
}
