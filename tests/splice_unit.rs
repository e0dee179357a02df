//! Unit tests for anchor-bounded region replacement.

use kana_artgen::codegen::{splice, AnchorRegion, SpliceError};
use kana_artgen::kana::Category;

fn marker_pair(start: &str, end: &str) -> AnchorRegion {
    AnchorRegion::new("block", start, end)
}

#[test]
fn test_replaces_between_markers() {
    let out = splice(
        "START\nold\nEND",
        &[(marker_pair("START", "END"), "new".to_string())],
    )
    .unwrap();
    assert_eq!(out, "START\nnew\nEND");
}

#[test]
fn test_preserves_content_outside_markers() {
    let blob = "header line\n// keep me\nSTART\nstale table\nEND\ntrailer\n";
    let out = splice(blob, &[(marker_pair("START", "END"), "fresh".to_string())]).unwrap();
    assert_eq!(out, "header line\n// keep me\nSTART\nfresh\nEND\ntrailer\n");
}

#[test]
fn test_missing_end_marker_fails() {
    let err = splice(
        "START\nold\nno end here",
        &[(marker_pair("START", "END"), "new".to_string())],
    )
    .unwrap_err();
    match err {
        SpliceError::AnchorNotFound { region } => assert_eq!(region, "block"),
        other => panic!("expected AnchorNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_start_marker_fails() {
    let err = splice(
        "no opening\nEND",
        &[(marker_pair("START", "END"), "new".to_string())],
    )
    .unwrap_err();
    assert!(matches!(err, SpliceError::AnchorNotFound { .. }));
}

#[test]
fn test_idempotent_across_reruns() {
    let blob = "a\nSTART\nv1 content\nEND\nb";
    let regions = [(marker_pair("START", "END"), "v2 content".to_string())];
    let once = splice(blob, &regions).unwrap();
    let twice = splice(&once, &regions).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, "a\nSTART\nv2 content\nEND\nb");
}

#[test]
fn test_two_regions_sharing_end_sentinel() {
    // Both kana table functions end with the same sentinel comment;
    // non-greedy matching from each start must keep the regions apart.
    let h = Category::Hiragana.anchor();
    let k = Category::Katakana.anchor();
    let blob = format!(
        "prelude\n{}\nold hiragana\n{}\n    }}\n}}\n\n{}\nold katakana\n{}\n    }}\n}}\n",
        h.start, h.end, k.start, k.end
    );

    let regions = [
        (h.clone(), "H-TABLE".to_string()),
        (k.clone(), "K-TABLE".to_string()),
    ];
    let out = splice(&blob, &regions).unwrap();

    assert!(out.contains("H-TABLE"));
    assert!(out.contains("K-TABLE"));
    assert!(!out.contains("old hiragana"));
    assert!(!out.contains("old katakana"));
    // Hiragana region must close before the katakana function opens
    let h_table = out.find("H-TABLE").unwrap();
    let k_start = out.find("fn katakana_art").unwrap();
    assert!(h_table < k_start);
    // Replacing again with the same bodies is a no-op
    assert_eq!(splice(&out, &regions).unwrap(), out);
}

#[test]
fn test_multiline_region_interior() {
    let blob = "START\nline one\nline two\nline three\nEND";
    let out = splice(blob, &[(marker_pair("START", "END"), "x".to_string())]).unwrap();
    assert_eq!(out, "START\nx\nEND");
}

#[test]
fn test_marker_metacharacters_matched_literally() {
    let region = marker_pair("fn art() -> Vec<String> {", "// default (boxed).");
    let blob = "fn art() -> Vec<String> {\nold\n// default (boxed).\n}";
    let out = splice(blob, &[(region, "new".to_string())]).unwrap();
    assert_eq!(out, "fn art() -> Vec<String> {\nnew\n// default (boxed).\n}");
}
