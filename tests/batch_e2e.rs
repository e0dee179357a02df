//! End-to-end tests for the batch driver: artifacts written, target
//! spliced idempotently, fatal anchor errors leave the target alone.
//!
//! These run with no font sources so the fallback renderer keeps the
//! output deterministic on any machine.

use std::fs;
use std::path::Path;

use kana_artgen::ascii::DensityRamp;
use kana_artgen::batch::{run, BatchError, BatchOptions};
use kana_artgen::codegen::SpliceError;
use kana_artgen::kana::Category;
use kana_artgen::render::RenderOptions;

/// Small grid and canvas to keep the 92-glyph run fast.
fn test_options(dir: &Path) -> BatchOptions {
    BatchOptions {
        grid_width: 10,
        grid_height: 4,
        render: RenderOptions {
            canvas_size: 80,
            point_size: 64.0,
        },
        font_sources: Vec::new(),
        ramp: DensityRamp::default(),
        out_dir: dir.join("generated"),
        target: None,
    }
}

/// A minimal viewer source with both table functions.
fn viewer_source() -> String {
    let h = Category::Hiragana.anchor();
    let k = Category::Katakana.anchor();
    format!(
        "//! viewer\n\n{}\n        \"あ\" => vec![\"stale\".to_string()],\n{}\n        _ => vec![format!(\"[{{}}]\", character)],\n    }}\n}}\n\n{}\n        \"ア\" => vec![\"stale\".to_string()],\n{}\n        _ => vec![format!(\"[{{}}]\", character)],\n    }}\n}}\n",
        h.start, h.end, k.start, k.end
    )
}

#[test]
fn test_batch_writes_category_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let opts = test_options(dir.path());

    let summary = run(&opts).unwrap();

    assert_eq!(summary.artifacts.len(), 2);
    assert!(summary.patched.is_none());

    let hiragana = fs::read_to_string(&summary.artifacts[0]).unwrap();
    let katakana = fs::read_to_string(&summary.artifacts[1]).unwrap();
    assert!(summary.artifacts[0].ends_with("hiragana_ascii_art.txt"));
    assert!(summary.artifacts[1].ends_with("katakana_ascii_art.txt"));

    // One entry per character, category order preserved
    assert_eq!(hiragana.matches("=> vec![").count(), 46);
    assert_eq!(katakana.matches("=> vec![").count(), 46);
    let a = hiragana.find("\"あ\"").unwrap();
    let n = hiragana.find("\"ん\"").unwrap();
    assert!(a < n);
    assert!(katakana.contains("\"ア\""));
}

#[test]
fn test_batch_splices_target_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("main.rs");
    fs::write(&target, viewer_source()).unwrap();

    let mut opts = test_options(dir.path());
    opts.target = Some(target.clone());

    let summary = run(&opts).unwrap();
    assert_eq!(summary.patched.as_deref(), Some(target.as_path()));

    let patched_once = fs::read_to_string(&target).unwrap();
    assert!(!patched_once.contains("stale"));
    assert!(patched_once.contains("\"あ\" => vec!["));
    assert!(patched_once.contains("\"ン\" => vec!["));
    // Content outside the regions survives byte-for-byte
    assert!(patched_once.starts_with("//! viewer\n"));
    assert_eq!(patched_once.matches("_ => vec![format!").count(), 2);

    // Second run over the already-patched target changes nothing
    run(&opts).unwrap();
    let patched_twice = fs::read_to_string(&target).unwrap();
    assert_eq!(patched_once, patched_twice);
}

#[test]
fn test_batch_aborts_without_touching_target_when_anchor_missing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("main.rs");
    // Only the hiragana block exists; katakana anchors are missing
    let h = Category::Hiragana.anchor();
    let original = format!("{}\nold\n{}\n    }}\n}}\n", h.start, h.end);
    fs::write(&target, &original).unwrap();

    let mut opts = test_options(dir.path());
    opts.target = Some(target.clone());

    let err = run(&opts).unwrap_err();
    match err {
        BatchError::Splice(SpliceError::AnchorNotFound { region }) => {
            assert_eq!(region, "katakana");
        }
        other => panic!("expected AnchorNotFound, got {:?}", other),
    }

    // The target was never written
    assert_eq!(fs::read_to_string(&target).unwrap(), original);
}

#[test]
fn test_batch_missing_target_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = test_options(dir.path());
    opts.target = Some(dir.path().join("does-not-exist.rs"));

    let err = run(&opts).unwrap_err();
    assert!(matches!(err, BatchError::Read { .. }));
}
