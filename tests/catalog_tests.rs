//! Clip Catalog Tests
//!
//! Tests for:
//! - Built-in reference table (order, count, frame windows)
//! - Overlap detection
//! - Validation (empty, duplicates, empty ranges, sample rate)
//! - Versioned JSON document round trip

use clipdeck::catalog::{
    CATALOG_VERSION, CatalogDocument, CatalogOverlap, ClipCatalog, ClipDefinition, DEFAULT_FPS,
};
use clipdeck::errors::{ClipExtractionError, ViewerError};

fn extraction_error(result: clipdeck::Result<ClipCatalog>) -> ClipExtractionError {
    match result {
        Err(ViewerError::ClipExtraction(err)) => err,
        other => panic!("expected a clip extraction error, got {other:?}"),
    }
}

// ============================================================================
// Built-in table
// ============================================================================

#[test]
fn builtin_has_nineteen_entries_at_thirty_fps() {
    let catalog = ClipCatalog::builtin();
    assert_eq!(catalog.len(), 19);
    assert!((catalog.fps() - DEFAULT_FPS).abs() < f32::EPSILON);
    assert!((DEFAULT_FPS - 30.0).abs() < f32::EPSILON);
}

#[test]
fn builtin_preserves_declaration_order() {
    let catalog = ClipCatalog::builtin();
    let names: Vec<&str> = catalog.names().collect();

    assert_eq!(names[0], "Lf Door");
    assert_eq!(names[1], "Rt Door");
    assert_eq!(names[12], "Oil Change 03");
    assert_eq!(names[13], "Oil Change 04");
    assert_eq!(names[18], "Coolant Flush 01");
    assert_eq!(catalog.position("Back Door"), Some(5));
    assert_eq!(catalog.position("Serpentine Belt Removal 02"), None);
}

#[test]
fn builtin_first_and_last_windows() {
    let catalog = ClipCatalog::builtin();

    let first = catalog.get(0).unwrap();
    assert_eq!((first.start_frame, first.end_frame), (1, 200));
    assert_eq!(first.frame_count(), 199);

    let last = catalog.get(18).unwrap();
    assert_eq!((last.start_frame, last.end_frame), (3360, 3401));
    assert!(catalog.get(19).is_none());
}

#[test]
fn builtin_reports_single_oil_change_overlap() {
    let overlaps = ClipCatalog::builtin().overlaps();
    assert_eq!(
        overlaps,
        vec![CatalogOverlap {
            first: 12,
            second: 13,
            frames: 20,
        }]
    );
}

#[test]
fn default_is_builtin() {
    assert_eq!(ClipCatalog::default(), ClipCatalog::builtin());
}

// ============================================================================
// ClipDefinition
// ============================================================================

#[test]
fn adjacent_windows_do_not_overlap() {
    let a = ClipDefinition::new("a", 0, 10);
    let b = ClipDefinition::new("b", 10, 20);
    let c = ClipDefinition::new("c", 9, 11);

    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(b.overlaps(&c));
}

#[test]
fn window_seconds_use_sample_rate() {
    let def = ClipDefinition::new("Control Cover", 800, 900);
    assert!((def.start_seconds(30.0) - 26.666_666).abs() < 1e-4);
    assert!((def.end_seconds(30.0) - 30.0).abs() < 1e-4);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn new_accepts_out_of_order_entries() {
    let catalog = ClipCatalog::new(
        10.0,
        vec![ClipDefinition::new("late", 50, 60), ClipDefinition::new("early", 0, 10)],
    )
    .unwrap();

    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["late", "early"]);
}

#[test]
fn new_rejects_empty_catalog() {
    assert_eq!(extraction_error(ClipCatalog::new(30.0, vec![])), ClipExtractionError::EmptyCatalog);
}

#[test]
fn new_rejects_duplicate_names() {
    let err = extraction_error(ClipCatalog::new(
        30.0,
        vec![ClipDefinition::new("Lf Door", 1, 200), ClipDefinition::new("Lf Door", 200, 400)],
    ));
    assert_eq!(err, ClipExtractionError::DuplicateName("Lf Door".to_string()));
}

#[test]
fn new_rejects_empty_range() {
    let err = extraction_error(ClipCatalog::new(
        30.0,
        vec![ClipDefinition::new("backwards", 20, 10)],
    ));
    assert!(matches!(err, ClipExtractionError::InvalidRange { start: 20, end: 10, .. }));
}

#[test]
fn new_rejects_bad_sample_rate() {
    let entries = vec![ClipDefinition::new("a", 0, 10)];
    assert!(matches!(
        extraction_error(ClipCatalog::new(0.0, entries.clone())),
        ClipExtractionError::InvalidSampleRate(_)
    ));
    assert!(matches!(
        extraction_error(ClipCatalog::new(f32::NAN, entries)),
        ClipExtractionError::InvalidSampleRate(_)
    ));
}

// ============================================================================
// JSON document
// ============================================================================

#[test]
fn document_round_trips_builtin() -> anyhow::Result<()> {
    let builtin = ClipCatalog::builtin();
    let json = builtin.to_document().to_json()?;
    let parsed = ClipCatalog::from_json(&json)?;

    assert_eq!(parsed, builtin);
    Ok(())
}

#[test]
fn document_uses_short_field_names() -> anyhow::Result<()> {
    let catalog = ClipCatalog::from_json(
        r#"{
            "version": 1,
            "clips": [
                { "name": "Open", "start": 0, "end": 10 },
                { "name": "Close", "start": 10, "end": 20 }
            ]
        }"#,
    )?;

    assert_eq!(catalog.len(), 2);
    assert!((catalog.fps() - DEFAULT_FPS).abs() < f32::EPSILON);
    assert_eq!(catalog.get(1), Some(&ClipDefinition::new("Close", 10, 20)));
    Ok(())
}

#[test]
fn document_rejects_unknown_version() {
    let document = CatalogDocument {
        version: CATALOG_VERSION + 1,
        fps: 30.0,
        clips: vec![ClipDefinition::new("a", 0, 10)],
    };

    let err = extraction_error(document.into_catalog());
    assert_eq!(
        err,
        ClipExtractionError::UnsupportedVersion {
            found: CATALOG_VERSION + 1,
            expected: CATALOG_VERSION,
        }
    );
}

#[test]
fn document_rejects_malformed_json() {
    let result = ClipCatalog::from_json(r#"{ "version": 1, "clips": [ { "name": "a" } ] }"#);
    assert!(matches!(result, Err(ViewerError::JsonError(_))));
}

#[test]
fn from_path_reads_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("clipdeck-catalog-{}.json", std::process::id()));
    std::fs::write(&path, ClipCatalog::builtin().to_document().to_json()?)?;

    let loaded = ClipCatalog::from_path(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(loaded?.len(), 19);
    Ok(())
}

#[test]
fn from_path_missing_file_is_io_error() {
    let result = ClipCatalog::from_path("/nonexistent/clipdeck/catalog.json");
    assert!(matches!(result, Err(ViewerError::IoError(_))));
}
