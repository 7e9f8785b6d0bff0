//! Playback Controller Tests
//!
//! Tests for:
//! - Initialization from a source track and a catalog
//! - Single-active selection (exclusion, idempotence, restart from zero)
//! - Rejected selections (out of range, skipped entries)
//! - Clamp-and-hold at clip end
//! - Observer notification

use glam::Vec3;

use clipdeck::animation::{
    AnimationClip, InterpolationMode, KeyframeTrack, NullPoseTarget, PoseTarget, TargetPath, Track,
    TrackData, TrackMeta, TrackValue,
};
use clipdeck::catalog::{ClipCatalog, ClipDefinition};
use clipdeck::errors::{ClipExtractionError, ViewerError};
use clipdeck::playback::{PlaybackController, PlaybackState, SelectionChange, SelectionObserver};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single translation channel keyed on every frame, X equal to the frame number.
fn baked_track(frames: u32, fps: f32) -> AnimationClip {
    let times = (0..=frames).map(|f| f as f32 / fps).collect();
    let values = (0..=frames).map(|f| Vec3::new(f as f32, 0.0, 0.0)).collect();

    AnimationClip::new(
        "Take 001".to_string(),
        vec![Track {
            meta: TrackMeta {
                node_name: "generator".to_string(),
                target: TargetPath::Translation,
            },
            data: TrackData::Vector3(KeyframeTrack::new(times, values, InterpolationMode::Linear)),
        }],
    )
}

fn builtin_controller() -> PlaybackController {
    init_logger();
    PlaybackController::initialize(&baked_track(3401, 30.0), &ClipCatalog::builtin()).unwrap()
}

fn two_clip_controller() -> PlaybackController {
    init_logger();
    let catalog = ClipCatalog::new(
        10.0,
        vec![ClipDefinition::new("A", 0, 10), ClipDefinition::new("B", 10, 20)],
    )
    .unwrap();
    PlaybackController::initialize(&baked_track(20, 10.0), &catalog).unwrap()
}

#[derive(Default)]
struct LastPose {
    translation: Option<Vec3>,
    writes: usize,
}

impl PoseTarget for LastPose {
    fn apply(&mut self, _node_name: &str, target: TargetPath, value: TrackValue) {
        if let (TargetPath::Translation, TrackValue::Vector3(v)) = (target, value) {
            self.translation = Some(v);
        }
        self.writes += 1;
    }
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn initialize_extracts_one_clip_per_entry() {
    let controller = builtin_controller();

    assert_eq!(controller.len(), 19);
    assert!((0..19).all(|i| controller.is_available(i)));
    assert_eq!(controller.current_index(), None);
    assert!(controller.state().is_idle());
    assert_eq!(controller.playing_count(), 0);
}

#[test]
fn first_clip_duration_matches_window() {
    let controller = builtin_controller();
    let clip = controller.clip(0).unwrap();

    assert_eq!(clip.name, "Lf Door");
    let expected = (200.0 - 1.0) / 30.0;
    assert!((clip.duration - expected).abs() <= 1.0 / 30.0, "got {}", clip.duration);
}

#[test]
fn every_clip_lasts_its_frame_count() {
    let controller = builtin_controller();
    let catalog = ClipCatalog::builtin();

    for (i, def) in catalog.iter().enumerate() {
        let clip = controller.clip(i).unwrap();
        let expected = def.frame_count() as f32 / 30.0;
        assert!(approx(clip.duration, expected), "{}: {} vs {expected}", def.name, clip.duration);
    }
}

#[test]
fn initialize_rejects_zero_duration_track() {
    let empty = AnimationClip::new("static".to_string(), vec![]);
    let err = PlaybackController::initialize(&empty, &ClipCatalog::builtin()).unwrap_err();

    assert!(matches!(
        err,
        ViewerError::ClipExtraction(ClipExtractionError::ZeroDurationTrack(_))
    ));
}

#[test]
fn entries_beyond_track_leave_gaps() {
    init_logger();
    // Shorter than the catalog: everything from "Oil Change 01" on ends past the track
    let controller =
        PlaybackController::initialize(&baked_track(1460, 30.0), &ClipCatalog::builtin()).unwrap();

    assert_eq!(controller.len(), 19);
    assert!(controller.is_available(9));
    assert!(!controller.is_available(10));
    assert!(!controller.is_available(18));
    assert_eq!(controller.name(18), Some("Coolant Flush 01"));
}

#[test]
fn end_within_one_frame_of_track_is_accepted() {
    init_logger();
    let catalog = ClipCatalog::new(
        8.0,
        vec![ClipDefinition::new("tail", 90, 101), ClipDefinition::new("past", 90, 102)],
    )
    .unwrap();
    let controller = PlaybackController::initialize(&baked_track(100, 8.0), &catalog).unwrap();

    assert!(controller.is_available(0));
    assert!(!controller.is_available(1));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn select_from_idle_plays_from_zero() {
    let mut controller = builtin_controller();

    let change = controller.select(3);
    assert_eq!(
        change,
        Some(SelectionChange {
            previous: None,
            current: 3,
        })
    );
    assert_eq!(controller.current_index(), Some(3));
    assert!(controller.is_playing(3));
    assert!(approx(controller.clip_time(3).unwrap(), 0.0));
}

#[test]
fn select_is_mutually_exclusive_for_every_pair() {
    let mut controller = builtin_controller();
    let len = controller.len();

    for i in 0..len {
        for j in (0..len).filter(|&j| j != i) {
            controller.select(i);
            controller.tick(0.1);
            controller.select(j);

            assert_eq!(controller.playing_count(), 1, "after {i} -> {j}");
            assert!(controller.is_playing(j), "after {i} -> {j}");
            assert!(!controller.is_playing(i), "after {i} -> {j}");
            assert_eq!(controller.current_index(), Some(j));
            assert_eq!(controller.state().current_index_or_negative(), j as i64);
            assert!(approx(controller.clip_time(j).unwrap(), 0.0), "{j} restarts from zero");
        }
    }
}

#[test]
fn reselecting_current_keeps_clock() {
    let mut controller = builtin_controller();

    controller.select(2);
    controller.tick(1.5);
    let before = controller.clip_time(2).unwrap();

    assert_eq!(controller.select(2), None);
    assert!(approx(controller.clip_time(2).unwrap(), before));
    assert!(approx(before, 1.5));
}

#[test]
fn switching_restarts_target_and_rewinds_previous() {
    let mut controller = two_clip_controller();

    controller.select(1);
    controller.tick(0.4);
    controller.select(0);
    controller.tick(0.2);
    controller.select(1);

    assert!(approx(controller.clip_time(1).unwrap(), 0.0));
    assert!(approx(controller.clip_time(0).unwrap(), 0.0));
    assert!(!controller.is_playing(0));
}

#[test]
fn out_of_range_select_is_rejected_without_side_effects() {
    let mut controller = builtin_controller();
    controller.select(4);
    controller.tick(0.5);

    assert!(matches!(
        controller.try_select(19),
        Err(ViewerError::IndexOutOfRange { index: 19, len: 19 })
    ));
    assert_eq!(controller.select(usize::MAX), None);

    assert_eq!(controller.current_index(), Some(4));
    assert!(approx(controller.clip_time(4).unwrap(), 0.5));
    assert_eq!(controller.playing_count(), 1);
}

#[test]
fn skipped_entry_is_rejected() {
    init_logger();
    let mut controller =
        PlaybackController::initialize(&baked_track(1460, 30.0), &ClipCatalog::builtin()).unwrap();
    controller.select(0);

    assert!(matches!(
        controller.try_select(12),
        Err(ViewerError::ClipUnavailable { index: 12 })
    ));
    assert_eq!(controller.current_index(), Some(0));
}

#[test]
fn overlapping_clips_play_independently() {
    let mut controller = builtin_controller();
    let mut pose = LastPose::default();

    controller.select(13);
    controller.apply(&mut pose);
    assert!(approx(pose.translation.unwrap().x, 2480.0));

    controller.select(12);
    controller.apply(&mut pose);
    assert!(approx(pose.translation.unwrap().x, 2180.0));
}

// ============================================================================
// Ticking
// ============================================================================

#[test]
fn clip_clamps_and_holds_final_pose() {
    let mut controller = two_clip_controller();
    let mut pose = LastPose::default();

    controller.select(0);
    for _ in 0..30 {
        controller.tick(0.1);
    }

    assert!(approx(controller.clip_time(0).unwrap(), 1.0));
    assert!(controller.action(0).unwrap().is_finished());
    assert!(controller.is_playing(0), "held pose still counts as playing");

    controller.apply(&mut pose);
    assert!(approx(pose.translation.unwrap().x, 10.0));
}

#[test]
fn two_clips_end_to_end() {
    let mut controller = two_clip_controller();
    let mut pose = LastPose::default();

    assert!(approx(controller.clip(0).unwrap().duration, 1.0));
    assert!(approx(controller.clip(1).unwrap().duration, 1.0));

    controller.select(0);
    controller.tick(0.5);
    controller.apply(&mut pose);
    assert!(approx(pose.translation.unwrap().x, 5.0));

    controller.select(1);
    controller.tick(0.5);
    pose.writes = 0;
    controller.apply(&mut pose);
    assert_eq!(pose.writes, 1, "only the active clip writes a pose");
    assert!(approx(pose.translation.unwrap().x, 15.0));
}

#[test]
fn idle_tick_writes_nothing() {
    let mut controller = two_clip_controller();
    let mut pose = LastPose::default();

    controller.tick(1.0);
    controller.apply(&mut pose);
    assert_eq!(pose.writes, 0);
}

#[test]
fn invalid_deltas_are_ignored() {
    let mut controller = two_clip_controller();
    controller.select(0);

    controller.tick(f32::NAN);
    controller.tick(-1.0);
    controller.tick(f32::INFINITY);
    controller.apply(&mut NullPoseTarget);

    assert!(approx(controller.clip_time(0).unwrap(), 0.0));
}

// ============================================================================
// Observers
// ============================================================================

#[derive(Default)]
struct Recorder {
    seen: Vec<(Option<usize>, SelectionChange)>,
}

impl SelectionObserver for Recorder {
    fn on_selection_changed(&mut self, state: &PlaybackState, change: SelectionChange) {
        self.seen.push((state.current_index(), change));
    }
}

#[test]
fn observers_see_each_change_once() {
    let mut controller = two_clip_controller();
    let mut first = Recorder::default();
    let mut second = Recorder::default();

    controller.select_and_notify(0, &mut [&mut first, &mut second]);
    controller.select_and_notify(0, &mut [&mut first, &mut second]);
    controller.select_and_notify(7, &mut [&mut first, &mut second]);
    controller.select_and_notify(1, &mut [&mut first, &mut second]);

    let expected = vec![
        (
            Some(0),
            SelectionChange {
                previous: None,
                current: 0,
            },
        ),
        (
            Some(1),
            SelectionChange {
                previous: Some(0),
                current: 1,
            },
        ),
    ];
    assert_eq!(first.seen, expected);
    assert_eq!(second.seen, expected);
}
