//! Integration tests for the scene controller
//!
//! These drive the controller headless, the way the event loop does:
//! 1. Input actions mutate the scene and UI state
//! 2. Save/load go through a key-value store and flash the button labels
//! 3. Each frame advances the animation and describes the overlay
//! 4. A mesh load failure turns every frame into the error screen

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anatomy::config::AppConfig;
use anatomy::input::SceneAction;
use anatomy::systems::SceneController;
use anatomy_core::{
    AssetLoadError, AudioCue, KeyValueStore, ManualClock, MemoryStore, MeshLibrary, OrganKind,
    SceneStore, Vec3,
};
use anatomy_render::{OrbitCamera, OverlayFlags};

const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

/// Shared log of what the controller asked the audio cue to do
#[derive(Debug, Default)]
struct CueLog {
    plays: usize,
    unlocks: usize,
    volumes: Vec<f32>,
}

struct RecordingCue {
    log: Rc<RefCell<CueLog>>,
}

impl AudioCue for RecordingCue {
    fn is_ready(&self) -> bool {
        true
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn play(&mut self) {
        self.log.borrow_mut().plays += 1;
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.borrow_mut().volumes.push(volume);
    }

    fn unlock(&mut self) {
        self.log.borrow_mut().unlocks += 1;
    }
}

type Controller = SceneController<MeshLibrary, RecordingCue, MemoryStore, Rc<ManualClock>>;

struct Harness {
    controller: Controller,
    clock: Rc<ManualClock>,
    cue: Rc<RefCell<CueLog>>,
    camera: OrbitCamera,
}

fn meshes() -> MeshLibrary {
    let mut meshes = MeshLibrary::new();
    meshes.insert_source(OrganKind::Heart, "heart.obj".into(), TRIANGLE).unwrap();
    meshes.insert_source(OrganKind::Brain, "brain.obj".into(), TRIANGLE).unwrap();
    meshes
}

fn harness_with(meshes: MeshLibrary, width: f32, height: f32) -> Harness {
    let clock = Rc::new(ManualClock::new());
    let cue = Rc::new(RefCell::new(CueLog::default()));
    let controller = SceneController::new(
        &AppConfig::default(),
        meshes,
        RecordingCue { log: cue.clone() },
        MemoryStore::new(),
        clock.clone(),
        width,
        height,
    )
    .with_store(SceneStore::with_seed(42));

    Harness {
        controller,
        clock,
        cue,
        camera: OrbitCamera::default(),
    }
}

fn harness() -> Harness {
    harness_with(meshes(), 1280.0, 720.0)
}

/// Window pixel for a centered world point on a 1280x720 viewport
fn click_at(h: &mut Harness, world_x: f32, world_y: f32) {
    h.controller.handle(SceneAction::Click {
        x: world_x + 640.0,
        y: world_y + 360.0,
    });
}

// ==================== Placement ====================

#[test]
fn test_place_then_undo() {
    let mut h = harness();
    click_at(&mut h, 100.0, 50.0);

    let scene = h.controller.scene();
    assert_eq!(scene.len(), 1);
    let obj = &scene.objects()[0];
    assert_eq!(obj.kind(), OrganKind::Heart);
    assert_eq!(obj.position(), Vec3::new(100.0, 50.0, 0.0));
    assert_eq!(obj.rotation(), 0.0);
    assert_eq!(obj.scale(), 1.5);

    h.controller.handle(SceneAction::Undo);
    assert!(h.controller.scene().is_empty());
}

#[test]
fn test_undo_on_empty_scene_is_noop() {
    let mut h = harness();
    h.controller.handle(SceneAction::Undo);
    assert!(h.controller.scene().is_empty());
}

#[test]
fn test_selected_kind_is_placed() {
    let mut h = harness();
    h.controller.handle(SceneAction::Select(OrganKind::Brain));
    click_at(&mut h, 0.0, 0.0);
    assert_eq!(h.controller.scene().objects()[0].kind(), OrganKind::Brain);
}

#[test]
fn test_place_twice_then_reset() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    click_at(&mut h, 10.0, 10.0);
    assert_eq!(h.controller.scene().len(), 2);

    h.controller.handle(SceneAction::Reset);
    assert!(h.controller.scene().is_empty());
}

#[test]
fn test_click_in_control_band_is_rejected() {
    let mut h = harness();
    // Right of the last button, inside the 80px band
    h.controller.handle(SceneAction::Click { x: 1100.0, y: 40.0 });
    assert!(h.controller.scene().is_empty());
    assert_eq!(h.cue.borrow().plays, 0);

    // Just below the band places
    h.controller.handle(SceneAction::Click { x: 1100.0, y: 80.0 });
    assert_eq!(h.controller.scene().len(), 1);
}

#[test]
fn test_button_click_routes_to_control() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    // Undo button at (220, 20)
    h.controller.handle(SceneAction::Click { x: 250.0, y: 30.0 });
    assert!(h.controller.scene().is_empty());
}

// ==================== Audio ====================

#[test]
fn test_placement_plays_cue_only_with_sound_on() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    assert_eq!(h.cue.borrow().plays, 1);
    assert_eq!(h.cue.borrow().unlocks, 1);

    h.controller.handle(SceneAction::ToggleSound);
    assert!(!h.controller.state().sound_enabled);
    click_at(&mut h, 5.0, 5.0);
    assert_eq!(h.cue.borrow().plays, 1);
    assert_eq!(h.controller.scene().len(), 2);
}

#[test]
fn test_volume_applied_once() {
    let mut h = harness();
    h.controller.frame(&h.camera, 60);
    h.controller.frame(&h.camera, 60);
    assert_eq!(h.cue.borrow().volumes, vec![0.6]);
}

// ==================== Save / Load ====================

#[test]
fn test_save_then_load_restores_poses() {
    let mut h = harness();
    click_at(&mut h, 100.0, 50.0);
    h.controller.handle(SceneAction::Select(OrganKind::Brain));
    click_at(&mut h, -20.0, 30.0);
    for _ in 0..10 {
        h.controller.frame(&h.camera, 60);
    }
    let saved: Vec<_> = h
        .controller
        .scene()
        .iter()
        .map(|o| (o.kind(), o.position(), o.rotation(), o.scale()))
        .collect();

    assert!(h.controller.save().unwrap());
    assert_eq!(h.controller.save_label(), "Saved!");

    h.controller.handle(SceneAction::Reset);
    assert!(h.controller.load().unwrap());
    assert_eq!(h.controller.load_label(), "Loaded!");

    let loaded: Vec<_> = h
        .controller
        .scene()
        .iter()
        .map(|o| (o.kind(), o.position(), o.rotation(), o.scale()))
        .collect();
    assert_eq!(loaded, saved);

    h.clock.advance(Duration::from_millis(1999));
    assert_eq!(h.controller.load_label(), "Loaded!");
    h.clock.advance(Duration::from_millis(1));
    assert_eq!(h.controller.load_label(), "Load");
    assert_eq!(h.controller.save_label(), "Save");
    assert_eq!(h.controller.status_caption(), None);
}

#[test]
fn test_save_empty_scene_writes_nothing() {
    let mut h = harness();
    assert!(!h.controller.save().unwrap());
    assert_eq!(h.controller.storage().get("anatomyScene").unwrap(), None);
    assert_eq!(h.controller.save_label(), "Save");
}

#[test]
fn test_load_with_nothing_saved_is_noop() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    assert!(!h.controller.load().unwrap());
    assert_eq!(h.controller.scene().len(), 1);
    assert_eq!(h.controller.load_label(), "Load");
}

#[test]
fn test_load_malformed_keeps_scene_and_flashes_error() {
    let clock = Rc::new(ManualClock::new());
    let mut storage = MemoryStore::new();
    storage.set("anatomyScene", "{not json").unwrap();
    let mut controller = SceneController::new(
        &AppConfig::default(),
        meshes(),
        anatomy_core::SilentCue::new(),
        storage,
        clock.clone(),
        1280.0,
        720.0,
    );

    controller.handle(SceneAction::Click { x: 640.0, y: 360.0 });
    assert!(controller.load().is_err());
    assert_eq!(controller.scene().len(), 1);
    assert_eq!(controller.load_label(), "Error!");
    assert_eq!(controller.status_caption(), Some("Error!"));

    clock.advance(Duration::from_secs(2));
    assert_eq!(controller.load_label(), "Load");
}

// ==================== Frames ====================

#[test]
fn test_rotation_accumulates_per_frame() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    for _ in 0..50 {
        h.controller.frame(&h.camera, 60);
    }
    let rotation = h.controller.scene().objects()[0].rotation();
    assert!((rotation - 50.0 * 0.02).abs() < 1e-4);
    assert_eq!(h.controller.frame_index(), 50);
}

#[test]
fn test_loaded_large_rotation_keeps_spinning() {
    let clock = Rc::new(ManualClock::new());
    let mut storage = MemoryStore::new();
    storage
        .set(
            "anatomyScene",
            r#"[{"type":"heart","x":0,"y":0,"z":0,"rotation":600000,"scale":1.5}]"#,
        )
        .unwrap();
    let mut controller = SceneController::new(
        &AppConfig::default(),
        meshes(),
        anatomy_core::SilentCue::new(),
        storage,
        clock,
        1280.0,
        720.0,
    );
    assert!(controller.load().unwrap());

    let camera = OrbitCamera::default();
    for _ in 0..3 {
        controller.frame(&camera, 60);
    }
    let rotation = controller.scene().objects()[0].rotation();
    assert!((rotation - 600_000.06).abs() < 1e-6);
}

#[test]
fn test_empty_scene_shows_instructions() {
    let mut h = harness();
    let frame = h.controller.frame(&h.camera, 60);
    assert!(frame.overlay.flags.contains(OverlayFlags::INSTRUCTIONS));
    assert!(!frame.overlay.instructions.is_empty());
    assert!(frame.models.is_empty());

    click_at(&mut h, 0.0, 0.0);
    let frame = h.controller.frame(&h.camera, 60);
    assert!(!frame.overlay.flags.contains(OverlayFlags::INSTRUCTIONS));
    assert_eq!(frame.models.len(), 1);
}

#[test]
fn test_stats_and_grid_toggle() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    let frame = h.controller.frame(&h.camera, 58);
    let stats = frame.overlay.stats.unwrap();
    assert_eq!(stats.fps, 58);
    assert_eq!(stats.models, 1);
    assert_eq!(stats.selected, OrganKind::Heart);
    assert!(frame.grid.is_some());

    h.controller.handle(SceneAction::ToggleGrid);
    let frame = h.controller.frame(&h.camera, 58);
    assert!(frame.grid.is_none());
    assert!(frame.overlay.buttons.iter().any(|b| b.label == "No Grid"));
}

#[test]
fn test_spawn_markers_expire() {
    let mut h = harness();
    click_at(&mut h, 0.0, 0.0);
    assert_eq!(h.controller.frame(&h.camera, 60).markers.len(), 5);

    h.clock.advance(Duration::from_millis(999));
    assert_eq!(h.controller.frame(&h.camera, 60).markers.len(), 5);

    h.clock.advance(Duration::from_millis(1));
    assert!(h.controller.frame(&h.camera, 60).markers.is_empty());
}

// ==================== Asset failure ====================

#[test]
fn test_asset_error_blocks_interaction() {
    let missing = PathBuf::from("assets/definitely_missing_heart.obj");
    let library = MeshLibrary::load_all(&[(OrganKind::Heart, missing)]);
    let mut h = harness_with(library, 1280.0, 720.0);

    click_at(&mut h, 0.0, 0.0);
    h.controller.handle(SceneAction::Select(OrganKind::Brain));
    assert!(h.controller.scene().is_empty());
    assert_eq!(h.controller.state().selected, OrganKind::Heart);

    let frame = h.controller.frame(&h.camera, 60);
    assert!(frame.is_error());
    assert!(frame.models.is_empty());
    assert!(h.controller.load_error().unwrap().contains("definitely_missing_heart.obj"));
}

#[test]
fn test_reported_asset_error_from_external_loader() {
    let mut library = meshes();
    library.fail(AssetLoadError::Empty("brain.obj".into()));
    let mut h = harness_with(library, 1280.0, 720.0);

    let frame = h.controller.frame(&h.camera, 60);
    assert!(frame.is_error());
    assert_eq!(h.controller.frame_index(), 0);
}

// ==================== Resize ====================

#[test]
fn test_resize_keeps_scene() {
    let mut h = harness();
    click_at(&mut h, 100.0, 50.0);

    h.controller.resize(400.0, 800.0);
    assert!(h.controller.layout().is_mobile());
    assert_eq!(h.controller.layout().band_height(), 110.0);
    assert_eq!(h.controller.scene().len(), 1);
    assert_eq!(h.controller.scene().objects()[0].position(), Vec3::new(100.0, 50.0, 0.0));

    // 100 is inside the taller mobile band
    h.controller.handle(SceneAction::Click { x: 350.0, y: 100.0 });
    assert_eq!(h.controller.scene().len(), 1);

    // Coordinates are centered on the new viewport
    h.controller.handle(SceneAction::Click { x: 200.0, y: 500.0 });
    assert_eq!(h.controller.scene().objects()[1].position(), Vec3::new(0.0, 100.0, 0.0));
}
