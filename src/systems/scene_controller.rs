//! Scene controller
//!
//! Owns the scene and the UI state, applies input actions to them, and builds
//! one [`Frame`] per display refresh. Meshes, audio, storage and time come in
//! through traits so the whole controller runs headless in tests.
//!
//! Once the mesh provider reports a load error, every action is ignored and
//! each frame is the error screen.

use std::time::Duration;

use anatomy_anim::{AnimationEngine, SpawnEffectEngine};
use anatomy_core::{
    AudioCue, Clock, KeyValueStore, MeshProvider, OrganKind, PersistenceError, SceneStore,
};
use anatomy_math::Vec3;
use anatomy_render::{
    instruction_lines, ButtonView, Frame, Grid, LightRig, MarkerDraw, ModelDraw, OrbitCamera, Overlay,
    OverlayFlags, Stats,
};

use crate::app_state::{AppState, TransientLabel};
use crate::config::{AppConfig, LayoutConfig};
use crate::input::SceneAction;
use crate::systems::layout::{ControlId, ControlLayout};

/// Drives the scene from input actions and produces frames
pub struct SceneController<M, A, S, C> {
    store: SceneStore,
    state: AppState,
    animation: AnimationEngine,
    spawn: SpawnEffectEngine,

    meshes: M,
    audio: A,
    storage: S,
    clock: C,

    layout_config: LayoutConfig,
    layout: ControlLayout,
    pointer: (f32, f32),

    save_label: TransientLabel,
    load_label: TransientLabel,
    indicator: Duration,
    scene_key: String,

    volume: f32,
    volume_applied: bool,
    background: [f32; 3],
    grid: Grid,
    frame_index: u64,
}

impl<M, A, S, C> SceneController<M, A, S, C>
where
    M: MeshProvider,
    A: AudioCue,
    S: KeyValueStore,
    C: Clock,
{
    /// Create a controller for a `width` x `height` viewport
    pub fn new(config: &AppConfig, meshes: M, audio: A, storage: S, clock: C, width: f32, height: f32) -> Self {
        let layout = ControlLayout::compute(width, height, &config.layout);
        Self {
            store: SceneStore::new().with_default_scale(config.animation.default_scale),
            state: AppState::new(),
            animation: AnimationEngine::new(config.animation.params()),
            spawn: SpawnEffectEngine::new(config.spawn_effect.params()),

            meshes,
            audio,
            storage,
            clock,

            layout_config: config.layout.clone(),
            layout,
            pointer: (width / 2.0, height / 2.0),

            save_label: TransientLabel::new("Save"),
            load_label: TransientLabel::new("Load"),
            indicator: config.persistence.indicator_duration(),
            scene_key: config.persistence.scene_key.clone(),

            volume: config.assets.volume,
            volume_applied: false,
            background: config.rendering.background_color,
            grid: Grid {
                half_extent: config.rendering.grid_half_extent,
                step: config.rendering.grid_step,
            },
            frame_index: 0,
        }
    }

    /// Builder: replace the scene store (e.g. with a seeded one)
    pub fn with_store(mut self, store: SceneStore) -> Self {
        self.store = store;
        self
    }

    // --- Accessors ---

    pub fn scene(&self) -> &SceneStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Current caption of the save button
    pub fn save_label(&self) -> &'static str {
        self.save_label.text(self.clock.now())
    }

    /// Current caption of the load button
    pub fn load_label(&self) -> &'static str {
        self.load_label.text(self.clock.now())
    }

    /// Save or load status word while one is showing
    pub fn status_caption(&self) -> Option<&'static str> {
        let now = self.clock.now();
        [&self.save_label, &self.load_label]
            .into_iter()
            .find(|label| label.is_flashing(now))
            .map(|label| label.text(now))
    }

    /// Fatal asset error message, if interaction is disabled
    pub fn load_error(&self) -> Option<String> {
        self.meshes.load_error().map(|e| e.to_string())
    }

    // --- Input ---

    /// Apply one input action
    ///
    /// `Exit` is left to the caller.
    pub fn handle(&mut self, action: SceneAction) {
        if self.meshes.load_error().is_some() {
            return;
        }

        match action {
            SceneAction::Select(kind) => self.select(kind),
            SceneAction::Click { x, y } => self.click(x, y),
            SceneAction::Undo => self.undo(),
            SceneAction::Reset => self.reset(),
            SceneAction::ToggleGrid => self.toggle_grid(),
            SceneAction::ToggleSound => self.toggle_sound(),
            SceneAction::ToggleHints => {
                self.state.toggle_hints();
            }
            SceneAction::Save => self.request_save(),
            SceneAction::Load => self.request_load(),
            SceneAction::Exit => {}
        }
    }

    /// Select the kind placed by the next click
    pub fn select(&mut self, kind: OrganKind) {
        if self.state.selected != kind {
            log::debug!("Selected {}", kind);
        }
        self.state.select(kind);
    }

    /// A click either presses a control or places an object
    pub fn click(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        // A user gesture may resume suspended audio output
        if self.audio.is_ready() && !self.audio.is_playing() {
            self.audio.unlock();
        }

        match self.layout.control_at(x, y) {
            Some(control) => self.press(control),
            None => {
                self.place_at(x, y);
            }
        }
    }

    /// Place the selected kind under window pixel (x, y)
    ///
    /// Returns false when the point is inside the control band or not finite.
    pub fn place_at(&mut self, x: f32, y: f32) -> bool {
        if self.layout.in_control_band(y) {
            log::debug!("Ignored placement inside control band at ({:.0}, {:.0})", x, y);
            return false;
        }

        let position = Vec3::new(
            x - self.layout.width() / 2.0,
            y - self.layout.height() / 2.0,
            0.0,
        );
        let kind = self.state.selected;
        let now = self.clock.now();
        if let Err(e) = self.store.place(kind, position, now) {
            log::warn!("{}", e);
            return false;
        }
        log::debug!(
            "Placed {} at ({:.1}, {:.1}, {:.1}); {} in scene",
            kind,
            position.x,
            position.y,
            position.z,
            self.store.len()
        );

        if self.state.sound_enabled && self.audio.is_ready() {
            self.audio.play();
        }
        true
    }

    pub fn undo(&mut self) {
        if let Some(removed) = self.store.undo() {
            log::debug!("Undid {}; {} in scene", removed.kind(), self.store.len());
        }
    }

    pub fn reset(&mut self) {
        log::debug!("Reset scene ({} removed)", self.store.len());
        self.store.reset();
    }

    pub fn toggle_grid(&mut self) {
        let visible = self.state.toggle_grid();
        log::debug!("Grid {}", if visible { "on" } else { "off" });
    }

    pub fn toggle_sound(&mut self) {
        let enabled = self.state.toggle_sound();
        log::debug!("Sound {}", if enabled { "on" } else { "off" });
    }

    /// Write the scene to storage
    ///
    /// Returns `Ok(false)` without writing when the scene is empty.
    pub fn save(&mut self) -> Result<bool, PersistenceError> {
        if self.store.is_empty() {
            return Ok(false);
        }

        let now = self.clock.now();
        let result = self
            .store
            .serialize()
            .to_json()
            .and_then(|json| self.storage.set(&self.scene_key, &json).map_err(PersistenceError::from));

        match result {
            Ok(()) => {
                log::info!("Saved {} objects under '{}'", self.store.len(), self.scene_key);
                self.save_label.flash("Saved!", now, self.indicator);
                Ok(true)
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.save_label.flash("Error!", now, self.indicator);
                Err(e)
            }
        }
    }

    /// Replace the scene with the stored snapshot
    ///
    /// Returns `Ok(false)` when nothing was saved. On error the scene is untouched.
    pub fn load(&mut self) -> Result<bool, PersistenceError> {
        let now = self.clock.now();
        let result = self
            .storage
            .get(&self.scene_key)
            .map_err(PersistenceError::from)
            .and_then(|stored| match stored {
                Some(json) => self.store.restore_json(&json, now).map(|()| true),
                None => Ok(false),
            });

        match result {
            Ok(true) => {
                log::info!("Loaded {} objects from '{}'", self.store.len(), self.scene_key);
                self.load_label.flash("Loaded!", now, self.indicator);
                Ok(true)
            }
            Ok(false) => {
                log::debug!("Nothing saved under '{}'", self.scene_key);
                Ok(false)
            }
            Err(e) => {
                log::warn!("Load failed: {}", e);
                self.load_label.flash("Error!", now, self.indicator);
                Err(e)
            }
        }
    }

    /// Save from a key or button; the outcome shows on the save button
    fn request_save(&mut self) {
        match self.save() {
            Ok(true) | Err(_) => {}
            Ok(false) => log::debug!("Nothing to save"),
        }
    }

    /// Load from a key or button; the outcome shows on the load button
    fn request_load(&mut self) {
        match self.load() {
            Ok(_) => {}
            Err(e) => log::debug!("Load request ended with {}", e),
        }
    }

    fn press(&mut self, control: ControlId) {
        match control {
            ControlId::Heart => self.select(OrganKind::Heart),
            ControlId::Brain => self.select(OrganKind::Brain),
            ControlId::Undo => self.undo(),
            ControlId::Reset => self.reset(),
            ControlId::Sound => self.toggle_sound(),
            ControlId::Grid => self.toggle_grid(),
            ControlId::Save => self.request_save(),
            ControlId::Load => self.request_load(),
        }
    }

    /// Recompute the control layout; scene data is untouched
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout = ControlLayout::compute(width, height, &self.layout_config);
    }

    /// Track the pointer for the spotlight
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    // --- Frame ---

    /// Advance one display frame and describe what to draw
    ///
    /// Spins every object by one step. `fps` is the observed rate for the stats line.
    pub fn frame(&mut self, camera: &OrbitCamera, fps: u32) -> Frame {
        if let Some(error) = self.meshes.load_error() {
            return Frame::error(self.background, error.to_string());
        }

        if !self.volume_applied && self.audio.is_ready() {
            self.audio.set_volume(self.volume);
            self.volume_applied = true;
        }

        self.frame_index += 1;
        let frame_index = self.frame_index;
        let now = self.clock.now();

        let mut models = Vec::with_capacity(self.store.len());
        let mut markers = Vec::new();
        for object in self.store.iter_mut() {
            let pose = self.animation.advance(object, frame_index);
            if let Some(mesh) = self.meshes.mesh(object.kind()) {
                models.push(ModelDraw {
                    mesh: mesh.id(),
                    kind: object.kind(),
                    model: pose.model_matrix(),
                    material: pose.material,
                });
            }

            let center = pose.world_position();
            markers.extend(
                self.spawn
                    .markers(object.age(now))
                    .map(|m| MarkerDraw::white(center + m.offset, m.size, m.opacity)),
            );
        }
        log::trace!("Frame {}: {} models, {} markers", frame_index, models.len(), markers.len());

        let (w, h) = (self.layout.width(), self.layout.height());
        let pointer = Vec3::new(self.pointer.0 - w / 2.0, self.pointer.1 - h / 2.0, 0.0);

        Frame {
            background: self.background,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(w / h.max(1.0)),
            lights: LightRig::studio(pointer),
            grid: self.state.grid_visible.then_some(self.grid),
            models,
            markers,
            overlay: self.overlay(fps, now),
        }
    }

    fn overlay(&self, fps: u32, now: Duration) -> Overlay {
        let mut flags = OverlayFlags::CONTROLS | OverlayFlags::STATS;
        if self.store.is_empty() {
            flags |= OverlayFlags::INSTRUCTIONS;
        }
        if self.state.hints_visible {
            flags |= OverlayFlags::KEY_HINTS;
        }

        let buttons = self
            .layout
            .buttons()
            .iter()
            .map(|(id, rect)| ButtonView {
                label: self.button_label(*id, now).to_string(),
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                highlighted: matches!(
                    (id, self.state.selected),
                    (ControlId::Heart, OrganKind::Heart) | (ControlId::Brain, OrganKind::Brain)
                ),
            })
            .collect();

        Overlay {
            flags,
            buttons,
            stats: Some(Stats {
                fps,
                models: self.store.len(),
                selected: self.state.selected,
            }),
            instructions: if self.store.is_empty() {
                instruction_lines(self.layout.is_mobile())
            } else {
                Vec::new()
            },
            error: None,
        }
    }

    fn button_label(&self, id: ControlId, now: Duration) -> &'static str {
        match id {
            ControlId::Heart => OrganKind::Heart.label(),
            ControlId::Brain => OrganKind::Brain.label(),
            ControlId::Undo => "Undo",
            ControlId::Reset => "Reset",
            ControlId::Sound => self.state.sound_label(),
            ControlId::Grid => self.state.grid_label(),
            ControlId::Save => self.save_label.text(now),
            ControlId::Load => self.load_label.text(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_core::{ManualClock, MemoryStore, MeshLibrary, SilentCue};
    use std::rc::Rc;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    type TestController = SceneController<MeshLibrary, SilentCue, MemoryStore, Rc<ManualClock>>;

    fn controller() -> (TestController, Rc<ManualClock>) {
        let mut meshes = MeshLibrary::new();
        meshes.insert_source(OrganKind::Heart, "heart.obj".into(), TRIANGLE).unwrap();
        meshes.insert_source(OrganKind::Brain, "brain.obj".into(), TRIANGLE).unwrap();
        let clock = Rc::new(ManualClock::new());
        let c = SceneController::new(
            &AppConfig::default(),
            meshes,
            SilentCue::new(),
            MemoryStore::new(),
            clock.clone(),
            1280.0,
            720.0,
        )
        .with_store(SceneStore::with_seed(7));
        (c, clock)
    }

    #[test]
    fn test_place_maps_to_centered_coordinates() {
        let (mut c, _) = controller();
        assert!(c.place_at(740.0, 410.0));
        let obj = c.scene().last().unwrap();
        assert_eq!(obj.position(), Vec3::new(100.0, 50.0, 0.0));
        assert_eq!(obj.kind(), OrganKind::Heart);
    }

    #[test]
    fn test_click_on_button_does_not_place() {
        let (mut c, _) = controller();
        c.click(130.0, 30.0);
        assert_eq!(c.state().selected, OrganKind::Brain);
        assert!(c.scene().is_empty());
    }

    #[test]
    fn test_click_in_band_gap_rejected() {
        let (mut c, _) = controller();
        c.click(1000.0, 60.0);
        assert!(c.scene().is_empty());
    }

    #[test]
    fn test_frame_spins_and_counts() {
        let (mut c, _) = controller();
        c.place_at(640.0, 400.0);
        let cam = OrbitCamera::default();
        let frame = c.frame(&cam, 60);
        assert_eq!(frame.models.len(), 1);
        assert_eq!(frame.markers.len(), 5);
        assert_eq!(c.frame_index(), 1);
        assert!((c.scene().objects()[0].rotation() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_button_labels_follow_state() {
        let (mut c, clock) = controller();
        c.place_at(640.0, 400.0);
        c.toggle_sound();
        c.save().unwrap();
        let frame = c.frame(&OrbitCamera::default(), 60);
        let label = |i: usize| frame.overlay.buttons[i].label.clone();
        assert_eq!(label(4), "Mute");
        assert_eq!(label(6), "Saved!");
        assert!(frame.overlay.buttons[0].highlighted);
        assert!(!frame.overlay.buttons[1].highlighted);

        clock.advance(Duration::from_millis(2000));
        assert_eq!(c.save_label(), "Save");
    }

    #[test]
    fn test_save_and_load_buttons_flash() {
        let (mut c, _) = controller();
        c.place_at(640.0, 400.0);
        // Save button at (620, 20)
        c.click(650.0, 30.0);
        assert_eq!(c.save_label(), "Saved!");
        assert!(c.storage().get("anatomyScene").unwrap().is_some());

        c.handle(SceneAction::Reset);
        c.handle(SceneAction::Load);
        assert_eq!(c.load_label(), "Loaded!");
        assert_eq!(c.scene().len(), 1);
    }

    #[test]
    fn test_load_key_with_bad_data_flashes_error() {
        let (mut c, _) = controller();
        c.storage.set("anatomyScene", "[{\"type\":\"heart\"}]").unwrap();
        c.place_at(640.0, 400.0);
        c.handle(SceneAction::Load);
        assert_eq!(c.load_label(), "Error!");
        assert_eq!(c.scene().len(), 1);
    }
}
