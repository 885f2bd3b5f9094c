//! Input mapping from raw events to scene actions
//!
//! Maps keyboard shortcuts and pointer clicks to [`SceneAction`]s. Orbit drags
//! and scrolling are NOT mapped here - they go directly to the OrbitController,
//! which reports a click only when the pointer was released without dragging.

use anatomy_core::OrganKind;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Something the user asked the scene to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneAction {
    /// Make `kind` the kind placed by the next click
    Select(OrganKind),
    /// Pointer click at a window pixel position: presses a control or places
    Click { x: f32, y: f32 },
    Undo,
    Reset,
    ToggleGrid,
    ToggleSound,
    /// Show or hide the keyboard shortcut reference
    ToggleHints,
    Save,
    Load,
    /// Close the application (Escape)
    Exit,
}

/// Maps raw input events to scene actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// `/` covers `?` as well, since both share the physical key
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<SceneAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::KeyH => Some(SceneAction::Select(OrganKind::Heart)),
            KeyCode::KeyB => Some(SceneAction::Select(OrganKind::Brain)),
            KeyCode::KeyU => Some(SceneAction::Undo),
            KeyCode::KeyR => Some(SceneAction::Reset),
            KeyCode::KeyG => Some(SceneAction::ToggleGrid),
            KeyCode::KeyS => Some(SceneAction::ToggleSound),
            KeyCode::Slash => Some(SceneAction::ToggleHints),
            KeyCode::Escape => Some(SceneAction::Exit),
            _ => None,
        }
    }

    /// Map a completed click (press and release in place)
    pub fn map_click(x: f32, y: f32) -> SceneAction {
        SceneAction::Click { x, y }
    }
}
