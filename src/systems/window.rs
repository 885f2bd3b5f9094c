//! Window management system
//!
//! Handles window creation, size queries and title updates. Without a text
//! pipeline, the title bar carries the stats line and any status caption.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};

use anatomy_render::{Frame, Stats};

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Inner size in physical pixels
    pub fn size(&self) -> (f32, f32) {
        let size = self.window.inner_size();
        (size.width as f32, size.height as f32)
    }

    /// Update window title from the frame's overlay
    pub fn update_title(&self, frame: &Frame, status: Option<&str>) {
        let title = format_title(&self.base_title, frame, status);
        self.window.set_title(&title);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title text for a frame: error, or stats plus an optional status caption
pub fn format_title(base: &str, frame: &Frame, status: Option<&str>) -> String {
    if let Some(message) = &frame.overlay.error {
        return format!("{} - Error Loading Assets: {}", base, message);
    }

    let mut title = match &frame.overlay.stats {
        Some(Stats { fps, models, selected }) => format!(
            "{} - FPS: {} | Models: {} | Selected: {}",
            base,
            fps,
            models,
            selected.as_str().to_uppercase()
        ),
        None => base.to_string(),
    };
    if let Some(status) = status {
        title.push_str(&format!(" [{}]", status));
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
