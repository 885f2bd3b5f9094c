//! Anatomy placement demo
//!
//! Click to place animated hearts and brains; drag to orbit, scroll to zoom.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use anatomy::config::AppConfig;
use anatomy::input::{InputMapper, SceneAction};
use anatomy::systems::{FrameTimer, RenderError, RenderSystem, SceneController, TapSound, WindowSystem};
use anatomy_core::{Clock, FileStore, MeshLibrary, MeshProvider, SystemClock};
use anatomy_input::{OrbitController, PointerGesture};
use anatomy_render::OrbitCamera;

type Controller = SceneController<MeshLibrary, TapSound, FileStore, SystemClock>;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    controller: Controller,
    camera: OrbitCamera,
    orbit: OrbitController,
    timer: FrameTimer,
    clock: SystemClock,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let meshes = MeshLibrary::load_all(&config.assets.mesh_paths());
        if meshes.is_ready() {
            log::info!("Mesh library ready");
        }

        let audio = TapSound::open(&config.assets.tap_sound);
        let storage = FileStore::new(&config.persistence.storage_dir);

        let controller = SceneController::new(
            &config,
            meshes,
            audio,
            storage,
            SystemClock::new(),
            config.window.width as f32,
            config.window.height as f32,
        );

        let camera = OrbitCamera::new(config.camera.distance)
            .with_fov_degrees(config.camera.fov)
            .with_clip(config.camera.near, config.camera.far);

        let orbit = OrbitController::new()
            .with_orbit_sensitivity(config.camera.orbit_sensitivity)
            .with_zoom_sensitivity(config.camera.zoom_sensitivity)
            .with_drag_threshold(config.camera.drag_threshold);

        Self {
            config,
            window: None,
            render: None,
            controller,
            camera,
            orbit,
            timer: FrameTimer::new(),
            clock: SystemClock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.timer.tick(self.clock.now());
        self.orbit.update(&mut self.camera, dt);

        let frame = self.controller.frame(&self.camera, self.timer.fps());

        if let Some(window) = &self.window {
            window.update_title(&frame, self.controller.status_caption());
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&frame) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        let (width, height) = window.size();
        self.controller.resize(width, height);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
                self.controller.resize(size.width as f32, size.height as f32);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(SceneAction::Exit) => event_loop.exit(),
                        Some(action) => self.controller.handle(action),
                        None => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.orbit.process_cursor_moved(x, y);
                self.controller.pointer_moved(x, y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let PointerGesture::Click { x, y } = self.orbit.process_mouse_button(button, state) {
                    self.controller.handle(InputMapper::map_click(x, y));
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.orbit.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()))
        .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting {}", config.window.title);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
