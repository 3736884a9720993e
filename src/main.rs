//! Interactive viewer binary for the editcam camera controllers.

use std::path::PathBuf;
use std::sync::Arc;

use editcam::camera::{Camera, CameraStore, SharedCamera};
use editcam::input::{CursorGrab, InputEvent, InputState};
use editcam::nav::{NavCommand, NavProjection, NavigationRegistry};
use editcam::options::Options;
use editcam::time::FrameClock;
use editcam::EntityId;
use glam::Vec3;
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

const CAMERA_ENTITY: EntityId = EntityId::new(1);
const STATUS_INTERVAL: Duration = Duration::from_secs(1);

/// Locks the OS cursor of the viewer window while a drag is active.
struct WindowCursor<'a> {
    window: Option<&'a Window>,
}

impl CursorGrab for WindowCursor<'_> {
    fn set_cursor_locked(&mut self, locked: bool) {
        let Some(window) = self.window else {
            return;
        };
        let result = if locked {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            log::warn!("cursor grab failed: {e}");
        }
        window.set_cursor_visible(!locked);
    }
}

struct ViewerApp {
    window: Option<Arc<Window>>,
    cameras: CameraStore,
    camera: SharedCamera,
    registry: NavigationRegistry,
    input: InputState,
    clock: FrameClock,
    last_status: Instant,
}

impl ViewerApp {
    fn new(options: Options) -> Self {
        let mut cameras = CameraStore::new();
        let camera = cameras.insert(
            CAMERA_ENTITY,
            Camera::looking(Vec3::new(0.0, -500.0, 200.0), Vec3::Y),
        );
        let mut registry = NavigationRegistry::new(options);
        let mut input = InputState::new();
        if let Err(e) = registry.create(CAMERA_ENTITY, &mut input) {
            log::error!("failed to create navigation: {e}");
        }
        Self {
            window: None,
            cameras,
            camera,
            registry,
            input,
            clock: FrameClock::new(),
            last_status: Instant::now(),
        }
    }

    fn send(&mut self, event: &InputEvent) {
        self.input.apply(event);
        let mut cursor = WindowCursor {
            window: self.window.as_deref(),
        };
        self.registry.dispatch(event, false, &self.input, &mut cursor);
    }

    /// F1-F4 pick the projection.
    fn projection_hotkey(&mut self, code: KeyCode) {
        let mode = match code {
            KeyCode::F1 => NavProjection::Perspective,
            KeyCode::F2 => NavProjection::OrthoX,
            KeyCode::F3 => NavProjection::OrthoY,
            KeyCode::F4 => NavProjection::OrthoZ,
            _ => return,
        };
        if let Some(nav) = self.registry.get_mut(CAMERA_ENTITY) {
            let _ = nav.execute(NavCommand::SetProjection(mode));
        }
    }

    fn frame(&mut self) {
        // Drag is driven once per frame from the accumulated raw motion.
        if self.input.mouse_delta() != glam::Vec2::ZERO {
            let (x, y) = self.input.cursor_pos();
            let mut cursor = WindowCursor {
                window: self.window.as_deref(),
            };
            self.registry.dispatch(
                &InputEvent::CursorMoved { x, y },
                false,
                &self.input,
                &mut cursor,
            );
        }

        let _ = self.clock.advance();
        self.registry.tick(&self.clock, &self.input);
        self.input.end_frame();

        if self.last_status.elapsed() >= STATUS_INTERVAL {
            self.last_status = Instant::now();
            self.report_status();
        }
    }

    fn report_status(&self) {
        let Some(nav) = self.registry.get(CAMERA_ENTITY) else {
            return;
        };
        let Ok(camera) = self.camera.try_borrow() else {
            return;
        };
        let status = format!(
            "editcam [{}] pos ({:.0}, {:.0}, {:.0}) speed {:.0} zoom {:.2}",
            nav.projection(),
            camera.position.x,
            camera.position.y,
            camera.position.z,
            nav.move_speed(),
            nav.zoom_level(),
        );
        log::debug!("{status}");
        if let Some(window) = &self.window {
            window.set_title(&status);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("editcam")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        if let Ok(mut camera) = self.camera.try_borrow_mut() {
            camera.aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
            camera.commit();
        }
        if self.registry.activate(&self.cameras) > 0 {
            log::info!(
                "navigation ready: WASD/QE move, arrows turn, drag to look, \
                 1-0 speed, F1-F4 projection"
            );
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Ok(mut camera) = self.camera.try_borrow_mut() {
                    camera.aspect =
                        size.width.max(1) as f32 / size.height.max(1) as f32;
                    camera.commit();
                }
            }

            WindowEvent::Focused(false) => {
                self.input.release_all();
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.send(&InputEvent::MouseButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.apply(&InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(scroll) = InputEvent::scroll_from_winit(delta) {
                    self.send(&scroll);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = format!("{code:?}");
                if event.state == ElementState::Pressed {
                    self.projection_hotkey(code);
                    self.send(&InputEvent::KeyDown { key });
                } else {
                    self.send(&InputEvent::KeyUp { key });
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.apply(&InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Options::load(&path) {
            Ok(options) => {
                log::info!("loaded options from {}", path.display());
                options
            }
            Err(e) => {
                log::error!("{}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(options);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
