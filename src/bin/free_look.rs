//! Free-Look Camera Demo
//!
//! Run with: `cargo run --bin free_look`
//!
//! Opens a window, captures the cursor, and drives the free-look camera from
//! keyboard and raw mouse input. There is no renderer attached; camera state
//! and view matrices are reported through the logger (`RUST_LOG=debug`).
//!
//! Controls:
//! - WASD / arrows: Move
//! - Mouse: Look around
//! - Shift: Sprint
//! - R: Reset camera to its configured pose
//! - C: Release / re-grab the cursor
//! - ESC: Exit

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use freelook_engine::camera::{CameraConfig, FreeLookCamera};
use freelook_engine::input::{InputAction, InputState, KeyBindings, KeyCode};

/// Sprint speed multiplier while Shift is held.
const SPRINT_MULTIPLIER: f32 = 2.0;

/// Translate a winit key code into the engine's windowing-agnostic code.
fn map_key(key: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as Wk;
    match key {
        Wk::KeyW => KeyCode::W,
        Wk::KeyA => KeyCode::A,
        Wk::KeyS => KeyCode::S,
        Wk::KeyD => KeyCode::D,
        Wk::KeyC => KeyCode::C,
        Wk::KeyR => KeyCode::R,
        Wk::ShiftLeft => KeyCode::ShiftLeft,
        Wk::ShiftRight => KeyCode::ShiftRight,
        Wk::ArrowUp => KeyCode::ArrowUp,
        Wk::ArrowDown => KeyCode::ArrowDown,
        Wk::ArrowLeft => KeyCode::ArrowLeft,
        Wk::ArrowRight => KeyCode::ArrowRight,
        Wk::Escape => KeyCode::Escape,
        Wk::Enter => KeyCode::Enter,
        Wk::Tab => KeyCode::Tab,
        Wk::Space => KeyCode::Space,
        Wk::ControlLeft => KeyCode::ControlLeft,
        Wk::ControlRight => KeyCode::ControlRight,
        _ => KeyCode::Unknown,
    }
}

struct FreeLookApp {
    window: Option<Arc<Window>>,
    config: CameraConfig,
    camera: FreeLookCamera,
    input: InputState,
    bindings: KeyBindings,
    last_frame: Instant,
}

impl FreeLookApp {
    fn new(config: CameraConfig) -> Self {
        let camera = config
            .build_camera()
            .expect("default camera configuration must be valid");
        Self {
            window: None,
            config,
            camera,
            input: InputState::new(),
            bindings: KeyBindings::new(),
            last_frame: Instant::now(),
        }
    }

    fn grab_cursor(&mut self, grab: bool) {
        if let Some(window) = &self.window {
            if grab {
                // Locked is unsupported on some platforms; fall back to Confined
                if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                    let _ = window.set_cursor_grab(CursorGrabMode::Confined);
                }
                window.set_cursor_visible(false);
            } else {
                let _ = window.set_cursor_grab(CursorGrabMode::None);
                window.set_cursor_visible(true);
            }
            self.input.look.set_captured(grab);
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool, event_loop: &ActiveEventLoop) {
        match self.bindings.action_for(key) {
            Some(InputAction::Exit) if pressed => event_loop.exit(),
            Some(InputAction::ResetCamera) if pressed => {
                match self.config.build_camera() {
                    Ok(camera) => {
                        self.camera = camera;
                        log::info!("camera reset to configured pose");
                    }
                    Err(e) => log::error!("camera reset failed: {e}"),
                }
            }
            Some(InputAction::ToggleCapture) if pressed => {
                let grab = !self.input.look.is_captured();
                self.grab_cursor(grab);
            }
            _ => {
                self.input.keyboard.handle_key(key, pressed);
            }
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        // Clamp delta time to prevent huge jumps after stalls (max 100ms)
        let dt = now
            .duration_since(self.last_frame)
            .as_secs_f32()
            .clamp(0.0, 0.1);
        self.last_frame = now;

        let (dx, dy) = self.input.look.take_delta();
        if dx != 0.0 || dy != 0.0 {
            // Screen Y grows downward; pitch grows upward
            let y_sign = if self.config.invert_y { 1.0 } else { -1.0 };
            self.camera.rotate(dy * y_sign, dx);
        }

        let mut speed = self.config.move_speed * dt;
        if self.input.keyboard.movement.is_sprinting() {
            speed *= SPRINT_MULTIPLIER;
        }
        for direction in self.input.keyboard.movement.directions() {
            self.camera.apply_move(direction, speed);
        }

        log::debug!(
            "camera pos {:?} yaw {:.1} pitch {:.1}",
            self.camera.get_position(),
            self.camera.get_yaw(),
            self.camera.get_pitch()
        );
        log::trace!("view matrix {:?}", self.camera.view_matrix());
    }
}

impl ApplicationHandler for FreeLookApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Free-Look Camera Demo [C: release cursor, ESC: exit]")
                .with_inner_size(PhysicalSize::new(1280, 720));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.window = Some(window);
            self.grab_cursor(true);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(map_key(key), event.state == ElementState::Pressed, event_loop);
                }
            }
            WindowEvent::Focused(false) => {
                // Release on focus loss so the cursor is not stuck captured
                self.grab_cursor(false);
            }
            WindowEvent::RedrawRequested => self.update(),
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.look.accumulate(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    println!("Free-Look Camera Demo");
    println!("Controls: WASD Move, Mouse Look, Shift Sprint, R Reset, C Release Cursor, ESC Exit");
    println!("Camera state is logged; run with RUST_LOG=debug to follow it.");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = FreeLookApp::new(CameraConfig::default());
    event_loop.run_app(&mut app).unwrap();
}
