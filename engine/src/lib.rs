//! Free-Look Engine Library
//!
//! A first-person free-look camera engine for real-time 3D applications.
//! The library tracks a viewer position and orientation, derives a view
//! transform, and updates state from discrete movement and rotation events.
//! Windowing, input polling and rendering stay on the host side.
//!
//! # Modules
//!
//! - [`camera`] - Free-look camera state, view matrix, configuration
//! - [`input`] - Platform-agnostic input handling for keyboard and mouse
//! - [`render`] - GPU-facing uniform payloads for an external renderer
//!
//! # Example
//!
//! ```ignore
//! use freelook_engine::camera::{CameraConfig, MoveDirection};
//! use freelook_engine::input::{InputState, KeyCode};
//! use freelook_engine::render::CameraUniforms;
//!
//! let config = CameraConfig::default();
//! let mut camera = config.build_camera()?;
//! let mut input = InputState::new();
//!
//! // Event loop feeds input state
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.look.accumulate(mouse_dx, mouse_dy);
//!
//! // Per-frame update
//! let (dx, dy) = input.look.take_delta();
//! camera.rotate(-dy, dx);
//! for direction in input.keyboard.movement.directions() {
//!     camera.apply_move(direction, config.move_speed * delta_time);
//! }
//!
//! // Renderer consumes the view state
//! let uniforms = CameraUniforms::from_camera(&camera);
//! ```

pub mod camera;
pub mod input;
pub mod render;

// Re-export the core camera types at crate level for convenience
pub use camera::{CameraConfig, ConfigError, DegenerateBasisError, FreeLookCamera, MoveDirection};
// Re-export commonly used input types
pub use input::{InputAction, InputState, KeyBindings, KeyCode, KeyboardState, MouseLook};
// Re-export the GPU payload
pub use render::CameraUniforms;
