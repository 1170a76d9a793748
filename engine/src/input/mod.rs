//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use freelook_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // In the event loop
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.look.accumulate(12.0, -4.0);
//!
//! // Once per frame
//! let (dx, dy) = input.look.take_delta();
//! for direction in input.keyboard.movement.directions() {
//!     // feed the camera
//! }
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState, ModifierState, MovementKeys};
pub use mouse::MouseLook;

/// Combined input state for keyboard and mouse look.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub look: MouseLook,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.look = MouseLook::new();
    }

    /// Check if any movement key is held or look motion is pending.
    pub fn is_active(&self) -> bool {
        self.keyboard.movement.any_pressed() || self.look.has_delta()
    }
}
