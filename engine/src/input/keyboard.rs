//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys and modifiers.
//! Decoupled from winit to use generic key codes.

use crate::camera::MoveDirection;

/// Generic key codes for camera input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,

    // Arrow keys (alternate movement)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Command keys
    Escape,
    Enter,
    Tab,
    Space,
    ControlLeft,
    ControlRight,

    // Letter keys (for bindings)
    C,
    R,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// Maintains which movement keys are held so the caller can issue one camera
/// move per held direction each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp - move forward
    pub forward: bool,
    /// S / ArrowDown - move backward
    pub backward: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
    /// Shift - sprint
    pub sprint: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.sprint = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Check if sprint key is currently pressed.
    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Get the move directions to feed the camera this frame.
    ///
    /// One entry per held direction; opposing keys both held yields both
    /// directions, which cancel at the camera.
    pub fn directions(&self) -> Vec<MoveDirection> {
        let mut dirs = Vec::with_capacity(4);
        if self.forward {
            dirs.push(MoveDirection::Forward);
        }
        if self.backward {
            dirs.push(MoveDirection::Backward);
        }
        if self.left {
            dirs.push(MoveDirection::Left);
        }
        if self.right {
            dirs.push(MoveDirection::Right);
        }
        dirs
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    /// Modifier keys (Shift, Ctrl, Alt)
    pub modifiers: ModifierState,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Update modifier state.
    pub fn set_modifiers(&mut self, modifiers: ModifierState) {
        self.modifiers = modifiers;
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.modifiers = ModifierState::default();
    }
}
