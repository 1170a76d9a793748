//! Input Bindings Module
//!
//! Maps physical keys to logical camera actions, allowing key remapping
//! without touching the event-handling code.

use std::collections::HashMap;

use super::KeyCode;
use crate::camera::MoveDirection;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Sprint modifier (default: Shift)
    Sprint,
    /// Re-create the camera from its configuration (default: R)
    ResetCamera,
    /// Release or re-grab the cursor (default: C)
    ToggleCapture,
    /// Quit the application (default: Escape)
    Exit,
}

impl InputAction {
    /// Translate a movement action into the camera's direction selector.
    ///
    /// Non-movement actions return `None`.
    pub fn movement_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBack => Some(MoveDirection::Backward),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            _ => None,
        }
    }

    /// Check if this action is a movement action.
    pub fn is_movement(self) -> bool {
        self.movement_direction().is_some()
    }
}

/// Maps physical keys to logical actions, supporting customizable bindings.
///
/// Keeps both directions of the mapping so event handling (key → action) and
/// UI display (action → key) stay cheap.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default key mappings.
    ///
    /// Defaults:
    /// - W = MoveForward
    /// - S = MoveBack
    /// - A = MoveLeft
    /// - D = MoveRight
    /// - Shift (Left) = Sprint
    /// - R = ResetCamera
    /// - C = ToggleCapture
    /// - Escape = Exit
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::R, InputAction::ResetCamera);
        bindings.bind(KeyCode::C, InputAction::ToggleCapture);
        bindings.bind(KeyCode::Escape, InputAction::Exit);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Existing bindings for either side are removed first, so each key maps
    /// to at most one action and each action to at most one key.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Look up the action bound to a key, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Look up the key bound to an action, if any.
    pub fn key_for(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}
