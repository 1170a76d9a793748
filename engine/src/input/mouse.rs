//! Mouse Look Module
//!
//! Tracks raw pointer motion for free-look camera control. Deltas accumulate
//! between frames and are consumed atomically once per update, so several
//! device events within one frame collapse into a single rotation.

/// Raw pointer-delta accumulator for camera rotation.
///
/// Designed for captured-cursor control: the host hides and confines the
/// cursor, forwards raw motion deltas here, and drains them once per frame
/// into [`FreeLookCamera::rotate`](crate::camera::FreeLookCamera::rotate).
///
/// # Example
///
/// ```rust,ignore
/// let mut look = MouseLook::new();
///
/// // In the event loop: accumulate raw motion
/// look.accumulate(10.0, -5.0);
/// look.accumulate(3.0, 2.0);
///
/// // In the update loop: drain once per frame
/// let (dx, dy) = look.take_delta();
/// camera.rotate(-dy, dx);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MouseLook {
    /// Accumulated horizontal delta since the last drain
    delta_x: f32,
    /// Accumulated vertical delta since the last drain
    delta_y: f32,
    /// Whether the cursor is currently captured (hidden and confined)
    captured: bool,
}

impl MouseLook {
    /// Create a tracker with zero deltas and the cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a raw motion delta from the windowing layer.
    ///
    /// Units are device units (pixels on most systems). Motion received while
    /// the cursor is not captured is dropped so stray pointer travel does not
    /// spin the camera on re-capture.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        if self.captured {
            self.delta_x += dx;
            self.delta_y += dy;
        }
    }

    /// Drain the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn take_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Check whether there is pending motion to drain.
    #[inline]
    pub fn has_delta(&self) -> bool {
        self.delta_x != 0.0 || self.delta_y != 0.0
    }

    /// Set whether the cursor is captured.
    ///
    /// Releasing the capture clears pending deltas to prevent a view jump
    /// when capture resumes.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_accumulate_while_captured() {
        let mut look = MouseLook::new();
        look.set_captured(true);
        look.accumulate(10.0, -5.0);
        look.accumulate(3.0, 2.0);
        assert_eq!(look.take_delta(), (13.0, -3.0));
    }

    #[test]
    fn test_take_delta_resets() {
        let mut look = MouseLook::new();
        look.set_captured(true);
        look.accumulate(4.0, 4.0);
        let _ = look.take_delta();
        assert!(!look.has_delta());
        assert_eq!(look.take_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_motion_dropped_when_not_captured() {
        let mut look = MouseLook::new();
        look.accumulate(100.0, 100.0);
        assert!(!look.has_delta());
    }

    #[test]
    fn test_release_clears_pending_delta() {
        let mut look = MouseLook::new();
        look.set_captured(true);
        look.accumulate(50.0, 50.0);
        look.set_captured(false);
        assert_eq!(look.take_delta(), (0.0, 0.0));
    }
}
