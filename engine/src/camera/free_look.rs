//! Free-Look Camera Module
//!
//! Provides a first-person free-look camera driven by discrete movement and
//! rotation events. This is window-system agnostic - it only manages camera
//! state and produces a view transform for an external renderer.
//!
//! Key features:
//! - Look-at construction with an explicit degenerate-basis check
//! - Movement along the view and strafe axes (`MoveDirection`)
//! - Mouse-delta rotation with configurable sensitivity (default: 0.1 deg/unit)
//! - Pitch clamped to ±89 degrees to prevent gimbal lock
//! - Yaw wrapped into [0, 360) degrees

use glam::{Mat4, Vec3};

/// Pitch limit in degrees. Rotating past this would flip the camera at the poles.
const PITCH_LIMIT_DEG: f32 = 89.0;

/// Rotation sensitivity applied to raw pointer deltas, in degrees per unit.
const DEFAULT_SENSITIVITY: f32 = 0.1;

/// World up axis used to rebuild the orientation basis on rotation.
const WORLD_UP: Vec3 = Vec3::Y;

/// Squared-length threshold below which a basis vector counts as degenerate.
const DEGENERACY_EPSILON: f32 = 1e-8;

/// Movement direction selector for [`FreeLookCamera::apply_move`].
///
/// The enum is closed, so every direction is handled; there is no
/// "unrecognized input" case to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Translate along the viewing direction
    Forward,
    /// Translate against the viewing direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
}

/// Construction failed because the requested look-at basis has no solution.
///
/// Returned by [`FreeLookCamera::new`] so a bad configuration surfaces as an
/// error instead of propagating NaNs through every later view matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateBasisError {
    /// The look-at target coincides with the eye position
    CoincidentTarget,
    /// The up hint is parallel to the viewing direction (or zero length)
    ParallelUp,
}

impl std::fmt::Display for DegenerateBasisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CoincidentTarget => {
                write!(f, "camera target coincides with the eye position")
            }
            Self::ParallelUp => {
                write!(f, "camera up hint is parallel to the viewing direction")
            }
        }
    }
}

impl std::error::Error for DegenerateBasisError {}

/// First-person free-look camera.
///
/// Owns a world-space eye position and an orientation basis (front, right,
/// up), plus the yaw/pitch angles that drive rotation. The camera is expected
/// to be owned and mutated by exactly one caller, typically a per-frame input
/// routine; all operations are immediate in-memory arithmetic.
///
/// Angles are stored in degrees. Yaw and pitch start at zero and only become
/// authoritative once [`rotate`](Self::rotate) runs: from that point on the
/// orientation is fully determined by the (yaw, pitch) pair, so repeated
/// rotations accumulate no drift.
#[derive(Clone, Debug)]
pub struct FreeLookCamera {
    /// Eye position in world space
    pub position: Vec3,
    /// Unit vector in the viewing direction
    front: Vec3,
    /// Camera-local up, recomputed on rotation
    up: Vec3,
    /// Unit vector orthogonal to front and up
    right: Vec3,
    /// Horizontal angle in degrees, wrapped into [0, 360)
    yaw: f32,
    /// Vertical angle in degrees, clamped to ±89
    pitch: f32,
    /// Look-at target the camera was constructed with
    target: Vec3,
    /// Up hint the camera was constructed with (normalized)
    up_hint: Vec3,
    /// Rotation sensitivity in degrees per raw delta unit
    sensitivity: f32,
}

impl FreeLookCamera {
    /// Create a camera at `position` looking at `target`, with `up_hint`
    /// orienting the initial basis.
    ///
    /// Yaw and pitch start at zero; the initial basis comes from the look-at
    /// arguments alone.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateBasisError`] when `target` coincides with
    /// `position`, or when `up_hint` is parallel to the viewing direction
    /// (zero hints included).
    pub fn new(
        position: Vec3,
        target: Vec3,
        up_hint: Vec3,
    ) -> Result<Self, DegenerateBasisError> {
        let to_target = target - position;
        if to_target.length_squared() < DEGENERACY_EPSILON {
            return Err(DegenerateBasisError::CoincidentTarget);
        }
        let front = to_target.normalize();

        let side = front.cross(up_hint);
        if side.length_squared() < DEGENERACY_EPSILON {
            return Err(DegenerateBasisError::ParallelUp);
        }
        let right = side.normalize();
        let up_hint = up_hint.normalize();

        Ok(Self {
            position,
            front,
            up: up_hint,
            right,
            yaw: 0.0,
            pitch: 0.0,
            target,
            up_hint,
            sensitivity: DEFAULT_SENSITIVITY,
        })
    }

    /// Get the viewing direction (unit length).
    #[inline]
    pub fn get_front(&self) -> Vec3 {
        self.front
    }

    /// Get the strafe axis (unit length).
    #[inline]
    pub fn get_right(&self) -> Vec3 {
        self.right
    }

    /// Get the camera-local up axis (unit length).
    #[inline]
    pub fn get_up(&self) -> Vec3 {
        self.up
    }

    /// Get the current yaw angle in degrees, in [0, 360).
    #[inline]
    pub fn get_yaw(&self) -> f32 {
        self.yaw
    }

    /// Get the current pitch angle in degrees, in [-89, 89].
    #[inline]
    pub fn get_pitch(&self) -> f32 {
        self.pitch
    }

    /// Get the camera position in world space.
    #[inline]
    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    /// Set the camera position directly (teleport).
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Get the rotation sensitivity in degrees per raw delta unit.
    #[inline]
    pub fn get_sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Set the rotation sensitivity in degrees per raw delta unit.
    #[inline]
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Set the yaw angle directly, in degrees. Wraps into [0, 360) and
    /// rebuilds the orientation basis.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw.rem_euclid(360.0);
        self.rebuild_basis();
    }

    /// Set the pitch angle directly, in degrees. Clamps to ±89 and rebuilds
    /// the orientation basis.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.rebuild_basis();
    }

    /// Return the view transform for the current state.
    ///
    /// Standard look-at construction: eye at `position`, center one unit
    /// ahead along `front`, oriented by the camera-local up. Pure function of
    /// the current state.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate the camera along the selected axis.
    ///
    /// `speed` is the distance covered by this call; callers scale it by
    /// frame time and sprint factors. Orientation is never touched, so moves
    /// commute and a forward/backward pair returns to the starting point.
    pub fn apply_move(&mut self, direction: MoveDirection, speed: f32) {
        match direction {
            MoveDirection::Forward => self.position += self.front * speed,
            MoveDirection::Backward => self.position -= self.front * speed,
            MoveDirection::Right => self.position += self.right * speed,
            MoveDirection::Left => self.position -= self.right * speed,
        }
    }

    /// Rotate the camera by raw pointer deltas.
    ///
    /// Both offsets are scaled by the sensitivity factor before being applied
    /// to pitch and yaw. Yaw wraps into [0, 360), pitch clamps to ±89
    /// degrees, then the orientation basis is rebuilt from the angles alone.
    ///
    /// # Arguments
    /// * `pitch_offset` - Raw vertical delta. Positive tilts the view up.
    /// * `yaw_offset` - Raw horizontal delta. Positive swings toward +Z.
    pub fn rotate(&mut self, pitch_offset: f32, yaw_offset: f32) {
        self.yaw = (self.yaw + yaw_offset * self.sensitivity).rem_euclid(360.0);
        self.pitch =
            (self.pitch + pitch_offset * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);

        log::trace!("camera rotate: yaw {:.3} pitch {:.3}", self.yaw, self.pitch);

        self.rebuild_basis();
    }

    /// Point the camera at a specific world position.
    ///
    /// Derives yaw and pitch from the direction to `target` and rebuilds the
    /// basis. A target too close to the eye position is ignored.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance * distance < DEGENERACY_EPSILON {
            return;
        }

        self.yaw = to_target.z.atan2(to_target.x).to_degrees().rem_euclid(360.0);
        self.pitch = (to_target.y / distance)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.rebuild_basis();
    }

    /// Get the look-at target the camera was constructed with.
    #[inline]
    pub fn initial_target(&self) -> Vec3 {
        self.target
    }

    /// Get the (normalized) up hint the camera was constructed with.
    ///
    /// The hint seeds the initial basis only; rotation rebuilds the basis
    /// against the fixed world up axis.
    #[inline]
    pub fn initial_up_hint(&self) -> Vec3 {
        self.up_hint
    }

    /// Rebuild front/right/up from the current yaw and pitch.
    ///
    /// Spherical-to-Cartesian conversion against the fixed world up, not the
    /// stored hint; the hint only seeds the constructed basis.
    fn rebuild_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );

        self.front = front.normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn canonical() -> FreeLookCamera {
        FreeLookCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y).unwrap()
    }

    #[test]
    fn test_construction_front_direction() {
        let camera = canonical();
        assert!((camera.get_front() - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_construction_zero_angles() {
        let camera = canonical();
        assert_eq!(camera.get_yaw(), 0.0);
        assert_eq!(camera.get_pitch(), 0.0);
    }

    #[test]
    fn test_coincident_target_rejected() {
        let result = FreeLookCamera::new(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert_eq!(result.unwrap_err(), DegenerateBasisError::CoincidentTarget);
    }

    #[test]
    fn test_parallel_up_rejected() {
        let result = FreeLookCamera::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert_eq!(result.unwrap_err(), DegenerateBasisError::ParallelUp);
    }

    #[test]
    fn test_zero_up_hint_rejected() {
        let result = FreeLookCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO);
        assert_eq!(result.unwrap_err(), DegenerateBasisError::ParallelUp);
    }

    #[test]
    fn test_move_forward_backward_roundtrip() {
        let mut camera = canonical();
        let start = camera.get_position();

        camera.apply_move(MoveDirection::Forward, 5.0);
        camera.apply_move(MoveDirection::Backward, 5.0);

        assert!((camera.get_position() - start).length() < EPS);
    }

    #[test]
    fn test_move_preserves_orientation() {
        let mut camera = canonical();
        let front = camera.get_front();
        let right = camera.get_right();
        let up = camera.get_up();

        camera.apply_move(MoveDirection::Forward, 3.0);
        camera.apply_move(MoveDirection::Left, 1.5);

        assert_eq!(camera.get_front(), front);
        assert_eq!(camera.get_right(), right);
        assert_eq!(camera.get_up(), up);
        assert_eq!(camera.get_yaw(), 0.0);
        assert_eq!(camera.get_pitch(), 0.0);
    }

    #[test]
    fn test_rotate_sensitivity_scaling() {
        let mut camera = canonical();
        camera.rotate(0.0, 10.0);

        // 10 raw units * 0.1 deg/unit = 1 degree of yaw
        assert!((camera.get_yaw() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_zero_is_idempotent() {
        let mut camera = canonical();
        camera.rotate(50.0, 120.0); // angles now authoritative

        let front = camera.get_front();
        let right = camera.get_right();
        let up = camera.get_up();

        camera.rotate(0.0, 0.0);

        assert!((camera.get_front() - front).length() < EPS);
        assert!((camera.get_right() - right).length() < EPS);
        assert!((camera.get_up() - up).length() < EPS);
    }

    #[test]
    fn test_pitch_clamped_under_large_offsets() {
        let mut camera = canonical();
        for _ in 0..50 {
            camera.rotate(10_000.0, 0.0);
        }
        assert!(camera.get_pitch() <= PITCH_LIMIT_DEG);
        assert!((camera.get_pitch() - PITCH_LIMIT_DEG).abs() < EPS);

        for _ in 0..50 {
            camera.rotate(-10_000.0, 0.0);
        }
        assert!((camera.get_pitch() + PITCH_LIMIT_DEG).abs() < EPS);
    }

    #[test]
    fn test_yaw_wraps_into_range() {
        let mut camera = canonical();
        for _ in 0..100 {
            camera.rotate(0.0, 1_000.0);
        }
        // 100 * 1000 * 0.1 = 10000 degrees, wrapped = 280
        assert!(camera.get_yaw() >= 0.0);
        assert!(camera.get_yaw() < 360.0);
        assert!((camera.get_yaw() - 280.0).abs() < 0.01);
    }

    #[test]
    fn test_basis_orthonormal_after_rotate() {
        let mut camera = canonical();
        camera.rotate(123.0, 456.0);

        let front = camera.get_front();
        let right = camera.get_right();
        let up = camera.get_up();

        assert!((front.length() - 1.0).abs() < EPS);
        assert!((right.length() - 1.0).abs() < EPS);
        assert!((up.length() - 1.0).abs() < EPS);
        assert!(front.dot(right).abs() < EPS);
        assert!(front.dot(up).abs() < EPS);
        assert!(right.dot(up).abs() < EPS);
    }

    #[test]
    fn test_look_at_points_front_at_target() {
        let mut camera =
            FreeLookCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y).unwrap();
        camera.look_at(Vec3::new(20.0, 0.0, 10.0));

        let front = camera.get_front();
        assert!((front - Vec3::X).length() < EPS);
        assert!(camera.get_yaw().abs() < EPS);
    }

    #[test]
    fn test_set_pitch_clamps() {
        let mut camera = canonical();
        camera.set_pitch(200.0);
        assert_eq!(camera.get_pitch(), PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let mut camera = canonical();
        camera.rotate(30.0, 45.0);

        let expected = Mat4::look_at_rh(
            camera.get_position(),
            camera.get_position() + camera.get_front(),
            camera.get_up(),
        );
        let diff: f32 = (camera.view_matrix().to_cols_array())
            .iter()
            .zip(expected.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(diff < EPS);
    }
}
