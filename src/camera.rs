use glam::{Mat4, Vec3};

use crate::math::{signed_degrees, wrap_degrees};

/// Tunable motion parameters for [`FreeLookCamera`].
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Translation in world units per input unit per frame.
    pub linear_speed: f32,
    /// Rotation in degrees per input unit.
    pub angular_speed: f32,
    /// Optional pitch clamp in degrees around the horizon. `None` leaves the
    /// pitch free to wrap through the poles.
    pub pitch_limit: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            linear_speed: 0.05,
            angular_speed: 0.1,
            pitch_limit: None,
        }
    }
}

/// Input deltas staged for the next [`FreeLookCamera::update`] call.
///
/// Accumulation is additive: staging twice within a frame sums the deltas.
#[derive(Debug, Default, Clone, Copy)]
struct StagedInput {
    move_forward: f32,
    move_strafe: f32,
    look_dx: f32,
    look_dy: f32,
}

/// The pose a reset returns the camera to.
#[derive(Debug, Clone, Copy)]
struct Pose {
    eye: Vec3,
    yaw: f32,
    pitch: f32,
}

/// First-person free-look camera.
///
/// Owns the camera pose (eye position, yaw/pitch in degrees, fixed world up)
/// and per-frame input deltas. Input is staged with
/// [`accumulate_input`](Self::accumulate_input), applied by
/// [`update`](Self::update) once per frame, and read back as a right-handed
/// look-at matrix via [`view_matrix`](Self::view_matrix).
///
/// Yaw and pitch are kept wrapped to [0, 360) so repeated accumulation never
/// grows the angles numerically. The forward vector is recomputed from the
/// angles on every update, never integrated, so it cannot drift.
#[derive(Debug, Clone)]
pub struct FreeLookCamera {
    eye: Vec3,
    yaw: f32,
    pitch: f32,
    up: Vec3,
    forward: Vec3,
    home: Pose,
    staged: StagedInput,
    config: CameraConfig,
}

impl FreeLookCamera {
    /// Creates a camera at `eye` looking down -Z (yaw and pitch both zero).
    pub fn new(eye: Vec3, config: CameraConfig) -> Self {
        Self::with_orientation(eye, 0.0, 0.0, config)
    }

    /// Creates a camera at `eye` with an initial yaw/pitch in degrees.
    pub fn with_orientation(eye: Vec3, yaw: f32, pitch: f32, config: CameraConfig) -> Self {
        let yaw = wrap_degrees(yaw);
        let pitch = wrap_degrees(pitch);
        Self {
            eye,
            yaw,
            pitch,
            up: Vec3::Y,
            forward: forward_from_angles(yaw, pitch),
            home: Pose { eye, yaw, pitch },
            staged: StagedInput::default(),
            config,
        }
    }

    /// Stages input deltas for the next [`update`](Self::update).
    ///
    /// `move_forward` and `move_strafe` are signed magnitudes (-1/0/+1 for
    /// discrete key state), `look_dx`/`look_dy` are screen-space look deltas
    /// (raw mouse pixels, or key turns folded into the same channel). Calls
    /// within one frame are additive; the pose itself does not change until
    /// `update` runs. Non-finite components are dropped.
    pub fn accumulate_input(
        &mut self,
        move_forward: f32,
        move_strafe: f32,
        look_dx: f32,
        look_dy: f32,
    ) {
        self.staged.move_forward += finite_or_zero(move_forward);
        self.staged.move_strafe += finite_or_zero(move_strafe);
        self.staged.look_dx += finite_or_zero(look_dx);
        self.staged.look_dy += finite_or_zero(look_dy);
    }

    /// Applies the staged input to the pose and clears it.
    ///
    /// A frame with no staged input leaves the pose untouched.
    pub fn update(&mut self) {
        let StagedInput {
            move_forward,
            move_strafe,
            look_dx,
            look_dy,
        } = self.staged;

        self.yaw = wrap_degrees(self.yaw + look_dx * self.config.angular_speed);
        // Screen-space vertical input is inverted relative to pitch-up.
        self.pitch = wrap_degrees(self.pitch - look_dy * self.config.angular_speed);
        if let Some(limit) = self.config.pitch_limit {
            self.pitch = wrap_degrees(signed_degrees(self.pitch).clamp(-limit, limit));
        }

        self.forward = forward_from_angles(self.yaw, self.pitch);

        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let step = self.config.linear_speed;
        self.eye.x += move_forward * step * sin_yaw;
        self.eye.z -= move_forward * step * cos_yaw;
        // Strafe ignores pitch: lateral motion stays in the horizontal plane.
        self.eye.x -= move_strafe * step * cos_yaw;
        self.eye.z -= move_strafe * step * sin_yaw;

        self.staged = StagedInput::default();
    }

    /// Builds the right-handed look-at view matrix for the current pose.
    ///
    /// Pure function of eye/target/up; recomputed on every call.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target(), self.up)
    }

    /// Returns the camera to its starting pose and drops any staged input.
    pub fn reset(&mut self) {
        self.eye = self.home.eye;
        self.yaw = self.home.yaw;
        self.pitch = self.home.pitch;
        self.forward = forward_from_angles(self.yaw, self.pitch);
        self.staged = StagedInput::default();
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit look direction derived from the current yaw/pitch.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The point the camera looks at, one unit ahead of the eye.
    pub fn target(&self) -> Vec3 {
        self.eye + self.forward
    }

    /// Yaw in degrees, wrapped to [0, 360).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, wrapped to [0, 360).
    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

impl Default for FreeLookCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), CameraConfig::default())
    }
}

/// Spherical-to-Cartesian mapping for yaw measured from -Z and pitch measured
/// from the XZ plane. The raw triple is not unit length for combined extreme
/// angles, so it is normalized explicitly rather than trusting the identity.
fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let yaw_rad = yaw.to_radians();
    let pitch_rad = pitch.to_radians();
    Vec3::new(
        yaw_rad.sin(),
        pitch_rad.sin(),
        -pitch_rad.cos() * yaw_rad.cos(),
    )
    .normalize()
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn camera_with_angular_speed(angular_speed: f32) -> FreeLookCamera {
        FreeLookCamera::new(
            Vec3::new(0.0, 0.0, 3.0),
            CameraConfig {
                angular_speed,
                ..CameraConfig::default()
            },
        )
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = FreeLookCamera::default();
        assert!((camera.forward() - Vec3::NEG_Z).length() < EPSILON);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn yaw_quarter_turn_faces_positive_x() {
        let mut camera = camera_with_angular_speed(1.0);
        camera.accumulate_input(0.0, 0.0, 90.0, 0.0);
        camera.update();

        assert_eq!(camera.yaw(), 90.0);
        assert!((camera.forward() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn angles_wrap_into_degree_range() {
        let mut camera = camera_with_angular_speed(1.0);
        camera.accumulate_input(0.0, 0.0, 400.0, -725.0);
        camera.update();

        assert!((camera.yaw() - 40.0).abs() < 1e-3);
        assert!((camera.pitch() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn look_dy_is_inverted_into_pitch() {
        let mut camera = camera_with_angular_speed(1.0);
        // Mouse moving down the screen should pitch the view down.
        camera.accumulate_input(0.0, 0.0, 0.0, 10.0);
        camera.update();

        assert_eq!(camera.pitch(), 350.0);
        assert!(camera.forward().y < 0.0);
    }

    #[test]
    fn update_clears_staged_input() {
        let mut camera = FreeLookCamera::default();
        camera.accumulate_input(1.0, 0.0, 5.0, 0.0);
        camera.update();

        let eye = camera.eye();
        let yaw = camera.yaw();
        camera.update();

        assert_eq!(camera.eye(), eye, "second update must not re-apply input");
        assert_eq!(camera.yaw(), yaw);
    }

    #[test]
    fn non_finite_input_is_dropped() {
        let mut camera = FreeLookCamera::default();
        camera.accumulate_input(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::NAN);
        camera.update();

        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn pitch_limit_clamps_when_configured() {
        let mut camera = FreeLookCamera::new(
            Vec3::ZERO,
            CameraConfig {
                angular_speed: 1.0,
                pitch_limit: Some(89.0),
                ..CameraConfig::default()
            },
        );
        camera.accumulate_input(0.0, 0.0, 0.0, -120.0);
        camera.update();
        assert_eq!(camera.pitch(), 89.0);

        camera.accumulate_input(0.0, 0.0, 0.0, 200.0);
        camera.update();
        assert_eq!(camera.pitch(), wrap_degrees(-89.0));
    }

    #[test]
    fn pitch_is_unclamped_by_default() {
        let mut camera = camera_with_angular_speed(1.0);
        camera.accumulate_input(0.0, 0.0, 0.0, -120.0);
        camera.update();

        assert_eq!(camera.pitch(), 120.0);
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut camera = FreeLookCamera::with_orientation(
            Vec3::new(1.0, 2.0, 3.0),
            45.0,
            10.0,
            CameraConfig::default(),
        );
        camera.accumulate_input(1.0, 1.0, 30.0, -15.0);
        camera.update();
        camera.accumulate_input(0.0, 0.0, 7.0, 0.0);
        camera.reset();
        camera.update();

        assert_eq!(camera.eye(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.yaw(), 45.0);
        assert_eq!(camera.pitch(), 10.0);
    }
}
