use glam::{Mat4, Vec3};

use crate::state::OrbitSettings;

/// Anything that can produce a view-projection matrix for a viewport
pub trait ViewCamera {
    fn view_projection(&self, aspect: f32) -> Mat4;
}

/// Pending rotation below this (radians) is dropped
const DAMPING_EPSILON: f32 = 1e-4;
/// Distance multiplier per scroll unit
const ZOOM_SCALE: f32 = 0.95;

/// Orbit camera for the main perspective view.
///
/// Rotation input is accumulated and bled off every frame by the damping
/// factor, so the view keeps gliding briefly after a drag ends.
#[derive(Clone, Copy)]
pub struct OrbitCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
}

impl OrbitCamera {
    /// Initial eye position of the main view
    pub const HOME_EYE: Vec3 = Vec3::new(0.0, 5.0, 15.0);

    pub fn new(settings: &OrbitSettings) -> Self {
        Self::looking_from(Self::HOME_EYE, Vec3::ZERO, settings)
    }

    /// Camera placed at `eye`, orbiting `target`
    pub fn looking_from(eye: Vec3, target: Vec3, settings: &OrbitSettings) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance: distance.clamp(settings.min_distance, settings.max_distance),
            target,
            fov: settings.fov_degrees.to_radians(),
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            damping: settings.damping_factor.clamp(0.0, 1.0),
            min_distance: settings.min_distance,
            max_distance: settings.max_distance,
            rotate_speed: settings.rotate_speed,
        }
    }

    /// Queue a rotation from a pointer drag (pixels)
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= (dx * self.rotate_speed).to_radians();
        self.pending_pitch += (dy * self.rotate_speed).to_radians();
    }

    pub fn zoom(&mut self, scroll: f32) {
        let factor = ZOOM_SCALE.powf(scroll);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Pan the target in the horizontal plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * 0.002;
        let right = self.right_vector();
        let forward = Vec3::Y.cross(right).normalize_or_zero();
        self.target += (-right * dx + forward * dy) * scale;
    }

    /// Advance damping by one frame. Returns `true` while still moving.
    pub fn update(&mut self) -> bool {
        let (dyaw, dpitch) = if self.damping > 0.0 {
            (self.pending_yaw * self.damping, self.pending_pitch * self.damping)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-1.5, 1.5);

        if self.damping > 0.0 {
            self.pending_yaw *= 1.0 - self.damping;
            self.pending_pitch *= 1.0 - self.damping;
        } else {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
        }

        if self.pending_yaw.abs() < DAMPING_EPSILON && self.pending_pitch.abs() < DAMPING_EPSILON {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            return false;
        }
        true
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 1000.0)
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }
}

impl ViewCamera for OrbitCamera {
    fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Fixed orthographic camera looking at the origin.
///
/// The frustum does not follow the viewport aspect ratio.
#[derive(Clone, Copy)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub up: Vec3,
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoCamera {
    const HALF_EXTENT: f32 = 10.0;
    const NEAR: f32 = 0.1;
    const FAR: f32 = 100.0;

    fn looking_from(eye: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            up,
            half_extent: Self::HALF_EXTENT,
            near: Self::NEAR,
            far: Self::FAR,
        }
    }

    /// Looking down -Y; screen-up is -Z
    pub fn top() -> Self {
        Self::looking_from(Vec3::new(0.0, 20.0, 0.0), Vec3::NEG_Z)
    }

    /// Looking along -X
    pub fn side() -> Self {
        Self::looking_from(Vec3::new(20.0, 0.0, 0.0), Vec3::Y)
    }

    /// Looking along -Z
    pub fn front() -> Self {
        Self::looking_from(Vec3::new(0.0, 0.0, 20.0), Vec3::Y)
    }
}

impl ViewCamera for OrthoCamera {
    fn view_projection(&self, _aspect: f32) -> Mat4 {
        let e = self.half_extent;
        Mat4::orthographic_rh_gl(-e, e, -e, e, self.near, self.far)
            * Mat4::look_at_rh(self.eye, Vec3::ZERO, self.up)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn ndc(vp: Mat4, p: Vec3) -> Vec3 {
        let clip = vp * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn test_home_eye_roundtrip() {
        let cam = OrbitCamera::new(&OrbitSettings::default());
        let eye = cam.eye_position();
        assert!((eye - OrbitCamera::HOME_EYE).length() < 1e-4);
    }

    #[test]
    fn test_zoom_clamped_to_limits() {
        let mut cam = OrbitCamera::new(&OrbitSettings::default());
        cam.zoom(1000.0);
        assert_eq!(cam.distance, 5.0);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance, 50.0);
    }

    #[test]
    fn test_damping_spreads_rotation_over_frames() {
        let mut cam = OrbitCamera::new(&OrbitSettings::default());
        let start = cam.yaw;
        cam.rotate(100.0, 0.0);
        assert!(cam.update());
        let first_step = (cam.yaw - start).abs();
        let total = (100.0_f32 * 0.5).to_radians();
        assert!((first_step - total * 0.05).abs() < 1e-5);

        let mut frames = 0;
        while cam.update() {
            frames += 1;
            assert!(frames < 1000, "damping never settled");
        }
        assert!(((cam.yaw - start).abs() - total).abs() < 0.01);
    }

    #[test]
    fn test_no_damping_applies_immediately() {
        let settings = OrbitSettings {
            damping_factor: 0.0,
            ..OrbitSettings::default()
        };
        let mut cam = OrbitCamera::new(&settings);
        let start = cam.yaw;
        cam.rotate(10.0, 0.0);
        assert!(!cam.update());
        assert!(((cam.yaw - start).abs() - 5.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_ortho_views_center_origin() {
        for cam in [OrthoCamera::top(), OrthoCamera::side(), OrthoCamera::front()] {
            let p = ndc(cam.view_projection(1.0), Vec3::ZERO);
            assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        }
    }

    #[test]
    fn test_top_view_orientation() {
        let vp = OrthoCamera::top().view_projection(1.0);
        // +X to the right, -Z up on screen
        assert!(ndc(vp, Vec3::new(5.0, 0.0, 0.0)).x > 0.0);
        assert!(ndc(vp, Vec3::new(0.0, 0.0, -5.0)).y > 0.0);
    }

    #[test]
    fn test_ortho_frustum_extent() {
        let vp = OrthoCamera::front().view_projection(2.0);
        let p = ndc(vp, Vec3::new(10.0, 10.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }
}
