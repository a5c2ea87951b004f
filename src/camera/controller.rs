use glam::{Quat, Vec2, Vec3};

use super::pose::CameraPose;
use crate::options::CameraOptions;
use crate::util::easing::EasingFunction;

/// The camera operations the viewer core depends on.
///
/// `move_to` may animate; completion is fire-and-forget from the caller's
/// point of view.
pub trait CameraController {
    /// The camera's pose right now (mid-transition poses included).
    fn current_pose(&self) -> CameraPose;

    /// Send the camera to `pose`.
    fn move_to(&mut self, pose: CameraPose);
}

/// An in-flight eased transition between two poses.
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: CameraPose,
    to: CameraPose,
    elapsed: f32,
    duration: f32,
}

/// Free-flying camera with eased `move_to` transitions.
///
/// Call [`update`](Self::update) once per frame with the frame delta to
/// advance an active transition.
pub struct OrbitCamera {
    pose: CameraPose,
    transition: Option<Transition>,
    transition_secs: f32,
    easing: EasingFunction,
    rotate_speed: f32,
}

impl OrbitCamera {
    /// Create a camera at `pose` using the given transition options.
    #[must_use]
    pub fn new(pose: CameraPose, options: &CameraOptions) -> Self {
        Self {
            pose,
            transition: None,
            transition_secs: options.transition_secs.max(0.0),
            easing: options.easing,
            rotate_speed: 0.01,
        }
    }

    /// Apply new transition options. An active transition keeps its
    /// original duration.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.transition_secs = options.transition_secs.max(0.0);
        self.easing = options.easing;
    }

    /// Whether a `move_to` transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The pose the camera will settle at.
    #[must_use]
    pub fn target_pose(&self) -> CameraPose {
        self.transition.map_or(self.pose, |t| t.to)
    }

    /// Advance the active transition by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(mut transition) = self.transition else {
            return;
        };
        transition.elapsed += dt;
        if transition.elapsed >= transition.duration {
            self.pose = transition.to;
            self.transition = None;
            return;
        }
        let t = self
            .easing
            .evaluate(transition.elapsed / transition.duration);
        self.pose = transition.from.interpolate(&transition.to, t);
        self.transition = Some(transition);
    }

    /// Rotate in place by `delta` pixels of drag. Cancels any transition.
    pub fn rotate(&mut self, delta: Vec2) {
        self.transition = None;
        let orientation = self.pose.orientation;

        // Horizontal rotation around camera's up vector
        let up = orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        let orientation = horizontal * orientation;

        // Vertical rotation around camera's right vector (after horizontal)
        let right = orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);

        self.pose.orientation = (vertical * orientation).normalize();
    }

    /// Translate in world space. Cancels any transition.
    pub fn translate(&mut self, offset: Vec3) {
        self.transition = None;
        self.pose.position += offset;
    }
}

impl CameraController for OrbitCamera {
    fn current_pose(&self) -> CameraPose {
        self.pose
    }

    fn move_to(&mut self, pose: CameraPose) {
        if self.transition_secs <= 0.0 {
            self.pose = pose;
            self.transition = None;
            return;
        }
        log::debug!(
            "camera transition to {:?} over {:.2}s",
            pose.position,
            self.transition_secs
        );
        self.transition = Some(Transition {
            from: self.pose,
            to: pose,
            elapsed: 0.0,
            duration: self.transition_secs,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(transition_secs: f32) -> CameraOptions {
        CameraOptions {
            transition_secs,
            easing: EasingFunction::Linear,
        }
    }

    #[test]
    fn zero_duration_snaps() {
        let mut camera = OrbitCamera::new(CameraPose::ZERO, &options(0.0));
        let target = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        camera.move_to(target);
        assert!(!camera.is_animating());
        assert_eq!(camera.current_pose(), target);
    }

    #[test]
    fn transition_progresses_and_settles() {
        let mut camera = OrbitCamera::new(CameraPose::ZERO, &options(1.0));
        let target =
            CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY);
        camera.move_to(target);
        assert!(camera.is_animating());
        assert_eq!(camera.target_pose(), target);

        camera.update(0.5);
        let mid = camera.current_pose();
        assert!((mid.position.x - 5.0).abs() < 1e-4);

        camera.update(0.6);
        assert!(!camera.is_animating());
        assert_eq!(camera.current_pose(), target);
    }

    #[test]
    fn manual_input_cancels_transition() {
        let mut camera = OrbitCamera::new(CameraPose::ZERO, &options(1.0));
        camera.move_to(CameraPose::new(Vec3::X, Quat::IDENTITY));
        camera.translate(Vec3::Y);
        assert!(!camera.is_animating());
        assert_eq!(camera.current_pose().position, Vec3::Y);
    }

    #[test]
    fn rotate_keeps_orientation_normalized() {
        let mut camera = OrbitCamera::new(CameraPose::ZERO, &options(0.0));
        camera.rotate(Vec2::new(40.0, -25.0));
        assert!(camera.current_pose().orientation.is_normalized());
        assert_ne!(camera.current_pose().orientation, Quat::IDENTITY);
    }

    #[test]
    fn new_options_apply_to_the_next_transition() {
        let mut camera = OrbitCamera::new(CameraPose::ZERO, &options(1.0));
        camera.set_options(&options(0.0));
        let target = CameraPose::new(Vec3::Z, Quat::IDENTITY);
        camera.move_to(target);
        assert!(!camera.is_animating());
        assert_eq!(camera.current_pose(), target);

        camera.set_options(&options(2.0));
        camera.move_to(CameraPose::ZERO);
        camera.update(1.0);
        assert!(camera.is_animating());
        assert!((camera.current_pose().position.z - 0.5).abs() < 1e-4);
    }
}
