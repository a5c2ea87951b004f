//! Camera pose and controller abstraction.
//!
//! Bookmarks only need two things from a camera: its current pose and a way
//! to send it somewhere. [`CameraController`] captures exactly that, and
//! [`OrbitCamera`] is a self-contained implementation with eased
//! transitions.

/// Camera controller trait and the eased [`OrbitCamera`].
pub mod controller;
/// Position + orientation value type.
pub mod pose;

pub use controller::{CameraController, OrbitCamera};
pub use pose::CameraPose;
