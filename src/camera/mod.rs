//! Camera pose, projection and the host-side camera lookup.
//!
//! The navigation components never own a camera: they resolve a
//! [`SharedCamera`] from a [`CameraSource`] and write its pose.

/// Camera struct, projection modes and derived matrices.
pub mod core;
/// Entity → camera lookup.
pub mod store;

pub use self::core::{Camera, OrthoBounds, ProjectionMode, WORLD_UP};
pub use store::{CameraSource, CameraStore, SharedCamera};
