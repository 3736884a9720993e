use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// World vertical axis.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// How the camera projects the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Perspective projection driven by `fovy`/`aspect`.
    #[default]
    Perspective,
    /// Orthographic projection driven by [`OrthoBounds`].
    Orthographic,
}

/// Extents of the orthographic view volume, in world units around the eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoBounds {
    /// Left plane.
    pub left: f32,
    /// Right plane.
    pub right: f32,
    /// Top plane.
    pub top: f32,
    /// Bottom plane.
    pub bottom: f32,
}

impl OrthoBounds {
    /// Symmetric bounds with the given half extent on both axes.
    ///
    /// `top` is the positive side (`top = extent`, `bottom = -extent`), so
    /// world up along the camera's `up` axis appears at the top of the
    /// viewport. Editors that store `top = -extent` get a vertically
    /// mirrored image with the same `top = -bottom` symmetry.
    #[must_use]
    pub fn symmetric(extent: f32) -> Self {
        Self {
            left: -extent,
            right: extent,
            top: extent,
            bottom: -extent,
        }
    }
}

impl Default for OrthoBounds {
    fn default() -> Self {
        Self::symmetric(1000.0)
    }
}

/// Camera pose and projection parameters.
///
/// Navigation writes `position`, `eye_direction`, `up`, `projection` and
/// `ortho` and then calls [`Camera::commit`]; the view-projection matrix is
/// only recomputed on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit forward direction.
    pub eye_direction: Vec3,
    /// Unit up direction.
    pub up: Vec3,
    /// Current projection mode.
    pub projection: ProjectionMode,
    /// Orthographic extents (used only in orthographic mode).
    pub ortho: OrthoBounds,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    view_proj: Mat4,
    commits: u64,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            eye_direction: Vec3::Y,
            up: WORLD_UP,
            projection: ProjectionMode::Perspective,
            ortho: OrthoBounds::default(),
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 1.0,
            zfar: 100_000.0,
            view_proj: Mat4::IDENTITY,
            commits: 0,
        };
        camera.view_proj = camera.build_matrix();
        camera
    }
}

impl Camera {
    /// Camera at `position` looking along `eye_direction` with world-vertical
    /// up.
    #[must_use]
    pub fn looking(position: Vec3, eye_direction: Vec3) -> Self {
        let mut camera = Self {
            position,
            eye_direction: eye_direction.normalize_or(Vec3::Y),
            ..Self::default()
        };
        camera.view_proj = camera.build_matrix();
        camera
    }

    /// Build the view matrix from the current pose.
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.eye_direction, self.up)
    }

    /// Build the projection matrix for the current mode.
    pub fn build_projection(&self) -> Mat4 {
        // *_rh use a [0,1] depth range
        match self.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.fovy.to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => Mat4::orthographic_rh(
                self.ortho.left,
                self.ortho.right,
                self.ortho.bottom,
                self.ortho.top,
                -self.zfar,
                self.zfar,
            ),
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Signal that the pose is final for this update and recompute derived
    /// matrices.
    pub fn commit(&mut self) {
        self.view_proj = self.build_matrix();
        self.commits += 1;
    }

    /// View-projection matrix as of the last commit.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }

    /// Number of commits so far.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Horizontal right axis of the current frame (`eye × up`).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.eye_direction.cross(self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_recomputes_matrix() {
        let mut camera = Camera::default();
        let before = camera.view_proj();
        camera.position = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(camera.view_proj(), before);

        camera.commit();
        assert_ne!(camera.view_proj(), before);
        assert_eq!(camera.commit_count(), 1);
    }

    #[test]
    fn ortho_matrix_follows_bounds() {
        let mut camera = Camera::default();
        camera.projection = ProjectionMode::Orthographic;
        camera.ortho = OrthoBounds::symmetric(10.0);
        camera.eye_direction = Vec3::NEG_Z;
        camera.up = Vec3::Y;
        camera.commit();

        // A point on the right edge lands on clip x = 1.
        let clip = camera.view_proj().project_point3(Vec3::new(10.0, 0.0, -5.0));
        assert!((clip.x - 1.0).abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
    }

    #[test]
    fn symmetric_bounds_put_top_on_the_positive_side() {
        let bounds = OrthoBounds::symmetric(1200.0);
        assert_eq!(bounds.left, -bounds.right);
        assert_eq!(bounds.top, -bounds.bottom);
        assert_eq!(bounds.right, 1200.0);
        assert_eq!(bounds.top, 1200.0);
        assert_eq!(bounds.bottom, -1200.0);
    }
}
