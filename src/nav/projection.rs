//! Navigation modes and their fixed axis-lock frames.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Navigation mode of a component.
///
/// Serialized with the short names editors use for the projection property:
/// `"3d"`, `"x"`, `"y"`, `"z"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum NavProjection {
    /// Free-flying perspective camera.
    #[default]
    #[serde(rename = "3d")]
    Perspective,
    /// Orthographic, looking down the negative X axis.
    #[serde(rename = "x")]
    OrthoX,
    /// Orthographic, looking down the negative Y axis.
    #[serde(rename = "y")]
    OrthoY,
    /// Orthographic, looking down the negative Z axis.
    #[serde(rename = "z")]
    OrthoZ,
}

impl NavProjection {
    /// All modes.
    pub const ALL: [Self; 4] =
        [Self::Perspective, Self::OrthoX, Self::OrthoY, Self::OrthoZ];

    /// Whether this is the perspective mode.
    #[must_use]
    pub const fn is_perspective(self) -> bool {
        matches!(self, Self::Perspective)
    }

    /// Fixed `(eye_direction, up)` of an axis lock; `None` for perspective.
    #[must_use]
    pub const fn axis_frame(self) -> Option<(Vec3, Vec3)> {
        match self {
            Self::Perspective => None,
            Self::OrthoX => Some((Vec3::NEG_X, Vec3::Z)),
            Self::OrthoY => Some((Vec3::NEG_Y, Vec3::Z)),
            Self::OrthoZ => Some((Vec3::NEG_Z, Vec3::Y)),
        }
    }

    /// Short property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Perspective => "3d",
            Self::OrthoX => "x",
            Self::OrthoY => "y",
            Self::OrthoZ => "z",
        }
    }
}

impl fmt::Display for NavProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavProjection {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .or_else(|| {
                s.eq_ignore_ascii_case("perspective")
                    .then_some(Self::Perspective)
            })
            .ok_or_else(|| NavError::InvalidValue {
                property: "Projection".to_owned(),
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_frames_are_orthonormal() {
        for mode in NavProjection::ALL {
            if let Some((eye, up)) = mode.axis_frame() {
                assert!((eye.length() - 1.0).abs() < 1e-6);
                assert!((up.length() - 1.0).abs() < 1e-6);
                assert!(eye.dot(up).abs() < 1e-6);
            }
        }
        assert_eq!(
            NavProjection::OrthoZ.axis_frame(),
            Some((Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn parses_short_names() {
        assert_eq!("3d".parse::<NavProjection>().ok(), Some(NavProjection::Perspective));
        assert_eq!("Perspective".parse::<NavProjection>().ok(), Some(NavProjection::Perspective));
        assert_eq!(" X ".parse::<NavProjection>().ok(), Some(NavProjection::OrthoX));
        assert_eq!("z".parse::<NavProjection>().ok(), Some(NavProjection::OrthoZ));
        assert!("w".parse::<NavProjection>().is_err());
    }

    #[test]
    fn serde_uses_short_names() {
        let json = serde_json::to_string(&NavProjection::OrthoY).unwrap();
        assert_eq!(json, "\"y\"");
        let back: NavProjection = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(back, NavProjection::Perspective);
    }
}
