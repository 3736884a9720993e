//! Typed navigation commands.
//!
//! Tooling (property panels, scripts, remote consoles) changes navigation
//! state through a [`NavCommand`] instead of writing fields by name.
//! [`NavCommand::from_property`] maps the editor's property names onto
//! these variants.

use super::projection::NavProjection;
use crate::error::NavError;

/// A state change a navigation component accepts from tooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    /// Switch perspective / axis-lock mode.
    SetProjection(NavProjection),
    /// Set the translation speed (must be positive).
    SetMoveSpeed(f32),
    /// Set the orthographic zoom level (must be positive).
    SetZoomLevel(f32),
}

impl NavCommand {
    /// Parse a `(property, value)` pair, e.g. `("Projection", "z")`.
    /// Property names are case-insensitive.
    pub fn from_property(property: &str, value: &str) -> Result<Self, NavError> {
        let invalid = || NavError::InvalidValue {
            property: property.to_owned(),
            value: value.to_owned(),
        };
        let number = || {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or_else(invalid)
        };

        match property.to_ascii_lowercase().as_str() {
            "projection" => Ok(Self::SetProjection(value.parse()?)),
            "movespeed" | "move_speed" => Ok(Self::SetMoveSpeed(number()?)),
            "zoom" | "zoom_level" => Ok(Self::SetZoomLevel(number()?)),
            _ => Err(NavError::UnknownProperty(property.to_owned())),
        }
    }
}
