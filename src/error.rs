//! Crate-level error types.

use std::fmt;

use crate::entity::EntityId;

/// Errors produced by the editcam crate.
///
/// None of these are fatal to the host: navigation failures degrade to
/// "do nothing this frame".
#[derive(Debug)]
pub enum NavError {
    /// A navigation component already exists for this entity.
    DuplicateComponent(EntityId),
    /// Creation was requested for [`EntityId::NONE`].
    NullEntity,
    /// A tooling command named a property the component does not have.
    UnknownProperty(String),
    /// A tooling command carried a value the property cannot take.
    InvalidValue {
        /// Property name.
        property: String,
        /// Rejected value as given.
        value: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateComponent(id) => write!(
                f,
                "navigation component with id {id} already exists"
            ),
            Self::NullEntity => {
                write!(f, "cannot attach navigation to the null entity")
            }
            Self::UnknownProperty(name) => {
                write!(f, "unknown navigation property: {name}")
            }
            Self::InvalidValue { property, value } => {
                write!(f, "invalid value for {property}: {value}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
