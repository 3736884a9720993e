use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Held actions (movement, turning, fast) are polled every tick; the speed
/// step actions fire on key press.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// fast = "ShiftLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Translate along the eye direction.
    MoveForward,
    /// Translate against the eye direction.
    MoveBackward,
    /// Translate against the right axis.
    StrafeLeft,
    /// Translate along the right axis.
    StrafeRight,
    /// Translate against the camera-local up axis.
    MoveDown,
    /// Translate along the camera-local up axis.
    MoveUp,
    /// Yaw left.
    TurnLeft,
    /// Yaw right.
    TurnRight,
    /// Pitch towards the zenith.
    PitchUp,
    /// Pitch towards the nadir.
    PitchDown,
    /// Multiply translation speed while held.
    Fast,
    /// Scale the move speed up one step.
    SpeedUp,
    /// Scale the move speed down one step.
    SpeedDown,
}

impl NavAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::MoveDown,
        Self::MoveUp,
        Self::TurnLeft,
        Self::TurnRight,
        Self::PitchUp,
        Self::PitchDown,
        Self::Fast,
        Self::SpeedUp,
        Self::SpeedDown,
    ];
}

/// Index into the speed ladder for a digit key (`"Digit1"` → 0 ...
/// `"Digit0"` → 9).
#[must_use]
pub fn speed_preset_index(key: &str) -> Option<usize> {
    let digit = key.strip_prefix("Digit")?;
    match digit.as_bytes() {
        [b'0'] => Some(9),
        [d @ b'1'..=b'9'] => Some(usize::from(d - b'1')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_onto_ladder() {
        assert_eq!(speed_preset_index("Digit1"), Some(0));
        assert_eq!(speed_preset_index("Digit5"), Some(4));
        assert_eq!(speed_preset_index("Digit9"), Some(8));
        assert_eq!(speed_preset_index("Digit0"), Some(9));
        assert_eq!(speed_preset_index("Digit10"), None);
        assert_eq!(speed_preset_index("Numpad5"), None);
        assert_eq!(speed_preset_index("KeyW"), None);
    }
}
