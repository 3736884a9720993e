/// Platform-agnostic input events.
///
/// Hosts translate their window events into these and feed them first to
/// [`InputState::apply`](super::InputState::apply) (so polled state is
/// current) and then to the registered listeners.
///
/// # Example
///
/// ```ignore
/// let event = InputEvent::KeyDown { key: "KeyW".into() };
/// input.apply(&event);
/// registry.dispatch(&event, false, &input, &mut cursor);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed. Key strings use the `winit::keyboard::KeyCode` debug
    /// format: `"KeyW"`, `"Digit3"`, `"NumpadAdd"`, `"ShiftLeft"`.
    KeyDown {
        /// Physical key name.
        key: String,
    },
    /// Key released.
    KeyUp {
        /// Physical key name.
        key: String,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in lines (positive = away from the user).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Raw relative mouse motion, independent of cursor position and still
    /// reported while the cursor is locked.
    MouseMotion {
        /// Horizontal motion.
        dx: f32,
        /// Vertical motion.
        dy: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (thumb buttons, extra buttons). Navigation ignores
    /// it.
    Other,
}

/// Analog input axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Raw horizontal mouse motion accumulated this frame.
    MouseDeltaX,
    /// Raw vertical mouse motion accumulated this frame.
    MouseDeltaY,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Vertical wheel motion as a [`InputEvent::Scroll`], in lines. Pixel
    /// deltas are scaled by 0.01. Motion without a vertical part (e.g. a
    /// horizontal touchpad swipe) yields `None`.
    #[must_use]
    pub fn scroll_from_winit(delta: winit::event::MouseScrollDelta) -> Option<Self> {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
        };
        (delta != 0.0 && delta.is_finite()).then_some(Self::Scroll { delta })
    }
}
