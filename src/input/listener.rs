use super::event::{InputEvent, MouseButton};
use super::state::InputQuery;

/// Windowing-layer cursor lock.
pub trait CursorGrab {
    /// Lock (hide and confine) or release the cursor.
    fn set_cursor_locked(&mut self, locked: bool);
}

/// Headless cursor that only remembers the requested lock state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Whether the cursor is currently locked.
    pub locked: bool,
}

impl CursorGrab for CursorState {
    fn set_cursor_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

/// Collaborators available to a listener while it handles an event.
pub struct InputContext<'a> {
    /// Polled input, already updated with the event being handled.
    pub input: &'a dyn InputQuery,
    /// Cursor lock of the window the event came from.
    pub cursor: &'a mut dyn CursorGrab,
}

/// Receiver of discrete input events.
///
/// `handled` is `true` when an earlier receiver already consumed the event.
/// Listeners observe it but never clear it. All methods default to doing
/// nothing.
pub trait InputListener {
    /// A key was pressed.
    fn on_key_down(
        &mut self,
        _key: &str,
        _handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
    }

    /// A mouse button was pressed.
    fn on_mouse_button_down(
        &mut self,
        _button: MouseButton,
        _handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
    }

    /// A mouse button was released.
    fn on_mouse_button_up(
        &mut self,
        _button: MouseButton,
        _handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
    }

    /// The wheel turned; `direction` is positive away from the user.
    fn on_mouse_wheel(
        &mut self,
        _direction: f32,
        _handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
    }

    /// The mouse moved; `(x, y)` is the cursor position.
    fn on_mouse_move(
        &mut self,
        _x: f32,
        _y: f32,
        _handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
    }

    /// Route an [`InputEvent`] to the matching handler.
    ///
    /// Key releases and raw motion only update polled state and have no
    /// handler.
    fn handle_event(
        &mut self,
        event: &InputEvent,
        handled: bool,
        ctx: &mut InputContext<'_>,
    ) {
        match event {
            InputEvent::KeyDown { key } => self.on_key_down(key, handled, ctx),
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => self.on_mouse_button_down(*button, handled, ctx),
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => self.on_mouse_button_up(*button, handled, ctx),
            InputEvent::Scroll { delta } => {
                self.on_mouse_wheel(*delta, handled, ctx);
            }
            InputEvent::CursorMoved { x, y } => {
                self.on_mouse_move(*x, *y, handled, ctx);
            }
            InputEvent::KeyUp { .. } | InputEvent::MouseMotion { .. } => {}
        }
    }
}
