//! Input handling: event types, the polled input backend, and the listener
//! interface navigation components implement.

/// Platform-agnostic input events.
pub mod event;
/// Bindable navigation actions and the digit speed ladder.
pub mod keyboard;
/// Listener trait and cursor-lock interface.
pub mod listener;
/// Polled key/button/axis state and listener registration.
pub mod state;

pub use event::{Axis, InputEvent, MouseButton};
pub use keyboard::{speed_preset_index, NavAction};
pub use listener::{CursorGrab, CursorState, InputContext, InputListener};
pub use state::{InputQuery, InputState};
