use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{Axis, InputEvent, MouseButton};
use crate::entity::EntityId;

/// Per-frame polled input, as seen by navigation components.
pub trait InputQuery {
    /// Whether the physical key is currently held.
    fn is_key_down(&self, key: &str) -> bool;
    /// Whether the mouse button is currently held.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;
    /// Current value of an analog axis.
    fn axis(&self, axis: Axis) -> f32;
}

/// Polled input backend.
///
/// Tracks held keys and buttons, the cursor position and raw mouse motion
/// accumulated since the last [`end_frame`](Self::end_frame). It also keeps
/// the list of entities registered as input listeners; the registry delivers
/// events to exactly those.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: FxHashSet<String>,
    buttons_down: FxHashSet<MouseButton>,
    cursor_pos: (f32, f32),
    mouse_delta: Vec2,
    listeners: Vec<EntityId>,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an event into the polled state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                let _ = self.keys_down.insert(key.clone());
            }
            InputEvent::KeyUp { key } => {
                let _ = self.keys_down.remove(key);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.buttons_down.insert(*button);
                } else {
                    let _ = self.buttons_down.remove(button);
                }
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor_pos = (*x, *y);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(*dx, *dy);
            }
            InputEvent::Scroll { .. } => {}
        }
    }

    /// Reset per-frame accumulators. Call after the frame's tick.
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }

    /// Release every key and button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor_pos(&self) -> (f32, f32) {
        self.cursor_pos
    }

    /// Raw mouse motion accumulated this frame.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Register `entity` as an input listener. Returns `false` if it already
    /// was.
    pub fn add_listener(&mut self, entity: EntityId) -> bool {
        if self.listeners.contains(&entity) {
            return false;
        }
        self.listeners.push(entity);
        true
    }

    /// Deregister `entity`. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, entity: EntityId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|&e| e != entity);
        self.listeners.len() != before
    }

    /// Registered listeners in registration order.
    #[must_use]
    pub fn listeners(&self) -> &[EntityId] {
        &self.listeners
    }
}

impl InputQuery for InputState {
    fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::MouseDeltaX => self.mouse_delta.x,
            Axis::MouseDeltaY => self.mouse_delta.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_down_and_up() {
        let mut input = InputState::new();
        input.apply(&InputEvent::KeyDown { key: "KeyW".into() });
        assert!(input.is_key_down("KeyW"));
        assert!(!input.is_key_down("KeyS"));

        input.apply(&InputEvent::KeyUp { key: "KeyW".into() });
        assert!(!input.is_key_down("KeyW"));
    }

    #[test]
    fn motion_accumulates_until_end_of_frame() {
        let mut input = InputState::new();
        input.apply(&InputEvent::MouseMotion { dx: 2.0, dy: -1.0 });
        input.apply(&InputEvent::MouseMotion { dx: 3.0, dy: 0.5 });
        assert_eq!(input.axis(Axis::MouseDeltaX), 5.0);
        assert_eq!(input.axis(Axis::MouseDeltaY), -0.5);

        input.end_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn buttons_and_release_all() {
        let mut input = InputState::new();
        input.apply(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        input.apply(&InputEvent::KeyDown { key: "ShiftLeft".into() });
        assert!(input.is_mouse_button_down(MouseButton::Left));
        assert!(!input.is_mouse_button_down(MouseButton::Right));

        input.release_all();
        assert!(!input.is_mouse_button_down(MouseButton::Left));
        assert!(!input.is_key_down("ShiftLeft"));
    }

    #[test]
    fn listener_registration_is_unique() {
        let mut input = InputState::new();
        let id = EntityId::new(7);
        assert!(input.add_listener(id));
        assert!(!input.add_listener(id));
        assert_eq!(input.listeners(), &[id]);

        assert!(input.remove_listener(id));
        assert!(!input.remove_listener(id));
        assert!(input.listeners().is_empty());
    }
}
