use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping navigation actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<NavAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, NavAction>,
}

fn default_key(action: NavAction) -> &'static str {
    match action {
        NavAction::MoveForward => "KeyW",
        NavAction::MoveBackward => "KeyS",
        NavAction::StrafeLeft => "KeyA",
        NavAction::StrafeRight => "KeyD",
        NavAction::MoveDown => "KeyQ",
        NavAction::MoveUp => "KeyE",
        NavAction::TurnLeft => "ArrowLeft",
        NavAction::TurnRight => "ArrowRight",
        NavAction::PitchUp => "ArrowUp",
        NavAction::PitchDown => "ArrowDown",
        NavAction::Fast => "ShiftLeft",
        NavAction::SpeedUp => "NumpadAdd",
        NavAction::SpeedDown => "NumpadSubtract",
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = NavAction::ALL
            .into_iter()
            .map(|action| (action, default_key(action).to_owned()))
            .collect();

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind every action missing from `bindings` to its default key, then
    /// rebuild the reverse map. Partial presets only override what they
    /// name.
    pub fn fill_defaults(&mut self) {
        for action in NavAction::ALL {
            let _ = self
                .bindings
                .entry(action)
                .or_insert_with(|| default_key(action).to_owned());
        }
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.key_to_action.get(key).copied()
    }

    /// The key bound to an action.
    #[must_use]
    pub fn key_for(&self, action: NavAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
