use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of entries on the digit-key speed ladder.
pub const SPEED_PRESET_COUNT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Navigation speeds, steps and limits.
pub struct NavOptions {
    /// Initial translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 1.0, max = 20000.0))]
    pub move_speed: f32,
    /// Mouse-drag look gain in radians per unit of raw mouse motion.
    #[schemars(title = "Rotate Speed", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub rotate_speed: f32,
    /// Arrow-key turn rate in radians per second.
    #[schemars(title = "Key Turn Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub rotate_key_speed: f32,
    /// Factor applied by the speed up/down keys.
    #[schemars(skip)]
    pub speed_step: f32,
    /// Translation speed factor while the fast key is held.
    #[schemars(title = "Fast Multiplier", range(min = 1.0, max = 20.0))]
    pub fast_multiplier: f32,
    /// Move speeds selected by the digit keys 1-9 and 0, in that order.
    #[schemars(skip)]
    pub speed_presets: [f32; SPEED_PRESET_COUNT],
    /// Factor applied to the orthographic zoom level per wheel step.
    #[schemars(title = "Ortho Zoom Step", range(min = 1.01, max = 3.0), extend("step" = 0.01))]
    pub ortho_zoom_step: f32,
    /// Half extent of the orthographic view at zoom level 1.
    #[schemars(skip)]
    pub ortho_extent: f32,
    /// Orthographic pan distance per unit of mouse motion at zoom level 1.
    #[schemars(title = "Ortho Pan Scale", range(min = 0.1, max = 20.0))]
    pub ortho_pan_scale: f32,
    /// Largest `|eye_direction.z|` keyboard pitching may reach.
    #[schemars(skip)]
    pub pitch_limit: f32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            move_speed: 100.0,
            rotate_speed: 0.001,
            rotate_key_speed: 2.0,
            speed_step: 1.1,
            fast_multiplier: 4.0,
            speed_presets: [
                5.0, 15.0, 40.0, 100.0, 250.0, 600.0, 1500.0, 4000.0, 9000.0,
                20000.0,
            ],
            ortho_zoom_step: 1.2,
            ortho_extent: 1000.0,
            ortho_pan_scale: 4.0,
            pitch_limit: 0.99,
        }
    }
}

impl NavOptions {
    /// Replace values that would break the positivity invariants with their
    /// defaults. Returns the names of the fields that were reset.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let positive = |v: f32| v > 0.0;
        let mut reset = Vec::new();

        let checks = [
            (&mut self.move_speed, defaults.move_speed, "move_speed"),
            (&mut self.speed_step, defaults.speed_step, "speed_step"),
            (
                &mut self.fast_multiplier,
                defaults.fast_multiplier,
                "fast_multiplier",
            ),
            (
                &mut self.ortho_zoom_step,
                defaults.ortho_zoom_step,
                "ortho_zoom_step",
            ),
            (&mut self.ortho_extent, defaults.ortho_extent, "ortho_extent"),
        ];
        for (value, fallback, name) in checks {
            if reset_unless(value, fallback, positive) {
                reset.push(name);
            }
        }
        if reset_unless(&mut self.pitch_limit, defaults.pitch_limit, |v| {
            v > 0.0 && v < 1.0
        }) {
            reset.push("pitch_limit");
        }
        let mut presets_reset = false;
        for (preset, fallback) in
            self.speed_presets.iter_mut().zip(defaults.speed_presets)
        {
            presets_reset |= reset_unless(preset, fallback, positive);
        }
        if presets_reset {
            reset.push("speed_presets");
        }
        reset
    }
}

/// Reset `value` to `fallback` unless it is finite and passes `ok`.
fn reset_unless(value: &mut f32, fallback: f32, ok: impl Fn(f32) -> bool) -> bool {
    if value.is_finite() && ok(*value) {
        return false;
    }
    *value = fallback;
    true
}
