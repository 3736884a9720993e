//! Per-entity navigation state machine.

use std::rc::Rc;

use glam::{Quat, Vec3};

use super::command::NavCommand;
use super::projection::NavProjection;
use crate::camera::{
    Camera, CameraSource, OrthoBounds, ProjectionMode, SharedCamera, WORLD_UP,
};
use crate::entity::EntityId;
use crate::input::{
    speed_preset_index, Axis, InputContext, InputListener, InputQuery,
    MouseButton, NavAction,
};
use crate::options::Options;

/// Perspective orientation saved while an axis lock is active.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PerspectiveFrame {
    eye_direction: Vec3,
    up: Vec3,
}

/// Per-entity editor navigation.
///
/// Translates key, wheel and drag input into pose changes of the camera
/// attached to the same entity. The camera is resolved lazily by
/// [`activate`](Self::activate); until then every navigation operation is a
/// no-op.
///
/// In perspective mode the camera flies freely: keys translate and turn,
/// dragging looks around, the wheel dollies. In the orthographic axis locks
/// the view direction is fixed: dragging pans and the wheel zooms.
#[derive(Debug)]
pub struct NavigationComponent {
    entity: EntityId,
    camera: Option<SharedCamera>,
    options: Rc<Options>,

    projection: NavProjection,
    move_speed: f32,
    rotate_speed: f32,
    rotate_key_speed: f32,
    zoom_level: f32,
    last_perspective: Option<PerspectiveFrame>,
}

impl NavigationComponent {
    /// Create a component for `entity` with speeds taken from `options`.
    #[must_use]
    pub fn new(entity: EntityId, options: Rc<Options>) -> Self {
        let nav = &options.navigation;
        Self {
            entity,
            camera: None,
            projection: NavProjection::Perspective,
            move_speed: nav.move_speed,
            rotate_speed: nav.rotate_speed,
            rotate_key_speed: nav.rotate_key_speed,
            zoom_level: 1.0,
            last_perspective: None,
            options,
        }
    }

    /// The entity this component navigates.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Current navigation mode.
    #[must_use]
    pub fn projection(&self) -> NavProjection {
        self.projection
    }

    /// Translation speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Mouse-drag look gain in radians per unit of mouse motion.
    #[must_use]
    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    /// Arrow-key turn rate in radians per second.
    #[must_use]
    pub fn rotate_key_speed(&self) -> f32 {
        self.rotate_key_speed
    }

    /// Orthographic zoom level (1 = default extent).
    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    /// Eye direction saved when the camera last left perspective mode.
    #[must_use]
    pub fn last_perspective_eye_direction(&self) -> Option<Vec3> {
        self.last_perspective.map(|frame| frame.eye_direction)
    }

    /// The resolved camera, if activation succeeded.
    #[must_use]
    pub fn camera(&self) -> Option<&SharedCamera> {
        self.camera.as_ref()
    }

    /// Whether a camera has been resolved.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.camera.is_some()
    }

    /// Resolve the entity's camera. A resolved camera is kept; an absent one
    /// can be retried later. Returns whether a camera is attached.
    pub fn activate(&mut self, cameras: &dyn CameraSource) -> bool {
        if self.camera.is_none() {
            self.camera = cameras.camera(self.entity);
            if self.camera.is_some() {
                log::debug!("navigation {} attached to its camera", self.entity);
            }
        }
        self.camera.is_some()
    }

    /// Drop the camera reference. Safe to call repeatedly or before
    /// activation.
    pub fn release(&mut self) {
        self.camera = None;
    }

    /// Switch navigation mode and commit the resulting pose.
    ///
    /// Leaving perspective saves the camera orientation; returning to
    /// perspective from an axis lock restores it. Entering an axis lock sets
    /// the fixed view frame and the orthographic bounds for the current zoom
    /// level.
    pub fn set_projection(&mut self, mode: NavProjection) {
        let Some(shared) = self.camera.clone() else {
            return;
        };
        let Ok(mut camera) = shared.try_borrow_mut() else {
            return;
        };

        match mode.axis_frame() {
            None => {
                if camera.projection == ProjectionMode::Orthographic {
                    if let Some(frame) = self.last_perspective {
                        camera.eye_direction = frame.eye_direction;
                        camera.up = frame.up;
                    }
                }
                camera.projection = ProjectionMode::Perspective;
            }
            Some((eye_direction, up)) => {
                if camera.projection == ProjectionMode::Perspective {
                    self.last_perspective = Some(PerspectiveFrame {
                        eye_direction: camera.eye_direction,
                        up: camera.up,
                    });
                }
                camera.projection = ProjectionMode::Orthographic;
                camera.eye_direction = eye_direction;
                camera.up = up;
                camera.ortho = self.ortho_bounds();
            }
        }

        self.projection = mode;
        camera.commit();
        log::debug!("navigation {} switched to {mode}", self.entity);
    }

    /// Set the translation speed. Non-positive or non-finite speeds are
    /// rejected.
    pub fn set_move_speed(&mut self, speed: f32) -> bool {
        if speed.is_finite() && speed > 0.0 {
            self.move_speed = speed;
            return true;
        }
        false
    }

    /// Set the orthographic zoom level. In an axis lock the new bounds are
    /// applied and committed. Levels that would leave the bounds
    /// non-positive or non-finite are rejected.
    pub fn set_zoom_level(&mut self, zoom: f32) -> bool {
        if !self.zoom_in_range(zoom) {
            return false;
        }
        self.zoom_level = zoom;
        if !self.projection.is_perspective() {
            let bounds = self.ortho_bounds();
            self.with_camera(|camera| {
                camera.ortho = bounds;
                camera.commit();
            });
        }
        true
    }

    /// Apply a typed command. Returns whether it changed anything.
    pub fn execute(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::SetProjection(mode) => {
                if !self.is_active() {
                    return false;
                }
                self.set_projection(mode);
                true
            }
            NavCommand::SetMoveSpeed(speed) => self.set_move_speed(speed),
            NavCommand::SetZoomLevel(zoom) => self.set_zoom_level(zoom),
        }
    }

    /// Advance held-key navigation by `dt` seconds.
    ///
    /// Translation keys add up into one position delta along the frame as it
    /// was at the start of the tick. Turning yaws around the camera up axis;
    /// pitching is refused once `|eye_direction.z|` would reach the pitch
    /// limit or swing over the pole. When anything moved, the up axis is
    /// re-derived from the rotated frame and the pose is committed.
    pub fn tick(&mut self, dt: f32, input: &dyn InputQuery) {
        let Some(shared) = self.camera.clone() else {
            return;
        };
        let Ok(mut camera) = shared.try_borrow_mut() else {
            return;
        };

        let bindings = &self.options.keybindings;
        let nav = &self.options.navigation;
        let held = |action| {
            bindings
                .key_for(action)
                .is_some_and(|key| input.is_key_down(key))
        };

        let eye = camera.eye_direction;
        let up = camera.up;
        let right = camera.right();
        let lift = right.cross(eye);

        let mut speed = self.move_speed;
        if held(NavAction::Fast) {
            speed *= nav.fast_multiplier;
        }
        let step = speed * dt;

        let mut modified = false;
        let mut offset = Vec3::ZERO;
        for (action, direction) in [
            (NavAction::MoveForward, eye),
            (NavAction::MoveBackward, -eye),
            (NavAction::StrafeLeft, -right),
            (NavAction::StrafeRight, right),
            (NavAction::MoveDown, -lift),
            (NavAction::MoveUp, lift),
        ] {
            if held(action) {
                offset += direction * step;
                modified = true;
            }
        }

        let turn = self.rotate_key_speed * dt;
        let mut look = eye;
        if held(NavAction::TurnLeft) {
            look = rotate_about(look, up, turn);
            modified = true;
        }
        if held(NavAction::TurnRight) {
            look = rotate_about(look, up, -turn);
            modified = true;
        }
        let limit = nav.pitch_limit;
        if held(NavAction::PitchUp) && look.z < limit {
            let pitched = rotate_about(look, up.cross(look), -turn);
            if pitched.z < limit && same_side_of_pole(look, pitched) {
                look = pitched;
            }
            modified = true;
        }
        if held(NavAction::PitchDown) && look.z > -limit {
            let pitched = rotate_about(look, up.cross(look), turn);
            if pitched.z > -limit && same_side_of_pole(look, pitched) {
                look = pitched;
            }
            modified = true;
        }

        if !modified {
            return;
        }
        camera.position += offset;
        camera.eye_direction = look.normalize_or(eye);
        camera.up = right.cross(camera.eye_direction).normalize_or(up);
        camera.commit();
    }

    /// Whether `zoom` keeps the bounds and the pan scale positive and
    /// finite.
    fn zoom_in_range(&self, zoom: f32) -> bool {
        let nav = &self.options.navigation;
        let extent = zoom * nav.ortho_extent;
        let pan = zoom * nav.ortho_pan_scale;
        zoom.is_finite()
            && zoom > 0.0
            && extent.is_finite()
            && extent > 0.0
            && pan.is_finite()
    }

    fn ortho_bounds(&self) -> OrthoBounds {
        OrthoBounds::symmetric(
            self.zoom_level * self.options.navigation.ortho_extent,
        )
    }

    fn with_camera(&self, f: impl FnOnce(&mut Camera)) {
        if let Some(shared) = &self.camera {
            if let Ok(mut camera) = shared.try_borrow_mut() {
                f(&mut camera);
            }
        }
    }

    /// Perspective drag: yaw around the camera up axis, then pitch around
    /// the right axis. Up snaps back to world vertical afterwards.
    fn drag_look(&self, camera: &mut Camera, dx: f32, dy: f32) {
        let up = camera.up;
        let right = camera.right();
        let mut look = rotate_about(camera.eye_direction, up, -dx * self.rotate_speed);
        look = rotate_about(look, right, dy * self.rotate_speed);

        camera.eye_direction = look.normalize_or(camera.eye_direction);
        camera.up = WORLD_UP;
        camera.commit();
    }

    /// Orthographic drag: move in the view plane, scaled by zoom level.
    fn drag_pan(&self, camera: &mut Camera, dx: f32, dy: f32) {
        let right = camera.right();
        let lift = right.cross(camera.eye_direction);
        let scale = self.zoom_level * self.options.navigation.ortho_pan_scale;

        camera.position += right * (-dx * scale);
        camera.position += lift * (dy * scale);
        camera.ortho = self.ortho_bounds();
        camera.commit();
    }
}

impl InputListener for NavigationComponent {
    /// Digit keys pick a speed from the ladder; the speed step keys scale
    /// the current speed.
    fn on_key_down(
        &mut self,
        key: &str,
        handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
        if handled || !self.is_active() {
            return;
        }
        let nav = &self.options.navigation;

        if let Some(index) = speed_preset_index(key) {
            self.move_speed = nav.speed_presets[index];
            return;
        }
        let next = match self.options.keybindings.lookup(key) {
            Some(NavAction::SpeedUp) => self.move_speed * nav.speed_step,
            Some(NavAction::SpeedDown) => self.move_speed / nav.speed_step,
            _ => return,
        };
        // Repeated steps may not leave the positive finite range.
        let _ = self.set_move_speed(next);
    }

    fn on_mouse_button_down(
        &mut self,
        button: MouseButton,
        _handled: bool,
        ctx: &mut InputContext<'_>,
    ) {
        if button == MouseButton::Left {
            ctx.cursor.set_cursor_locked(true);
        }
    }

    fn on_mouse_button_up(
        &mut self,
        button: MouseButton,
        _handled: bool,
        ctx: &mut InputContext<'_>,
    ) {
        if button == MouseButton::Left {
            ctx.cursor.set_cursor_locked(false);
        }
    }

    /// Perspective: dolly along the view direction and commit.
    /// Orthographic: zoom and update the bounds without a commit.
    fn on_mouse_wheel(
        &mut self,
        direction: f32,
        handled: bool,
        _ctx: &mut InputContext<'_>,
    ) {
        if handled {
            return;
        }
        let Some(shared) = self.camera.clone() else {
            return;
        };
        let Ok(mut camera) = shared.try_borrow_mut() else {
            return;
        };

        if self.projection.is_perspective() {
            let dolly = camera.eye_direction * (direction * self.move_speed);
            camera.position += dolly;
            camera.commit();
            return;
        }

        let step = self.options.navigation.ortho_zoom_step;
        let next = if direction < 0.0 {
            self.zoom_level / step
        } else {
            self.zoom_level * step
        };
        if self.zoom_in_range(next) {
            self.zoom_level = next;
        }
        // The orthographic zoom path leaves committing to the next pose
        // change.
        camera.ortho = self.ortho_bounds();
    }

    /// Dragging with the primary button looks around (perspective) or pans
    /// (orthographic), driven by the raw mouse delta of this frame.
    fn on_mouse_move(
        &mut self,
        _x: f32,
        _y: f32,
        _handled: bool,
        ctx: &mut InputContext<'_>,
    ) {
        if !ctx.input.is_mouse_button_down(MouseButton::Left) {
            return;
        }
        let Some(shared) = self.camera.clone() else {
            return;
        };
        let Ok(mut camera) = shared.try_borrow_mut() else {
            return;
        };

        let dx = ctx.input.axis(Axis::MouseDeltaX);
        let dy = ctx.input.axis(Axis::MouseDeltaY);
        if self.projection.is_perspective() {
            self.drag_look(&mut camera, dx, dy);
        } else {
            self.drag_pan(&mut camera, dx, dy);
        }
    }
}

/// Whether a pitch step from `from` to `to` stays on the same side of the
/// vertical, i.e. its horizontal heading does not flip.
fn same_side_of_pole(from: Vec3, to: Vec3) -> bool {
    from.truncate().dot(to.truncate()) > 0.0
}

/// Rotate `v` by `angle` radians around `axis`. A degenerate axis leaves `v`
/// unchanged.
fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    axis.try_normalize()
        .map_or(v, |axis| Quat::from_axis_angle(axis, angle) * v)
}
