//! Entity-keyed ownership of navigation components.

use std::collections::hash_map::Entry;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::component::NavigationComponent;
use crate::camera::CameraSource;
use crate::entity::EntityId;
use crate::error::NavError;
use crate::input::{CursorGrab, InputContext, InputEvent, InputListener, InputQuery, InputState};
use crate::options::Options;
use crate::time::FrameClock;

/// Owner of every navigation component, keyed by entity.
///
/// The host holds one registry, forwards input events through
/// [`dispatch`](Self::dispatch) and calls [`tick`](Self::tick) once per
/// frame. Each component is registered as an input listener for as long as
/// it lives.
#[derive(Debug, Default)]
pub struct NavigationRegistry {
    components: FxHashMap<EntityId, NavigationComponent>,
    options: Rc<Options>,
    errors_reported: usize,
}

impl NavigationRegistry {
    /// Create an empty registry whose components use `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            components: FxHashMap::default(),
            options: Rc::new(options),
            errors_reported: 0,
        }
    }

    /// Options shared by all components.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether `entity` has a navigation component.
    #[must_use]
    pub fn has(&self, entity: EntityId) -> bool {
        self.components.contains_key(&entity)
    }

    /// The component of `entity`.
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&NavigationComponent> {
        self.components.get(&entity)
    }

    /// Mutable access to the component of `entity`.
    pub fn get_mut(
        &mut self,
        entity: EntityId,
    ) -> Option<&mut NavigationComponent> {
        self.components.get_mut(&entity)
    }

    /// Number of live components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no components are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of errors reported to the log so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors_reported
    }

    /// Entities with a component, in ascending order.
    #[must_use]
    pub fn entities(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.components.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Create a component for `entity` and register it as an input listener.
    ///
    /// A duplicate request is logged and counted and leaves the existing
    /// component untouched. The null entity is refused without a report.
    pub fn create(
        &mut self,
        entity: EntityId,
        input: &mut InputState,
    ) -> Result<&mut NavigationComponent, NavError> {
        if entity.is_none() {
            return Err(NavError::NullEntity);
        }
        match self.components.entry(entity) {
            Entry::Occupied(_) => {
                let err = NavError::DuplicateComponent(entity);
                log::error!("{err}");
                self.errors_reported += 1;
                Err(err)
            }
            Entry::Vacant(slot) => {
                let _ = input.add_listener(entity);
                log::debug!("created navigation component {entity}");
                Ok(slot.insert(NavigationComponent::new(
                    entity,
                    Rc::clone(&self.options),
                )))
            }
        }
    }

    /// Deregister and destroy the component of `entity`. Returns `false` if
    /// there was none.
    pub fn delete(&mut self, entity: EntityId, input: &mut InputState) -> bool {
        let Some(mut component) = self.components.remove(&entity) else {
            return false;
        };
        let _ = input.remove_listener(entity);
        component.release();
        log::debug!("deleted navigation component {entity}");
        true
    }

    /// Destroy every component.
    pub fn clear(&mut self, input: &mut InputState) {
        for entity in self.entities() {
            let _ = self.delete(entity, input);
        }
    }

    /// Resolve cameras for every component that has none yet. Returns the
    /// number of components newly attached.
    pub fn activate(&mut self, cameras: &dyn CameraSource) -> usize {
        let mut attached = 0;
        for component in self.components.values_mut() {
            if !component.is_active() && component.activate(cameras) {
                attached += 1;
            }
        }
        attached
    }

    /// Resolve the camera of one entity's component. Returns whether that
    /// component now has a camera.
    pub fn activate_entity(
        &mut self,
        entity: EntityId,
        cameras: &dyn CameraSource,
    ) -> bool {
        self.components
            .get_mut(&entity)
            .is_some_and(|component| component.activate(cameras))
    }

    /// Deliver an input event to every registered listener.
    ///
    /// `input` must already reflect the event
    /// ([`InputState::apply`]). `handled` is passed through unchanged.
    pub fn dispatch(
        &mut self,
        event: &InputEvent,
        handled: bool,
        input: &InputState,
        cursor: &mut dyn CursorGrab,
    ) {
        let mut ctx = InputContext { input, cursor };
        for entity in input.listeners() {
            if let Some(component) = self.components.get_mut(entity) {
                component.handle_event(event, handled, &mut ctx);
            }
        }
    }

    /// Advance every live component by the clock's frame delta. A delta set
    /// with [`FrameClock::set_delta`] is used unchanged; one measured by
    /// [`FrameClock::advance`] is already capped.
    pub fn tick(&mut self, clock: &FrameClock, input: &dyn InputQuery) {
        let dt = clock.delta();
        for component in self.components.values_mut() {
            component.tick(dt, input);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{Camera, CameraStore, ProjectionMode};
    use crate::input::{CursorState, MouseButton};
    use crate::nav::NavProjection;

    struct Host {
        registry: NavigationRegistry,
        input: InputState,
        cameras: CameraStore,
        cursor: CursorState,
        clock: FrameClock,
    }

    impl Host {
        fn new() -> Self {
            Self {
                registry: NavigationRegistry::new(Options::default()),
                input: InputState::new(),
                cameras: CameraStore::new(),
                cursor: CursorState::default(),
                clock: FrameClock::new(),
            }
        }

        fn send(&mut self, event: InputEvent) {
            self.input.apply(&event);
            self.registry
                .dispatch(&event, false, &self.input, &mut self.cursor);
        }

        fn key(&mut self, key: &str) {
            self.send(InputEvent::KeyDown { key: key.to_owned() });
        }

        fn frame(&mut self, dt: f32) {
            let _ = self.clock.set_delta(dt);
            self.registry.tick(&self.clock, &self.input);
            self.input.end_frame();
        }
    }

    #[test]
    fn create_registers_listener() {
        let mut host = Host::new();
        let id = EntityId::new(5);
        assert!(!host.registry.has(id));

        let component = host.registry.create(id, &mut host.input);
        assert!(component.is_ok_and(|c| c.entity() == id));
        assert!(host.registry.has(id));
        assert!(host.registry.get(id).is_some());
        assert_eq!(host.input.listeners(), &[id]);
        assert_eq!(host.registry.len(), 1);
    }

    #[test]
    fn duplicate_create_keeps_original_and_reports() {
        let mut host = Host::new();
        let id = EntityId::new(5);
        let _ = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);
        if let Some(c) = host.registry.get_mut(id) {
            assert!(c.set_move_speed(77.0));
        }

        let again = host.registry.create(id, &mut host.input);
        assert!(matches!(again, Err(NavError::DuplicateComponent(e)) if e == id));
        assert_eq!(host.registry.error_count(), 1);
        assert_eq!(host.registry.len(), 1);
        assert_eq!(host.registry.get(id).map(NavigationComponent::move_speed), Some(77.0));
        assert!(host.registry.get(id).is_some_and(NavigationComponent::is_active));
        assert_eq!(host.input.listeners(), &[id]);
    }

    #[test]
    fn null_entity_is_silently_refused() {
        let mut host = Host::new();
        let result = host.registry.create(EntityId::NONE, &mut host.input);
        assert!(matches!(result, Err(NavError::NullEntity)));
        assert!(host.registry.is_empty());
        assert_eq!(host.registry.error_count(), 0);
        assert!(host.input.listeners().is_empty());
    }

    #[test]
    fn delete_deregisters_and_is_idempotent() {
        let mut host = Host::new();
        let id = EntityId::new(8);
        let camera = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);
        // registry + store + local handle
        assert_eq!(Rc::strong_count(&camera), 3);

        assert!(host.registry.delete(id, &mut host.input));
        assert!(!host.registry.has(id));
        assert!(host.input.listeners().is_empty());
        assert_eq!(Rc::strong_count(&camera), 2);

        assert!(!host.registry.delete(id, &mut host.input));
        assert!(!host.registry.delete(EntityId::new(99), &mut host.input));
    }

    #[test]
    fn delete_before_activation_is_safe() {
        let mut host = Host::new();
        let id = EntityId::new(4);
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert!(host.registry.delete(id, &mut host.input));
    }

    #[test]
    fn entities_lists_live_ids() {
        let mut host = Host::new();
        for raw in [9, 3, 6] {
            assert!(host
                .registry
                .create(EntityId::new(raw), &mut host.input)
                .is_ok());
        }
        assert!(host.registry.delete(EntityId::new(6), &mut host.input));
        assert_eq!(
            host.registry.entities(),
            vec![EntityId::new(3), EntityId::new(9)]
        );

        host.registry.clear(&mut host.input);
        assert!(host.registry.entities().is_empty());
        assert!(host.input.listeners().is_empty());
    }

    #[test]
    fn activation_waits_for_camera() {
        let mut host = Host::new();
        let id = EntityId::new(2);
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 0);
        assert!(!host.registry.activate_entity(id, &host.cameras));

        let _ = host.cameras.insert(id, Camera::default());
        assert!(host.registry.activate_entity(id, &host.cameras));
        assert_eq!(host.registry.activate(&host.cameras), 0);
        assert!(!host.registry.activate_entity(EntityId::new(3), &host.cameras));
    }

    #[test]
    fn scenario_speed_key_then_forward_tick() {
        let mut host = Host::new();
        let id = EntityId::new(5);
        let camera = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);

        host.key("Digit3");
        assert_eq!(host.registry.get(id).map(NavigationComponent::move_speed), Some(40.0));

        host.key("KeyW");
        host.frame(0.1);

        let position = camera.borrow().position;
        assert!((position - Vec3::new(0.0, 4.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn scenario_ortho_z_from_fresh_camera() {
        let mut host = Host::new();
        let id = EntityId::new(1);
        let camera = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);

        if let Some(c) = host.registry.get_mut(id) {
            c.set_projection(NavProjection::OrthoZ);
        }

        let camera = camera.borrow();
        assert_eq!(camera.projection, ProjectionMode::Orthographic);
        assert_eq!(camera.eye_direction, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(camera.up, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(camera.ortho.left, -1000.0);
        assert_eq!(camera.ortho.right, 1000.0);
        assert_eq!(camera.ortho.top, 1000.0);
        assert_eq!(camera.ortho.bottom, -1000.0);
    }

    #[test]
    fn tick_visits_every_component_once() {
        let mut host = Host::new();
        let ids = [EntityId::new(1), EntityId::new(2), EntityId::new(3)];
        let cameras: Vec<_> = ids
            .iter()
            .map(|&id| host.cameras.insert(id, Camera::default()))
            .collect();
        for id in ids {
            assert!(host.registry.create(id, &mut host.input).is_ok());
        }
        assert_eq!(host.registry.activate(&host.cameras), 3);

        host.key("KeyW");
        host.frame(0.5);

        for camera in &cameras {
            let camera = camera.borrow();
            assert_eq!(camera.commit_count(), 1);
            assert!((camera.position.y - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn dispatch_reaches_only_registered_components() {
        let mut host = Host::new();
        let a = EntityId::new(1);
        let b = EntityId::new(2);
        for id in [a, b] {
            let _ = host.cameras.insert(id, Camera::default());
            assert!(host.registry.create(id, &mut host.input).is_ok());
        }
        assert_eq!(host.registry.activate(&host.cameras), 2);
        assert!(host.input.remove_listener(b));

        host.key("Digit1");
        assert_eq!(host.registry.get(a).map(NavigationComponent::move_speed), Some(5.0));
        assert_eq!(host.registry.get(b).map(NavigationComponent::move_speed), Some(100.0));
    }

    #[test]
    fn handled_events_pass_through_unchanged() {
        let mut host = Host::new();
        let id = EntityId::new(1);
        let _ = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);

        let event = InputEvent::KeyDown { key: "Digit9".into() };
        host.input.apply(&event);
        host.registry
            .dispatch(&event, true, &host.input, &mut host.cursor);
        assert_eq!(host.registry.get(id).map(NavigationComponent::move_speed), Some(100.0));

        // Cursor lock does not look at the handled flag.
        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        host.input.apply(&press);
        host.registry
            .dispatch(&press, true, &host.input, &mut host.cursor);
        assert!(host.cursor.locked);
    }

    #[test]
    fn drag_then_frame_uses_frame_delta() {
        let mut host = Host::new();
        let id = EntityId::new(1);
        let camera = host.cameras.insert(id, Camera::default());
        assert!(host.registry.create(id, &mut host.input).is_ok());
        assert_eq!(host.registry.activate(&host.cameras), 1);

        host.send(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        host.send(InputEvent::MouseMotion { dx: -100.0, dy: 0.0 });
        host.send(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        host.frame(0.016);

        let eye = camera.borrow().eye_direction;
        assert!((eye - Vec3::new(-0.1f32.sin(), 0.1f32.cos(), 0.0)).length() < 1e-4);
        assert_eq!(host.input.mouse_delta(), glam::Vec2::ZERO);
    }
}
