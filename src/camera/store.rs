use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::core::Camera;
use crate::entity::EntityId;

/// A camera shared between the host (which renders from it) and the one
/// navigation component that writes it.
pub type SharedCamera = Rc<RefCell<Camera>>;

/// Host-side lookup of the camera peer component of an entity.
pub trait CameraSource {
    /// The camera attached to `entity`, if any.
    fn camera(&self, entity: EntityId) -> Option<SharedCamera>;
}

/// Entity → camera table for hosts without their own component store.
#[derive(Debug, Default)]
pub struct CameraStore {
    cameras: FxHashMap<EntityId, SharedCamera>,
}

impl CameraStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `camera` to `entity`, returning the shared handle. Replaces any
    /// previous camera of that entity.
    pub fn insert(&mut self, entity: EntityId, camera: Camera) -> SharedCamera {
        let shared = Rc::new(RefCell::new(camera));
        let _ = self.cameras.insert(entity, Rc::clone(&shared));
        shared
    }

    /// Detach the camera of `entity`.
    pub fn remove(&mut self, entity: EntityId) -> Option<SharedCamera> {
        self.cameras.remove(&entity)
    }

    /// Number of cameras in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether the store holds no cameras.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

impl CameraSource for CameraStore {
    fn camera(&self, entity: EntityId) -> Option<SharedCamera> {
        self.cameras.get(&entity).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_the_same_camera() {
        let mut store = CameraStore::new();
        let id = EntityId::new(3);
        let handle = store.insert(id, Camera::default());

        let resolved = store.camera(id);
        assert!(resolved.is_some_and(|c| Rc::ptr_eq(&c, &handle)));
        assert!(store.camera(EntityId::new(4)).is_none());

        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
    }
}
