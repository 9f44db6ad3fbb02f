//! Overlay registry: explicit ownership of controllers keyed by a
//! stable surface identity.

use std::collections::HashMap;

use crate::controller::OverlayController;
use crate::types::PlaybackState;

/// Stable identity of a media surface.
///
/// Assigned once at surface creation and never reused; lookups survive
/// any reordering or restyling of the surfaces themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} already has an overlay attached")]
    AlreadyAttached(SurfaceId),
    #[error("{0} is not tracked")]
    NotTracked(SurfaceId),
}

/// Owns one [`OverlayController`] per attached surface.
///
/// At most one controller per surface id; attach and detach are the
/// only ways controllers enter or leave.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    controllers: HashMap<SurfaceId, OverlayController>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an overlay to a surface, seeding it with the surface's
    /// current playback state.
    pub fn attach(&mut self, id: SurfaceId, state: PlaybackState) -> Result<(), RegistryError> {
        if self.controllers.contains_key(&id) {
            return Err(RegistryError::AlreadyAttached(id));
        }
        log::debug!("attaching overlay to {id}");
        self.controllers.insert(id, OverlayController::new(state));
        Ok(())
    }

    /// Detach and return the surface's controller
    pub fn detach(&mut self, id: SurfaceId) -> Result<OverlayController, RegistryError> {
        log::debug!("detaching overlay from {id}");
        self.controllers
            .remove(&id)
            .ok_or(RegistryError::NotTracked(id))
    }

    pub fn get(&self, id: SurfaceId) -> Option<&OverlayController> {
        self.controllers.get(&id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut OverlayController> {
        self.controllers.get_mut(&id)
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.controllers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Ids of all attached surfaces, in stable order
    pub fn ids(&self) -> Vec<SurfaceId> {
        let mut ids: Vec<_> = self.controllers.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Mutable access to every controller with its id, for driving
    /// time-based behavior across all overlays in one pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SurfaceId, &mut OverlayController)> {
        self.controllers.iter_mut().map(|(id, ctl)| (*id, ctl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_detach() {
        let mut registry = OverlayRegistry::new();
        let id = SurfaceId(1);

        assert!(registry.attach(id, PlaybackState::default()).is_ok());
        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);

        assert!(registry.detach(id).is_ok());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_double_attach_rejected() {
        let mut registry = OverlayRegistry::new();
        let id = SurfaceId(7);

        registry.attach(id, PlaybackState::default()).unwrap();
        assert_eq!(
            registry.attach(id, PlaybackState::default()),
            Err(RegistryError::AlreadyAttached(id))
        );
    }

    #[test]
    fn test_detach_unknown() {
        let mut registry = OverlayRegistry::new();
        assert_eq!(
            registry.detach(SurfaceId(3)).unwrap_err(),
            RegistryError::NotTracked(SurfaceId(3))
        );
    }

    #[test]
    fn test_state_isolated_per_surface() {
        let mut registry = OverlayRegistry::new();
        let a = SurfaceId(1);
        let b = SurfaceId(2);
        registry.attach(a, PlaybackState::default()).unwrap();
        registry.attach(b, PlaybackState::default()).unwrap();

        registry
            .get_mut(a)
            .unwrap()
            .wheel(crate::Direction::Up, std::time::Instant::now());

        assert_eq!(registry.get(a).unwrap().state().speed, 1.1);
        assert_eq!(registry.get(b).unwrap().state().speed, 1.0);
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = OverlayRegistry::new();
        for n in [5, 1, 3] {
            registry
                .attach(SurfaceId(n), PlaybackState::default())
                .unwrap();
        }
        assert_eq!(
            registry.ids(),
            vec![SurfaceId(1), SurfaceId(3), SurfaceId(5)]
        );
    }
}
