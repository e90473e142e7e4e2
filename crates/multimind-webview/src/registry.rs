use std::collections::HashMap;

use multimind_common::{Rect, ServiceDescriptor, SurfaceError};
use tracing::{debug, info, warn};

use crate::surface::{Surface, SurfaceFactory};

/// Owns one surface per service key and tracks the active one.
///
/// At most one live surface exists per key. `show` only accepts keys that
/// have a surface, so the active key always names a live surface.
pub struct SurfaceRegistry<F: SurfaceFactory> {
    factory: F,
    surfaces: HashMap<String, F::Surface>,
    active: Option<String>,
}

impl<F: SurfaceFactory> SurfaceRegistry<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            surfaces: HashMap::new(),
            active: None,
        }
    }

    /// Create a surface for every service that does not have one yet.
    ///
    /// Existing surfaces are reused. A service whose surface fails to build
    /// is logged and skipped; a missing host window aborts the whole call.
    /// Returns the number of surfaces created.
    pub fn create_all(
        &mut self,
        services: &[ServiceDescriptor],
        bounds: Rect,
    ) -> Result<usize, SurfaceError> {
        let mut created = 0;
        for service in services {
            if self.surfaces.contains_key(&service.key) {
                debug!(key = %service.key, "surface already live, reusing");
                continue;
            }
            match self.factory.create(service, bounds) {
                Ok(surface) => {
                    self.surfaces.insert(service.key.clone(), surface);
                    created += 1;
                }
                Err(SurfaceError::WindowGone) => return Err(SurfaceError::WindowGone),
                Err(e) => warn!(key = %service.key, error = %e, "failed to create surface"),
            }
        }
        info!(created, total = self.surfaces.len(), "surfaces ready");
        Ok(created)
    }

    /// Make `key` the active, visible surface and hide the others.
    ///
    /// Unknown keys are ignored. Returns whether the key was shown.
    pub fn show(&mut self, key: &str) -> bool {
        let Some(target) = self.surfaces.get(key) else {
            warn!(key, "show requested for unknown surface, ignoring");
            return false;
        };

        for (other_key, surface) in &self.surfaces {
            if other_key != key {
                if let Err(e) = surface.set_visible(false) {
                    warn!(key = %other_key, error = %e, "failed to hide surface");
                }
            }
        }
        if let Err(e) = target.set_visible(true) {
            warn!(key, error = %e, "failed to show surface");
        }

        self.active = Some(key.to_string());
        info!(key, "surface shown");
        true
    }

    /// Reload the active surface. Returns `Ok(false)` when nothing is active.
    pub fn reload_active(&self) -> Result<bool, SurfaceError> {
        let Some(surface) = self.active_surface() else {
            debug!("reload requested with no active surface");
            return Ok(false);
        };
        surface.reload()?;
        info!(key = %surface.key(), "active surface reloading");
        Ok(true)
    }

    /// Release every surface and clear the active key.
    ///
    /// `create_all` may be called again afterwards.
    pub fn teardown(&mut self) -> usize {
        let released = self.surfaces.len();
        self.surfaces.clear();
        self.active = None;
        info!(released, "surfaces torn down");
        released
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    pub fn active_surface(&self) -> Option<&F::Surface> {
        self.active.as_ref().and_then(|k| self.surfaces.get(k))
    }

    pub fn get(&self, key: &str) -> Option<&F::Surface> {
        self.surfaces.get(key)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &F::Surface> {
        self.surfaces.values()
    }

    /// Keys with a live surface, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{services, FakeFactory};

    fn registry() -> SurfaceRegistry<FakeFactory> {
        SurfaceRegistry::new(FakeFactory::default())
    }

    #[test]
    fn create_all_makes_one_surface_per_key() {
        let mut reg = registry();
        let created = reg.create_all(&services(), Rect::default()).unwrap();
        assert_eq!(created, 3);
        assert_eq!(reg.keys(), vec!["chatgpt", "claude", "gemini"]);
        assert_eq!(reg.active_key(), None);
    }

    #[test]
    fn create_all_is_idempotent() {
        let mut reg = registry();
        let log = reg.factory_mut().created.clone();

        reg.create_all(&services(), Rect::default()).unwrap();
        let second = reg.create_all(&services(), Rect::default()).unwrap();

        assert_eq!(second, 0);
        assert_eq!(reg.count(), 3);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn create_all_passes_initial_bounds() {
        let mut reg = registry();
        let bounds = Rect::new(65.0, 0.0, 1215.0, 800.0);
        reg.create_all(&services(), bounds).unwrap();
        assert!(reg.surfaces().all(|s| s.bounds() == Some(bounds)));
    }

    #[test]
    fn create_all_skips_failed_service() {
        let mut reg = SurfaceRegistry::new(FakeFactory {
            fail_key: Some("chatgpt".into()),
            ..Default::default()
        });
        let created = reg.create_all(&services(), Rect::default()).unwrap();
        assert_eq!(created, 2);
        assert!(reg.get("chatgpt").is_none());
        assert!(!reg.show("chatgpt"));
    }

    #[test]
    fn create_all_without_window_fails() {
        let mut reg = SurfaceRegistry::new(FakeFactory {
            window_gone: true,
            ..Default::default()
        });
        let err = reg.create_all(&services(), Rect::default()).unwrap_err();
        assert!(matches!(err, SurfaceError::WindowGone));
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn show_sets_active_for_every_key() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        for service in services() {
            assert!(reg.show(&service.key));
            assert_eq!(reg.active_key(), Some(service.key.as_str()));
            assert!(reg.is_active(&service.key));
        }
    }

    #[test]
    fn show_makes_only_target_visible() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        reg.show("gemini");
        reg.show("claude");

        assert!(reg.get("claude").unwrap().visible());
        assert!(!reg.get("gemini").unwrap().visible());
        assert!(!reg.get("chatgpt").unwrap().visible());
    }

    #[test]
    fn show_unknown_key_keeps_active() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        reg.show("gemini");

        assert!(!reg.show("bard"));
        assert_eq!(reg.active_key(), Some("gemini"));
        assert!(reg.get("gemini").unwrap().visible());
    }

    #[test]
    fn reload_targets_active_surface_only() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        reg.show("chatgpt");

        assert!(reg.reload_active().unwrap());

        assert_eq!(reg.get("chatgpt").unwrap().reloads(), 1);
        assert_eq!(reg.get("gemini").unwrap().reloads(), 0);
    }

    #[test]
    fn reload_without_active_is_noop() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        assert!(!reg.reload_active().unwrap());
        assert!(reg.surfaces().all(|s| s.reloads() == 0));
    }

    #[test]
    fn teardown_clears_everything() {
        let mut reg = registry();
        reg.create_all(&services(), Rect::default()).unwrap();
        reg.show("claude");

        assert_eq!(reg.teardown(), 3);
        assert_eq!(reg.count(), 0);
        assert_eq!(reg.active_key(), None);

        assert!(!reg.show("claude"));
        assert!(!reg.reload_active().unwrap());
    }

    #[test]
    fn create_all_after_teardown_recreates() {
        let mut reg = registry();
        let log = reg.factory_mut().created.clone();
        reg.create_all(&services(), Rect::default()).unwrap();
        reg.teardown();

        assert_eq!(reg.create_all(&services(), Rect::default()).unwrap(), 3);
        assert_eq!(log.borrow().len(), 6);
        assert!(reg.show("gemini"));
    }
}
