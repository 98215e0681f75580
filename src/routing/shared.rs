//! Shared registry handle for reloads.
//!
//! `RouteRegistry` has no internal locking. When the route table can be
//! reloaded while requests are being matched, readers go through this
//! handle instead: they take a snapshot, and reloads publish a complete
//! new registry with a single atomic swap.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::error::RegistryResult;
use crate::routing::registry::RouteRegistry;
use crate::routing::route::Route;

/// Atomically swappable route registry.
#[derive(Debug)]
pub struct SharedRegistry<R: Route + ?Sized = dyn Route> {
    current: ArcSwap<RouteRegistry<R>>,
}

impl<R: Route + ?Sized> SharedRegistry<R> {
    pub fn new(registry: RouteRegistry<R>) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Snapshot of the live registry.
    /// The snapshot stays valid after later reloads.
    pub fn load(&self) -> Arc<RouteRegistry<R>> {
        self.current.load_full()
    }

    /// Publish `registry` as the live registry.
    pub fn replace(&self, registry: RouteRegistry<R>) {
        self.current.store(Arc::new(registry));
    }

    /// Build a registry from `routes` and publish it.
    ///
    /// On error the live registry is left as it was.
    pub fn reload<I>(&self, routes: I) -> RegistryResult<()>
    where
        I: IntoIterator<Item = Arc<R>>,
    {
        let registry = RouteRegistry::with_routes(routes)?;
        tracing::info!(routes = registry.len(), "Publishing reloaded route registry");
        self.replace(registry);
        Ok(())
    }
}

impl<R: Route + ?Sized> Default for SharedRegistry<R> {
    fn default() -> Self {
        Self::new(RouteRegistry::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;

    use super::*;
    use crate::routing::error::RegistryError;
    use crate::routing::route::RouteDefinition;

    fn route(name: &str) -> Arc<RouteDefinition> {
        Arc::new(RouteDefinition::new(name, format!("/{}", name)))
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let shared = SharedRegistry::new(RouteRegistry::with_routes(vec![route("home")]).unwrap());
        let before = shared.load();

        shared.reload(vec![route("about"), route("contact")]).unwrap();

        assert_eq!(before.get_routes_names(), vec!["home"]);
        assert_eq!(shared.load().get_routes_names(), vec!["about", "contact"]);
    }

    #[test]
    fn test_failed_reload_keeps_live_registry() {
        let shared = SharedRegistry::new(RouteRegistry::with_routes(vec![route("home")]).unwrap());

        let err = shared.reload(vec![route("a"), route("a")]).unwrap_err();
        assert_eq!(err, RegistryError::RouteAlreadyDeclared("a".to_string()));

        assert_eq!(shared.load().get_routes_names(), vec!["home"]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared: Arc<SharedRegistry<RouteDefinition>> = Arc::new(SharedRegistry::default());
        let start = Arc::new(Barrier::new(5));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let start = start.clone();
                std::thread::spawn(move || {
                    start.wait();
                    // Spin until the reload is visible; every snapshot on the way must be complete
                    let mut seen = 0usize;
                    loop {
                        let snapshot = shared.load();
                        assert!(snapshot.is_empty() || snapshot.len() == 2);
                        seen += 1;
                        if snapshot.len() == 2 {
                            return seen;
                        }
                    }
                })
            })
            .collect();

        start.wait();
        shared.reload(vec![route("x"), route("y")]).unwrap();

        for h in handles {
            assert!(h.join().unwrap() >= 1);
        }
        assert_eq!(shared.load().len(), 2);
    }
}
