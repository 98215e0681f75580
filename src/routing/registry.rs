//! Route registry.
//!
//! # Responsibilities
//! - Store routes by unique name
//! - Reject duplicate names
//! - Resolve routes by name for URL generation
//! - Iterate routes static-first for matching
//!
//! # Design Decisions
//! - Built once at startup, read-only afterwards (no locks)
//! - Insertion order kept explicitly via IndexMap
//! - Static/dynamic classification fixed at insertion
//! - Iteration resolves names at yield time, not cached handles
//! - Bulk replace is not transactional (see `set_routes`)

use std::fmt;
use std::iter::Chain;
use std::slice;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::routing::error::{RegistryError, RegistryResult};
use crate::routing::route::Route;

/// Name-indexed store of routes with two-phase iteration order.
pub struct RouteRegistry<R: Route + ?Sized = dyn Route> {
    /// Name -> route, in registration order.
    routes: IndexMap<String, Arc<R>>,
    /// Names of routes with an empty pattern.
    static_names: Vec<String>,
    /// Names of routes with a non-empty pattern.
    dynamic_names: Vec<String>,
}

impl<R: Route + ?Sized> RouteRegistry<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: IndexMap::new(),
            static_names: Vec::new(),
            dynamic_names: Vec::new(),
        }
    }

    /// Create a registry seeded with `routes`.
    ///
    /// Fails on the first duplicate name, exactly like [`set_routes`](Self::set_routes).
    pub fn with_routes<I>(routes: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = Arc<R>>,
    {
        let mut registry = Self::new();
        registry.set_routes(routes)?;
        Ok(registry)
    }

    /// Replace the whole registry content with `routes`.
    ///
    /// Existing state is cleared before anything is inserted. If a duplicate
    /// name shows up midway, the error is returned and the routes inserted
    /// before it stay registered.
    pub fn set_routes<I>(&mut self, routes: I) -> RegistryResult<&mut Self>
    where
        I: IntoIterator<Item = Arc<R>>,
    {
        self.routes.clear();
        self.static_names.clear();
        self.dynamic_names.clear();

        for route in routes {
            self.add_route(route)?;
        }

        tracing::info!(
            routes = self.routes.len(),
            static_routes = self.static_names.len(),
            dynamic_routes = self.dynamic_names.len(),
            "Route registry replaced"
        );

        Ok(self)
    }

    /// Register a single route.
    pub fn add_route(&mut self, route: Arc<R>) -> RegistryResult<&mut Self> {
        let name = route.name();

        if name.is_empty() {
            return Err(RegistryError::EmptyRouteName);
        }

        if self.routes.contains_key(name) {
            return Err(RegistryError::RouteAlreadyDeclared(name.to_string()));
        }

        let name = name.to_string();
        // Classification is decided here, from the pattern alone, and never revisited.
        let dynamic = !route.pattern().is_empty();

        if dynamic {
            self.dynamic_names.push(name.clone());
        } else {
            self.static_names.push(name.clone());
        }

        let kind = if dynamic { "dynamic" } else { "static" };
        tracing::debug!(route = %name, kind, "Route registered");

        self.routes.insert(name, route);

        Ok(self)
    }

    /// Look up a route by name.
    ///
    /// Returns the same shared instance that was registered.
    pub fn get_route_by_name(&self, name: &str) -> RegistryResult<&Arc<R>> {
        self.routes
            .get(name)
            .ok_or_else(|| RegistryError::RouteNotFound(name.to_string()))
    }

    /// All routes in registration order.
    pub fn get_routes(&self) -> Vec<Arc<R>> {
        self.routes.values().cloned().collect()
    }

    /// All route names in registration order.
    pub fn get_routes_names(&self) -> Vec<&str> {
        self.routes.keys().map(String::as_str).collect()
    }

    /// Iterate routes for matching: static routes first, then dynamic ones.
    ///
    /// Each phase keeps registration order. Every call starts a fresh pass.
    pub fn iter_routes(&self) -> RouteIter<'_, R> {
        RouteIter {
            registry: self,
            names: self.static_names.iter().chain(self.dynamic_names.iter()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of routes with an empty pattern.
    pub fn static_len(&self) -> usize {
        self.static_names.len()
    }

    /// Number of routes with a non-empty pattern.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic_names.len()
    }
}

impl<R: Route + ?Sized> Default for RouteRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: deriving would require `R: Clone`, which trait objects can't satisfy.
impl<R: Route + ?Sized> Clone for RouteRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            static_names: self.static_names.clone(),
            dynamic_names: self.dynamic_names.clone(),
        }
    }
}

impl<R: Route + ?Sized> fmt::Debug for RouteRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .field("static_names", &self.static_names)
            .field("dynamic_names", &self.dynamic_names)
            .finish()
    }
}

/// Lazy static-then-dynamic pass over a registry.
///
/// Items are resolved by name when yielded, so a name that no longer
/// resolves surfaces as [`RegistryError::RouteNotFound`].
pub struct RouteIter<'a, R: Route + ?Sized> {
    registry: &'a RouteRegistry<R>,
    names: Chain<slice::Iter<'a, String>, slice::Iter<'a, String>>,
}

impl<'a, R: Route + ?Sized> Iterator for RouteIter<'a, R> {
    type Item = RegistryResult<&'a Arc<R>>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        Some(self.registry.get_route_by_name(name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}
