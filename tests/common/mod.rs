//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use route_registry::RouteDefinition;
use tempfile::NamedTempFile;

/// Write a route table to a temporary file.
/// The file is removed when the handle is dropped.
pub fn write_route_table(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A static route named `name` at `/name`.
pub fn static_route(name: &str) -> Arc<RouteDefinition> {
    Arc::new(RouteDefinition::new(name, format!("/{}", name)))
}

/// A dynamic route named `name` with `pattern` as both URI and pattern.
pub fn dynamic_route(name: &str, pattern: &str) -> Arc<RouteDefinition> {
    Arc::new(RouteDefinition::new(name, pattern).with_pattern(pattern))
}

/// Names yielded by `iter_routes`, in order.
pub fn matching_order(registry: &route_registry::RouteRegistry<RouteDefinition>) -> Vec<String> {
    registry
        .iter_routes()
        .map(|route| route.unwrap().name.clone())
        .collect()
}
