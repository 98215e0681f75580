//! Route registry library.
//!
//! Holds the HTTP routes known to an application, indexed by unique name and
//! split into static (exact) and dynamic (pattern) routes so matchers can try
//! every static route before any dynamic one.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RegistryConfig;
pub use routing::{RegistryError, Route, RouteDefinition, RouteRegistry, SharedRegistry};
