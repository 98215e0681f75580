//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     RouteDefinition[] (code or config)
//!     → registry.rs (reject duplicate names, classify static/dynamic)
//!     → Freeze as read-only RouteRegistry
//!
//! Request Matching (external matcher):
//!     registry.iter_routes()
//!     → all static routes (registration order)
//!     → then all dynamic routes (registration order)
//!
//! URL Generation (external generator):
//!     registry.get_route_by_name(name) → Route or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Routes are unique by name only, never by pattern
//! - Static routes iterate first: exact checks are cheap and must win
//! - No removal; reloads replace the whole registry (shared.rs)
//! - No pattern parsing or matching in this subsystem

pub mod error;
pub mod registry;
pub mod route;
pub mod shared;

pub use error::{RegistryError, RegistryResult};
pub use registry::{RouteIter, RouteRegistry};
pub use route::{Route, RouteDefinition};
pub use shared::SharedRegistry;
