//! Configuration schema definitions.
//!
//! A route table file looks like:
//!
//! ```toml
//! [observability]
//! log_level = "debug"
//!
//! [[routes]]
//! name = "home"
//! uri = "/"
//!
//! [[routes]]
//! name = "user.show"
//! uri = "/user/{id}"
//! pattern = "/user/{id}"
//! methods = ["GET"]
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::routing::{RegistryResult, RouteDefinition, RouteRegistry};

/// Root configuration: the route table plus ambient settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Route definitions, in registration order.
    pub routes: Vec<RouteDefinition>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RegistryConfig {
    /// Build a registry from the route table.
    pub fn build_registry(&self) -> RegistryResult<RouteRegistry<RouteDefinition>> {
        RouteRegistry::with_routes(self.routes.iter().cloned().map(Arc::new))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per line for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
