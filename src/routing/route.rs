//! Route entity contract.
//!
//! # Responsibilities
//! - Define what the registry needs from a route (name + pattern)
//! - Provide a concrete, config-loadable HTTP route record
//!
//! # Design Decisions
//! - Empty pattern = static route (exact URI match)
//! - Non-empty pattern = dynamic route (placeholder matching, done elsewhere)
//! - Pattern syntax is opaque here; nothing in this crate parses it

use serde::{Deserialize, Deserializer, Serialize};

/// The contract a route must satisfy to be registered.
pub trait Route: Send + Sync + std::fmt::Debug {
    /// Unique route identifier within a registry.
    fn name(&self) -> &str;

    /// Compiled matching pattern, empty for static routes.
    fn pattern(&self) -> &str;
}

/// An HTTP route definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteDefinition {
    /// Route name used for lookups and URL generation.
    pub name: String,

    /// Exact path for static routes, path template for dynamic ones.
    pub uri: String,

    /// Matching pattern. Empty for static routes.
    #[serde(default)]
    pub pattern: String,

    /// Allowed HTTP methods (empty = any), uppercase.
    #[serde(default, deserialize_with = "deserialize_methods")]
    pub methods: Vec<String>,
}

fn deserialize_methods<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let methods = Vec::<String>::deserialize(deserializer)?;
    Ok(methods.into_iter().map(|m| m.to_uppercase()).collect())
}

impl RouteDefinition {
    /// Create a static route.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            pattern: String::new(),
            methods: Vec::new(),
        }
    }

    /// Set the matching pattern, making the route dynamic when non-empty.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Restrict the route to the given methods.
    /// Method names are normalized to uppercase.
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = methods
            .into_iter()
            .map(|m| m.as_ref().to_uppercase())
            .collect();
        self
    }

    /// Returns true if the route needs pattern matching.
    pub fn is_dynamic(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Returns true if the route accepts the given method.
    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

impl Route for RouteDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}
