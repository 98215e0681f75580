//! Registry error definitions.

use thiserror::Error;

/// Errors raised by the route registry.
///
/// All variants are configuration or programmer errors. None of them is
/// transient, so callers should fix the route table rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A route with the same name is already registered.
    #[error("Route \"{0}\" is already declared")]
    RouteAlreadyDeclared(String),

    /// No route is registered under the queried name.
    #[error("Route \"{0}\" not found")]
    RouteNotFound(String),

    /// The route carries an empty name and cannot be indexed.
    #[error("Route name must not be empty")]
    EmptyRouteName,
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
