//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks over the whole table)
//!     → RegistryConfig (validated, immutable)
//!     → build_registry() → RouteRegistry
//!
//! On reload:
//!     loader.rs loads new table
//!     → validation.rs validates
//!     → SharedRegistry::reload (atomic swap)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, RegistryConfig};
pub use validation::{validate_log_level, ValidationError};
