//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry / config / CLI produce:
//!     → tracing events (route registered, registry replaced, table loaded)
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields (route name, counts) rather than formatted strings
//! - Registry errors are returned to callers, never logged internally
//! - The library never installs a subscriber; binaries call `logging::init`

pub mod logging;
