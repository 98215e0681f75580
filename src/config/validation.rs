//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate route names across the whole table
//! - Reject empty route names
//! - Check the configured log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before any registry is built, so a bad table never reaches one
//! - Routes sharing a pattern are fine; only names must be unique

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RegistryConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Route at `index` has an empty name.
    #[error("routes[{index}]: name must not be empty")]
    EmptyRouteName { index: usize },

    /// Route name declared more than once.
    #[error("routes[{index}]: route \"{name}\" already declared at routes[{first}]")]
    DuplicateRouteName {
        name: String,
        first: usize,
        index: usize,
    },

    /// Log level not recognized.
    #[error("observability.log_level: unknown level \"{0}\"")]
    UnknownLogLevel(String),
}

/// Check that `level` is a known log level (case-insensitive).
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::UnknownLogLevel(level.to_string()))
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
            continue;
        }

        if let Some(&first) = seen.get(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName {
                name: route.name.clone(),
                first,
                index,
            });
        } else {
            seen.insert(&route.name, index);
        }
    }

    if let Err(err) = validate_log_level(&config.observability.log_level) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDefinition;

    #[test]
    fn test_valid_config() {
        let config = RegistryConfig {
            routes: vec![
                RouteDefinition::new("home", "/"),
                RouteDefinition::new("user.show", "/user/{id}").with_pattern("/user/{id}"),
            ],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = RegistryConfig {
            routes: vec![
                RouteDefinition::new("home", "/"),
                RouteDefinition::new("", "/nameless"),
                RouteDefinition::new("home", "/home"),
                RouteDefinition::new("home", "/again"),
            ],
            ..Default::default()
        };
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyRouteName { index: 1 },
                ValidationError::DuplicateRouteName {
                    name: "home".to_string(),
                    first: 0,
                    index: 2
                },
                ValidationError::DuplicateRouteName {
                    name: "home".to_string(),
                    first: 0,
                    index: 3
                },
                ValidationError::UnknownLogLevel("verbose".to_string()),
            ]
        );
    }

    #[test]
    fn test_shared_pattern_allowed() {
        let config = RegistryConfig {
            routes: vec![
                RouteDefinition::new("a", "/x/{id}").with_pattern("/x/{id}"),
                RouteDefinition::new("b", "/x/{id}").with_pattern("/x/{id}"),
            ],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("warn").is_ok());
        assert_eq!(
            validate_log_level("loud"),
            Err(ValidationError::UnknownLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = RegistryConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
