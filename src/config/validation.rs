//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value formats (bind address, upstream URL)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream.base_url {0:?} is not a valid URL")]
    InvalidUpstreamUrl(String),

    #[error("upstream.base_url {0:?} must use http or https")]
    UnsupportedUpstreamScheme(String),
}

/// Validate a deserialized configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedUpstreamScheme(
                config.upstream.base_url.clone(),
            ));
        }
        Ok(_) => {}
        Err(_) => {
            errors.push(ValidationError::InvalidUpstreamUrl(
                config.upstream.base_url.clone(),
            ));
        }
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

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidBindAddress(_)));
    }

    #[test]
    fn non_http_upstream_scheme_is_rejected() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "ftp://example.com".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::UnsupportedUpstreamScheme(_)
        ));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "nope".into();
        config.upstream.base_url = "also nope".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
