//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the upstream endpoint is an absolute http(s) URL
//! - Validate bind addresses parse as socket addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("upstream endpoint '{0}' is not a valid URL")]
    InvalidEndpoint(String),

    #[error("upstream endpoint '{0}' must use http or https")]
    EndpointScheme(String),

    #[error("upstream model must not be empty")]
    EmptyModel,

    #[error("listener bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Check an [`AppConfig`] for semantic errors, reporting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.endpoint) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::EndpointScheme(
                config.upstream.endpoint.clone(),
            ));
        }
        Ok(_) => {}
        Err(_) => {
            errors.push(ValidationError::InvalidEndpoint(
                config.upstream.endpoint.clone(),
            ));
        }
    }

    if config.upstream.model.trim().is_empty() {
        errors.push(ValidationError::EmptyModel);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_endpoint_reported() {
        let mut config = AppConfig::default();
        config.upstream.endpoint = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = AppConfig::default();
        config.upstream.endpoint = "ftp://api.openai.com/v1/responses".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::EndpointScheme(_)));
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = AppConfig::default();
        config.upstream.endpoint = "::".to_string();
        config.upstream.model = " ".to_string();
        config.listener.bind_address = "localhost".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
