//! Configuration validation logic.

use crate::api::PAGE_SIZE;
use crate::config::loader::{ApiConfig, Config, SearchLimits};
use crate::error::{Error, Result};
use url::Url;

/// Minimum length for a bearer token.
const MIN_TOKEN_LENGTH: usize = 20;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_api(&config.api)?;
    validate_limits(&config.search)?;

    Ok(())
}

/// Validate API settings.
pub fn validate_api(api: &ApiConfig) -> Result<()> {
    let token = match api.bearer_token.as_deref() {
        Some(token) if !token.trim().is_empty() => token,
        _ => {
            return Err(Error::MissingConfig(
                "bearer_token (set [api] bearer_token, --bearer-token or TWITTER_BEARER_TOKEN)"
                    .to_string(),
            ))
        }
    };

    if token.len() < MIN_TOKEN_LENGTH {
        return Err(Error::ConfigValidation {
            field: "bearer_token".to_string(),
            message: format!(
                "Token must be at least {} characters (got {})",
                MIN_TOKEN_LENGTH,
                token.len()
            ),
        });
    }

    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "bearer_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual bearer token."
                .to_string(),
        });
    }

    let base_url = Url::parse(&api.base_url).map_err(|e| Error::ConfigValidation {
        field: "base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", api.base_url, e),
    })?;

    if base_url.cannot_be_a_base() {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("'{}' cannot be used as a base URL", api.base_url),
        });
    }

    Ok(())
}

/// Validate paging limits.
pub fn validate_limits(limits: &SearchLimits) -> Result<()> {
    if limits.max_pages == 0 {
        return Err(Error::ConfigValidation {
            field: "max_pages".to_string(),
            message: "At least one page must be requested".to_string(),
        });
    }

    if limits.page_size == 0 || limits.page_size > PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                PAGE_SIZE, limits.page_size
            ),
        });
    }

    Ok(())
}
