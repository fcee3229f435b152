//! Gate Configuration
//!
//! Explicit configuration owned by the composition root. The acting
//! application's ID is derived from the bot token, whose first segment is
//! the base64-encoded application ID.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use wd_common::Snowflake;

/// Configuration for one gate instance.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL of the REST endpoint, e.g. `"http://localhost:8080/api"`.
    pub api_base: String,

    /// Bot token, with or without the `"Bot "` prefix.
    pub token: String,

    /// Guild this gate instance is bound to.
    pub guild_id: Snowflake,

    /// Acting application ID, decoded from the token.
    pub app_id: Snowflake,
}

impl GateConfig {
    /// Build a configuration, deriving the application ID from the token.
    pub fn new(
        api_base: impl Into<String>,
        token: impl Into<String>,
        guild_id: Snowflake,
    ) -> Result<Self, ConfigError> {
        let token = token.into();
        let app_id = app_id_from_token(&token)?;
        Ok(Self {
            api_base: api_base.into(),
            token,
            guild_id,
            app_id,
        })
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Token does not have the expected dot-separated segments.
    #[error("token is not in the expected format")]
    MalformedToken,

    /// The token's first segment does not decode to an application ID.
    #[error("token does not encode a valid application id")]
    InvalidApplicationId,
}

fn app_id_from_token(token: &str) -> Result<Snowflake, ConfigError> {
    let raw = token.strip_prefix("Bot ").unwrap_or(token);
    let first = raw
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or(ConfigError::MalformedToken)?;

    // Tokens in the wild carry the segment in either base64 alphabet.
    let decoded = STANDARD_NO_PAD
        .decode(first)
        .or_else(|_| URL_SAFE_NO_PAD.decode(first))
        .map_err(|_| ConfigError::MalformedToken)?;

    let text = String::from_utf8(decoded).map_err(|_| ConfigError::InvalidApplicationId)?;
    text.parse().map_err(|_| ConfigError::InvalidApplicationId)
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64("1234567890") without padding
    const APP_SEGMENT: &str = "MTIzNDU2Nzg5MA";

    #[test]
    fn test_app_id_decoded_from_token() {
        let token = format!("{APP_SEGMENT}.x.y");
        let config = GateConfig::new("http://localhost:8080/api", token, Snowflake::new(1))
            .expect("valid token");
        assert_eq!(config.app_id, Snowflake::new(1234567890));
    }

    #[test]
    fn test_bot_prefix_is_stripped() {
        let token = format!("Bot {APP_SEGMENT}.x.y");
        let config = GateConfig::new("http://localhost:8080/api", token, Snowflake::new(1))
            .expect("valid token");
        assert_eq!(config.app_id, Snowflake::new(1234567890));
    }

    #[test]
    fn test_non_numeric_app_id_rejected() {
        // base64("not-a-number")
        let token = "bm90LWEtbnVtYmVy.x.y";
        let err = GateConfig::new("http://localhost:8080/api", token, Snowflake::new(1))
            .expect_err("must reject");
        assert_eq!(err, ConfigError::InvalidApplicationId);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let err = GateConfig::new("http://localhost:8080/api", "!!!", Snowflake::new(1))
            .expect_err("must reject");
        assert_eq!(err, ConfigError::MalformedToken);
    }
}
