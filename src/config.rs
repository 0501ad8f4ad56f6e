use anyhow::{anyhow, Context, Result};
use std::env;

/// Runtime configuration shared by the token signer and verifier.
///
/// The secret is read once at startup and never mutated afterwards; clone the
/// config into whichever components need it.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 signing secret.
    pub secret: String,
    /// Expected issuer claim (iss); unchecked when absent.
    pub issuer: Option<String>,
    /// Expected audience claim (aud); unchecked when absent.
    pub audience: Option<String>,
    /// Allowable clock skew in seconds when validating exp.
    pub leeway_seconds: u32,
    /// Lifetime of issued access tokens in seconds.
    pub access_ttl_seconds: i64,
}

impl JwtConfig {
    /// Construct config with sensible defaults (30 second leeway, 1 hour TTL).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: None,
            audience: None,
            leeway_seconds: 30,
            access_ttl_seconds: 3600,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Adjust the allowed leeway.
    pub fn with_leeway(mut self, seconds: u32) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Adjust the access token lifetime.
    pub fn with_access_ttl(mut self, seconds: i64) -> Self {
        self.access_ttl_seconds = seconds;
        self
    }
}

/// Load [`JwtConfig`] from the environment. `JWT_SECRET` is required;
/// `JWT_ISSUER`, `JWT_AUDIENCE`, `JWT_LEEWAY_SECONDS` and
/// `JWT_ACCESS_TTL_SECONDS` are optional overrides.
pub fn load_jwt_config() -> Result<JwtConfig> {
    let secret = env::var("JWT_SECRET").map_err(|_| anyhow!("JWT_SECRET must be set"))?;
    if secret.trim().is_empty() {
        return Err(anyhow!("JWT_SECRET must not be empty"));
    }

    let mut config = JwtConfig::new(secret);

    if let Some(issuer) = env::var("JWT_ISSUER").ok().as_deref().and_then(normalize_optional) {
        config = config.with_issuer(issuer);
    }
    if let Some(audience) = env::var("JWT_AUDIENCE").ok().as_deref().and_then(normalize_optional) {
        config = config.with_audience(audience);
    }

    if let Ok(value) = env::var("JWT_LEEWAY_SECONDS") {
        let seconds = value
            .trim()
            .parse::<u32>()
            .context("Failed to parse JWT_LEEWAY_SECONDS")?;
        config = config.with_leeway(seconds);
    }

    if let Ok(value) = env::var("JWT_ACCESS_TTL_SECONDS") {
        let seconds = value
            .trim()
            .parse::<i64>()
            .context("Failed to parse JWT_ACCESS_TTL_SECONDS")?;
        if seconds <= 0 {
            return Err(anyhow!("JWT_ACCESS_TTL_SECONDS must be positive, got {seconds}"));
        }
        config = config.with_access_ttl(seconds);
    }

    Ok(config)
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
