//! Runtime configuration
//!
//! Resolves the two inputs every command needs before any remote call is
//! made: the API endpoint and the access token. Both are resolved exactly
//! once, at startup, and threaded into [`crate::api::SpacesClient`] at
//! construction time rather than read ambiently inside each operation.
//!
//! Resolution order:
//! - endpoint: `--endpoint` flag, else `HF_ENDPOINT`, else the public Hub
//! - token: `--token` flag, else `HF_TOKEN`, else `HUGGINGFACE_TOKEN`,
//!   else absent (with a warning; read operations may still succeed against
//!   public spaces)

use crate::error::Result;
use tracing::warn;
use url::Url;

/// Default API endpoint (the public Hugging Face Hub)
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV_VAR: &str = "HF_ENDPOINT";

/// Environment variables consulted for the access token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["HF_TOKEN", "HUGGINGFACE_TOKEN"];

/// Resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Spaces API
    pub endpoint: Url,
    /// Access token, if any was supplied
    pub token: Option<String>,
}

impl AppConfig {
    /// Resolve config from explicit flags, falling back to the environment
    pub fn resolve(endpoint_flag: Option<&str>, token_flag: Option<&str>) -> Result<Self> {
        let endpoint = resolve_endpoint_with(endpoint_flag, |var| env_non_empty(var))?;
        let token = resolve_token_with(token_flag, |var| env_non_empty(var));

        if token.is_none() {
            warn!(
                "No {} or {} found in environment; some operations may require authentication",
                TOKEN_ENV_VARS[0], TOKEN_ENV_VARS[1]
            );
        }

        Ok(Self { endpoint, token })
    }
}

/// Read an environment variable, treating empty values as unset
fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

/// Resolve the endpoint from a flag or an environment lookup
fn resolve_endpoint_with(
    flag: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Url> {
    let raw = flag
        .map(String::from)
        .or_else(|| lookup(ENDPOINT_ENV_VAR))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    Ok(Url::parse(&raw)?)
}

/// Resolve the token from a flag or an environment lookup
fn resolve_token_with(
    flag: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }
    TOKEN_ENV_VARS.iter().copied().find_map(|var| lookup(var))
}
