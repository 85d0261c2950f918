//! Resolved configuration model

use crate::error::{XibugoError, XibugoResult};
use std::fmt;

/// Production API endpoint, used when neither a base URL nor sandbox is set
pub const PRODUCTION_URL: &str = "https://api.xibugo.com";

/// Sandbox API endpoint, forced whenever `sandbox` is true
pub const SANDBOX_URL: &str = "https://api.sandbox.xibugo.com";

/// Configuration for a single command invocation
///
/// Built by the resolver from the merged layers; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Account identifier
    pub account: String,
    /// API access token
    pub access_token: String,
    /// API endpoint; empty means "whatever the environment implies"
    pub base_url: String,
    /// Use the sandbox endpoint
    pub sandbox: bool,
}

impl Config {
    /// Check that the required credentials are present
    ///
    /// Fields are checked in declaration order, so a config missing both
    /// reports the account first.
    pub fn validate(&self) -> XibugoResult<()> {
        if self.account.is_empty() {
            return Err(XibugoError::validation_field(
                "account id is required",
                "account",
            ));
        }

        if self.access_token.is_empty() {
            return Err(XibugoError::validation_field(
                "access token is required",
                "access-token",
            ));
        }

        Ok(())
    }

    /// The endpoint requests would go to
    pub fn effective_base_url(&self) -> &str {
        if self.sandbox {
            SANDBOX_URL
        } else if self.base_url.is_empty() {
            PRODUCTION_URL
        } else {
            &self.base_url
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "account: {}", self.account)?;
        writeln!(f, "access-token: {}", self.access_token)?;
        writeln!(f, "base-url: {}", self.base_url)?;
        write!(f, "sandbox: {}", self.sandbox)
    }
}
