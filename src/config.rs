//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;

use crate::auth::{AccessToken, DEFAULT_ACCESS_TOKEN};

/// OAuth 2.0 implicit flow stub
///
/// Redirects every authorization request back to its redirect_uri with a fixed access token.
#[derive(Parser, Debug, Clone)]
#[command(name = "implicit-stub")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "IMPLICIT_STUB_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Access token appended to every redirect
    #[arg(
        long,
        env = "IMPLICIT_STUB_ACCESS_TOKEN",
        default_value = DEFAULT_ACCESS_TOKEN,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub access_token: String,

    /// Also serve the handler at /oauth2/authorization2
    #[arg(long, env = "IMPLICIT_STUB_LEGACY_ROUTES")]
    pub legacy_routes: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "IMPLICIT_STUB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn access_token(&self) -> AccessToken {
        AccessToken::new(self.access_token.as_str())
    }
}
