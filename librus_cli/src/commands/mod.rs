//! CLI subcommand implementations.

use std::time::Duration;

use clap::Args;
use librus_api::{Client, ClientConfig, DateWindow};

pub mod homework;
pub mod validate;
pub mod watch;

/// Librus login, read from flags or the environment (`.env` is loaded first).
#[derive(Args)]
pub struct CredentialArgs {
    /// Librus login
    #[arg(long, env = "LIBRUS_USERNAME")]
    pub username: String,

    /// Librus password
    #[arg(long, env = "LIBRUS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct WindowArgs {
    /// Days of past homework to include
    #[arg(long, default_value_t = librus_api::window::DEFAULT_PAST_DAYS)]
    pub past_days: u32,

    /// Days of upcoming homework to include
    #[arg(long, default_value_t = librus_api::window::DEFAULT_FUTURE_DAYS)]
    pub future_days: u32,
}

impl WindowArgs {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.past_days, self.future_days)
    }
}

/// Builds the portal client, honouring `LIBRUS_OAUTH_URL`, `LIBRUS_API_URL`
/// and `LIBRUS_TIMEOUT_SECS` overrides.
pub fn build_client() -> Client {
    let defaults = ClientConfig::default();
    Client::with_config(ClientConfig {
        oauth_base_url: std::env::var("LIBRUS_OAUTH_URL").unwrap_or(defaults.oauth_base_url),
        api_base_url: std::env::var("LIBRUS_API_URL").unwrap_or(defaults.api_base_url),
        timeout: env_u64("LIBRUS_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        user_agent: defaults.user_agent,
    })
}

/// Turns a client error into the message the user should act on.
pub fn describe_error(err: librus_api::Error) -> anyhow::Error {
    let hint = match &err {
        librus_api::Error::Auth(_) => "Invalid Librus credentials; re-enter username and password",
        librus_api::Error::Timeout(_) => "Timed out talking to Librus; try again later",
        librus_api::Error::Connection { .. } => "Could not reach Librus; try again later",
    };
    anyhow::Error::new(err).context(hint)
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|val| val.parse::<u64>().ok())
}
