//! Portal endpoints and URL construction.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Production OAuth host.
pub const OAUTH_BASE_URL: &str = "https://api.librus.pl";

/// Production API gateway.
pub const API_BASE_URL: &str = "https://synergia.librus.pl/gateway/api/2.0";

/// OAuth client identifier used by the Synergia web app.
pub const OAUTH_CLIENT_ID: &str = "46";

/// Per-exchange timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Desktop browser user agent; the portal filters obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Connection settings shared by every call a [`Client`](crate::Client) makes.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the OAuth host. Defaults to [`OAUTH_BASE_URL`].
    pub oauth_base_url: String,
    /// Base URL of the versioned API gateway. Defaults to [`API_BASE_URL`].
    pub api_base_url: String,
    /// Deadline for each individual exchange.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            oauth_base_url: OAUTH_BASE_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Step 1 URL: anonymous authorization request.
    pub fn authorization_url(&self) -> Result<Url, Error> {
        let mut url = join(&self.oauth_base_url, &["OAuth", "Authorization"])?;
        url.query_pairs_mut()
            .append_pair("client_id", OAUTH_CLIENT_ID)
            .append_pair("response_type", "code")
            .append_pair("scope", "mydata");
        Ok(url)
    }

    /// Step 2 URL: credential form target.
    pub fn login_url(&self) -> Result<Url, Error> {
        let mut url = join(&self.oauth_base_url, &["OAuth", "Authorization"])?;
        url.query_pairs_mut().append_pair("client_id", OAUTH_CLIENT_ID);
        Ok(url)
    }

    /// Step 3 URL: grant redirect chain.
    pub fn grant_url(&self) -> Result<Url, Error> {
        let mut url = join(&self.oauth_base_url, &["OAuth", "Authorization", "Grant"])?;
        url.query_pairs_mut().append_pair("client_id", OAUTH_CLIENT_ID);
        Ok(url)
    }

    /// Step 4 URL: token introspection.
    pub fn token_info_url(&self) -> Result<Url, Error> {
        join(&self.api_base_url, &["Auth", "TokenInfo"])
    }

    /// Step 5 URL: user-info activation for the given identifier.
    pub fn user_info_url(&self, user_identifier: &str) -> Result<Url, Error> {
        join(&self.api_base_url, &["Auth", "UserInfo", user_identifier])
    }

    /// URL of a bulk data endpoint such as `HomeWorks/Categories`.
    pub fn api_url(&self, endpoint: &str) -> Result<Url, Error> {
        let segments: Vec<&str> = endpoint.split('/').filter(|s| !s.is_empty()).collect();
        join(&self.api_base_url, &segments)
    }
}

fn join(base: &str, segments: &[&str]) -> Result<Url, Error> {
    let mut url = Url::parse(base).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base, e);
        Error::connection(format!("invalid base URL {}", base))
    })?;
    url.path_segments_mut()
        .map_err(|_| Error::connection(format!("base URL {} cannot carry a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
