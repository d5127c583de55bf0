//! Five-step Synergia login handshake.

use serde::de::DeserializeOwned;

use crate::{endpoints::ClientConfig, types::TokenInfo, Error};

/// Markers in the login response body that mean the credentials were rejected.
const LOGIN_FAILURE_MARKERS: [&str; 2] = ["error", "Nieprawidłowy"];

/// An authenticated, cookie-carrying HTTP context.
///
/// Lives for one client call only and is never shared or reused.
pub struct Session<'a> {
    http: reqwest::Client,
    config: &'a ClientConfig,
}

impl Session<'_> {
    /// GETs an API gateway endpoint and deserializes its JSON body.
    ///
    /// A non-success status or an unparsable body is a request failure.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let url = self.config.api_url(endpoint)?;
        tracing::debug!("Fetching Librus API: {}", url);

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::error!(
                "{} failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body)
            );
            return Err(Error::connection(format!(
                "HTTP {} from {}",
                status.as_u16(),
                endpoint
            )));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {}: {} | body: {}",
                endpoint,
                e,
                truncate_body(&body)
            );
            Error::connection(format!("malformed response from {}", endpoint))
        })
    }
}

/// Logs in and returns a session bound to the account.
///
/// Steps, all on one cookie jar:
/// 1. GET `OAuth/Authorization` to open an anonymous OAuth session
/// 2. POST the credentials to `OAuth/Authorization`
/// 3. GET `OAuth/Authorization/Grant`, whose redirects set the session cookies
/// 4. GET `Auth/TokenInfo` for the `UserIdentifier`
/// 5. GET `Auth/UserInfo/{UserIdentifier}` to activate API access
///
/// Any transport failure aborts the sequence. Nothing is retried.
#[tracing::instrument(skip_all)]
pub async fn authenticate<'a>(
    config: &'a ClientConfig,
    username: &str,
    password: &str,
) -> Result<Session<'a>, Error> {
    let http = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .cookie_store(true)
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::from(e)
        })?;

    tracing::debug!("Librus auth step 1: initiating OAuth flow");
    let resp = http.get(config.authorization_url()?).send().await?;
    tracing::debug!(
        "Librus auth step 1: HTTP {}, URL: {}",
        resp.status(),
        resp.url()
    );

    tracing::debug!("Librus auth step 2: submitting credentials");
    let resp = http
        .post(config.login_url()?)
        .form(&[("action", "login"), ("login", username), ("pass", password)])
        .send()
        .await?;
    tracing::debug!(
        "Librus auth step 2: HTTP {}, URL: {}",
        resp.status(),
        resp.url()
    );
    let body = resp.text().await?;
    if is_login_rejected(&body) {
        tracing::debug!("Librus auth step 2: invalid credentials detected");
        return Err(Error::Auth("Invalid login or password".to_string()));
    }

    tracing::debug!("Librus auth step 3: OAuth grant");
    let resp = http.get(config.grant_url()?).send().await?;
    tracing::debug!(
        "Librus auth step 3: HTTP {}, URL: {}",
        resp.status(),
        resp.url()
    );

    tracing::debug!("Librus auth step 4: getting TokenInfo");
    let resp = http.get(config.token_info_url()?).send().await?;
    let status = resp.status();
    tracing::debug!("Librus auth step 4: HTTP {}", status);
    if !status.is_success() {
        return Err(Error::Auth("Failed to obtain token info".to_string()));
    }
    let body = resp.text().await?;
    let token_info = serde_json::from_str::<TokenInfo>(&body).map_err(|e| {
        tracing::debug!("Librus auth step 4: failed to parse UserIdentifier: {}", e);
        Error::Auth("Failed to parse UserIdentifier".to_string())
    })?;
    let user_identifier = token_info.user_identifier.to_string();

    tracing::debug!("Librus auth step 5: activating API access");
    let resp = http
        .get(config.user_info_url(&user_identifier)?)
        .send()
        .await?;
    let status = resp.status();
    tracing::debug!("Librus auth step 5: HTTP {}", status);
    if !status.is_success() {
        return Err(Error::Auth("Failed to activate API access".to_string()));
    }

    tracing::debug!("Librus auth: all five steps completed");
    Ok(Session { http, config })
}

fn is_login_rejected(body: &str) -> bool {
    LOGIN_FAILURE_MARKERS
        .iter()
        .any(|marker| body.contains(marker))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let cut = (0..=MAX)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...[truncated]", &body[..cut])
    }
}
