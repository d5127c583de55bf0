//! Public entry points: credential validation and homework fetching.

use chrono::{Local, NaiveDate};

use crate::{
    auth::{self, Session},
    endpoints::ClientConfig,
    lookup::{build_category_map, build_subject_map, build_user_map, Lookups},
    resolve::resolve_homework_entries,
    types::{CategoriesResponse, HomeWorksResponse, HomeworkEntry, SubjectsResponse, UsersResponse},
    window::DateWindow,
    Error,
};

const HOMEWORKS_ENDPOINT: &str = "HomeWorks";
const CATEGORIES_ENDPOINT: &str = "HomeWorks/Categories";
const SUBJECTS_ENDPOINT: &str = "Subjects";
const USERS_ENDPOINT: &str = "Users";

/// Path of the API gateway below the portal host.
const API_GATEWAY_PATH: &str = "/gateway/api/2.0";

/// Client for the Librus Synergia portal.
///
/// Holds configuration only. Every call logs in from scratch on a fresh
/// session that is dropped when the call returns, so one `Client` can
/// serve concurrent calls for different accounts.
pub struct Client {
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the production portal.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom settings.
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Creates a client serving both OAuth and the API gateway from one host.
    /// Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::with_config(ClientConfig {
            oauth_base_url: base.to_string(),
            api_base_url: format!("{}{}", base, API_GATEWAY_PATH),
            ..ClientConfig::default()
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs the login handshake and returns the live session.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session<'_>, Error> {
        auth::authenticate(&self.config, username, password).await
    }

    /// Checks credentials with a full login.
    ///
    /// Returns `Ok(false)` when the portal rejects them. Timeouts and
    /// connection failures are returned as errors, never as `false`.
    pub async fn validate_credentials(&self, username: &str, password: &str) -> Result<bool, Error> {
        match self.authenticate(username, password).await {
            Ok(_) => Ok(true),
            Err(Error::Auth(reason)) => {
                tracing::debug!("Librus credentials rejected: {}", reason);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Logs in and fetches the homework inside `window` around today.
    pub async fn fetch_homework_data(
        &self,
        username: &str,
        password: &str,
        window: DateWindow,
    ) -> Result<Vec<HomeworkEntry>, Error> {
        self.fetch_homework_data_on(username, password, window, Local::now().date_naive())
            .await
    }

    /// Like [`Client::fetch_homework_data`] with an explicit anchor date.
    ///
    /// Makes four bulk calls after login (homework, categories, subjects,
    /// users). All four must succeed; otherwise nothing is returned.
    pub async fn fetch_homework_data_on(
        &self,
        username: &str,
        password: &str,
        window: DateWindow,
        today: NaiveDate,
    ) -> Result<Vec<HomeworkEntry>, Error> {
        let session = self.authenticate(username, password).await?;

        tracing::debug!("Fetching homework data from Librus API");
        let homeworks: HomeWorksResponse = session.get_json(HOMEWORKS_ENDPOINT).await?;
        let categories: CategoriesResponse = session.get_json(CATEGORIES_ENDPOINT).await?;
        let subjects: SubjectsResponse = session.get_json(SUBJECTS_ENDPOINT).await?;
        let users: UsersResponse = session.get_json(USERS_ENDPOINT).await?;

        let lookups = Lookups {
            categories: build_category_map(&categories.categories),
            subjects: build_subject_map(&subjects.subjects),
            users: build_user_map(&users.users),
        };

        let total = homeworks.home_works.len();
        let filtered = window.filter_at(homeworks.home_works, today);
        let entries = resolve_homework_entries(&filtered, &lookups);

        tracing::debug!(
            "Fetched {} homework entries ({} total, {} after date filter)",
            entries.len(),
            total,
            filtered.len()
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_defaults_to_production() {
        let client = Client::new();
        assert_eq!(client.config().oauth_base_url, "https://api.librus.pl");
        assert_eq!(
            client.config().api_base_url,
            "https://synergia.librus.pl/gateway/api/2.0"
        );
    }

    #[test]
    fn with_base_url_shares_host() {
        let client = Client::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(client.config().oauth_base_url, "http://127.0.0.1:4000");
        assert_eq!(
            client.config().api_base_url,
            "http://127.0.0.1:4000/gateway/api/2.0"
        );
    }
}
