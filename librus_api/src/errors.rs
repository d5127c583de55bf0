//! Error types for the portal client.

/// Errors that can occur while logging in to or fetching from the portal.
///
/// The host treats these differently: [`Error::Auth`] means the stored
/// credentials need re-entering, while [`Error::Timeout`] and
/// [`Error::Connection`] are transient unavailability.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Credentials were rejected or the login handshake did not reach an
    /// authenticated state.
    #[error("Authentication failed: {0}")]
    Auth(String),
    /// A single exchange exceeded its deadline.
    #[error("Connection to Librus timed out")]
    Timeout(#[source] reqwest::Error),
    /// Any other transport or request failure.
    #[error("Could not connect to Librus: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    pub(crate) fn connection(message: impl Into<String>) -> Self {
        Error::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// True for credential/handshake failures.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// True when an individual exchange timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// True for every transport failure, timeouts included.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Connection { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else {
            Error::Connection {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}
