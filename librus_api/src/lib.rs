//! Client for the Librus Synergia school portal.
//!
//! Logs in through the portal's OAuth handshake, fetches homework together
//! with the category, subject and user listings, and returns the entries
//! inside a day window with every reference resolved to a display name.

mod auth;
mod client;
pub mod endpoints;
mod errors;
pub mod lookup;
pub mod resolve;
pub mod types;
pub mod window;
pub use self::auth::Session;
pub use self::client::Client;
pub use self::endpoints::ClientConfig;
pub use self::errors::Error;
pub use self::types::HomeworkEntry;
pub use self::window::DateWindow;
