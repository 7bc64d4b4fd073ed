//! Portal API client.
//!
//! Typed clients for the registration, login and profile endpoints, the
//! profile form serializer, and the screen flows the frontend drives. Builds
//! natively and for `wasm32`.

pub mod auth;
pub mod config;
pub mod data_url;
pub mod error;
pub mod flow;
pub mod form;
pub mod profile;
pub mod session;
pub mod typed;
pub mod types;

pub use config::ClientConfig;
pub use error::ClientError;
pub use flow::{Destination, ProfileLoad, SubmitOutcome, UpdateOutcome};
pub use form::{FormEntries, FormValue, ProfileSubmission, ProfileUpdate};
pub use session::{MemoryTokenStore, Session, TokenStore};
pub use typed::{AuthenticatedClient, ClientBuilder, PublicClient};
pub use types::{Address, Credentials, Profile};
