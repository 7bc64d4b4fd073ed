//! Session handling

pub mod context;
pub mod storage;

pub use context::{
    SessionAction, SessionContext, SessionContextData, SessionProvider, SessionStore,
    use_session, use_session_store,
};
pub use storage::BrowserTokenStore;
