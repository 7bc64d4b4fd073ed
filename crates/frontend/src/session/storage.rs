//! localStorage-backed token store

use crate::config::AppConfig;
use gloo::storage::{LocalStorage, Storage};
use portal_client::{Session, TokenStore};

/// Keeps the raw token string under [`AppConfig::TOKEN_STORAGE_KEY`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<Session> {
        LocalStorage::raw()
            .get_item(AppConfig::TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(Session::new)
    }

    fn save(&self, session: &Session) {
        if LocalStorage::raw()
            .set_item(AppConfig::TOKEN_STORAGE_KEY, session.token())
            .is_err()
        {
            gloo::console::error!("failed to persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(AppConfig::TOKEN_STORAGE_KEY);
    }
}
