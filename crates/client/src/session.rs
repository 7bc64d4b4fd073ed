//! Session context and token persistence

use std::cell::RefCell;
use std::fmt;

/// An authenticated session. Created at login, dropped at logout or when the
/// server rejects the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Opaque bearer token
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Persistent storage for the session token.
///
/// Implementations are single-threaded; the browser store wraps
/// `localStorage`, tests use [`MemoryTokenStore`].
pub trait TokenStore {
    /// Load the stored session, if any
    fn load(&self) -> Option<Session>;

    /// Persist a session, replacing any previous one
    fn save(&self, session: &Session);

    /// Forget the stored session
    fn clear(&self);
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<Session> {
        self.token.borrow().as_deref().map(Session::new)
    }

    fn save(&self, session: &Session) {
        *self.token.borrow_mut() = Some(session.token().to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) {
        (**self).save(session);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&Session::new("abc"));
        assert_eq!(store.load(), Some(Session::new("abc")));

        store.save(&Session::new("def"));
        assert_eq!(store.load().unwrap().token(), "def");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", Session::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
    }
}
