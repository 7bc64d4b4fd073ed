//! Session context and provider

use super::storage::BrowserTokenStore;
use portal_client::{Session, TokenStore};
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContextData {
    pub session: Option<Session>,
}

/// Session context actions
pub enum SessionAction {
    Login(Session),
    Logout,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(session) => Rc::new(Self {
                session: Some(session),
            }),
            SessionAction::Logout => Rc::new(Self { session: None }),
        }
    }
}

/// Token store that persists to localStorage and mirrors changes into the
/// session context. Storage is the source of truth for reads, so a flow sees
/// its own writes before the context re-renders.
#[derive(Clone)]
pub struct SessionStore {
    context: SessionContext,
    storage: BrowserTokenStore,
}

impl SessionStore {
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            storage: BrowserTokenStore,
        }
    }
}

impl TokenStore for SessionStore {
    fn load(&self) -> Option<Session> {
        self.storage.load()
    }

    fn save(&self, session: &Session) {
        self.storage.save(session);
        self.context.dispatch(SessionAction::Login(session.clone()));
    }

    fn clear(&self) {
        self.storage.clear();
        self.context.dispatch(SessionAction::Logout);
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component. The stored token is read once at page load.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(|| SessionContextData {
        session: BrowserTokenStore.load(),
    });

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook returning a token store bound to the session context
#[hook]
pub fn use_session_store() -> SessionStore {
    SessionStore::new(use_session())
}
