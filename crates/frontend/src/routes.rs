//! Application routes

use crate::pages::{LoginPage, ProfilePage, SignupPage};
use portal_client::Destination;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Signup => Self::Signup,
            Destination::Login => Self::Login,
            Destination::Profile => Self::Profile,
        }
    }
}

/// Push the route for a flow destination, if a router is mounted. Already
/// being there is a no-op, so a page and the session context can both
/// redirect without stacking history entries.
pub fn navigate(navigator: Option<&Navigator>, destination: Destination) {
    let route = Route::from(destination);
    match navigator {
        Some(_) if current_path().as_deref() == Some(route.to_path().as_str()) => {}
        Some(navigator) => navigator.push(&route),
        None => gloo::console::error!("navigation requested outside of a router"),
    }
}

fn current_path() -> Option<String> {
    gloo::utils::window().location().pathname().ok()
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Signup} /> },
    }
}
