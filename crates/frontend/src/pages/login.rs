//! Login screen

use crate::components::CredentialsForm;
use crate::routes::{Route, navigate};
use crate::services::public_client;
use crate::session::use_session_store;
use portal_client::{Credentials, FormEntries, SubmitOutcome, flow};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let store = use_session_store();
    let error = use_state(|| Option::<AttrValue>::None);

    let on_submit = {
        let error = error.clone();
        Callback::from(move |entries: FormEntries| {
            let navigator = navigator.clone();
            let store = store.clone();
            let error = error.clone();
            let credentials = Credentials::from_entries(&entries);

            wasm_bindgen_futures::spawn_local(async move {
                let client = match public_client() {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::error!(error = %e, "API client unavailable");
                        return;
                    }
                };

                match flow::submit_login(&client, &store, &credentials).await {
                    SubmitOutcome::Navigate(destination) => {
                        navigate(navigator.as_ref(), destination);
                    }
                    SubmitOutcome::Banner(message) => error.set(Some(message.into())),
                    SubmitOutcome::Idle => {}
                }
            });
        })
    };

    html! {
        <CredentialsForm
            title="Sign in to your account"
            submit_label="Sign in"
            {on_submit}
            error={(*error).clone()}
            switch_prompt="Not a member?"
            switch_label="Sign up"
            switch_to={Route::Signup}
        />
    }
}
