//! Signup screen

use crate::components::CredentialsForm;
use crate::routes::{Route, navigate};
use crate::services::public_client;
use portal_client::{Credentials, FormEntries, SubmitOutcome, flow};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let navigator = use_navigator();
    let error = use_state(|| Option::<AttrValue>::None);

    let on_submit = {
        let error = error.clone();
        Callback::from(move |entries: FormEntries| {
            let navigator = navigator.clone();
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

                match flow::submit_signup(&client, &credentials).await {
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
            title="Sign up for an account"
            submit_label="Sign up"
            {on_submit}
            error={(*error).clone()}
            switch_prompt="Already a member?"
            switch_label="Login"
            switch_to={Route::Login}
            password_autocomplete="new-password"
        />
    }
}
