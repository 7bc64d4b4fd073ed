//! Email / username / password form shared by signup and login

use super::{Banner, BannerKind};
use crate::form::take_submission;
use crate::routes::Route;
use portal_client::FormEntries;
use portal_client::form::fields;
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_CLASS: &str = "block w-full rounded-md bg-white px-3 py-1.5 text-base text-gray-900 outline-1 -outline-offset-1 outline-gray-300 placeholder:text-gray-400 focus:outline-2 focus:-outline-offset-2 focus:outline-indigo-600 sm:text-sm/6";
const LABEL_CLASS: &str = "block text-sm/6 font-medium text-gray-900";

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub on_submit: Callback<FormEntries>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Text before the link to the other screen
    pub switch_prompt: AttrValue,
    pub switch_label: AttrValue,
    pub switch_to: Route,
    /// Password autocomplete hint
    #[prop_or(AttrValue::Static("current-password"))]
    pub password_autocomplete: AttrValue,
}

#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    // Not disabled while a request is in flight; repeated submits each send.
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            if let Some(entries) = take_submission(&e) {
                on_submit.emit(entries);
            }
        })
    };

    html! {
        <div class="flex min-h-full flex-col justify-center px-6 py-12 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-sm">
                <h2 class="mt-10 text-center text-2xl/9 font-bold tracking-tight text-gray-900">
                    {props.title.clone()}
                </h2>
                <Banner kind={BannerKind::Warning} message={props.error.clone()} />
            </div>

            <div class="mt-10 sm:mx-auto sm:w-full sm:max-w-sm">
                <form {onsubmit} class="space-y-6">
                    <div>
                        <label for={fields::EMAIL} class={LABEL_CLASS}>{"Email address"}</label>
                        <div class="mt-2">
                            <input type="email" name={fields::EMAIL} id={fields::EMAIL} autocomplete="email" required=true class={INPUT_CLASS} />
                        </div>
                    </div>

                    <div>
                        <label for={fields::USERNAME} class={LABEL_CLASS}>{"Username"}</label>
                        <div class="mt-2">
                            <input type="text" name={fields::USERNAME} id={fields::USERNAME} autocomplete="username" required=true class={INPUT_CLASS} />
                        </div>
                    </div>

                    <div>
                        <label for={fields::PASSWORD} class={LABEL_CLASS}>{"Password"}</label>
                        <div class="mt-2">
                            <input type="password" name={fields::PASSWORD} id={fields::PASSWORD} autocomplete={props.password_autocomplete.clone()} required=true class={INPUT_CLASS} />
                        </div>
                    </div>

                    <div>
                        <button type="submit" class="flex w-full justify-center rounded-md bg-indigo-600 px-3 py-1.5 text-sm/6 font-semibold text-white shadow-xs hover:bg-indigo-500 focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-600">
                            {props.submit_label.clone()}
                        </button>
                    </div>
                </form>

                <p class="mt-10 text-center text-sm/6 text-gray-500">
                    {props.switch_prompt.clone()}{" "}
                    <Link<Route> to={props.switch_to} classes="font-semibold text-indigo-600 hover:text-indigo-500">
                        {props.switch_label.clone()}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
