//! Profile screen: load, edit, picture preview and logout

use crate::components::{Banner, BannerKind, Spinner};
use crate::config::AppConfig;
use crate::file::{read_data_url, selected_file};
use crate::form::take_submission;
use crate::routes::{Route, navigate};
use crate::services::public_client;
use crate::session::{SessionStore, use_session};
use crate::state::{ProfileAction, ProfilePageState};
use portal_client::form::fields;
use portal_client::{Profile, ProfileLoad, ProfileSubmission, UpdateOutcome, flow};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-indigo-500 focus:outline-none";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    name: &'static str,
    label: &'static str,
    #[prop_or("text")]
    input_type: &'static str,
    #[prop_or_default]
    value: AttrValue,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div>
            <label for={props.name} class={LABEL_CLASS}>{props.label}</label>
            <input
                type={props.input_type}
                id={props.name}
                name={props.name}
                value={props.value.clone()}
                required={AppConfig::is_required(props.name)}
                class={INPUT_CLASS}
            />
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let store = SessionStore::new(session.clone());
    let state = use_reducer(ProfilePageState::default);

    // Load on mount and whenever the session changes; a cleared session
    // redirects to login from here.
    {
        let navigator = navigator.clone();
        let store = store.clone();
        let state = state.clone();

        use_effect_with(session.session.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let client = match public_client() {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::error!(error = %e, "API client unavailable");
                        state.dispatch(ProfileAction::LoadFailed(e.to_string()));
                        return;
                    }
                };

                match flow::load_profile(&client, &store).await {
                    ProfileLoad::Ready(profile) => state.dispatch(ProfileAction::Loaded(profile)),
                    ProfileLoad::Redirect(destination) => {
                        navigate(navigator.as_ref(), destination);
                    }
                }
            });
        });
    }

    let on_picture_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input).filter(|file| file.size() > 0.0) else {
                return;
            };

            state.dispatch(ProfileAction::PreviewLoading);
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_data_url(file).await {
                    Ok(data_url) => state.dispatch(ProfileAction::PreviewReady(data_url)),
                    Err(message) => {
                        tracing::error!(%message, "failed to read profile picture");
                        state.dispatch(ProfileAction::PreviewFailed(message));
                    }
                }
            });
        })
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let store = store.clone();
        let state = state.clone();

        Callback::from(move |e: SubmitEvent| {
            let Some(entries) = take_submission(&e) else {
                return;
            };
            if !state.can_submit() {
                return;
            }

            let previous = state.profile.clone();
            let preview = state.preview.clone();
            state.dispatch(ProfileAction::Submit);

            let navigator = navigator.clone();
            let store = store.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = match public_client() {
                    Ok(client) => client,
                    Err(e) => {
                        state.dispatch(ProfileAction::UpdateFailed(e.to_string()));
                        return;
                    }
                };

                let submission = ProfileSubmission {
                    entries: &entries,
                    previous: previous.as_ref(),
                    preview: preview.as_deref(),
                };
                match flow::submit_profile_update(&client, &store, submission).await {
                    UpdateOutcome::Updated { profile, message } => {
                        state.dispatch(ProfileAction::Updated { profile, message });
                    }
                    UpdateOutcome::Failed(message) => {
                        state.dispatch(ProfileAction::UpdateFailed(message));
                    }
                    UpdateOutcome::Redirect(destination) => {
                        navigate(navigator.as_ref(), destination);
                    }
                }
            });
        })
    };

    let on_logout = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| flow::logout(&store))
    };

    if state.loading {
        return html! { <Spinner text={Some("Loading profile...".to_string())} /> };
    }

    let profile = state.profile.clone().unwrap_or_default();
    let role = profile
        .primary_role()
        .unwrap_or(AppConfig::DEFAULT_ROLE)
        .to_string();

    html! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Your profile"}</h1>
                <button
                    type="button"
                    onclick={on_logout}
                    class="rounded-md bg-gray-200 px-3 py-1.5 text-sm font-semibold text-gray-800 hover:bg-gray-300"
                >
                    {"Logout"}
                </button>
            </div>

            <Banner kind={BannerKind::Error} message={state.submit.error().map(|m| AttrValue::from(m.to_string()))} />
            <Banner kind={BannerKind::Success} message={state.submit.success().map(|m| AttrValue::from(m.to_string()))} />

            <div class="flex items-center gap-4 my-6">
                <img
                    src={state.avatar(AppConfig::PLACEHOLDER_AVATAR).to_string()}
                    alt="Profile picture"
                    class="h-24 w-24 rounded-full object-cover"
                />
                <div>
                    <p class="text-lg font-semibold">{profile.username.clone()}</p>
                    <p class="text-sm text-gray-500">{profile.email.clone()}</p>
                </div>
            </div>

            <form {onsubmit} class="space-y-4">
                <ProfileFields profile={profile.clone()} {role} />

                <div>
                    <label for={fields::PASSWORD} class={LABEL_CLASS}>{"New password"}</label>
                    <input
                        type="password"
                        id={fields::PASSWORD}
                        name={fields::PASSWORD}
                        autocomplete="new-password"
                        placeholder="Leave blank to keep current password"
                        class={INPUT_CLASS}
                    />
                </div>

                <div>
                    <label for={fields::PROFILE_PICTURE} class={LABEL_CLASS}>{"Profile picture"}</label>
                    <input
                        type="file"
                        id={fields::PROFILE_PICTURE}
                        name={fields::PROFILE_PICTURE}
                        accept="image/*"
                        onchange={on_picture_change}
                        class="mt-1 block w-full text-sm"
                    />
                </div>

                <button
                    type="submit"
                    disabled={!state.can_submit()}
                    class="w-full rounded-md bg-indigo-600 px-3 py-2 text-sm font-semibold text-white hover:bg-indigo-500 disabled:opacity-50"
                >
                    if state.submit.is_submitting() {
                        {"Updating..."}
                    } else {
                        {"Update profile"}
                    }
                </button>
            </form>

            <div class="mt-6 text-center text-sm text-gray-500">
                <Link<Route> to={Route::Signup} classes="font-semibold text-indigo-600 hover:text-indigo-500">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileFieldsProps {
    profile: Profile,
    role: String,
}

/// Editable account, contact and address fields
#[function_component(ProfileFields)]
fn profile_fields(props: &ProfileFieldsProps) -> Html {
    let profile = &props.profile;
    let address = &profile.address;

    html! {
        <>
            <TextField name={fields::USERNAME} label="Username" value={profile.username.clone()} />
            <TextField name={fields::EMAIL} label="Email" input_type="email" value={profile.email.clone()} />
            <div class="grid grid-cols-2 gap-4">
                <TextField name={fields::FIRST_NAME} label="First name" value={profile.first_name.clone()} />
                <TextField name={fields::LAST_NAME} label="Last name" value={profile.last_name.clone()} />
            </div>
            <TextField name={fields::PHONE_NUMBER} label="Phone number" input_type="tel" value={profile.phone_number.clone()} />

            <fieldset class="space-y-4">
                <legend class="text-sm font-semibold text-gray-900">{"Address"}</legend>
                <TextField name={fields::STREET} label="Street" value={address.street.clone()} />
                <div class="grid grid-cols-2 gap-4">
                    <TextField name={fields::CITY} label="City" value={address.city.clone()} />
                    <TextField name={fields::STATE} label="State" value={address.state.clone()} />
                    <TextField name={fields::ZIP_CODE} label="Zip code" value={address.zip_code.clone()} />
                    <TextField name={fields::COUNTRY} label="Country" value={address.country.clone()} />
                </div>
            </fieldset>

            <div>
                <label for={fields::ROLE} class={LABEL_CLASS}>{"Role"}</label>
                <select id={fields::ROLE} name={fields::ROLE} class={INPUT_CLASS}>
                    { for AppConfig::ROLES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={props.role == *value}>{*label}</option>
                    }) }
                </select>
            </div>
        </>
    }
}
