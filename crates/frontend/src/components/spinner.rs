//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center min-h-screen">
            <div class="animate-spin h-8 w-8 border-4 border-gray-300 rounded-full border-t-blue-600"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm mt-4">{text}</p>
            }
        </div>
    }
}
