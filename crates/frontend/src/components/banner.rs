//! Status banners

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    /// Server rejected a signup or login
    Warning,
    Error,
    Success,
}

impl BannerKind {
    fn classes(self) -> &'static str {
        match self {
            Self::Warning => "bg-yellow-500 p-2 rounded-md",
            Self::Error => "bg-red-100 border border-red-400 text-red-700 px-4 py-3 m-4 rounded",
            Self::Success => {
                "bg-green-100 border border-green-400 text-green-700 px-4 py-3 m-4 rounded"
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct BannerProps {
    pub kind: BannerKind,
    /// Nothing is rendered without a message
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    match &props.message {
        Some(message) if !message.is_empty() => html! {
            <div class={props.kind.classes()} role="alert">{message.clone()}</div>
        },
        _ => html! {},
    }
}
