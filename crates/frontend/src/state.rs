//! View state for the form screens

use portal_client::Profile;
use std::rc::Rc;
use yew::prelude::*;

/// Submission lifecycle: idle, submitting, then success or error until the
/// next submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => Some(message),
            _ => None,
        }
    }
}

/// Profile screen state
#[derive(Clone, Debug, PartialEq)]
pub struct ProfilePageState {
    pub loading: bool,
    pub profile: Option<Profile>,
    pub submit: SubmitState,
    /// Picture shown in the avatar; a data URL once a new file is read
    pub preview: Option<String>,
    pub reading_preview: bool,
}

impl Default for ProfilePageState {
    fn default() -> Self {
        Self {
            loading: true,
            profile: None,
            submit: SubmitState::Idle,
            preview: None,
            reading_preview: false,
        }
    }
}

pub enum ProfileAction {
    Loaded(Profile),
    /// Loading could not start (client misconfigured)
    LoadFailed(String),
    PreviewLoading,
    PreviewReady(String),
    PreviewFailed(String),
    Submit,
    Updated { profile: Profile, message: String },
    UpdateFailed(String),
}

impl ProfilePageState {
    /// Whether the update button accepts a click
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.reading_preview && !self.submit.is_submitting()
    }

    /// Image source for the avatar
    pub fn avatar<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.preview
            .as_deref()
            .or_else(|| {
                self.profile
                    .as_ref()
                    .map(|p| p.profile_picture.as_str())
                    .filter(|picture| !picture.is_empty())
            })
            .unwrap_or(placeholder)
    }
}

fn stored_picture(profile: &Profile) -> Option<String> {
    (!profile.profile_picture.is_empty()).then(|| profile.profile_picture.clone())
}

impl Reducible for ProfilePageState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileAction::Loaded(profile) => Rc::new(Self {
                loading: false,
                preview: stored_picture(&profile),
                profile: Some(profile),
                ..(*self).clone()
            }),
            ProfileAction::LoadFailed(message) => Rc::new(Self {
                loading: false,
                submit: SubmitState::Failed(message),
                ..(*self).clone()
            }),
            ProfileAction::PreviewLoading => Rc::new(Self {
                reading_preview: true,
                ..(*self).clone()
            }),
            ProfileAction::PreviewReady(data_url) => Rc::new(Self {
                preview: Some(data_url),
                reading_preview: false,
                ..(*self).clone()
            }),
            ProfileAction::PreviewFailed(message) => Rc::new(Self {
                reading_preview: false,
                submit: SubmitState::Failed(message),
                ..(*self).clone()
            }),
            ProfileAction::Submit => Rc::new(Self {
                submit: SubmitState::Submitting,
                ..(*self).clone()
            }),
            ProfileAction::Updated { profile, message } => Rc::new(Self {
                submit: SubmitState::Succeeded(message),
                profile: Some(profile),
                ..(*self).clone()
            }),
            ProfileAction::UpdateFailed(message) => Rc::new(Self {
                submit: SubmitState::Failed(message),
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "placeholder.png";

    fn loaded(picture: &str) -> Rc<ProfilePageState> {
        Rc::new(ProfilePageState::default()).reduce(ProfileAction::Loaded(Profile {
            username: "ada".into(),
            profile_picture: picture.into(),
            ..Profile::default()
        }))
    }

    #[test]
    fn starts_loading() {
        let state = ProfilePageState::default();
        assert!(state.loading);
        assert!(!state.can_submit());
        assert_eq!(state.avatar(PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn loaded_profile_seeds_preview() {
        let state = loaded("https://cdn.example.com/a.png");
        assert!(!state.loading);
        assert!(state.can_submit());
        assert_eq!(state.avatar(PLACEHOLDER), "https://cdn.example.com/a.png");

        let state = loaded("");
        assert_eq!(state.preview, None);
        assert_eq!(state.avatar(PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn preview_blocks_submit_until_read() {
        let state = loaded("").reduce(ProfileAction::PreviewLoading);
        assert!(!state.can_submit());

        let state = state.reduce(ProfileAction::PreviewReady("data:image/png;base64,AA".into()));
        assert!(state.can_submit());
        assert_eq!(state.avatar(PLACEHOLDER), "data:image/png;base64,AA");
    }

    #[test]
    fn submit_lifecycle() {
        let state = loaded("").reduce(ProfileAction::Submit);
        assert!(state.submit.is_submitting());
        assert!(!state.can_submit());

        let state = state.reduce(ProfileAction::UpdateFailed("Username taken".into()));
        assert_eq!(state.submit.error(), Some("Username taken"));
        assert!(state.can_submit());

        let state = state.reduce(ProfileAction::Submit).reduce(ProfileAction::Updated {
            profile: Profile {
                username: "grace".into(),
                ..Profile::default()
            },
            message: "Profile updated successfully!".into(),
        });
        assert_eq!(state.submit.success(), Some("Profile updated successfully!"));
        assert_eq!(state.submit.error(), None);
        assert_eq!(state.profile.as_ref().unwrap().username, "grace");
    }

    #[test]
    fn empty_failure_shows_no_banner() {
        assert_eq!(SubmitState::Failed(String::new()).error(), None);
    }
}
