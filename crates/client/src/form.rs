//! Form submission capture and profile update serialization

use crate::types::{Credentials, Profile};
use serde::Serialize;
use std::collections::BTreeMap;

/// Form field names with special handling
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const ROLE: &str = "role";
    pub const PROFILE_PICTURE: &str = "profilePicture";

    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zipCode";
    pub const COUNTRY: &str = "country";

    pub const ADDRESS: [&str; 5] = [STREET, CITY, STATE, ZIP_CODE, COUNTRY];

    /// Keys the update body builds itself; form entries never overwrite them
    pub const RESERVED: [&str; 2] = ["roles", "address"];
}

/// A single submitted form value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// File input. Only metadata is captured; contents are read separately.
    File {
        name: String,
        mime_type: String,
        size: u64,
    },
}

impl FormValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::File { .. } => None,
        }
    }
}

/// Ordered name/value pairs captured from a form submission.
///
/// Names may repeat (multi-selects); lookups return the last value, matching
/// how a browser form collapses into a plain object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEntries {
    entries: Vec<(String, FormValue)>,
}

impl FormEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: FormValue) {
        self.entries.push((name.into(), value));
    }

    /// Builder-style text entry
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, FormValue::text(value));
        self
    }

    /// Builder-style file entry
    pub fn with_file(mut self, name: impl Into<String>, file_name: &str, size: u64) -> Self {
        self.push(
            name,
            FormValue::File {
                name: file_name.to_string(),
                mime_type: String::new(),
                size,
            },
        );
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Last value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Last text value submitted under `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FormValue::as_text)
    }

    /// Whether a non-empty file was chosen for `name`
    pub fn has_file(&self, name: &str) -> bool {
        matches!(self.get(name), Some(FormValue::File { size, .. }) if *size > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, FormValue)> for FormEntries {
    fn from_iter<I: IntoIterator<Item = (N, FormValue)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Credentials {
    /// Credentials from a signup or login form; missing fields are empty
    pub fn from_entries(entries: &FormEntries) -> Self {
        let text = |name| entries.text(name).unwrap_or_default().to_string();
        Self {
            email: text(fields::EMAIL),
            username: text(fields::USERNAME),
            password: text(fields::PASSWORD),
        }
    }
}

/// Address portion of a profile update; only non-empty fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AddressUpdate {
    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            fields::STREET => Some(&mut self.street),
            fields::CITY => Some(&mut self.city),
            fields::STATE => Some(&mut self.state),
            fields::ZIP_CODE => Some(&mut self.zip_code),
            fields::COUNTRY => Some(&mut self.country),
            _ => None,
        }
    }
}

/// Body of `PUT /profile/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Passthrough text fields (username, email, names, phone, ...)
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    pub address: AddressUpdate,
    pub profile_picture: String,
}

/// Inputs to [`serialize_profile_update`]
#[derive(Debug, Clone, Copy)]
pub struct ProfileSubmission<'a> {
    pub entries: &'a FormEntries,
    /// Profile loaded before editing started
    pub previous: Option<&'a Profile>,
    /// Data URL of the newly chosen picture, once the file has been read
    pub preview: Option<&'a str>,
}

/// Turn a profile form submission into the update payload.
///
/// - blank passwords are dropped instead of overwriting the stored one
/// - a newly chosen picture is sent as its preview data URL, otherwise the
///   previous picture (or an empty string) is kept
/// - every `role` value lands in `roles`, in form order
/// - address fields are nested under `address`
pub fn serialize_profile_update(submission: ProfileSubmission<'_>) -> ProfileUpdate {
    let ProfileSubmission {
        entries,
        previous,
        preview,
    } = submission;

    let mut update = ProfileUpdate::default();

    for (name, value) in entries.iter() {
        let FormValue::Text(value) = value else {
            continue;
        };

        if let Some(slot) = update.address.slot(name) {
            *slot = (!value.is_empty()).then(|| value.clone());
            continue;
        }

        match name {
            fields::PASSWORD => {
                update.password = (!value.trim().is_empty()).then(|| value.clone());
            }
            fields::ROLE => {
                if !value.is_empty() {
                    update.roles.push(value.clone());
                }
            }
            fields::PROFILE_PICTURE => {}
            name if fields::RESERVED.contains(&name) => {}
            _ => {
                update.fields.insert(name.to_string(), value.clone());
            }
        }
    }

    let previous_picture = || previous.map(|p| p.profile_picture.clone()).unwrap_or_default();
    update.profile_picture = if entries.has_file(fields::PROFILE_PICTURE) {
        preview.map_or_else(previous_picture, str::to_string)
    } else {
        previous_picture()
    };

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn profile_form() -> FormEntries {
        FormEntries::new()
            .with_file(fields::PROFILE_PICTURE, "", 0)
            .with_text(fields::USERNAME, "ada")
            .with_text(fields::EMAIL, "ada@example.com")
            .with_text(fields::FIRST_NAME, "Ada")
            .with_text(fields::LAST_NAME, "Lovelace")
            .with_text(fields::PHONE_NUMBER, "555-0100")
            .with_text(fields::STREET, "12 Analytical Way")
            .with_text(fields::CITY, "London")
            .with_text(fields::STATE, "Greater London")
            .with_text(fields::ZIP_CODE, "NW1")
            .with_text(fields::COUNTRY, "UK")
            .with_text(fields::ROLE, "editor")
            .with_text(fields::PASSWORD, "")
    }

    fn to_json(update: &ProfileUpdate) -> Value {
        serde_json::to_value(update).unwrap()
    }

    fn submit(entries: &FormEntries) -> ProfileUpdate {
        serialize_profile_update(ProfileSubmission {
            entries,
            previous: None,
            preview: None,
        })
    }

    #[test]
    fn blank_password_is_omitted() {
        for blank in ["", "   ", "\t"] {
            let entries = profile_form().with_text(fields::PASSWORD, blank);
            let json = to_json(&submit(&entries));
            assert!(json.get("password").is_none(), "sent {blank:?}");
        }
    }

    #[test]
    fn new_password_is_sent() {
        let entries = profile_form().with_text(fields::PASSWORD, "hunter2");
        assert_eq!(to_json(&submit(&entries))["password"], "hunter2");
    }

    #[test]
    fn address_is_nested() {
        let json = to_json(&submit(&profile_form()));
        assert_eq!(
            json["address"],
            json!({
                "street": "12 Analytical Way",
                "city": "London",
                "state": "Greater London",
                "zipCode": "NW1",
                "country": "UK"
            })
        );
        for name in fields::ADDRESS {
            assert!(json.get(name).is_none(), "{name} leaked to top level");
        }
    }

    #[test]
    fn empty_address_fields_are_dropped_everywhere() {
        let entries = profile_form()
            .with_text(fields::STATE, "")
            .with_text(fields::ZIP_CODE, "");
        let json = to_json(&submit(&entries));
        assert!(json["address"].get("state").is_none());
        assert!(json["address"].get("zipCode").is_none());
        assert!(json.get("state").is_none());
        assert!(json.get("zipCode").is_none());
    }

    #[test]
    fn address_object_present_without_address_fields() {
        let entries = FormEntries::new().with_text(fields::USERNAME, "ada");
        assert_eq!(to_json(&submit(&entries))["address"], json!({}));
    }

    #[test]
    fn role_collapses_into_roles() {
        let json = to_json(&submit(&profile_form()));
        assert_eq!(json["roles"], json!(["editor"]));
        assert!(json.get("role").is_none());
    }

    #[test]
    fn repeated_roles_keep_selection_order() {
        let entries = FormEntries::new()
            .with_text(fields::ROLE, "user")
            .with_text(fields::ROLE, "admin");
        assert_eq!(to_json(&submit(&entries))["roles"], json!(["user", "admin"]));
    }

    #[test]
    fn missing_role_sends_no_roles() {
        let entries = FormEntries::new().with_text(fields::ROLE, "");
        let json = to_json(&submit(&entries));
        assert!(json.get("roles").is_none());
        assert!(json.get("role").is_none());
    }

    #[test]
    fn passthrough_fields_are_flat() {
        let json = to_json(&submit(&profile_form().with_text("nickname", "countess")));
        assert_eq!(json["username"], "ada");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["phoneNumber"], "555-0100");
        assert_eq!(json["nickname"], "countess");
    }

    #[test]
    fn reserved_names_do_not_pass_through() {
        let entries = profile_form()
            .with_text("roles", "admin")
            .with_text("address", "somewhere");
        let update = submit(&entries);
        assert!(update.fields.keys().all(|key| !fields::RESERVED.contains(&key.as_str())));

        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body.matches("\"roles\"").count(), 1);
        assert_eq!(body.matches("\"address\"").count(), 1);
        assert_eq!(to_json(&update)["roles"], json!(["editor"]));
    }

    #[test]
    fn new_picture_uses_preview() {
        let previous = Profile {
            profile_picture: "https://cdn.example.com/old.png".into(),
            ..Profile::default()
        };
        let entries = profile_form().with_file(fields::PROFILE_PICTURE, "me.png", 2048);
        let update = serialize_profile_update(ProfileSubmission {
            entries: &entries,
            previous: Some(&previous),
            preview: Some("data:image/png;base64,AAAA"),
        });
        assert_eq!(update.profile_picture, "data:image/png;base64,AAAA");
    }

    #[test]
    fn empty_file_keeps_previous_picture() {
        let previous = Profile {
            profile_picture: "https://cdn.example.com/old.png".into(),
            ..Profile::default()
        };
        let update = serialize_profile_update(ProfileSubmission {
            entries: &profile_form(),
            previous: Some(&previous),
            preview: Some("data:image/png;base64,AAAA"),
        });
        assert_eq!(update.profile_picture, "https://cdn.example.com/old.png");
    }

    #[test]
    fn no_picture_anywhere_sends_empty_string() {
        let json = to_json(&submit(&profile_form()));
        assert_eq!(json["profilePicture"], "");
    }

    #[test]
    fn credentials_from_form() {
        let entries = FormEntries::new()
            .with_text(fields::EMAIL, "a@b.com")
            .with_text(fields::USERNAME, "a")
            .with_text(fields::PASSWORD, "x");
        assert_eq!(
            Credentials::from_entries(&entries),
            Credentials {
                email: "a@b.com".into(),
                username: "a".into(),
                password: "x".into(),
            }
        );
        assert_eq!(
            Credentials::from_entries(&FormEntries::new()),
            Credentials::default()
        );
    }
}
