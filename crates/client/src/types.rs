//! Wire types shared by the client and the frontend

use serde::{Deserialize, Serialize};

/// Registration and login credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Postal address nested in a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The authenticated user's profile as returned by `GET /profile/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: Address,
    pub roles: Vec<String>,
    pub profile_picture: String,
    pub mfa_enabled: bool,
}

impl Profile {
    /// First role, used to preselect the role picker
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

/// Successful login response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "u1",
            "username": "ada",
            "email": "ada@example.com",
            "address": { "city": "London" }
        }))
        .unwrap();

        assert_eq!(profile.username, "ada");
        assert_eq!(profile.address.city, "London");
        assert_eq!(profile.address.zip_code, "");
        assert!(profile.roles.is_empty());
        assert!(!profile.mfa_enabled);
        assert_eq!(profile.primary_role(), None);
    }

    #[test]
    fn profile_uses_camel_case() {
        let profile = Profile {
            first_name: "Ada".into(),
            roles: vec!["admin".into()],
            mfa_enabled: true,
            ..Profile::default()
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["mfaEnabled"], true);
        assert_eq!(value["address"]["zipCode"], "");
        assert_eq!(profile.primary_role(), Some("admin"));
    }
}
