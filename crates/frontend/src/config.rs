//! Frontend configuration

use portal_client::ClientConfig;
use portal_client::form::fields;

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// localStorage key holding the bearer token
    pub const TOKEN_STORAGE_KEY: &'static str = "token";

    /// Shown when the profile has no picture
    pub const PLACEHOLDER_AVATAR: &'static str = "https://via.placeholder.com/96";

    /// Selectable roles as (value, label)
    pub const ROLES: [(&'static str, &'static str); 3] =
        [("user", "User"), ("admin", "Admin"), ("editor", "Editor")];

    /// Role preselected when the profile has none
    pub const DEFAULT_ROLE: &'static str = "user";

    /// Profile inputs the browser must see filled before submitting
    pub const REQUIRED_PROFILE_FIELDS: [&'static str; 9] = [
        fields::USERNAME,
        fields::EMAIL,
        fields::FIRST_NAME,
        fields::LAST_NAME,
        fields::STREET,
        fields::CITY,
        fields::STATE,
        fields::ZIP_CODE,
        fields::COUNTRY,
    ];

    pub fn is_required(field: &str) -> bool {
        Self::REQUIRED_PROFILE_FIELDS.contains(&field)
    }

    /// API configuration, fixed at build time
    pub fn client_config() -> ClientConfig {
        ClientConfig::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_required_fields() {
        for field in [fields::USERNAME, fields::EMAIL, fields::FIRST_NAME, fields::LAST_NAME] {
            assert!(AppConfig::is_required(field), "{field}");
        }
        for field in fields::ADDRESS {
            assert!(AppConfig::is_required(field), "{field}");
        }
        for field in [fields::PHONE_NUMBER, fields::PASSWORD, fields::ROLE, fields::PROFILE_PICTURE] {
            assert!(!AppConfig::is_required(field), "{field}");
        }
    }
}
