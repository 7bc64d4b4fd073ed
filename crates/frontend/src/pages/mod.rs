//! Application screens

mod login;
mod profile;
mod signup;

pub use login::LoginPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;
