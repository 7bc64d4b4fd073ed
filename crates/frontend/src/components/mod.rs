mod banner;
mod credentials_form;
mod spinner;

pub use banner::{Banner, BannerKind};
pub use credentials_form::CredentialsForm;
pub use spinner::LoadingSpinner as Spinner;
