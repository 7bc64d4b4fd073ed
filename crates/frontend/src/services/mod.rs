pub mod api;

pub use api::public_client;
