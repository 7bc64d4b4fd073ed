pub mod app;
pub mod components;
pub mod config;
pub mod file;
pub mod form;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

pub use app::App;
pub use routes::Route;
