pub mod api;
pub mod components;
pub mod constants;
pub mod import;
pub mod logging;
pub mod models;
pub mod utils;

pub use components::app::App;
