pub mod configuration;
pub mod server;

pub use server::AppState;
