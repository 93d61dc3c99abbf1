pub mod app;
pub mod auth;
pub mod avatars;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod videos;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
