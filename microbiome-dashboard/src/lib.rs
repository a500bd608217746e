pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod report;
pub mod session;
pub mod simulation;
pub mod types;

pub use app::{create_router, AppState};
pub use config::Config;
pub use error::{AppError, Result};
