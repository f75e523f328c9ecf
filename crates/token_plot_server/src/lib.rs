//! Token plot server: HTTP surface, presentation and process setup.
pub mod error;
pub mod logging;
pub mod render;
pub mod server;
pub mod settings;

pub use error::{AppError, AppResult};
pub use logging::LogDestination;
pub use server::{build_router, run, AppState};
pub use settings::{Args, Settings};
