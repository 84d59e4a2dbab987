pub mod api;
pub mod infrastructure;

// Re-export for convenience
pub use crate::api::create_router;
pub use crate::infrastructure::app_state::AppState;
pub use crate::infrastructure::config::Config;
