pub mod app_state;
pub mod config;
pub mod system;
pub mod uptime;
