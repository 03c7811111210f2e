pub mod app_module;
pub mod app_router;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod follow_up;
pub mod health;
pub mod language_model;
pub mod prompts;
pub mod session;
pub mod ui;
