pub mod session_controller;
pub mod session_model;
pub mod session_store;
