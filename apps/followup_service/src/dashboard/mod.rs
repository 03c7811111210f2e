pub mod dashboard_controller;
pub mod dashboard_service;
