pub mod follow_up_controller;
pub mod follow_up_sequence;
pub mod follow_up_service;
pub mod template_resolver;
