pub mod polish_service;
pub mod tone;
