pub mod service;
pub mod validation;
