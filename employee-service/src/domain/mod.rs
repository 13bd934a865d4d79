pub mod employee;
pub mod service;
pub mod validation;
