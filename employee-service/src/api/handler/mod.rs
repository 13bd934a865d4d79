pub mod employee;
pub mod greeting;
