pub mod auth;
pub mod handler;
pub mod message;
pub mod router;
pub mod state;
