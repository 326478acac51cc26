pub mod global_error_handler;
pub mod id;
pub mod jwt;
pub mod response;
