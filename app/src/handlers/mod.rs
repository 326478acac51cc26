pub mod auth;
pub mod companies;
pub mod employees;
pub mod hire;
pub mod roles;
