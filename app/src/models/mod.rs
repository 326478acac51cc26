pub mod company;
pub mod employee;
pub mod user;
pub mod workspace;
