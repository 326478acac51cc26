pub mod companies;
pub mod employees;
pub mod users;
pub mod workspaces;
