pub mod draft;
pub mod server;
pub mod state;
