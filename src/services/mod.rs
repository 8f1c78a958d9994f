pub mod directory;
pub mod mapping;
pub mod relay;
pub mod session;
pub mod session_store;
