pub mod loader;
pub mod probe;
pub mod scheduler;
