#![cfg(test)]
mod loader;
mod probe;
mod scheduler;
mod utils;
