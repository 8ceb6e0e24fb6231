// Toolbox - app/mod.rs
//
// Application layer: drives core logic against real files and streams.

pub mod loader;
pub mod repl;
