// Toolbox - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or touch the filesystem directly.

pub mod command;
pub mod contacts;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
pub mod summary;
