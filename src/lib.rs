// Toolbox - lib.rs
//
// Library entry point shared by the `logsum` and `assistant` binaries and
// exposed for integration testing.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
