pub mod api;
pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod money;
pub mod savings;
pub mod scenarios;
pub mod scoring;
// cmd and reports belong to the binary (main.rs).
