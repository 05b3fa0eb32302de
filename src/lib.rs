pub mod analysis;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod prompter;
pub mod ui;
