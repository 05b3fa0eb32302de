pub mod ansi;
pub mod chrome;
pub mod display_manager;
pub mod table_printer;
#[cfg(test)]
mod tests;
mod width_util;
