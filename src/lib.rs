pub mod client;
pub mod commands;
pub mod date;
pub mod files;
pub mod infra;
pub mod math;
pub mod scaffold;
pub mod scrape;
