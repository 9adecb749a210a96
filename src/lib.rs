pub mod catalog;
pub mod cli;
pub mod config;
pub mod data_paths;
pub mod errors;
pub mod logging;
pub mod report;
pub mod staging;
