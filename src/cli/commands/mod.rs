pub mod aggregate;
pub mod fetch;
pub mod run;
pub mod version;
pub mod write;
