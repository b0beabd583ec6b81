pub mod config;
pub mod locale;
pub mod project;
pub mod runner;
