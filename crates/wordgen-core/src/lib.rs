pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod namegen;
pub mod setup;
pub mod words;
