pub mod config;
pub mod host;
pub mod install;
pub mod logging;
pub mod release;
