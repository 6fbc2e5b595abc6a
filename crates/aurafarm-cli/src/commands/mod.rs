pub mod config;
pub mod rules;
pub mod snapshot;
pub mod source;
pub mod tasks;
pub mod watch;
