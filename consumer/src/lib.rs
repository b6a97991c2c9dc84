#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod config;
pub mod stop_trigger;
pub mod worker;
