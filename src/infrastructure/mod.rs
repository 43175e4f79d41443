pub mod config;
pub mod gateway;
pub mod mail;
pub mod persistence;
pub mod queue;
pub mod workers;
