pub mod admin;
pub mod client;
pub mod config;
pub mod contracts;
pub mod error;
pub mod network;
pub mod utils;
