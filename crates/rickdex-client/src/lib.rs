#![doc = include_str!("../README.md")]

mod client;
mod types;

pub use client::ApiClient;
pub use types::ClientConfig;
