//! Core modules.

pub mod favorites;
pub mod locations;
pub mod search;
pub mod session;
