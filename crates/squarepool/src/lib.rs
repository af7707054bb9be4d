//! squarepool library: application logic for the execution comparator.

pub mod app;
pub mod config;
pub mod errors;
