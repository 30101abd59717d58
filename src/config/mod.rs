//! Configuration management for preloader
//!
//! - `loader`: configuration file loading, defaults and validation

pub mod loader;

#[cfg(test)]
mod tests;

pub use loader::{Config, ConfigV1};
