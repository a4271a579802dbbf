// src/config/mod.rs
//! Configuration system for po-helper
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{from_path, from_toml_str, load, Config, Diagnostics, TextSettings};

mod app;
mod defaults;
