//! Configuration loading and persistence
//!
//! Parses the TOML configuration file into validated fan configuration
//! and stores it as compact postcard binary data.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod file;
pub mod persist;

pub use file::{default_config, parse_config, FanFile, LoadError, LoadedConfig, EMBEDDED_CONFIG};
pub use persist::{decode_config, encode_config, encode_config_to_vec, PersistError};
