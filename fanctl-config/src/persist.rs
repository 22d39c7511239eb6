//! Binary configuration persistence
//!
//! Stores a validated configuration as postcard bytes, prefixed with a
//! format version. Decoding runs the same validation as loading from TOML,
//! so corrupted storage can never produce an invalid controller.

use alloc::vec::Vec;

use fanctl_core::config::{FanConfig, FanOutputConfig};
use serde::{Deserialize, Serialize};

use crate::file::LoadedConfig;

/// Current storage format version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum serialized config size
pub const MAX_CONFIG_SIZE: usize = 64;

/// Persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed (corrupt or invalid data)
    Deserialize,
    /// Stored config was written by another format version
    VersionMismatch,
}

#[derive(Serialize, Deserialize)]
struct StoredConfig {
    version: u8,
    fan: FanConfig,
    output: FanOutputConfig,
}

#[derive(Deserialize)]
struct StoredHeader {
    version: u8,
}

/// Serialize `config` into `buf`, returning the used part
pub fn encode_config<'a>(
    config: &LoadedConfig,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], PersistError> {
    postcard::to_slice(&stored(config), buf).map_err(|_| PersistError::Serialize)
}

/// Serialize `config` into a new buffer
pub fn encode_config_to_vec(config: &LoadedConfig) -> Result<Vec<u8>, PersistError> {
    postcard::to_allocvec(&stored(config)).map_err(|_| PersistError::Serialize)
}

/// Deserialize and validate a stored config
pub fn decode_config(bytes: &[u8]) -> Result<LoadedConfig, PersistError> {
    let (header, _): (StoredHeader, _) =
        postcard::take_from_bytes(bytes).map_err(|_| PersistError::Deserialize)?;
    if header.version != CONFIG_VERSION {
        return Err(PersistError::VersionMismatch);
    }

    let stored: StoredConfig =
        postcard::from_bytes(bytes).map_err(|_| PersistError::Deserialize)?;
    Ok(LoadedConfig {
        fan: stored.fan,
        output: stored.output,
    })
}

fn stored(config: &LoadedConfig) -> StoredConfig {
    StoredConfig {
        version: CONFIG_VERSION,
        fan: config.fan,
        output: config.output,
    }
}
