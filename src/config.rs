//! Serializable buffer configuration artifact.

use crate::error::BufferError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy applied when a write needs more room than is currently free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Writes always succeed; the oldest unread bytes are clobbered and the
    /// read cursor skips ahead to the oldest surviving byte.
    #[default]
    Overwrite,
    /// Writes larger than the current free capacity are rejected with
    /// [`BufferError::WouldOverwrite`] and mutate nothing.
    Reject,
}

/// Buffer shape pinned by a capture session.
///
/// A session that dumps its storage to disk can keep this next to the dump
/// so the buffer can be reconstructed with the same capacity later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Storage size in bytes. Must be non-zero.
    pub capacity: usize,
    /// Overwrite policy for writes exceeding free capacity.
    #[serde(default)]
    pub overwrite: OverwritePolicy,
}

impl BufferConfig {
    /// Creates a configuration with the default overwrite policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            overwrite: OverwritePolicy::default(),
        }
    }

    /// Sets the overwrite policy.
    pub fn with_overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }
}

/// Writes a buffer configuration as JSON.
pub fn write_config_json(path: &Path, config: &BufferConfig) -> Result<(), BufferError> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| BufferError::Io(format!("failed to serialize buffer config: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Reads a buffer configuration from JSON.
pub fn read_config_json(path: &Path) -> Result<BufferConfig, BufferError> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| {
        BufferError::Io(format!(
            "failed to parse buffer config from {}: {}",
            path.display(),
            e
        ))
    })
}
