//! Decoding configuration

use std::path::Path;

use crate::{Result, SavError};

/// Extension expected on system file paths, compared case-insensitively
pub const SAV_EXTENSION: &str = "sav";

/// Configuration for loading and decoding system files
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Largest input accepted, in bytes; `None` accepts any size
    pub max_input_bytes: Option<u64>,
    /// Reject paths that do not end in `.sav`
    pub require_extension: bool,
}

impl DecodeConfig {
    /// Set the input size limit
    pub fn with_max_input_bytes(mut self, limit: u64) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Enable or disable the `.sav` extension check
    pub fn with_require_extension(mut self, require: bool) -> Self {
        self.require_extension = require;
        self
    }

    /// Check an input size against the configured limit
    pub fn check_size(&self, size: u64) -> Result<()> {
        match self.max_input_bytes {
            Some(limit) if size > limit => Err(SavError::InputTooLarge { size, limit }),
            _ => Ok(()),
        }
    }

    /// Check a path's extension when the check is enabled
    pub fn check_extension(&self, path: &Path) -> Result<()> {
        if !self.require_extension {
            return Ok(());
        }
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SAV_EXTENSION));
        if has_extension {
            Ok(())
        } else {
            Err(SavError::InvalidExtension {
                path: path.to_path_buf(),
            })
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            require_extension: true,
        }
    }
}
