//! Pointer parsing limits and configuration

use crate::error::{PointerError, Result};

/// Limits applied when parsing untrusted pointer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of reference tokens (default: 256, hard: 4,096)
    pub max_depth: usize,
    /// Maximum pointer text length in bytes (default: 16 KiB, hard: 1 MiB)
    pub max_pointer_length: usize,
    /// Reject `~` not followed by `0` or `1` instead of keeping it literally
    pub strict_escapes: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_pointer_length: 16 * 1024,
            strict_escapes: false,
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 4_096,
            max_pointer_length: 1024 * 1024,
            strict_escapes: false,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth > hard.max_depth {
            return Err(PointerError::ConfigurationExceedsHardLimits {
                reason: format!(
                    "max_depth {} exceeds hard limit {}",
                    self.max_depth, hard.max_depth
                ),
            });
        }

        if self.max_pointer_length > hard.max_pointer_length {
            return Err(PointerError::ConfigurationExceedsHardLimits {
                reason: format!(
                    "max_pointer_length {} exceeds hard limit {}",
                    self.max_pointer_length, hard.max_pointer_length
                ),
            });
        }

        Ok(())
    }

    /// Same limits with strict escape checking switched on.
    pub fn strict(mut self) -> Self {
        self.strict_escapes = true;
        self
    }
}
