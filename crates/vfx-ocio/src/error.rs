//! Error types for OCIO configuration parsing and processing.
//!
//! This module provides error handling for:
//! - Config file parsing (YAML/XML)
//! - Color space lookup and validation
//! - Transform chain building
//! - Display/View configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OCIO operations.
pub type OcioResult<T> = Result<T, OcioError>;

/// Errors that can occur during OCIO operations.
#[derive(Debug, Error)]
pub enum OcioError {
    /// I/O error reading config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Invalid config version.
    #[error("unsupported config version: {version} (supported: 1.x, 2.x)")]
    UnsupportedVersion {
        /// Version string from config.
        version: String,
    },

    /// Color space not found in config.
    #[error("color space not found: {name}")]
    ColorSpaceNotFound {
        /// Name of the missing color space.
        name: String,
    },

    /// Role not defined in config.
    #[error("role not defined: {role}")]
    RoleNotDefined {
        /// Name of the undefined role.
        role: String,
    },

    /// Display not found in config.
    #[error("display not found: {name}")]
    DisplayNotFound {
        /// Name of the missing display.
        name: String,
    },

    /// View not found for display.
    #[error("view '{view}' not found for display '{display}'")]
    ViewNotFound {
        /// Display name.
        display: String,
        /// View name.
        view: String,
    },

    /// Look not found in config.
    #[error("look not found: {name}")]
    LookNotFound {
        /// Name of the missing look.
        name: String,
    },

    /// Invalid transform definition.
    #[error("invalid transform: {reason}")]
    InvalidTransform {
        /// Description of what's wrong.
        reason: String,
    },

    /// File reference in transform not found.
    #[error("transform file not found: {path}")]
    TransformFileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Circular reference detected in transforms.
    #[error("circular reference detected: {chain}")]
    CircularReference {
        /// Description of the circular chain.
        chain: String,
    },

    /// Context variable not set.
    #[error("context variable not set: {name}")]
    ContextVariableNotSet {
        /// Name of the missing variable.
        name: String,
    },

    /// Invalid environment variable reference.
    #[error("invalid environment reference: {expr}")]
    InvalidEnvReference {
        /// The invalid expression.
        expr: String,
    },

    /// Transform processing error.
    #[error("transform error: {0}")]
    Transform(String),

    /// LUT loading error.
    #[error("LUT error: {0}")]
    Lut(#[from] vfx_lut::LutError),

    /// General validation error.
    #[error("validation error: {0}")]
    Validation(String),

    /// `FileTransform` source has an extension no registered adapter reads.
    #[error("unsupported file format '{extension}': {path}")]
    UnsupportedFileFormat {
        /// Path to the file.
        path: PathBuf,
        /// The (lowercased) extension that had no matching adapter.
        extension: String,
    },

    /// Requested cccid/correction id absent from a CDL collection file.
    ///
    /// Semantically distinct from [`OcioError::TransformFileNotFound`], but
    /// reported through the same user-visible "missing file" variant for
    /// backward compatibility with callers that only match on that case.
    /// A look fallback may treat this as non-fatal; all other variants are
    /// fatal. See `TransformFileNotFound` for the shared matching surface.
    #[error("missing color correction: {id} in {path}")]
    MissingCorrection {
        /// Path to the collection file.
        path: PathBuf,
        /// The cccid that was requested.
        id: String,
    },
}

impl OcioError {
    /// True for the variants that a look-transform fallback may swallow
    /// (missing file, missing cccid); all other variants are fatal.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            OcioError::TransformFileNotFound { .. } | OcioError::MissingCorrection { .. }
        )
    }
}

/// Returns `true` when `OCIO_DISABLE_ALL_CACHES` is set to `"1"`.
pub fn all_caches_disabled() -> bool {
    std::env::var("OCIO_DISABLE_ALL_CACHES")
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Returns `true` when processor-level caching should be skipped: either
/// `OCIO_DISABLE_ALL_CACHES` or `OCIO_DISABLE_PROCESSOR_CACHES` is `"1"`.
pub fn processor_cache_disabled() -> bool {
    if all_caches_disabled() {
        return true;
    }
    std::env::var("OCIO_DISABLE_PROCESSOR_CACHES")
        .map(|v| v == "1")
        .unwrap_or(false)
}
