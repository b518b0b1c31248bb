//! Error types shared by the dashboard core and front-end.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::entity::EntityId;

/// Everything that can go wrong in the dashboard.
///
/// Asset and input errors are recoverable: callers log them and keep going.
/// Configuration errors are only fatal at startup.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON config could not be parsed or written.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML config could not be parsed or written.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The config path has an extension we do not know how to read.
    #[error("unsupported config format {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedConfigFormat(PathBuf),

    /// A plant image could not be decoded.
    #[error("failed to load image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Plant count input was not a positive whole number.
    #[error("invalid plant count {input:?}: expected a positive whole number")]
    InvalidPlantCount { input: String },

    /// Only the custom group has an editable plant count.
    #[error("plant count of {0:?} is fixed")]
    PlantCountLocked(EntityId),
}

/// Crate-wide result alias.
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
