use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid folder structure in '{folder}': {reason}")]
    InvalidFolderStructure { folder: String, reason: String },

    #[error("Metadata file is not allowed in source folder '{folder}'")]
    MetadataInSourceFolder { folder: String },

    #[error("Need at least one photo source folder in {}", root.display())]
    NoSourceFolder { root: PathBuf },

    #[error("Renaming '{original}' to '{renamed}' in '{folder}' would collide with an existing file")]
    RenameCollision {
        original: String,
        renamed: String,
        folder: String,
    },

    #[error("Failed to {task}: {source}")]
    Execution {
        task: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid plan file: {0}")]
    PlanFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory listing error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
