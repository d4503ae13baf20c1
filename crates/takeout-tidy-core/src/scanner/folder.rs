use crate::config::AppConfig;
use crate::error::Error;
use crate::model::album::is_source_folder_name;
use crate::model::cluster::file_name_of;
use crate::model::{Album, FileCluster};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Groups sorted entries into clusters.
///
/// A new cluster starts at every entry whose name begins with neither the
/// current base file name nor its stem.
pub fn cluster_entries(entries: &[PathBuf]) -> Vec<FileCluster> {
    let mut clusters: Vec<FileCluster> = Vec::new();

    for entry in entries {
        let name = file_name_of(entry);
        match clusters.last_mut() {
            Some(current) if current.accepts(&name) => current.push_sidecar(entry.clone()),
            _ => clusters.push(FileCluster::new(entry.clone())),
        }
    }

    clusters
}

/// Indexes one top-level folder. `folder` must be a direct child of `root`.
pub fn index_folder(folder: &Path, root: &Path, config: &AppConfig) -> Result<Album, Error> {
    let name = file_name_of(folder);
    if folder.file_name().and_then(|f| f.to_str()).is_none() {
        return Err(Error::InvalidFolderStructure {
            folder: name,
            reason: "folder name is not valid UTF-8".to_string(),
        });
    }
    let relative_folder = folder
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| PathBuf::from(&name));

    let is_source = is_source_folder_name(&name);
    let is_special = config.is_special_folder(&name);

    let mut entries = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        // Cluster keys are strings; a lossy conversion could merge two names.
        let Some(entry_name) = entry.file_name().to_str().map(str::to_string) else {
            return Err(Error::InvalidFolderStructure {
                folder: name,
                reason: format!(
                    "file name '{}' is not valid UTF-8",
                    entry.file_name().to_string_lossy()
                ),
            });
        };

        if entry.file_type().is_dir() {
            return Err(Error::InvalidFolderStructure {
                folder: name,
                reason: format!("subfolder '{}' found, albums must only hold files", entry_name),
            });
        }
        if !entry.path().is_file() {
            return Err(Error::InvalidFolderStructure {
                folder: name,
                reason: format!("'{}' is not a regular file", entry_name),
            });
        }
        if is_source && entry_name == config.metadata_file_name {
            return Err(Error::MetadataInSourceFolder { folder: name });
        }

        entries.push(relative_folder.join(entry.file_name()));
    }

    let mut photo_files = BTreeMap::new();
    let mut other_files = BTreeMap::new();
    for cluster in cluster_entries(&entries) {
        let key = cluster.key();
        if config.is_album_metadata(&key) {
            other_files.insert(key, cluster);
        } else {
            photo_files.insert(key, cluster);
        }
    }

    Ok(Album {
        name,
        photo_files,
        other_files,
        is_source,
        is_special,
    })
}
