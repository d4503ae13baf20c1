use crate::config::AppConfig;
use crate::error::Error;
use crate::model::album::is_source_folder_name;
use crate::model::Takeout;
use crate::progress::ProgressReporter;
use crate::scanner::folder::index_folder;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Indexes every top-level folder below `root` and classifies the result.
///
/// Plain files at the root are ignored. The album container is skipped since it
/// only holds folders produced by an earlier run.
pub fn open_takeout(
    root: &Path,
    config: &AppConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Takeout, Error> {
    let mut folders = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            debug!("Skipping root entry {}", entry.path().display());
            continue;
        }
        folders.push(entry.into_path());
    }

    reporter.on_index_start(folders.len());

    let mut albums = Vec::with_capacity(folders.len());
    for folder in &folders {
        let name = folder
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        if name == config.album_container_name {
            info!("Skipping album container: {}", name);
            reporter.on_folder_indexed(&name);
            continue;
        }

        if is_source_folder_name(&name) {
            info!("Found source folder: {}", name);
        } else {
            info!("Found non-source folder: {}", name);
        }

        albums.push(index_folder(folder, root, config)?);
        reporter.on_folder_indexed(&name);
    }

    let takeout = Takeout::classify(root, albums)?;
    reporter.on_index_complete(
        takeout.photos_source.len(),
        takeout.albums.len(),
        takeout.special.len(),
    );
    Ok(takeout)
}
