use crate::config::AppConfig;
use crate::error::Error;
use crate::ledger::{Task, TaskLedger};
use crate::model::{Album, Takeout};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Contents of the per-album descriptor file.
///
/// `photo_files` holds bare file names, to be looked up in the source folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDescriptor {
    pub album: String,
    pub photo_files: Vec<String>,
}

impl AlbumDescriptor {
    pub fn from_album(album: &Album) -> Self {
        Self {
            album: album.name.clone(),
            photo_files: album.photo_file_names(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Schedules a descriptor for every album followed by the deletion of the
/// album's photo copies. Returns the number of descriptors written.
///
/// An album that already has a descriptor and no photos is left alone.
pub fn replace_album_files_with_descriptor(
    takeout: &Takeout,
    config: &AppConfig,
    ledger: &mut TaskLedger,
) -> Result<usize, Error> {
    let mut written = 0;

    for album in takeout.albums.values() {
        if album.photo_files.is_empty()
            && album.other_files.contains_key(&config.descriptor_file_name)
        {
            debug!("Album {} already has a descriptor", album.name);
            continue;
        }

        let descriptor = AlbumDescriptor::from_album(album);
        let descriptor_path = Path::new(&album.name).join(&config.descriptor_file_name);
        ledger.push(Task::create(descriptor_path, descriptor.to_yaml()?));
        ledger.extend(
            album
                .photo_files
                .values()
                .flat_map(|cluster| cluster.paths())
                .map(|path| Task::delete(path)),
        );
        written += 1;
    }

    Ok(written)
}
