use super::album::Album;
use crate::error::Error;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// All indexed folders of one takeout root, split into three disjoint buckets.
#[derive(Debug, Clone)]
pub struct Takeout {
    pub root_path: PathBuf,
    pub photos_source: BTreeMap<String, Album>,
    pub albums: BTreeMap<String, Album>,
    pub special: BTreeMap<String, Album>,
}

impl Takeout {
    /// Partitions indexed folders. Folders without any file are dropped and
    /// `is_special` wins over `is_source`.
    pub fn classify(root_path: &Path, folders: Vec<Album>) -> Result<Takeout, Error> {
        let mut takeout = Takeout {
            root_path: root_path.to_path_buf(),
            photos_source: BTreeMap::new(),
            albums: BTreeMap::new(),
            special: BTreeMap::new(),
        };

        for album in folders.into_iter().filter(|a| !a.is_empty()) {
            let bucket = if album.is_special {
                &mut takeout.special
            } else if album.is_source {
                &mut takeout.photos_source
            } else {
                &mut takeout.albums
            };
            bucket.insert(album.name.clone(), album);
        }

        if takeout.photos_source.is_empty() {
            return Err(Error::NoSourceFolder {
                root: root_path.to_path_buf(),
            });
        }

        Ok(takeout)
    }

    pub fn source_contains(&self, key: &str) -> bool {
        self.photos_source.values().any(|s| s.contains(key))
    }
}
