use super::cluster::FileCluster;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref SOURCE_FOLDER_REGEX: Regex = Regex::new(r"^Photos from \d{4}$").unwrap();
    static ref UNTITLED_ALBUM_REGEX: Regex = Regex::new(r"^Untitled(?:\(\d+\))?$").unwrap();
}

pub fn is_source_folder_name(name: &str) -> bool {
    SOURCE_FOLDER_REGEX.is_match(name)
}

pub fn is_untitled_album_name(name: &str) -> bool {
    UNTITLED_ALBUM_REGEX.is_match(name)
}

/// The indexed contents of one top-level folder.
#[derive(Debug, Clone)]
pub struct Album {
    pub name: String,
    /// Photo and video clusters keyed by base file name.
    pub photo_files: BTreeMap<String, FileCluster>,
    /// `metadata.json` and descriptor clusters.
    pub other_files: BTreeMap<String, FileCluster>,
    pub is_source: bool,
    pub is_special: bool,
}

impl Album {
    pub fn is_empty(&self) -> bool {
        self.photo_files.is_empty() && self.other_files.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.photo_files.contains_key(key)
    }

    /// Bare file names of every photo cluster, cluster by cluster.
    pub fn photo_file_names(&self) -> Vec<String> {
        self.photo_files
            .values()
            .flat_map(|cluster| cluster.file_names())
            .collect()
    }
}
