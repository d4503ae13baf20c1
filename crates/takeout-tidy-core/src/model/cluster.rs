use crate::ledger::{Task, TaskLedger};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A base file (the photo or video) bundled with its sidecar files.
///
/// Paths are relative to the takeout root. The first path is always the base
/// file and its file name is the cluster key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCluster {
    paths: Vec<PathBuf>,
}

impl FileCluster {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![base.into()],
        }
    }

    pub fn push_sidecar(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn base(&self) -> &Path {
        &self.paths[0]
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn key(&self) -> String {
        file_name_of(self.base())
    }

    /// Sidecars are named either `photo.jpg.json` or `photo.json`, so an entry
    /// belongs here if it starts with the base name or with its stem.
    pub fn accepts(&self, entry_name: &str) -> bool {
        let base = self.base();
        let name = file_name_of(base);
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        entry_name.starts_with(&name) || entry_name.starts_with(&stem)
    }

    pub fn file_names(&self) -> impl Iterator<Item = String> + '_ {
        self.paths.iter().map(|p| file_name_of(p))
    }

    /// Returns a new cluster with `prefix` in front of every file name.
    pub fn with_prefix(&self, prefix: &str) -> FileCluster {
        let paths = self
            .paths
            .iter()
            .map(|path| {
                let mut name = OsString::from(prefix);
                if let Some(file_name) = path.file_name() {
                    name.push(file_name);
                }
                path.with_file_name(name)
            })
            .collect();
        FileCluster { paths }
    }

    /// Like [`FileCluster::with_prefix`], also scheduling one rename per file.
    /// The caller must store the returned cluster in place of this one.
    pub fn prefix_rename(&self, prefix: &str, ledger: &mut TaskLedger) -> FileCluster {
        let renamed = self.with_prefix(prefix);
        ledger.extend(
            self.paths
                .iter()
                .zip(renamed.paths.iter())
                .map(|(old, new)| Task::rename(old, new)),
        );
        renamed
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}
