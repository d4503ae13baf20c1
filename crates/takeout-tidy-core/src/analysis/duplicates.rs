use super::compare::files_identical;
use crate::error::Error;
use crate::ledger::TaskLedger;
use crate::model::{Album, Takeout};
use crate::progress::ProgressReporter;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Cluster key → names of the folders holding a cluster with that key.
pub type FileIndex = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveStats {
    pub duplicate_keys: usize,
    pub renamed_clusters: usize,
}

pub fn merge_files_in_albums(albums: &BTreeMap<String, Album>) -> FileIndex {
    let mut files = FileIndex::new();
    for album in albums.values() {
        for key in album.photo_files.keys() {
            files.entry(key.clone()).or_default().push(album.name.clone());
        }
    }
    files
}

/// Prefix that makes a file name unique to the source folder it lives in.
pub fn source_prefix(source_name: &str) -> String {
    format!("{}__", source_name.replace(' ', "_"))
}

/// Makes every file name that appears in more than one source folder unique.
///
/// Each source copy gets its folder name as prefix. Album copies that are
/// byte-identical to a source copy get the same prefix so they keep pointing
/// at that exact source file. Nothing is renamed on disk here; all content
/// comparisons see the original files.
///
/// An album copy identical to several source copies follows the first of
/// those sources in name order only.
pub fn resolve_duplicates(
    takeout: &mut Takeout,
    ledger: &mut TaskLedger,
    reporter: &dyn ProgressReporter,
) -> Result<ResolveStats, Error> {
    let mut album_files = merge_files_in_albums(&takeout.albums);
    let mut source_files = merge_files_in_albums(&takeout.photos_source);

    let source_duplicates: Vec<String> = source_files
        .iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(key, _)| key.clone())
        .collect();

    reporter.on_compare_start(source_duplicates.len());

    let mut stats = ResolveStats {
        duplicate_keys: source_duplicates.len(),
        renamed_clusters: 0,
    };
    for (done, duplicate) in source_duplicates.iter().enumerate() {
        stats.renamed_clusters += resolve_album_duplicate(
            takeout,
            &mut album_files,
            &mut source_files,
            duplicate,
            ledger,
        )?;
        reporter.on_compare_progress(done + 1, source_duplicates.len());
    }

    reporter.on_compare_complete(stats.renamed_clusters);
    info!(
        "Resolved {} duplicate file names with {} cluster renames",
        stats.duplicate_keys, stats.renamed_clusters
    );
    Ok(stats)
}

/// Maps each source folder to the albums whose copy of `duplicate` has the
/// same bytes. Only the base files are compared. An album copy is assigned to
/// the first matching source only.
fn match_album_copies(
    takeout: &Takeout,
    albums: &[String],
    sources: &[String],
    duplicate: &str,
) -> Result<BTreeMap<String, Vec<String>>, Error> {
    let mut matches: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for album_name in albums {
        let Some(album_file) = takeout
            .albums
            .get(album_name)
            .and_then(|a| a.photo_files.get(duplicate))
        else {
            continue;
        };

        for source_name in sources {
            let Some(source_file) = takeout
                .photos_source
                .get(source_name)
                .and_then(|s| s.photo_files.get(duplicate))
            else {
                continue;
            };

            let identical = files_identical(
                &takeout.root_path.join(album_file.base()),
                &takeout.root_path.join(source_file.base()),
            )?;
            debug!(
                "Compared {} with {}: {}",
                album_file.base().display(),
                source_file.base().display(),
                if identical { "identical" } else { "different" }
            );

            if identical {
                matches
                    .entry(source_name.clone())
                    .or_default()
                    .push(album_name.clone());
                break;
            }
        }
    }

    Ok(matches)
}

fn resolve_album_duplicate(
    takeout: &mut Takeout,
    album_files: &mut FileIndex,
    source_files: &mut FileIndex,
    duplicate: &str,
    ledger: &mut TaskLedger,
) -> Result<usize, Error> {
    let sources = source_files.get(duplicate).cloned().unwrap_or_default();
    let albums = album_files.get(duplicate).cloned().unwrap_or_default();

    let mut matches = match_album_copies(takeout, &albums, &sources, duplicate)?;

    // Check every new name before scheduling anything for this key.
    let mut planned = BTreeSet::new();
    for source_name in &sources {
        let updated_key = format!("{}{}", source_prefix(source_name), duplicate);
        if album_files.contains_key(&updated_key)
            || source_files.contains_key(&updated_key)
            || !planned.insert(updated_key.clone())
        {
            return Err(Error::RenameCollision {
                original: duplicate.to_string(),
                renamed: updated_key,
                folder: source_name.clone(),
            });
        }
    }

    let mut renamed = 0;
    for source_name in &sources {
        let prefix = source_prefix(source_name);
        let updated_key = format!("{}{}", prefix, duplicate);
        let matched_albums = matches.remove(source_name).unwrap_or_default();

        if let Some(source) = takeout.photos_source.get_mut(source_name) {
            if rekey_cluster(source, duplicate, &prefix, ledger) {
                renamed += 1;
            }
        }
        for album_name in &matched_albums {
            if let Some(album) = takeout.albums.get_mut(album_name) {
                if rekey_cluster(album, duplicate, &prefix, ledger) {
                    renamed += 1;
                }
            }
        }

        if matched_albums.is_empty() {
            debug!("{} in {} has no album copy", duplicate, source_name);
        } else {
            album_files.insert(updated_key.clone(), matched_albums);
        }
        source_files.insert(updated_key, vec![source_name.clone()]);
    }

    album_files.remove(duplicate);
    source_files.remove(duplicate);

    Ok(renamed)
}

/// Replaces the cluster stored under `key` with its prefixed copy.
fn rekey_cluster(album: &mut Album, key: &str, prefix: &str, ledger: &mut TaskLedger) -> bool {
    match album.photo_files.remove(key) {
        Some(cluster) => {
            let updated = cluster.prefix_rename(prefix, ledger);
            album.photo_files.insert(updated.key(), updated);
            true
        }
        None => false,
    }
}
