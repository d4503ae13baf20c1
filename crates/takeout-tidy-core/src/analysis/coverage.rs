use crate::model::{Album, Takeout};
use tracing::{info, warn};

/// How the photo files of one album relate to the source folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumCoverage {
    pub album: String,
    /// Held by exactly one source folder.
    pub resolved: Vec<String>,
    /// Held by no source folder; the album copy is the only one.
    pub unique: Vec<String>,
    /// Held by several source folders.
    pub ambiguous: Vec<String>,
}

impl AlbumCoverage {
    pub fn is_complete(&self) -> bool {
        self.unique.is_empty() && self.ambiguous.is_empty()
    }
}

pub fn album_coverage(album: &Album, takeout: &Takeout) -> AlbumCoverage {
    let mut coverage = AlbumCoverage {
        album: album.name.clone(),
        ..AlbumCoverage::default()
    };

    for key in album.photo_files.keys() {
        let holders = takeout
            .photos_source
            .values()
            .filter(|source| source.contains(key))
            .count();
        match holders {
            0 => coverage.unique.push(key.clone()),
            1 => coverage.resolved.push(key.clone()),
            _ => coverage.ambiguous.push(key.clone()),
        }
    }

    coverage
}

/// Coverage of every album, logging the ones that reference files no
/// source folder can provide unambiguously.
pub fn report_coverage(takeout: &Takeout) -> Vec<AlbumCoverage> {
    let report: Vec<AlbumCoverage> = takeout
        .albums
        .values()
        .map(|album| album_coverage(album, takeout))
        .collect();

    for coverage in &report {
        if coverage.is_complete() {
            continue;
        }
        warn!(
            "Album {}: {} files not in any source folder, {} in several source folders",
            coverage.album,
            coverage.unique.len(),
            coverage.ambiguous.len()
        );
    }

    let complete = report.iter().filter(|c| c.is_complete()).count();
    info!(
        "{} of {} albums fully covered by source folders",
        complete,
        report.len()
    );
    report
}
