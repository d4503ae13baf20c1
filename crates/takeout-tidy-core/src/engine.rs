use crate::analysis::coverage::{self, AlbumCoverage};
use crate::analysis::{descriptor, duplicates, relocate, untitled};
use crate::config::AppConfig;
use crate::error::Error;
use crate::ledger::TaskLedger;
use crate::model::Takeout;
use crate::progress::ProgressReporter;
use crate::scanner;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct PlanEngine {
    config: AppConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanStats {
    pub source_folders: usize,
    pub album_folders: usize,
    pub special_folders: usize,
    pub duplicate_keys: usize,
    pub renamed_clusters: usize,
    pub pruned_albums: Vec<String>,
    pub descriptors_written: usize,
    pub relocated_albums: usize,
}

#[derive(Debug)]
pub struct PlanResult {
    pub ledger: TaskLedger,
    pub stats: PlanStats,
    pub coverage: Vec<AlbumCoverage>,
    pub takeout: Takeout,
    pub index_duration: Duration,
    pub plan_duration: Duration,
}

impl PlanEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn with_keep_untitled_albums(mut self, keep: bool) -> Self {
        self.config.keep_untitled_albums = keep;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the full planning pipeline:
    /// 1. Index every folder below `root` and classify it
    /// 2. Disambiguate file names shared by several source folders
    /// 3. Drop untitled albums fully covered by the sources
    /// 4. Replace album photos with a descriptor
    /// 5. Move albums into the container folder
    ///
    /// Nothing on disk is modified; the returned ledger holds every change.
    pub fn plan(&self, root: &Path, reporter: &dyn ProgressReporter) -> Result<PlanResult, Error> {
        info!("Indexing {}", root.display());
        let index_start = Instant::now();
        let mut takeout = scanner::open_takeout(root, &self.config, reporter)?;
        let index_duration = index_start.elapsed();

        let mut stats = PlanStats {
            source_folders: takeout.photos_source.len(),
            album_folders: takeout.albums.len(),
            special_folders: takeout.special.len(),
            ..PlanStats::default()
        };
        debug!(
            "Indexed in {:.2}s: {} source, {} album, {} special folders",
            index_duration.as_secs_f64(),
            stats.source_folders,
            stats.album_folders,
            stats.special_folders,
        );

        let plan_start = Instant::now();
        let mut ledger = TaskLedger::new();

        let resolved = duplicates::resolve_duplicates(&mut takeout, &mut ledger, reporter)?;
        stats.duplicate_keys = resolved.duplicate_keys;
        stats.renamed_clusters = resolved.renamed_clusters;

        if self.config.keep_untitled_albums {
            info!("Keeping untitled albums");
        } else {
            stats.pruned_albums = untitled::remove_untitled_albums(&mut takeout, &mut ledger);
        }

        let coverage = coverage::report_coverage(&takeout);

        stats.descriptors_written =
            descriptor::replace_album_files_with_descriptor(&takeout, &self.config, &mut ledger)?;

        if self.config.relocate_albums {
            stats.relocated_albums =
                relocate::move_albums_to_container(&takeout, &self.config, &mut ledger);
        }

        let plan_duration = plan_start.elapsed();
        info!(
            "Planned {} tasks in {:.2}s",
            ledger.len(),
            plan_duration.as_secs_f64()
        );

        Ok(PlanResult {
            ledger,
            stats,
            coverage,
            takeout,
            index_duration,
            plan_duration,
        })
    }
}
