use crate::error::Error;
use crate::ledger::{Task, TaskLedger};
use crate::progress::ProgressReporter;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionStats {
    pub renamed: usize,
    pub created: usize,
    pub created_dirs: usize,
    pub deleted: usize,
}

impl ExecutionStats {
    pub fn total(&self) -> usize {
        self.renamed + self.created + self.created_dirs + self.deleted
    }

    fn count(&mut self, task: &Task) {
        match task {
            Task::Rename { .. } => self.renamed += 1,
            Task::Create { .. } => self.created += 1,
            Task::CreateDir { .. } => self.created_dirs += 1,
            Task::Delete { .. } => self.deleted += 1,
        }
    }
}

/// Applies the ledger in order below `root`, or only prints it when `dry_run`
/// is set.
///
/// No validation and no rollback: the first failing task stops execution and
/// leaves the earlier tasks applied.
pub fn execute_ledger(
    root: &Path,
    ledger: &TaskLedger,
    dry_run: bool,
    reporter: &dyn ProgressReporter,
) -> Result<ExecutionStats, Error> {
    let mut stats = ExecutionStats::default();

    if dry_run {
        for task in ledger {
            println!("{}", task);
            stats.count(task);
        }
        info!("Dry run: {} tasks not executed", stats.total());
        return Ok(stats);
    }

    reporter.on_execute_start(ledger.len());
    for (done, task) in ledger.iter().enumerate() {
        apply_task(root, task).map_err(|source| Error::Execution {
            task: task.to_string(),
            source,
        })?;
        debug!("{}", task);
        stats.count(task);
        reporter.on_execute_progress(done + 1, ledger.len());
    }
    reporter.on_execute_complete(stats.total());

    info!(
        "Executed {} tasks: {} renames, {} files created, {} folders created, {} deletions",
        stats.total(),
        stats.renamed,
        stats.created,
        stats.created_dirs,
        stats.deleted
    );
    Ok(stats)
}

fn apply_task(root: &Path, task: &Task) -> io::Result<()> {
    match task {
        Task::Rename { from, to } => fs::rename(root.join(from), root.join(to)),
        Task::Create { path, content } => fs::write(root.join(path), content),
        Task::CreateDir { path } => fs::create_dir_all(root.join(path)),
        Task::Delete { path } => {
            let target = root.join(path);
            if target.is_dir() {
                fs::remove_dir_all(target)
            } else {
                fs::remove_file(target)
            }
        }
    }
}
