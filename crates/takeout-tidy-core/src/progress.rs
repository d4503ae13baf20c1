/// Trait for reporting planning and execution progress.
///
/// The CLI implements it with indicatif bars; tests and library callers use
/// [`SilentReporter`]. All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_index_start(&self, _total_folders: usize) {}
    fn on_folder_indexed(&self, _folder: &str) {}
    fn on_index_complete(&self, _sources: usize, _albums: usize, _special: usize) {}
    fn on_compare_start(&self, _duplicate_keys: usize) {}
    fn on_compare_progress(&self, _keys_done: usize, _duplicate_keys: usize) {}
    fn on_compare_complete(&self, _renames: usize) {}
    fn on_execute_start(&self, _total_tasks: usize) {}
    fn on_execute_progress(&self, _tasks_done: usize, _total_tasks: usize) {}
    fn on_execute_complete(&self, _tasks_done: usize) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
