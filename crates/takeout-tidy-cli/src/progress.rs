use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;
use takeout_tidy_core::ProgressReporter;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// CLI progress reporter using indicatif progress bars.
///
/// - Index phase: bar over top-level folders
/// - Compare phase: bar over duplicate file names
/// - Execute phase: bar over ledger tasks
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn start_bar(&self, label: &str, total: usize) {
        let style = ProgressStyle::with_template(&format!(
            "  {{spinner:.cyan}} {} [{{bar:30.cyan/dim}}] {{pos}}/{{len}} {{msg}}",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━╸─")
        .tick_chars(TICK_CHARS);

        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Some(old) = self.bar.replace(Some(pb)) {
            old.finish_and_clear();
        }
    }

    fn set_position(&self, position: usize) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_position(position as u64);
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_index_start(&self, total_folders: usize) {
        self.start_bar("Indexing", total_folders);
    }

    fn on_folder_indexed(&self, folder: &str) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.inc(1);
            pb.set_message(folder.to_string());
        }
    }

    fn on_index_complete(&self, sources: usize, albums: usize, special: usize) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Index complete: {} source, {} album, {} special folders",
            sources, albums, special
        );
    }

    fn on_compare_start(&self, duplicate_keys: usize) {
        self.start_bar("Comparing", duplicate_keys);
    }

    fn on_compare_progress(&self, keys_done: usize, _duplicate_keys: usize) {
        self.set_position(keys_done);
    }

    fn on_compare_complete(&self, renames: usize) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Duplicate names resolved: {} clusters renamed",
            renames
        );
    }

    fn on_execute_start(&self, total_tasks: usize) {
        self.start_bar("Applying", total_tasks);
    }

    fn on_execute_progress(&self, tasks_done: usize, _total_tasks: usize) {
        self.set_position(tasks_done);
    }

    fn on_execute_complete(&self, tasks_done: usize) {
        self.finish_bar();
        eprintln!("  \x1b[32m✓\x1b[0m Applied {} tasks", tasks_done);
    }
}
