use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// One filesystem mutation. All paths are relative to the takeout root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Task {
    Rename { from: PathBuf, to: PathBuf },
    Create { path: PathBuf, content: String },
    CreateDir { path: PathBuf },
    /// Recursive when the target is a directory.
    Delete { path: PathBuf },
}

impl Task {
    pub fn rename(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Task::Rename {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn create(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Task::Create {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>) -> Self {
        Task::CreateDir { path: path.into() }
    }

    pub fn delete(path: impl Into<PathBuf>) -> Self {
        Task::Delete { path: path.into() }
    }

    fn paths(&self) -> Vec<&Path> {
        match self {
            Task::Rename { from, to } => vec![from.as_path(), to.as_path()],
            Task::Create { path, .. } | Task::CreateDir { path } | Task::Delete { path } => {
                vec![path.as_path()]
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Rename { from, to } => {
                write!(f, "rename {} -> {}", from.display(), to.display())
            }
            Task::Create { path, content } => {
                write!(f, "create {} ({} bytes)", path.display(), content.len())
            }
            Task::CreateDir { path } => write!(f, "mkdir {}", path.display()),
            Task::Delete { path } => write!(f, "delete {}", path.display()),
        }
    }
}

/// Ordered, append-only list of tasks built by the planning stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskLedger {
    tasks: Vec<Task>,
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a saved plan. Every path must name something strictly below the
    /// takeout root; `.` and other paths resolving to the root are refused.
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let ledger: TaskLedger = serde_yaml::from_str(text)?;
        for task in ledger.iter() {
            for path in task.paths() {
                if !is_below_root(path) {
                    return Err(Error::PlanFile(format!(
                        "path '{}' is not relative to the takeout root",
                        path.display()
                    )));
                }
            }
        }
        Ok(ledger)
    }
}

fn is_below_root(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            _ => return false,
        }
    }
    named
}

impl Extend<Task> for TaskLedger {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        self.tasks.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TaskLedger {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
