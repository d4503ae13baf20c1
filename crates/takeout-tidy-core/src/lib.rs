pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod executor;
pub mod ledger;
pub mod model;
pub mod progress;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{PlanEngine, PlanResult, PlanStats};
pub use error::Error;
pub use executor::{execute_ledger, ExecutionStats};
pub use ledger::{Task, TaskLedger};
pub use progress::{ProgressReporter, SilentReporter};
