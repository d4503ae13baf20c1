use crate::config::AppConfig;
use crate::ledger::{Task, TaskLedger};
use crate::model::Takeout;
use std::path::Path;
use tracing::info;

/// Moves every album folder into the album container. Special folders live in
/// their own bucket of the takeout and stay where they are. Returns the number
/// of albums moved.
pub fn move_albums_to_container(
    takeout: &Takeout,
    config: &AppConfig,
    ledger: &mut TaskLedger,
) -> usize {
    let movable: Vec<&str> = takeout
        .albums
        .keys()
        .map(String::as_str)
        .collect();

    if movable.is_empty() {
        return 0;
    }

    let container = Path::new(&config.album_container_name);
    ledger.push(Task::create_dir(container));
    for name in &movable {
        ledger.push(Task::rename(*name, container.join(name)));
    }

    info!(
        "Moving {} albums into {}",
        movable.len(),
        config.album_container_name
    );
    movable.len()
}
