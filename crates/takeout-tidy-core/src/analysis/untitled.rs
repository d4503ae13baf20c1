use crate::ledger::{Task, TaskLedger};
use crate::model::album::is_untitled_album_name;
use crate::model::Takeout;
use tracing::{info, warn};

/// Deletes `Untitled` / `Untitled(N)` albums whose every photo also exists in
/// some source folder. Returns the names of the deleted albums.
pub fn remove_untitled_albums(takeout: &mut Takeout, ledger: &mut TaskLedger) -> Vec<String> {
    let mut to_delete = Vec::new();

    for album in takeout.albums.values() {
        if !is_untitled_album_name(&album.name) {
            continue;
        }

        let missing = album
            .photo_files
            .keys()
            .find(|key| !takeout.source_contains(key));

        match missing {
            Some(key) => warn!(
                "File cluster {} not found in source folder. Not deleting untitled album {}.",
                key, album.name
            ),
            None => to_delete.push(album.name.clone()),
        }
    }

    for album_name in &to_delete {
        info!("Deleting redundant untitled album {}", album_name);
        ledger.push(Task::delete(album_name.as_str()));
        takeout.albums.remove(album_name);
    }

    to_delete
}
