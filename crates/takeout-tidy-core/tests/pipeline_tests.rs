use std::fs;
use std::path::Path;
use tempfile::tempdir;

use takeout_tidy_core::{
    execute_ledger, AppConfig, Error, PlanEngine, SilentReporter, Task,
};

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn plan(root: &Path) -> takeout_tidy_core::PlanResult {
    PlanEngine::new(AppConfig::default())
        .plan(root, &SilentReporter)
        .unwrap()
}

#[test]
fn test_distinct_source_copies_are_both_renamed() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0001.JPG", "first");
    write_file(root, "Photos from 2021/IMG_0001.JPG", "second");

    let result = plan(root);

    assert_eq!(
        result.ledger.tasks(),
        &[
            Task::rename(
                "Photos from 2020/IMG_0001.JPG",
                "Photos from 2020/Photos_from_2020__IMG_0001.JPG"
            ),
            Task::rename(
                "Photos from 2021/IMG_0001.JPG",
                "Photos from 2021/Photos_from_2021__IMG_0001.JPG"
            ),
        ]
    );
    assert_eq!(result.stats.duplicate_keys, 1);
    assert_eq!(result.stats.renamed_clusters, 2);

    let sources = &result.takeout.photos_source;
    assert!(sources["Photos from 2020"].contains("Photos_from_2020__IMG_0001.JPG"));
    assert!(sources["Photos from 2021"].contains("Photos_from_2021__IMG_0001.JPG"));
    assert!(!sources.values().any(|s| s.contains("IMG_0001.JPG")));
}

#[test]
fn test_album_copy_follows_matching_source() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0002.JPG", "beach");
    write_file(root, "Photos from 2020/IMG_0002.JPG.json", "{}");
    write_file(root, "Photos from 2021/IMG_0002.JPG", "mountain");
    write_file(root, "Vacation/IMG_0002.JPG", "beach");
    write_file(root, "Vacation/IMG_0002.JPG.json", "{}");

    let result = plan(root);
    let tasks = result.ledger.tasks();

    assert_eq!(
        &tasks[..5],
        &[
            Task::rename(
                "Photos from 2020/IMG_0002.JPG",
                "Photos from 2020/Photos_from_2020__IMG_0002.JPG"
            ),
            Task::rename(
                "Photos from 2020/IMG_0002.JPG.json",
                "Photos from 2020/Photos_from_2020__IMG_0002.JPG.json"
            ),
            Task::rename(
                "Vacation/IMG_0002.JPG",
                "Vacation/Photos_from_2020__IMG_0002.JPG"
            ),
            Task::rename(
                "Vacation/IMG_0002.JPG.json",
                "Vacation/Photos_from_2020__IMG_0002.JPG.json"
            ),
            Task::rename(
                "Photos from 2021/IMG_0002.JPG",
                "Photos from 2021/Photos_from_2021__IMG_0002.JPG"
            ),
        ]
    );
    assert_eq!(
        tasks[5],
        Task::create(
            "Vacation/album.yaml",
            "album: Vacation\nphoto_files:\n- Photos_from_2020__IMG_0002.JPG\n- Photos_from_2020__IMG_0002.JPG.json\n"
        )
    );

    let vacation = &result.takeout.albums["Vacation"];
    assert!(vacation.contains("Photos_from_2020__IMG_0002.JPG"));
    assert!(!vacation.contains("IMG_0002.JPG"));
    assert!(result.coverage[0].is_complete());
}

#[test]
fn test_same_source_copy_fans_out_to_several_albums() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0003.JPG", "cake");
    write_file(root, "Photos from 2021/IMG_0003.JPG", "candles");
    write_file(root, "Birthday/IMG_0003.JPG", "cake");
    write_file(root, "Family/IMG_0003.JPG", "cake");
    write_file(root, "Party/IMG_0003.JPG", "candles");

    let result = plan(root);

    let albums = &result.takeout.albums;
    assert!(albums["Birthday"].contains("Photos_from_2020__IMG_0003.JPG"));
    assert!(albums["Family"].contains("Photos_from_2020__IMG_0003.JPG"));
    assert!(albums["Party"].contains("Photos_from_2021__IMG_0003.JPG"));
    assert_eq!(result.stats.renamed_clusters, 5);
}

#[test]
fn test_album_copy_without_match_keeps_its_name() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0004.JPG", "one");
    write_file(root, "Photos from 2021/IMG_0004.JPG", "two");
    write_file(root, "Edited/IMG_0004.JPG", "three");

    let result = plan(root);

    assert!(!result
        .ledger
        .iter()
        .any(|t| matches!(t, Task::Rename { from, .. } if from.starts_with("Edited/IMG_0004.JPG"))));
    let coverage = &result.coverage[0];
    assert_eq!(coverage.album, "Edited");
    assert_eq!(coverage.unique, vec!["IMG_0004.JPG".to_string()]);
}

#[test]
fn test_redundant_untitled_album_is_deleted() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2019/IMG_0005.JPG", "snow");
    write_file(root, "Photos from 2019/IMG_0006.JPG", "sun");
    write_file(root, "Untitled(3)/IMG_0005.JPG", "snow");
    write_file(root, "Untitled(3)/IMG_0006.JPG", "sun");
    write_file(root, "Untitled(3)/metadata.json", "{}");

    let result = plan(root);

    assert_eq!(result.ledger.tasks(), &[Task::delete("Untitled(3)")]);
    assert!(result.takeout.albums.is_empty());
    assert_eq!(result.stats.pruned_albums, vec!["Untitled(3)".to_string()]);
}

#[test]
fn test_untitled_album_with_unique_photo_is_kept() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2019/IMG_0005.JPG", "snow");
    write_file(root, "Untitled/IMG_0005.JPG", "snow");
    write_file(root, "Untitled/IMG_9999.JPG", "only here");

    let result = plan(root);

    assert!(result.takeout.albums.contains_key("Untitled"));
    assert!(result.stats.pruned_albums.is_empty());
    assert!(!result.ledger.iter().any(|t| *t == Task::delete("Untitled")));
}

#[test]
fn test_keep_untitled_albums_skips_pruning() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2019/IMG_0005.JPG", "snow");
    write_file(root, "Untitled(1)/IMG_0005.JPG", "snow");

    let result = PlanEngine::new(AppConfig::default())
        .with_keep_untitled_albums(true)
        .plan(root, &SilentReporter)
        .unwrap();

    assert!(result.takeout.albums.contains_key("Untitled(1)"));
    assert_eq!(
        result.ledger.tasks()[0],
        Task::create(
            "Untitled(1)/album.yaml",
            "album: Untitled(1)\nphoto_files:\n- IMG_0005.JPG\n"
        )
    );
}

#[test]
fn test_album_is_replaced_by_descriptor_and_moved() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0007.JPG", "a");
    write_file(root, "Photos from 2020/IMG_0008.JPG", "b");
    write_file(root, "Birthday/IMG_0007.JPG", "a");
    write_file(root, "Birthday/IMG_0008.JPG", "b");
    write_file(root, "Bin/IMG_0009.JPG", "c");

    let result = plan(root);

    assert_eq!(
        result.ledger.tasks(),
        &[
            Task::create(
                "Birthday/album.yaml",
                "album: Birthday\nphoto_files:\n- IMG_0007.JPG\n- IMG_0008.JPG\n"
            ),
            Task::delete("Birthday/IMG_0007.JPG"),
            Task::delete("Birthday/IMG_0008.JPG"),
            Task::create_dir("ALBUMS"),
            Task::rename("Birthday", "ALBUMS/Birthday"),
        ]
    );
    assert_eq!(result.stats.special_folders, 1);
    assert_eq!(result.stats.descriptors_written, 1);
    assert_eq!(result.stats.relocated_albums, 1);
}

#[test]
fn test_relocation_can_be_disabled() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0007.JPG", "a");
    write_file(root, "Birthday/IMG_0007.JPG", "a");

    let config = AppConfig {
        relocate_albums: false,
        ..AppConfig::default()
    };
    let result = PlanEngine::new(config).plan(root, &SilentReporter).unwrap();

    assert_eq!(result.ledger.len(), 2);
    assert!(!result.ledger.iter().any(|t| matches!(t, Task::CreateDir { .. })));
}

#[test]
fn test_rename_collision_aborts_planning() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0010.JPG", "x");
    write_file(root, "Photos from 2020/Photos_from_2020__IMG_0010.JPG", "y");
    write_file(root, "Photos from 2021/IMG_0010.JPG", "z");

    let result = PlanEngine::new(AppConfig::default()).plan(root, &SilentReporter);

    match result {
        Err(Error::RenameCollision { original, renamed, .. }) => {
            assert_eq!(original, "IMG_0010.JPG");
            assert_eq!(renamed, "Photos_from_2020__IMG_0010.JPG");
        }
        other => panic!("expected rename collision, got {:?}", other.map(|r| r.ledger)),
    }
    assert!(root.join("Photos from 2020/IMG_0010.JPG").exists());
}

#[test]
fn test_rename_collision_with_album_file_aborts_planning() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0013.JPG", "x");
    write_file(root, "Photos from 2021/IMG_0013.JPG", "y");
    write_file(root, "Trip/Photos_from_2020__IMG_0013.JPG", "z");

    let result = PlanEngine::new(AppConfig::default()).plan(root, &SilentReporter);

    match result {
        Err(Error::RenameCollision { renamed, folder, .. }) => {
            assert_eq!(renamed, "Photos_from_2020__IMG_0013.JPG");
            assert_eq!(folder, "Photos from 2020");
        }
        other => panic!("expected rename collision, got {:?}", other.map(|r| r.ledger)),
    }
}

#[test]
fn test_album_copy_identical_to_two_sources_follows_the_first() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0014.JPG", "same");
    write_file(root, "Photos from 2021/IMG_0014.JPG", "same");
    write_file(root, "Trip/IMG_0014.JPG", "same");

    let result = plan(root);
    let renames: Vec<&Task> = result
        .ledger
        .iter()
        .filter(|t| matches!(t, Task::Rename { .. }))
        .take(3)
        .collect();

    assert_eq!(
        renames,
        vec![
            &Task::rename(
                "Photos from 2020/IMG_0014.JPG",
                "Photos from 2020/Photos_from_2020__IMG_0014.JPG"
            ),
            &Task::rename("Trip/IMG_0014.JPG", "Trip/Photos_from_2020__IMG_0014.JPG"),
            &Task::rename(
                "Photos from 2021/IMG_0014.JPG",
                "Photos from 2021/Photos_from_2021__IMG_0014.JPG"
            ),
        ]
    );
    let trip = &result.takeout.albums["Trip"];
    assert_eq!(trip.photo_files.len(), 1);
    assert!(trip.contains("Photos_from_2020__IMG_0014.JPG"));
    assert_eq!(result.stats.renamed_clusters, 3);
}

#[test]
fn test_missing_source_folder_is_fatal() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Vacation/IMG_0001.JPG", "x");

    let result = PlanEngine::new(AppConfig::default()).plan(root, &SilentReporter);
    assert!(matches!(result, Err(Error::NoSourceFolder { .. })));
}

#[test]
fn test_subfolder_in_album_is_fatal() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0001.JPG", "x");
    write_file(root, "Vacation/day1/IMG_0002.JPG", "y");

    let result = PlanEngine::new(AppConfig::default()).plan(root, &SilentReporter);
    assert!(matches!(result, Err(Error::InvalidFolderStructure { .. })));
}

#[test]
fn test_second_run_on_applied_plan_is_empty() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0002.JPG", "beach");
    write_file(root, "Photos from 2020/IMG_0002.JPG.json", "{}");
    write_file(root, "Photos from 2021/IMG_0002.JPG", "mountain");
    write_file(root, "Photos from 2021/IMG_0011.JPG", "forest");
    write_file(root, "Vacation/IMG_0002.JPG", "beach");
    write_file(root, "Vacation/metadata.json", "{}");
    write_file(root, "Untitled/IMG_0011.JPG", "forest");
    write_file(root, "Archive/IMG_0012.JPG", "old");

    let first = plan(root);
    execute_ledger(root, &first.ledger, false, &SilentReporter).unwrap();

    assert!(root
        .join("Photos from 2020/Photos_from_2020__IMG_0002.JPG.json")
        .exists());
    assert!(root.join("Photos from 2021/Photos_from_2021__IMG_0002.JPG").exists());
    assert!(!root.join("Untitled").exists());
    assert!(root.join("ALBUMS/Vacation/album.yaml").exists());
    assert!(root.join("ALBUMS/Vacation/metadata.json").exists());
    assert!(!root.join("ALBUMS/Vacation/Photos_from_2020__IMG_0002.JPG").exists());
    assert!(root.join("Archive/IMG_0012.JPG").exists());

    let second = plan(root);
    assert!(second.ledger.is_empty(), "{:?}", second.ledger);
}

#[test]
fn test_saved_plan_replays_identically() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write_file(root, "Photos from 2020/IMG_0001.JPG", "first");
    write_file(root, "Photos from 2021/IMG_0001.JPG", "second");
    write_file(root, "Trip/IMG_0001.JPG", "second");

    let result = plan(root);
    let yaml = result.ledger.to_yaml().unwrap();
    let replayed = takeout_tidy_core::TaskLedger::from_yaml(&yaml).unwrap();
    assert_eq!(replayed, result.ledger);

    execute_ledger(root, &replayed, false, &SilentReporter).unwrap();
    let descriptor = fs::read_to_string(root.join("ALBUMS/Trip/album.yaml")).unwrap();
    assert!(descriptor.contains("Photos_from_2021__IMG_0001.JPG"));
}
