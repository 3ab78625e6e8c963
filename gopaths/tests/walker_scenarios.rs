//! End-to-end searches over real directory trees.

mod common;

use common::MarkerTree;
use gopaths::{find_above, resolve, HaltReason, Logger, Outcome, SearchOptions};

fn local() -> SearchOptions {
    SearchOptions {
        to_root: false,
        ..SearchOptions::default()
    }
}

fn found(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Found(paths) => paths.into_vec(),
        Outcome::NotFound => panic!("expected entries"),
    }
}

#[test]
fn relative_entry_resolves_against_marker_directory() {
    let tree = MarkerTree::new();
    tree.marker("proj/src", "../lib\n");

    let discovery = find_above(&tree.path("proj/src"), &local(), &Logger::default()).unwrap();
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj/lib")]);
    assert_eq!(discovery.halt, HaltReason::ToRootDisabled);
}

#[test]
fn marker_in_parent_is_ignored_without_to_root() {
    let tree = MarkerTree::new();
    tree.marker("proj", "lib\n");
    tree.dir("proj/src");

    let discovery = find_above(&tree.path("proj/src"), &local(), &Logger::default()).unwrap();
    assert_eq!(discovery.outcome, Outcome::NotFound);
}

#[test]
fn marker_in_parent_is_found_with_to_root() {
    let tree = MarkerTree::new();
    tree.marker("proj", "lib\n!\n");
    tree.dir("proj/src");

    let discovery = find_above(
        &tree.path("proj/src"),
        &SearchOptions::default(),
        &Logger::default(),
    )
    .unwrap();
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj/lib")]);
    assert_eq!(discovery.last_dir, tree.path("proj"));
}

#[test]
fn empty_marker_contributes_its_directory() {
    let tree = MarkerTree::new();
    tree.marker("proj", "");

    let discovery = find_above(&tree.path("proj"), &local(), &Logger::default()).unwrap();
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj")]);
}

#[test]
fn stop_sentinel_halts_ascent() {
    let tree = MarkerTree::new();
    tree.marker("", "outer\n");
    tree.marker("dir", "!\nvendor\n");

    let discovery = find_above(
        &tree.path("dir"),
        &SearchOptions::default(),
        &Logger::default(),
    )
    .unwrap();
    assert!(discovery.stop);
    assert_eq!(discovery.halt, HaltReason::StopSentinel);
    assert_eq!(found(discovery.outcome), vec![tree.entry("dir/vendor")]);
}

#[test]
fn drop_only_marker_reports_drop_without_entries() {
    let tree = MarkerTree::new();
    tree.marker("dir", "-\n");

    let discovery = find_above(&tree.path("dir"), &local(), &Logger::default()).unwrap();
    assert!(discovery.drop_env);
    assert_eq!(discovery.outcome, Outcome::NotFound);

    let resolution = resolve(
        &[tree.path("dir")],
        Some("/env"),
        &local(),
        &Logger::default(),
    )
    .unwrap();
    assert!(resolution.env_dropped);
    assert!(resolution.paths.is_empty());
}

#[test]
fn missing_markers_skip_directory_without_aborting() {
    let tree = MarkerTree::new();
    tree.dir("empty");
    tree.marker("proj", "");

    let resolution = resolve(
        &[tree.path("empty"), tree.path("proj")],
        None,
        &local(),
        &Logger::default(),
    )
    .unwrap();
    assert!(resolution.aborted.is_none());
    assert_eq!(resolution.paths.as_slice(), [tree.entry("proj")]);
}

#[test]
fn results_merge_in_order_and_deduplicate() {
    let tree = MarkerTree::new();
    tree.marker("one", "/a\n/b\n");
    tree.marker("two", "/b\n/c\n");

    let resolution = resolve(
        &[tree.path("one"), tree.path("two")],
        Some("/env"),
        &local(),
        &Logger::default(),
    )
    .unwrap();
    assert_eq!(resolution.paths.to_string(), "/a:/b:/c:/env");
}

#[test]
fn primary_and_auxiliary_markers_both_contribute() {
    let tree = MarkerTree::new();
    tree.marker("proj", "primary\n");
    tree.aux_marker("proj", "aux\n");

    let discovery = find_above(&tree.path("proj"), &local(), &Logger::default()).unwrap();
    assert_eq!(
        found(discovery.outcome),
        vec![tree.entry("proj/primary"), tree.entry("proj/aux")]
    );
}

#[test]
fn custom_marker_name() {
    let tree = MarkerTree::new();
    tree.named_marker("proj", ".workspace", "ws\n");
    tree.marker("proj", "ignored\n");

    let options = SearchOptions {
        marker: ".workspace".to_string(),
        to_root: false,
    };
    let discovery = find_above(&tree.path("proj"), &options, &Logger::default()).unwrap();
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj/ws")]);
}

#[test]
fn nested_markers_are_collected_nearest_first() {
    let tree = MarkerTree::new();
    tree.marker("a", "outer\n!\n");
    tree.marker("a/b", "middle\n");
    tree.marker("a/b/c", "inner\n");

    let discovery = find_above(
        &tree.path("a/b/c"),
        &SearchOptions::default(),
        &Logger::default(),
    )
    .unwrap();
    assert_eq!(
        found(discovery.outcome),
        vec![
            tree.entry("a/b/c/inner"),
            tree.entry("a/b/middle"),
            tree.entry("a/outer"),
        ]
    );
}

#[test]
fn stop_in_first_directory_skips_the_rest() {
    let tree = MarkerTree::new();
    tree.marker("one", "first\n!\n");
    tree.marker("two", "second\n");

    let resolution = resolve(
        &[tree.path("one"), tree.path("two")],
        None,
        &local(),
        &Logger::default(),
    )
    .unwrap();
    assert!(resolution.stopped);
    assert_eq!(resolution.paths.as_slice(), [tree.entry("one/first")]);
}

#[cfg(unix)]
#[test]
fn unreadable_marker_is_skipped() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = MarkerTree::new();
    tree.marker("proj", "lib\n");
    tree.aux_marker("proj", "aux\n");
    let marker = tree.path("proj/.go-path");
    fs::set_permissions(&marker, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root from reading the file.
    if fs::read(&marker).is_ok() {
        return;
    }

    let discovery = find_above(&tree.path("proj"), &local(), &Logger::default()).unwrap();
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj/aux")]);
}

#[test]
fn auxiliary_marker_is_read_after_primary_stop() {
    let tree = MarkerTree::new();
    tree.marker("", "outer\n");
    tree.marker("proj", "!\nprimary\n");
    tree.aux_marker("proj", "aux\n");

    let discovery = find_above(
        &tree.path("proj"),
        &SearchOptions::default(),
        &Logger::default(),
    )
    .unwrap();
    assert!(discovery.stop);
    assert_eq!(discovery.halt, HaltReason::StopSentinel);
    assert_eq!(discovery.last_dir, tree.path("proj"));
    assert_eq!(
        found(discovery.outcome),
        vec![tree.entry("proj/primary"), tree.entry("proj/aux")]
    );
}

#[test]
fn auxiliary_marker_in_ancestor_is_found_with_to_root() {
    let tree = MarkerTree::new();
    tree.aux_marker("", "shared\n!\n");
    tree.dir("a/b");

    let discovery = find_above(
        &tree.path("a/b"),
        &SearchOptions::default(),
        &Logger::default(),
    )
    .unwrap();
    assert!(discovery.stop);
    assert_eq!(discovery.last_dir, tree.path(""));
    assert_eq!(found(discovery.outcome), vec![tree.entry("shared")]);
}

#[test]
fn auxiliary_marker_sentinels_set_flags() {
    let tree = MarkerTree::new();
    tree.aux_marker("proj", "-\nlib\n!\n");

    let discovery = find_above(&tree.path("proj"), &local(), &Logger::default()).unwrap();
    assert!(discovery.drop_env);
    assert!(discovery.stop);
    assert_eq!(found(discovery.outcome), vec![tree.entry("proj/lib")]);

    let resolution = resolve(
        &[tree.path("proj")],
        Some("/env"),
        &local(),
        &Logger::default(),
    )
    .unwrap();
    assert!(resolution.env_dropped);
    assert_eq!(resolution.paths.as_slice(), [tree.entry("proj/lib")]);
}
