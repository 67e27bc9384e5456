use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tempfile::tempdir;

fn create_gapped_sequence(dir: &Path) {
    for name in ["shot_001.png", "shot_003.png", "shot_007.png"] {
        std::fs::write(dir.join(name), name).unwrap();
    }
}

fn listing(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renumber image sequences"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_folder_argument() {
    Command::cargo_bin("seqcompact")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_list_extensions_needs_no_folder() {
    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg("--list-extensions")
        .assert()
        .success()
        .stdout(predicate::str::contains("png"))
        .stdout(predicate::str::contains("exr"));
}

#[test]
fn test_compacts_gapped_sequence_with_report() {
    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--report", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("shot_003.png>shot_002.png"))
        .stdout(predicate::str::contains("shot_007.png>shot_003.png"))
        .stdout(predicate::str::contains("shot_001.png>").not());

    assert_eq!(
        listing(dir.path()),
        names(&["shot_001.png", "shot_002.png", "shot_003.png"])
    );

    // Contents rode along with the renames.
    assert_eq!(
        std::fs::read(dir.path().join("shot_002.png")).unwrap(),
        b"shot_003.png"
    );
}

#[test]
fn test_report_off_by_default() {
    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(">").not());
}

#[test]
fn test_preview_reports_without_touching_files() {
    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());
    let before = listing(dir.path());

    // Preview implies the report even without --report.
    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--preview", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("shot_003.png>shot_002.png"))
        .stdout(predicate::str::contains("shot_007.png>shot_003.png"));

    assert_eq!(listing(dir.path()), before);
}

#[test]
fn test_contiguous_sequence_is_untouched() {
    let dir = tempdir().unwrap();
    for name in ["shot_001.png", "shot_002.png", "shot_003.png"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }
    let before = listing(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--report", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(">").not());

    assert_eq!(listing(dir.path()), before);
}

#[test]
fn test_second_run_is_a_noop() {
    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();

    let after_first = listing(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--report", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(">").not());

    assert_eq!(listing(dir.path()), after_first);
}

#[test]
fn test_nonexistent_directory() {
    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg("/nonexistent/path")
        .assert()
        .code(3) // ExitCode::DirectoryNotFound
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    std::fs::write(&file_path, "content").unwrap();

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(file_path.to_str().unwrap())
        .assert()
        .code(3) // ExitCode::DirectoryNotFound (NotADirectory maps to same code)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_ambiguous_frames_leave_directory_unchanged() {
    let dir = tempdir().unwrap();
    // Same sequence, same frame number, inconsistent padding.
    std::fs::write(dir.path().join("shot_001.png"), b"x").unwrap();
    std::fs::write(dir.path().join("shot_1.png"), b"x").unwrap();
    let before = listing(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .code(4) // ExitCode::AmbiguousSequence
        .stderr(predicate::str::contains("frame number 1"));

    assert_eq!(listing(dir.path()), before);
}

#[test]
fn test_name_collision_leaves_directory_unchanged() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("shot_01.png"), b"x").unwrap();
    std::fs::write(dir.path().join("shot_03.png"), b"x").unwrap();
    // A subdirectory squats on the name the plan would assign.
    std::fs::create_dir(dir.path().join("shot_02.png")).unwrap();
    let before = listing(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .code(5) // ExitCode::NameCollision
        .stderr(predicate::str::contains("shot_02.png"));

    assert_eq!(listing(dir.path()), before);
}

#[cfg(unix)]
#[test]
fn test_readonly_directory_fails_before_any_rename() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());
    let before = listing(dir.path());

    // Read-only directory: listing works, but the staging folder cannot
    // be created.
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to test in that case.
    if std::fs::create_dir(dir.path().join("probe")).is_ok() {
        std::fs::remove_dir(dir.path().join("probe")).unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--report", dir.path().to_str().unwrap()])
        .assert()
        .code(6) // ExitCode::StagingFolder
        .stdout(predicate::str::contains(">").not())
        .stderr(predicate::str::contains("staging folder"));

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(listing(dir.path()), before);
}

#[test]
fn test_default_filter_skips_unknown_extensions() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("log_1.txt"), b"x").unwrap();
    std::fs::write(dir.path().join("log_5.txt"), b"x").unwrap();
    let before = listing(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();

    assert_eq!(listing(dir.path()), before);
}

#[test]
fn test_add_extension_flag() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("log_1.txt"), b"x").unwrap();
    std::fs::write(dir.path().join("log_5.txt"), b"x").unwrap();

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["-e", "TXT", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(listing(dir.path()), names(&["log_1.txt", "log_2.txt"]));
}

#[test]
fn test_all_images_flag() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("data_2.bin"), b"x").unwrap();
    std::fs::write(dir.path().join("data_9.bin"), b"x").unwrap();

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--all-images", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(listing(dir.path()), names(&["data_2.bin", "data_3.bin"]));
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    create_gapped_sequence(dir.path());

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--verbose", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found sequence"));
}

#[test]
fn test_multiple_sequences_in_one_folder() {
    let dir = tempdir().unwrap();
    for name in ["a_1.png", "a_4.png", "b_2.tga", "b_8.tga", "readme.txt"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    Command::cargo_bin("seqcompact")
        .unwrap()
        .args(["--report", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("a_4.png>a_2.png"))
        .stdout(predicate::str::contains("b_8.tga>b_3.tga"));

    assert_eq!(
        listing(dir.path()),
        names(&["a_1.png", "a_2.png", "b_2.tga", "b_3.tga", "readme.txt"])
    );
}
