use crate::common::command::{run_vdiff_command, sources_dir, write_versions};
use crate::common::file::write_bytes;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_missing_source(sources_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(sources_dir.path(), "a\n", "a\n");

    run_vdiff_command(sources_dir.path(), &["old.txt", "absent.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("source not found"))
        .stderr(predicate::str::contains("absent.txt"));

    Ok(())
}

#[rstest]
fn fail_on_undecodable_source(sources_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(sources_dir.path(), "a\n", "a\n");
    write_bytes(sources_dir.path().join("blob.bin"), &[0x00, 0xff, 0xfe, 0x0a]);

    run_vdiff_command(sources_dir.path(), &["blob.bin", "new.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid UTF-8"));

    Ok(())
}

#[rstest]
fn fail_without_both_paths(sources_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_vdiff_command(sources_dir.path(), &["old.txt"])
        .assert()
        .failure();

    Ok(())
}
