use crate::common::command::{compare_versions, sources_dir, write_versions};
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
fn report_long_lines_as_chunks(sources_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let head = "h".repeat(80);
    let old = format!("{head}{}\n", "t".repeat(80));
    let new = format!("{head}{}\n", "u".repeat(80));
    write_versions(sources_dir.path(), &old, &new);

    compare_versions(sources_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}  # DELETED LINE",
            "t".repeat(80)
        )))
        .stdout(predicate::str::contains(format!("{}  # NEW LINE", "u".repeat(80))))
        .stdout(predicate::str::contains("unchanged: 1\nadded: 1\nremoved: 1\n"));

    Ok(())
}

#[rstest]
fn line_of_81_characters_becomes_two_units(
    sources_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = format!("{}\n", "q".repeat(81));
    write_versions(sources_dir.path(), &old, "");

    compare_versions(sources_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}  # DELETED LINE\nq  # DELETED LINE\n",
            "q".repeat(80)
        )))
        .stdout(predicate::str::contains("removed: 2\n"));

    Ok(())
}

#[rstest]
#[case("lcs", "unchanged: 2\nadded: 0\nremoved: 0\n---")]
#[case("positional", "unchanged: 2\nadded: 0\nremoved: 0\nmodified: 0\n---")]
fn trailing_whitespace_at_chunk_boundary_is_ignored(
    sources_dir: TempDir,
    #[case] policy: &str,
    #[case] footer: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = "w".repeat(78);
    let old = format!("{body}    \nlast\n");
    let new = format!("{body}\nlast\n");
    write_versions(sources_dir.path(), &old, &new);

    compare_versions(sources_dir.path(), &["--policy", policy])
        .assert()
        .success()
        .stdout(predicate::str::contains("# DELETED LINE").not())
        .stdout(predicate::str::contains("# NEW LINE").not())
        .stdout(predicate::str::contains(footer));

    Ok(())
}
