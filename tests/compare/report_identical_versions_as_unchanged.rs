use crate::common::command::{compare_versions, sources_dir, write_versions};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
#[case("lcs", "unchanged: {n}\nadded: 0\nremoved: 0\n---")]
#[case("positional", "unchanged: {n}\nadded: 0\nremoved: 0\nmodified: 0\n---")]
fn report_identical_versions_as_unchanged(
    sources_dir: TempDir,
    #[case] policy: &str,
    #[case] footer: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = Words(3..12).fake::<Vec<String>>();
    let content = words.join("\n");
    write_versions(sources_dir.path(), &content, &content);

    let expected_footer = footer.replace("{n}", &words.len().to_string());
    compare_versions(sources_dir.path(), &["--policy", policy])
        .assert()
        .success()
        .stdout(predicate::str::contains("# NEW LINE").not())
        .stdout(predicate::str::contains("# DELETED LINE").not())
        .stdout(predicate::str::contains(expected_footer));

    Ok(())
}

#[rstest]
fn repeated_runs_print_identical_reports(
    sources_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(sources_dir.path(), "a\nb\nc\nd\n", "b\na\nd\ne\n");

    let first = compare_versions(sources_dir.path(), &[]).assert().success();
    let second = compare_versions(sources_dir.path(), &[]).assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);

    Ok(())
}

#[rstest]
#[case("", "x\n", "unchanged: 0\nadded: 1\nremoved: 0\n")]
#[case("x\n", "", "unchanged: 0\nadded: 0\nremoved: 1\n")]
#[case("x\n", "x\n", "unchanged: 1\nadded: 0\nremoved: 0\n")]
#[case("", "", "unchanged: 0\nadded: 0\nremoved: 0\n")]
fn empty_versions_are_valid_input(
    sources_dir: TempDir,
    #[case] old: &str,
    #[case] new: &str,
    #[case] counts: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(sources_dir.path(), old, new);

    compare_versions(sources_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(counts));

    Ok(())
}
