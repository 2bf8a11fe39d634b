use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("page-to-alto 0.2.0\n");
}

// Convert subcommand tests

#[test]
fn convert_writes_alto_to_stdout() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.args(["convert", "tests/fixtures/simple.page.xml"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("<alto"))
        .stdout(predicates::str::contains("SCHEMAVERSION=\"4.2\""))
        .stdout(predicates::str::contains("CONTENT=\"Hello\""));
}

#[test]
fn convert_honors_alto_version() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.args([
        "convert",
        "tests/fixtures/simple.page.xml",
        "--alto-version",
        "2.0",
    ]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("ns-v2#"))
        .stdout(predicates::str::contains("SCHEMAVERSION").not());
}

#[test]
fn convert_rejects_unsupported_version() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.args([
        "convert",
        "tests/fixtures/simple.page.xml",
        "--alto-version",
        "5.0",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("not supported"));
}

#[test]
fn convert_rejects_missing_input() {
    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.args(["convert", "tests/fixtures/does-not-exist.xml"]);
    cmd.assert().failure();
}

#[test]
fn convert_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.alto.xml");

    let mut cmd = Command::cargo_bin("page-to-alto").unwrap();
    cmd.args(["convert", "tests/fixtures/simple.page.xml", "-o"]);
    cmd.arg(&out);
    cmd.assert().success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("<alto"));
    assert!(written.contains("CONTENT=\"world\""));
}
