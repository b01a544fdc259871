use std::io::Write;

use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("mimic-insight").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn filter_command_prints_surviving_leaf_paths() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"data": {{"name": "root", "children": [
            {{"name": "A", "children": [{{"name": "x", "value": 10}}, {{"name": "y", "value": 2}}]}},
            {{"name": "B", "children": [{{"name": "z", "value": 1}}]}}
        ]}}}}"#
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mimic-insight").expect("binary exists");
    cmd.env_remove("MIMIC_API_URL")
        .arg("filter")
        .arg(file.path())
        .args(["--min-count", "5", "--format", "paths"])
        .assert()
        .success()
        .stdout("root > A > x\t10\n");
}

#[test]
fn filter_command_rejects_missing_file() {
    let mut cmd = Command::cargo_bin("mimic-insight").expect("binary exists");
    cmd.env_remove("MIMIC_API_URL")
        .args(["filter", "/definitely/not/here.json"])
        .assert()
        .failure();
}
