use assert_cmd::Command;
use predicates::prelude::*;

fn runcmd() -> Command {
    let mut cmd = Command::cargo_bin("runcmd").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_exits_zero() {
    runcmd().arg("--help").assert().success();
}

#[test]
fn no_args_shows_help() {
    runcmd().assert().failure();
}

#[test]
fn run_requires_a_command() {
    runcmd().args(["run", "--"]).assert().failure();
}

#[test]
fn run_passes_streams_and_exit_code_through() {
    runcmd()
        .args(["run", "--", "sh", "-c", "echo out; echo err >&2; exit 4"])
        .assert()
        .code(4)
        .stdout("out\n")
        .stderr("err\n");
}

#[test]
fn run_json_reports_result() {
    let assert = runcmd()
        .args(["--json", "run", "--", "sh", "-c", "printf hi; printf no >&2; exit 2"])
        .assert()
        .code(2);

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["stdout"], "hi");
    assert_eq!(value["stderr"], "no");
    assert_eq!(value["exit_code"], 2);
    assert_eq!(value["ok"], false);
}

#[test]
fn run_missing_program_exits_one() {
    runcmd()
        .args(["run", "--", "definitely-missing-runcmd-tool"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "error: failed to spawn definitely-missing-runcmd-tool: ",
        ));
}

#[test]
fn script_success_prints_stdout() {
    runcmd()
        .args(["script", "--", "sh", "-c", "echo hello; echo quiet >&2"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn script_json_wraps_stdout() {
    runcmd()
        .args(["--json", "script", "--", "sh", "-c", "printf hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""stdout": "hello""#));
}

#[cfg(unix)]
#[test]
fn script_failure_prints_default_line_and_exits_with_code() {
    let tmp = tempfile::tempdir().unwrap();
    let foo = tmp.path().join("foo");
    std::os::unix::fs::symlink("/bin/sh", &foo).unwrap();

    runcmd()
        .arg("script")
        .arg("--")
        .arg(&foo)
        .args(["-c", "echo ignored; echo boom >&2; exit 3"])
        .assert()
        .code(3)
        .stdout("")
        .stderr("[foo] (exit code: 3) stderr-> boom\n");
}

#[test]
fn script_failure_falls_back_to_stdout() {
    runcmd()
        .args(["script", "--", "sh", "-c", "echo only-stdout; exit 6"])
        .assert()
        .code(6)
        .stderr("[sh] (exit code: 6) stderr-> only-stdout\n");
}

#[test]
fn script_missing_program_exits_one() {
    runcmd()
        .args(["script", "--", "/nonexistent/dir/definitely-missing-runcmd-tool"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "[definitely-missing-runcmd-tool] (exit code: 1) stderr-> failed to spawn /nonexistent/dir/definitely-missing-runcmd-tool: ",
        ));
}
