use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn prints_the_expanded_table() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cronexpand"));
    cmd.arg("*/15 0 1,15 * 1-5 /usr/bin/find");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("minute        0 15 30 45"))
        .stdout(predicate::str::contains("day of week   1 2 3 4 5"))
        .stdout(predicate::str::contains("command       /usr/bin/find"));
}

#[test]
fn fails_with_field_diagnostics_on_bad_token() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cronexpand"));
    cmd.arg("foo 0 1 1 1 /usr/bin/find");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("minute field"))
        .stderr(predicate::str::contains("`foo`"));
}

#[test]
fn fails_on_blank_expression() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cronexpand"));
    cmd.arg("   ");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("empty expression"));
}
