use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn agreeing_label_pair_is_exact() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("suprema-resolve"));
    cmd.arg("check")
        .arg("00:17:FC:73:4A:B0")
        .arg("544426672")
        .assert()
        .success()
        .stdout(predicate::str::contains("agreement=exact"))
        .stdout(predicate::str::contains("model: XPass (Generation 1)"));
}

#[test]
fn disagreeing_pair_prefers_serial_evidence() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("suprema-resolve"));
    cmd.arg("check")
        .arg("00:17:FC:73:4A:B0")
        .arg("540278784")
        .assert()
        .success()
        .stdout(predicate::str::contains("agreement=serial_only"))
        .stdout(predicate::str::contains("model: BioStation (Generation 1)"));
}

#[test]
fn json_output_carries_both_match_lists() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("suprema-resolve"));
    cmd.arg("check")
        .arg("00:17:FC:6E:12:34")
        .arg("544150000")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"agreement\": \"most_specific\""))
        .stdout(predicate::str::contains("\"mac_matches\""))
        .stdout(predicate::str::contains("\"serial_matches\""));
}

#[test]
fn malformed_mac_is_a_usage_error() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("suprema-resolve"));
    cmd.arg("check")
        .arg("zz:zz")
        .arg("544426672")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid MAC address"));
}

#[test]
fn malformed_serial_is_a_usage_error() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("suprema-resolve"));
    cmd.arg("check")
        .arg("00:17:FC:73:4A:B0")
        .arg("not-a-number")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid serial number"));
}
