use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Helper to get the qrom binary
fn qrom_cmd() -> Command {
    Command::cargo_bin("qrom").unwrap()
}

/// Build a minimizer-style artifact: 11 header lines, gate body, trailer.
fn exorcised_artifact(body: &[&str]) -> String {
    let mut lines: Vec<String> = (0..11).map(|i| format!("# header {i}")).collect();
    lines.extend(body.iter().map(|s| s.to_string()));
    lines.push(".e".to_string());
    lines.join("\n")
}

#[test]
fn test_help_command() {
    qrom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("qROM Resource Estimator"));
}

#[test]
fn test_version_command() {
    qrom_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qrom"));
}

#[test]
fn test_encode_explicit_addresses() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("qrom.pla");

    qrom_cmd()
        .arg("encode")
        .arg("-n")
        .arg("3")
        .arg("-o")
        .arg(&output)
        .arg("0")
        .arg("5")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 ones"));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, ".i 3\n.o 1\n.type esop\n000 1\n101 1\n110 1\n.e\n");
}

#[test]
fn test_encode_rejects_out_of_range_address() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("qrom.pla");

    qrom_cmd()
        .arg("encode")
        .arg("-n")
        .arg("3")
        .arg("-o")
        .arg(&output)
        .arg("8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit"));
}

#[test]
fn test_encode_random_is_seed_deterministic() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.pla");
    let second = dir.path().join("b.pla");

    for output in [&first, &second] {
        qrom_cmd()
            .arg("encode")
            .arg("-n")
            .arg("6")
            .arg("-o")
            .arg(output)
            .arg("--random")
            .arg("16")
            .arg("--seed")
            .arg("42")
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_estimate_gate_list() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("qrom.exorcised");
    fs::write(&file, exorcised_artifact(&["11111 1"; 6])).unwrap();

    qrom_cmd()
        .arg("estimate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Width (qubits):  10"))
        .stdout(predicate::str::contains("Depth:           480"))
        .stdout(predicate::str::contains("T-count:         240"))
        .stdout(predicate::str::contains("5 controls: 6"));
}

#[test]
fn test_estimate_rejects_truncated_artifact() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("qrom.exorcised");
    fs::write(&file, "too\nshort\n").unwrap();

    qrom_cmd()
        .arg("estimate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed gate list"));
}

#[test]
fn test_estimate_rejects_empty_gate_body() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("qrom.exorcised");
    fs::write(&file, exorcised_artifact(&[])).unwrap();

    qrom_cmd()
        .arg("estimate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no gates"));
}

#[test]
fn test_guess_table() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("guessed.csv");

    qrom_cmd()
        .arg("guess")
        .arg("--n-min")
        .arg("5")
        .arg("--n-max")
        .arg("6")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "n,q,width,depth,tc,td,h,cnot");
    // n=5, q=4: width 2n, everything else 2^q times the n-control formulas.
    assert_eq!(lines[1], "5,4,10,1280,640,192,224,1280");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_guess_rejects_small_n() {
    let dir = tempdir().unwrap();

    qrom_cmd()
        .arg("guess")
        .arg("--n-min")
        .arg("3")
        .arg("-o")
        .arg(dir.path().join("guessed.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4"));
}

#[cfg(unix)]
fn write_fake_abc(dir: &std::path::Path, artifact: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("abc");
    fs::write(&script, format!("#!/bin/sh\ncat <<'EOF'\n{artifact}\nEOF\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[cfg(unix)]
#[test]
fn test_sweep_with_stub_minimizer() {
    let dir = tempdir().unwrap();
    let abc = write_fake_abc(dir.path(), &exorcised_artifact(&["1111 1", "1111 1"]));
    let output = dir.path().join("exorcised.csv");

    qrom_cmd()
        .arg("sweep")
        .arg("--n-min")
        .arg("4")
        .arg("--n-max")
        .arg("4")
        .arg("--trials")
        .arg("2")
        .arg("--abc")
        .arg(&abc)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 rows"));

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "n,q,width,depth,tc,td,h,cnot");
    // Tally {4: 2} over 4 control bits: 3 ancillas, width 8.
    assert_eq!(lines[1], "4,3,8,104,56,16,20,112");
    assert_eq!(lines[2], lines[1]);
}

#[cfg(unix)]
#[test]
fn test_sweep_records_failures() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let abc = dir.path().join("abc");
    fs::write(&abc, "#!/bin/sh\nexit 1\n").unwrap();
    fs::set_permissions(&abc, fs::Permissions::from_mode(0o755)).unwrap();
    let output = dir.path().join("exorcised.csv");

    qrom_cmd()
        .arg("sweep")
        .arg("--n-min")
        .arg("4")
        .arg("--n-max")
        .arg("4")
        .arg("--trials")
        .arg("1")
        .arg("--abc")
        .arg(&abc)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("trial failed"));

    // The failed trial still leaves an explicit marker row.
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.lines().any(|l| l.starts_with("4,3,FAILED")));
}
