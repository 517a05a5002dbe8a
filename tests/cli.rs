use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn corpus() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a> <a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, body) in pages {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

#[test]
fn no_arguments_is_a_usage_error() {
    Command::cargo_bin("pagerank")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let dir = corpus();
    Command::cargo_bin("pagerank")
        .unwrap()
        .arg(dir.path())
        .arg("other")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn prints_both_tables() {
    let dir = corpus();
    Command::cargo_bin("pagerank")
        .unwrap()
        .arg(dir.path())
        .args(["--seed", "3407"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::is_match(r"(?m)^  1\.html: 0\.\d{4}$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^  4\.html: 0\.\d{4}$").unwrap())
        .stdout(predicate::str::contains("Sampling PageRank Sum: 1.0000"))
        .stdout(predicate::str::contains("Iteration PageRank Sum: 1.0000"));
}

#[test]
fn unseeded_run() {
    let dir = corpus();
    Command::cargo_bin("pagerank")
        .unwrap()
        .arg(dir.path())
        .args(["--samples", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 200)",
        ))
        .stdout(predicate::str::contains("Sampling PageRank Sum: 1.0000"));
}

#[test]
fn missing_corpus() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("pagerank")
        .unwrap()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read corpus"));
}

#[test]
fn empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("pagerank")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pages"));
}
