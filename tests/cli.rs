use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::collections::HashSet;
use std::path::Path;

fn wordlist_dedupe() -> Command {
    Command::cargo_bin("wordlist-dedupe").unwrap()
}

fn read_set(path: &Path) -> HashSet<String> {
    let content = std::fs::read_to_string(path).unwrap();
    if content.is_empty() {
        return HashSet::new();
    }
    content.split('\n').map(str::to_string).collect()
}

fn set_of(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scenario() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("lists/a.txt").write_str("cat\ndog\ncat\n").unwrap();
    temp.child("lists/b.txt").write_str("dog\nbird\n").unwrap();
    temp.child("lists/notes.md").write_str("fish\n").unwrap();
    temp
}

#[test]
fn requires_mode_and_input() {
    wordlist_dedupe().assert().failure();
    wordlist_dedupe().arg("dedupe").assert().failure();
}

#[test]
fn dedupe_directory_writes_one_file_per_wordlist() {
    let temp = scenario();
    let out = temp.child("out");

    wordlist_dedupe()
        .args(["dedupe", "-q"])
        .arg(temp.child("lists").path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(read_set(&out.child("a.txt").path()), set_of(&["cat", "dog"]));
    assert_eq!(read_set(&out.child("b.txt").path()), set_of(&["dog", "bird"]));
    out.child("notes.md").assert(predicate::path::missing());
}

#[test]
fn combine_directory_writes_union() {
    let temp = scenario();
    let out = temp.child("out");

    wordlist_dedupe()
        .args(["combine", "--sort", "-q"])
        .arg(temp.child("lists").path())
        .arg("--output_path")
        .arg(out.path())
        .assert()
        .success();

    out.child("combined_wordlist.txt").assert("bird\ncat\ndog");
}

#[test]
fn default_output_is_under_current_dir() {
    let temp = scenario();

    wordlist_dedupe()
        .current_dir(temp.path())
        .args(["dedupe", "-q", "lists/a.txt"])
        .assert()
        .success();

    assert_eq!(
        read_set(&temp.child("output/a.txt").path()),
        set_of(&["cat", "dog"])
    );
}

#[test]
fn binary_wordlist_does_not_fail() {
    let temp = TempDir::new().unwrap();
    let list = temp.child("leak.txt");
    list.write_binary(b"3 hunter2 \nadmin\n\xff\xfe\xc3\x28\nadmin \n").unwrap();
    let out = temp.child("out");

    wordlist_dedupe()
        .args(["dedupe", "-q"])
        .arg(list.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let words = read_set(&out.child("leak.txt").path());
    assert_eq!(words.len(), 3);
    assert!(words.contains("hunter2"));
    assert!(words.contains("admin"));
}

#[test]
fn combine_rejects_single_file() {
    let temp = scenario();
    let out = temp.child("out");

    wordlist_dedupe()
        .arg("combine")
        .arg(temp.child("lists/a.txt").path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));

    out.assert(predicate::path::missing());
}

#[test]
fn fail_on_missing_input() {
    let temp = TempDir::new().unwrap();

    wordlist_dedupe()
        .arg("dedupe")
        .arg(temp.child("nope.txt").path())
        .arg("-o")
        .arg(temp.child("out").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a file or directory"));
}
