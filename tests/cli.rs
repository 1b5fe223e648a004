use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

// Run inside a scratch directory with private config and data dirs
fn identok(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("identok").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_tokenizes_arguments() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["HTMLEditorKit", "TEST_CONSTANT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTMLEditorKit → HTML·Editor·Kit"))
        .stdout(predicate::str::contains("TEST_CONSTANT → TEST·CONSTANT"));
}

#[test]
fn test_requires_identifiers() {
    let home = tempdir().unwrap();

    identok(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identifiers specified"));
}

#[test]
fn test_json_output() {
    let home = tempdir().unwrap();

    let output = identok(&home)
        .args(["-o", "json", "areaG3FTriangle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["identifier"], "areaG3FTriangle");
    assert_eq!(
        json[0]["tokens"],
        serde_json::json!(["area", "G3F", "Triangle"])
    );
}

#[test]
fn test_reads_identifiers_from_file_and_stdin() {
    let home = tempdir().unwrap();
    let file = home.path().join("names.txt");
    fs::write(&file, "JPanel\n\n  normalCamelCase  \n").unwrap();

    identok(&home)
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("JPanel → J·Panel"))
        .stdout(predicate::str::contains("normalCamelCase → normal·Camel·Case"));

    identok(&home)
        .args(["-f", "-"])
        .write_stdin("file2string\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("file2string → file·2·string"));
}

#[test]
fn test_modes_and_naive() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["--aggressive", "readRedobuff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readRedobuff → read·Redo·buff"));

    identok(&home)
        .args(["--conservative", "readRedobuff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readRedobuff → read·Redobuff"));

    identok(&home)
        .args(["--naive", "HTMLEditor_kit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTMLEditor_kit → HTMLEditor·kit"));
}

#[test]
fn test_tagged_output() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["--tagged", "HTMLEditorQux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML [abbreviation]"))
        .stdout(predicate::str::contains("Editor [en]"))
        .stdout(predicate::str::contains("·Qux"));
}

#[test]
fn test_separators_override() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["-s", "-", "one-two_three"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one-two_three → one·two_three"));
}

#[test]
fn test_concatenate_prefixes() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["--concatenate-prefixes", "showSubMenu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showSubMenu → show·SubMenu"));
}

#[test]
fn test_local_config_file() {
    let home = tempdir().unwrap();
    fs::write(home.path().join(".identok.toml"), "mode = \"aggressive\"\n").unwrap();

    identok(&home)
        .arg("readRedobuff")
        .assert()
        .success()
        .stdout(predicate::str::contains("read·Redo·buff"));
}

#[test]
fn test_dict_build_info_and_use() {
    let home = tempdir().unwrap();
    let wordlist = home.path().join("jargon.txt");
    fs::write(&wordlist, "# project jargon\nfrob\nnicate\n").unwrap();

    identok(&home)
        .args(["dict", "build"])
        .arg(&wordlist)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary installed"));

    identok(&home)
        .args(["dict", "info", "jargon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 2"));

    identok(&home)
        .args(["dict", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jargon"));

    fs::write(home.path().join(".identok.toml"), "dictionary = \"jargon\"\n").unwrap();
    identok(&home)
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("frobnicate → frob·nicate"));
}

#[test]
fn test_dict_info_missing() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["dict", "info", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_completion() {
    let home = tempdir().unwrap();

    identok(&home)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identok"));
}
