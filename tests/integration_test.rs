use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const RULES: &str = "\
# category:langcode:trigger:dependency
tr:zh-hans::language-pack-zh-hans
im:zh-hans::fcitx-sunpinyin
im:zh-hans::ibus-pinyin
spell:zh-hans:libreoffice:hunspell-zh-cn
spell::libreoffice:hunspell-
spell:de:libreoffice:hunspell-de-de
spell:de:libreoffice:hunspell-de-de-frami
tr::firefox:firefox-l10n-
";

const SNAPSHOT: &str = r#"{
    "installed": ["libreoffice", "ibus-pinyin"],
    "installable": [
        "language-pack-zh-hans",
        "fcitx-sunpinyin",
        "hunspell-zh-cn",
        "hunspell-zh-hans",
        "hunspell-de-de",
        "hunspell-de-de-frami",
        "firefox-l10n-zh-cn"
    ]
}"#;

fn setup(rules: &str) -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pkg_depends"), rules).unwrap();
    std::fs::write(dir.path().join("state.json"), SNAPSHOT).unwrap();
    dir
}

fn langsupport(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("langsupport"));
    cmd.env_remove("XDG_CURRENT_DESKTOP")
        .env_remove("LANGSUPPORT_RULES")
        .env_remove("LANGSUPPORT_SNAPSHOT")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("LANG")
        .arg("--rules")
        .arg(dir.join("pkg_depends"))
        .arg("--snapshot")
        .arg(dir.join("state.json"));
    cmd
}

#[test]
fn test_package_resolves_literals_and_patterns() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .args(["package", "libreoffice", "--locale", "zh_CN"])
        .assert()
        .success()
        .stdout("hunspell-zh-cn\nhunspell-zh-hans\n");
}

#[test]
fn test_package_excludes_conflicting_dictionaries() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .args(["package", "libreoffice", "--locale", "de_DE.UTF-8"])
        .assert()
        .success()
        .stdout("hunspell-de-de-frami\n");
}

#[test]
fn test_package_unknown_trigger_is_empty() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .args(["package", "gimp", "--locale", "zh_CN"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_locale_skips_triggers_not_installed() {
    let dir = setup(RULES);

    // firefox is not installed, so firefox-l10n-zh-cn is not offered
    langsupport(dir.path())
        .args(["locale", "zh_CN.UTF-8"])
        .assert()
        .success()
        .stdout("fcitx-sunpinyin\nhunspell-zh-cn\nhunspell-zh-hans\nlanguage-pack-zh-hans\n");
}

#[test]
fn test_locale_include_installed() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .args(["locale", "zh_CN.UTF-8", "--include-installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ibus-pinyin\n"));
}

#[test]
fn test_locale_on_gnome_drops_fcitx() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .env("XDG_CURRENT_DESKTOP", "ubuntu:GNOME")
        .args(["locale", "zh_CN.UTF-8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fcitx").not());
}

#[test]
fn test_locale_from_environment_as_json() {
    let dir = setup(RULES);

    let output = langsupport(dir.path())
        .env("LANG", "zh_CN.UTF-8")
        .args(["--json", "package", "libreoffice"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let packages: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(packages, vec!["hunspell-zh-cn", "hunspell-zh-hans"]);
}

#[test]
fn test_missing_locale_fails() {
    let dir = setup(RULES);

    langsupport(dir.path())
        .args(["locale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--locale"));
}

#[test]
fn test_malformed_rules_fail() {
    let dir = setup("spell:de:libreoffice:hunspell-de\nspell:de:libreoffice\n");

    langsupport(dir.path())
        .args(["package", "libreoffice", "--locale", "de_DE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: expected 4 fields"));
}

#[test]
fn test_missing_rules_file_fails() {
    let dir = tempdir().unwrap();

    langsupport(dir.path())
        .arg("rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read rules file"));
}

#[test]
fn test_rules_lists_index() {
    let dir = setup("spell::libreoffice:hunspell-\nspell:de:libreoffice:hunspell-de-de-frami\n");

    langsupport(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout("libreoffice\n  * spell: hunspell-\n  de spell: hunspell-de-de-frami\n");
}
