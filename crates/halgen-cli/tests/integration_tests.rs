//! Integration tests for the halgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn halgen() -> Command {
    Command::cargo_bin("halgen").unwrap()
}

// ── Global surface ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    halgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("halgen"))
        .stdout(predicate::str::contains("scaffolding"));
}

#[test]
fn test_version_flag() {
    halgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    halgen()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--brief"));
}

// ── new: C++ scaffolds ────────────────────────────────────────────────────────

#[test]
fn test_new_scaffolds_matched_cpp_pair() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "new",
            "Flash",
            "--type",
            "MEM",
            "--brief",
            "External flash driver",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("mem_flash.hpp"))
        .stdout(predicate::str::contains("mem_flash.cpp"));

    let header = fs::read_to_string(temp.path().join("mem_flash.hpp")).unwrap();
    assert!(header.contains("class mem_flash : public IHAL_MEM"));
    assert!(header.contains("@brief External flash driver"));

    let source = fs::read_to_string(temp.path().join("mem_flash.cpp")).unwrap();
    assert!(source.contains("#include \"mem_flash.hpp\""));
    assert!(source.contains("size_t mem_flash::getSize();"));
}

#[test]
fn test_new_output_dir_is_created() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "new",
            "Uart",
            "--type",
            "COM",
            "--brief",
            "UART transport layer",
            "--output",
            "src/hal",
        ])
        .assert()
        .success();

    assert!(temp.path().join("src/hal/com_uart.hpp").exists());
    assert!(temp.path().join("src/hal/com_uart.cpp").exists());
}

#[test]
fn test_new_unknown_type_falls_back_to_standalone_class() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args(["new", "Widget", "--type", "XYZ", "--brief", "A widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standalone class"));

    // Unrecognised tags leave the name untouched: no prefix, no lowercasing.
    let header = fs::read_to_string(temp.path().join("Widget.hpp")).unwrap();
    assert!(header.contains("class Widget"));
    assert!(!header.contains("public IHAL"));
}

#[test]
fn test_new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "new",
            "Flash",
            "--type",
            "MEM",
            "--brief",
            "External flash driver",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("mem_flash.hpp").exists());
    assert!(!temp.path().join("mem_flash.cpp").exists());
}

#[test]
fn test_new_force_overwrites_existing_pair() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("mem_flash.hpp"), "// stale").unwrap();
    fs::write(temp.path().join("mem_flash.cpp"), "// stale").unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "new",
            "Flash",
            "--type",
            "MEM",
            "--brief",
            "External flash driver",
            "--force",
        ])
        .assert()
        .success();

    let header = fs::read_to_string(temp.path().join("mem_flash.hpp")).unwrap();
    assert!(header.contains("class mem_flash : public IHAL_MEM"));
    assert!(!header.contains("stale"));
}

// ── new: C scaffolds ──────────────────────────────────────────────────────────

#[test]
fn test_new_c_pair_with_author_stamp() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "new",
            "io_gpio",
            "--lang",
            "c",
            "--brief",
            "GPIO register access",
            "--author",
            "R. Hamilton",
        ])
        .assert()
        .success();

    let header = fs::read_to_string(temp.path().join("io_gpio.h")).unwrap();
    assert!(header.contains("@file       io_gpio.h"));
    assert!(header.contains("R. Hamilton"));
    assert!(header.contains("#ifndef IO_GPIO_H"));

    let source = fs::read_to_string(temp.path().join("io_gpio.c")).unwrap();
    assert!(source.contains("INTERFACE FUNCTION DEFINITIONS"));
    assert!(!source.contains("#ifndef IO_GPIO_H"));
}

// ── config integration ────────────────────────────────────────────────────────

#[test]
fn test_config_file_supplies_default_lang() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("halgen.toml"), "[defaults]\nlang = \"c\"\n").unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "--config",
            "halgen.toml",
            "new",
            "io_led",
            "--brief",
            "Status LED control",
        ])
        .assert()
        .success();

    assert!(temp.path().join("io_led.h").exists());
    assert!(temp.path().join("io_led.c").exists());
}

#[test]
fn test_config_get_reads_explicit_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("halgen.toml"),
        "[defaults]\nauthor = \"R. Hamilton\"\n",
    )
    .unwrap();

    halgen()
        .current_dir(temp.path())
        .args(["--config", "halgen.toml", "config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R. Hamilton"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_command() {
    halgen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Component types:"))
        .stdout(predicate::str::contains("MEM"))
        .stdout(predicate::str::contains("IHAL_COM"));
}

#[test]
fn test_list_json_format() {
    halgen()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"MEM\""))
        .stdout(predicate::str::contains("IHAL_MEM"));
}

#[test]
fn test_list_csv_format() {
    halgen()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag,interface,operations"))
        .stdout(predicate::str::contains("PROC,IProcess"));
}

// ── verbosity ─────────────────────────────────────────────────────────────────

#[test]
fn test_quiet_flag_suppresses_stdout() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "-q",
            "new",
            "Gpio",
            "--type",
            "IO",
            "--brief",
            "GPIO abstraction",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // Quiet suppresses chatter, not work.
    assert!(temp.path().join("io_gpio.hpp").exists());
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let temp = TempDir::new().unwrap();

    halgen()
        .current_dir(temp.path())
        .args([
            "-v",
            "new",
            "Flash",
            "--type",
            "MEM",
            "--brief",
            "External flash driver",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_shell_completions() {
    halgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
