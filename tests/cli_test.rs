//! Integration tests for the libscout binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// A command with no inherited libscout or CI settings.
fn libscout(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("libscout"));
    cmd.current_dir(project)
        .env_remove("LIBSCOUT_CONFIG")
        .env_remove("LIBSCOUT_EXTRA_PATH")
        .env_remove("LIBSCOUT_PROMPT_LIBRARY")
        .env_remove("LIBSCOUT_PROMPT_INSTALLER")
        .env_remove("LIBSCOUT_PROMPT_INSTALL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for var in CI_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Lay out a library and header under `root/<name>` and return a provider
/// entry pointing at them.
fn installed_provider(root: &Path, name: &str, real: &str) -> String {
    let lib = root.join(name).join("lib");
    let include = root.join(name).join("include");
    fs::create_dir_all(&lib).unwrap();
    fs::create_dir_all(&include).unwrap();
    fs::write(lib.join(real), "").unwrap();
    fs::write(include.join("readline.h"), "").unwrap();
    #[cfg(unix)]
    std::os::unix::fs::symlink(real, lib.join("libreadline.dylib")).unwrap();
    format!(
        "  - name: {}\n    library_paths: {}\n    header_paths: {}\n",
        name,
        lib.display(),
        include.display()
    )
}

fn write_project(providers: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let body = providers.replace("{root}", &temp.path().display().to_string());
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("version: {{ min: 5 }}\nproviders:\n{}", body),
    )
    .unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find a usable copy"))
        .stdout(predicate::str::contains("advise"))
        .stdout(predicate::str::contains("probe"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("libscout"));
    Ok(())
}

#[test]
fn cli_rejects_bad_accept_range() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .args(["advise", "--accept", "9..2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min above max"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn advise_finds_installed_library() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let provider = installed_provider(temp.path(), "local", "libreadline.5.2.dylib");
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("version: {{ min: 5 }}\nproviders:\n{}", provider),
    )?;

    libscout(temp.path())
        .arg("advise")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHASE 1: Looking for readline library."))
        .stdout(predicate::str::contains("I will use local to integrate library."))
        .stdout(predicate::str::contains("PHASE 2: Generating patch"))
        .stdout(predicate::str::contains("libreadline.5.2.dylib"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn advise_is_the_default_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let provider = installed_provider(temp.path(), "local", "libreadline.6.0.dylib");
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("providers:\n{}", provider),
    )?;

    libscout(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PHASE 2"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn advise_reads_choice_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let a = installed_provider(temp.path(), "a", "libreadline.5.0.dylib");
    let b = installed_provider(temp.path(), "b", "libreadline.6.1.dylib");
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("providers:\n{}{}", a, b),
    )?;

    libscout(temp.path())
        .arg("advise")
        .write_stdin("abc\n7\n2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Multiple incarnations of the library were found.",
        ))
        .stderr(predicate::str::contains("   (2) Use "))
        .stdout(predicate::str::contains("I will use b to integrate library."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn advise_aborts_when_stdin_closes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let a = installed_provider(temp.path(), "a", "libreadline.5.0.dylib");
    let b = installed_provider(temp.path(), "b", "libreadline.6.1.dylib");
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("providers:\n{}{}", a, b),
    )?;

    libscout(temp.path())
        .arg("advise")
        .write_stdin("nope\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection aborted"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn non_interactive_choice_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let a = installed_provider(temp.path(), "a", "libreadline.5.0.dylib");
    let b = installed_provider(temp.path(), "b", "libreadline.6.1.dylib");
    fs::write(
        temp.path().join(".libscout.yml"),
        format!("providers:\n{}{}", a, b),
    )?;

    libscout(temp.path())
        .args(["advise", "--non-interactive"])
        .env("LIBSCOUT_PROMPT_LIBRARY", "2")
        .assert()
        .success()
        .stdout(predicate::str::contains("I will use b to integrate library."));

    libscout(temp.path())
        .args(["advise", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I will use a to integrate library."));
    Ok(())
}

#[test]
fn advise_reports_missing_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = write_project(
        "  - name: fink\n    commands: libscout-no-such-tool:sh\n    install_command: fink install readline5\n    library_paths: {root}/nowhere\n  - name: system\n    library_paths: {root}/nowhere\n",
    );

    libscout(temp.path())
        .arg("advise")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Cannot find any proper version of readline library.",
        ))
        .stderr(predicate::str::contains("fink: missing libscout-no-such-tool"))
        .stderr(predicate::str::contains("system: no install command configured"));
    Ok(())
}

#[test]
fn advise_dry_run_shows_install_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = write_project(
        "  - name: script\n    install_command: make install\n    library_paths: {root}/lib\n",
    );

    libscout(temp.path())
        .args(["advise", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The only available method to install readline is to use script.",
        ))
        .stdout(predicate::str::contains("Would run: make install"));
    Ok(())
}

#[test]
fn advise_installs_with_yes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = write_project(
        "  - name: script\n    install_command: mkdir -p {root}/lib {root}/include && touch {root}/lib/libreadline.7.0.dylib {root}/include/readline.h\n    library_file: libreadline.7.0.dylib\n    library_paths: {root}/lib\n    header_paths: {root}/include\n",
    );

    libscout(temp.path())
        .args(["advise", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readline installed by script"))
        .stdout(predicate::str::contains("PHASE 2: Generating patch"));
    Ok(())
}

#[test]
fn probe_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = write_project(
        "  - name: script\n    install_command: make install\n  - name: system\n",
    );

    let output = libscout(temp.path()).args(["probe", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report[0]["provider"]["name"], "script");
    assert_eq!(report[0]["status"], "installable");
    assert_eq!(report[1]["status"], "unavailable");
    Ok(())
}

#[test]
fn probe_prints_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = write_project("  - name: system\n");

    libscout(temp.path())
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider"))
        .stdout(predicate::str::contains("system"));
    Ok(())
}

#[test]
fn explicit_config_flag_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("scout.yml");
    fs::write(&config, "library: ncurses\nproviders:\n  - name: system\n")?;

    libscout(temp.path())
        .args(["probe", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("ncurses providers"));
    Ok(())
}

#[test]
fn missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .args(["probe", "--config", "does-not-exist.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".libscout.yml"), "providers: []\n")?;

    libscout(temp.path())
        .arg("advise")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("At least one provider"));
    Ok(())
}

#[test]
fn builtin_config_used_without_project_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    libscout(temp.path())
        .args(["probe", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fink\""))
        .stdout(predicate::str::contains("\"shell script\""));
    Ok(())
}
