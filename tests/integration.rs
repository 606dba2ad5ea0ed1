// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

fn cmd(cwd: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("next-skeleton").unwrap();
    cmd.current_dir(cwd).env("NO_COLOR", "1");
    cmd
}

#[test]
fn empty_input_creates_default_project() {
    let tmp = tempfile::tempdir().unwrap();
    let expected = tmp.path().join("next-finance-website");

    cmd(tmp.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Created directory: {}",
            expected.display()
        )))
        .stdout(predicate::str::contains(
            "Next.js project structure created successfully!",
        ))
        .stdout(predicate::str::contains("Project structure created at: "));

    assert!(expected.join("src/components/sections/booking-form.tsx").is_file());
    assert!(expected.join("public/images/placeholder.jpg").is_file());
}

#[test]
fn piped_path_is_used_as_base() {
    let tmp = tempfile::tempdir().unwrap();

    cmd(tmp.path())
        .write_stdin("my-site\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created file: my-site/src/app/layout.tsx",
        ));

    assert!(tmp.path().join("my-site/src/hooks/use-scroll-animation.ts").is_file());
}

#[test]
fn second_run_reports_no_creations() {
    let tmp = tempfile::tempdir().unwrap();

    cmd(tmp.path()).arg("site").assert().success();

    cmd(tmp.path())
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains(
            "Next.js project structure created successfully!",
        ));
}

#[test]
fn existing_app_directory_is_not_reported() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("site/src/app")).unwrap();

    cmd(tmp.path())
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory: site/src/app\n").not())
        .stdout(predicate::str::contains("Created file: site/src/app/page.tsx"))
        .stdout(predicate::str::contains("Created directory: site/src/components"));
}

#[test]
fn filesystem_error_aborts_run() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("blocker"), "").unwrap();

    cmd(tmp.path())
        .arg("blocker/site")
        .assert()
        .failure()
        .stdout(predicate::str::contains("created successfully").not());
}

#[test]
fn preview_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();

    cmd(tmp.path())
        .args(["--preview", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("website_overview.svg"))
        .stdout(predicate::str::contains("Created").not());

    assert!(!tmp.path().join("site").exists());
}

#[test]
fn final_line_echoes_normalized_absolute_path() {
    let tmp = tempfile::tempdir().unwrap();
    let cwd = tmp.path().canonicalize().unwrap();
    fs::create_dir(cwd.join("a")).unwrap();

    cmd(&cwd)
        .arg("a/../site")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "Project structure created at: {}\n",
            cwd.join("site").display()
        )));
}

#[test]
fn bare_invocation_prints_only_creation_lines_and_summary() {
    let tmp = tempfile::tempdir().unwrap();

    let output = cmd(tmp.path()).write_stdin("site\n").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 1 + 12 + 31 + 2);
    assert_eq!(lines[0], "Created directory: site");
    for line in &lines[..lines.len() - 2] {
        assert!(
            line.starts_with("Created directory: site") || line.starts_with("Created file: site/"),
            "unexpected line: {line}"
        );
    }
    assert_eq!(
        lines[lines.len() - 2],
        "Next.js project structure created successfully!"
    );
    assert!(lines[lines.len() - 1].starts_with("Project structure created at: "));
}

#[test]
fn closed_stdin_creates_nothing() {
    let tmp = tempfile::tempdir().unwrap();

    cmd(tmp.path())
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}
