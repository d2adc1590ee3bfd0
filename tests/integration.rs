// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

fn cli() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("tts-scaffold").unwrap()
}

#[test]
fn builds_tts_core_in_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("done"));

    let root = dir.path().join("tts_core");
    let readme = fs::read_to_string(root.join("README.md")).unwrap();

    assert!(readme.starts_with("# tts_core\n"));
    assert!(readme.contains("## Detailed File Tree"));
    assert_eq!(
        fs::read_to_string(root.join("scripts/run_tts_pipeline.sh")).unwrap(),
        "#!/usr/bin/env bash\n# run_tts_pipeline.sh\n# Shell script placeholder.\necho 'Running script...'\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("docs/architecture/tts_system_overview.mmd")).unwrap(),
        "%% Mermaid diagram for tts_system_overview.mmd\ngraph LR;\nA-->B;\n"
    );
    assert!(root.join("test_env/audio_variations/.gitkeep").is_file());
}

#[test]
fn root_flag_redirects_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("elsewhere");

    cli().arg("--root").arg(&root).assert().success();

    assert!(root.join("Makefile").is_file());
    assert!(!dir.path().join("tts_core").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("preview");

    cli()
        .arg("--dry-run")
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview"))
        .stdout(predicate::str::contains("uz_feature_extractor.py"));

    assert!(!root.exists());
}

#[test]
fn builds_a_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let layout = dir.path().join("layout.toml");
    fs::write(
        &layout,
        r###"
root = "ignored"
directories = ["a/b"]

[files]
"README.md" = ["# demo", "two lines"]

[contents]
"a/b" = ["x.yaml"]
"###,
    )
    .unwrap();
    let root = dir.path().join("demo");

    cli()
        .arg("--layout")
        .arg(&layout)
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# demo\ntwo lines\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("a/b/x.yaml")).unwrap(),
        "# x.yaml\n# YAML configuration file.\n"
    );
}

#[test]
fn invalid_layout_fails_without_touching_the_root() {
    let dir = tempfile::tempdir().unwrap();
    let layout = dir.path().join("layout.toml");
    fs::write(&layout, "root = \"out\"\ndirectories = [\"x\", \"x\"]\n").unwrap();
    let root = dir.path().join("out");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("keep.txt"), "still here").unwrap();

    cli()
        .arg("--layout")
        .arg(&layout)
        .arg("--root")
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared more than once"));

    assert!(root.join("keep.txt").is_file());
}

#[test]
fn missing_layout_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .arg("--layout")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure();
}
