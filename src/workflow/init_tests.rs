use super::{run_init, InitStep};
use crate::config::{ScaffoldConfig, ScaffoldProfile};
use crate::error::ScaffoldError;
use crate::scaffold::{InstallCommand, ProjectPaths, MANIFEST_SCRIPTS, SCAFFOLD_DIRECTORIES};
use crate::templates;

fn config_with_script(profile: ScaffoldProfile, script: &str) -> ScaffoldConfig {
    let install_command = InstallCommand::from_words(vec![
        "sh".to_string(),
        "-c".to_string(),
        script.to_string(),
        "sh".to_string(),
    ])
    .expect("non-empty command");
    ScaffoldConfig {
        profile,
        install_command,
    }
}

fn recording_config(profile: ScaffoldProfile) -> ScaffoldConfig {
    config_with_script(profile, r#"echo "$@" >> install.log"#)
}

#[test]
fn missing_manifest_stops_before_any_write() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = recording_config(ScaffoldProfile::Full);

    let failure = run_init(dir.path(), &config).expect_err("no manifest");

    assert_eq!(failure.step, InitStep::UpdateManifest);
    assert!(matches!(failure.source, ScaffoldError::MissingManifest { .. }));
    let entries = std::fs::read_dir(dir.path()).expect("read root").count();
    assert_eq!(entries, 0, "nothing should be written");
}

#[cfg(unix)]
#[test]
fn full_run_scaffolds_project_and_installs_once() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = ProjectPaths::new(dir.path().to_path_buf());
    std::fs::write(paths.manifest_path(), "{}").expect("write manifest");

    let report =
        run_init(dir.path(), &recording_config(ScaffoldProfile::Full)).expect("init succeeds");

    for rel in SCAFFOLD_DIRECTORIES {
        assert!(dir.path().join(rel).is_dir(), "missing {rel}");
    }
    assert_eq!(report.created_dirs.len(), SCAFFOLD_DIRECTORIES.len());

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(paths.manifest_path()).expect("read manifest"),
    )
    .expect("parse manifest");
    for (name, command) in MANIFEST_SCRIPTS {
        assert_eq!(manifest["scripts"][name].as_str(), Some(command));
    }

    assert_eq!(
        std::fs::read_to_string(paths.cypress_config_path()).expect("read config"),
        templates::CYPRESS_CONFIG_JS
    );
    assert_eq!(
        std::fs::read_to_string(paths.workflow_path()).expect("read workflow"),
        templates::CYPRESS_WORKFLOW_FULL_YML
    );
    assert!(paths.demo_spec_path().is_file());
    assert!(paths.readme_path().is_file());

    let log = std::fs::read_to_string(dir.path().join("install.log")).expect("read install log");
    assert_eq!(
        log,
        "cypress mochawesome mochawesome-merge mochawesome-report-generator\n"
    );
}

#[cfg(unix)]
#[test]
fn failed_install_reports_exit_code_after_earlier_steps_ran() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = ProjectPaths::new(dir.path().to_path_buf());
    std::fs::write(paths.manifest_path(), "{}").expect("write manifest");

    let failure = run_init(dir.path(), &config_with_script(ScaffoldProfile::Full, "exit 1"))
        .expect_err("install fails");

    assert_eq!(failure.step, InitStep::InstallDependencies);
    assert!(matches!(
        failure.source,
        ScaffoldError::InstallFailed { code: Some(1) }
    ));
    // No rollback of completed steps.
    assert!(paths.cypress_config_path().is_file());
    assert!(dir.path().join("cypress/fixtures").is_dir());
}

#[cfg(unix)]
#[test]
fn directory_failure_skips_templates_and_install() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = ProjectPaths::new(dir.path().to_path_buf());
    std::fs::write(paths.manifest_path(), "{}").expect("write manifest");
    std::fs::write(dir.path().join("cypress"), "blocking file").expect("write blocker");

    let failure = run_init(dir.path(), &recording_config(ScaffoldProfile::Full))
        .expect_err("directory step fails");

    assert_eq!(failure.step, InitStep::EnsureDirectories);
    assert!(matches!(failure.source, ScaffoldError::FileSystem { .. }));
    assert!(!paths.cypress_config_path().exists());
    assert!(!dir.path().join("install.log").exists());
}

#[cfg(unix)]
#[test]
fn rerun_converges_on_the_same_layout() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = ProjectPaths::new(dir.path().to_path_buf());
    std::fs::write(paths.manifest_path(), r#"{"name":"shop"}"#).expect("write manifest");
    let config = recording_config(ScaffoldProfile::Minimal);

    run_init(dir.path(), &config).expect("first run");
    let manifest_after_first =
        std::fs::read_to_string(paths.manifest_path()).expect("read manifest");
    let second = run_init(dir.path(), &config).expect("second run");

    assert!(second.created_dirs.is_empty());
    assert_eq!(second.templates.readme, None);
    assert_eq!(
        std::fs::read_to_string(paths.manifest_path()).expect("read manifest"),
        manifest_after_first
    );
    assert_eq!(
        std::fs::read_to_string(paths.workflow_path()).expect("read workflow"),
        templates::CYPRESS_WORKFLOW_MINIMAL_YML
    );
    assert!(!paths.demo_spec_path().exists());
}

#[test]
fn step_failure_names_the_step() {
    let failure = super::StepFailure {
        step: InitStep::InstallDependencies,
        source: ScaffoldError::InstallFailed { code: Some(1) },
    };
    assert_eq!(failure.to_string(), "install dependencies failed");
}
