//! Run-mode and gating scenarios for the orchestrator, driven by a
//! scripted executor over a temporary project tree

use std::fs;
use tempfile::TempDir;
use validation_harness_core::runners::scripted::{Reply, ScriptedExecutor};
use validation_harness_core::{Error, HarnessConfig, Orchestrator, RunMode, SuiteKind};

const CTEST: &str = "ctest --test-dir";
const MODULE_PROBE: &str = "'import cudaq'";
const BACKEND_QUERY: &str = "get_targets";
const VALIDATOR: &str = "notebook_validation.py";

struct Project {
    _dir: TempDir,
    config: HarnessConfig,
}

fn project(with_build: bool, with_validator: bool) -> Project {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    if with_build {
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("build/CMakeCache.txt"), "CMAKE_BUILD_TYPE:STRING=Release\n").unwrap();
    }
    if with_validator {
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/notebook_validation.py"), "").unwrap();
    }
    let config = HarnessConfig::default().rooted_at(root);
    Project { _dir: dir, config }
}

fn tools() -> ScriptedExecutor {
    ScriptedExecutor::new().on_path(["ctest", "python3", "jupyter"])
}

#[test]
fn test_default_mode_runs_both_suites_in_order() {
    let p = project(true, true);
    let exec = tools();
    let report = Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();

    assert!(report.compiled.is_some());
    assert!(report.notebooks.is_some());

    let lines: Vec<String> = exec.calls().iter().map(|c| c.to_shell_command()).collect();
    let ctest_at = lines.iter().position(|l| l.contains(CTEST)).unwrap();
    let validator_at = lines.iter().position(|l| l.contains(VALIDATOR)).unwrap();
    assert!(ctest_at < validator_at);
}

#[test]
fn test_compiled_only_never_touches_python() {
    let p = project(true, false);
    let exec = tools();
    let report = Orchestrator::new(&p.config, &exec)
        .run(RunMode::CompiledOnly)
        .unwrap();

    assert!(report.notebooks.is_none());
    assert_eq!(exec.invocations_of(CTEST).len(), 1);
    assert!(exec.invocations_of("python3").is_empty());
}

#[test]
fn test_notebooks_only_skips_build_check() {
    let p = project(false, true);
    let exec = tools();
    let report = Orchestrator::new(&p.config, &exec)
        .run(RunMode::NotebooksOnly)
        .unwrap();

    assert!(report.compiled.is_none());
    assert_eq!(report.get(SuiteKind::Notebooks).unwrap().exit_code, 0);
    assert!(exec.invocations_of(CTEST).is_empty());
}

#[test]
fn test_missing_build_tree_stops_before_test_tool() {
    let p = project(false, true);
    let exec = tools();
    let err = Orchestrator::new(&p.config, &exec)
        .run(RunMode::All)
        .unwrap_err();

    assert!(matches!(err, Error::MissingPrerequisite { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(exec.invocations_of(CTEST).is_empty());
    assert!(exec.invocations_of(VALIDATOR).is_empty());
}

#[test]
fn test_compiled_failure_gates_regardless_of_notebooks() {
    let p = project(true, true);
    let exec = tools()
        .reply(CTEST, [Reply::Exit(2)])
        .reply(VALIDATOR, [Reply::Exit(0)]);
    let report = Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();

    assert_eq!(report.compiled.as_ref().unwrap().exit_code, 2);
    assert!(report.notebooks.as_ref().unwrap().passed());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_notebook_failure_after_compiled_success_exits_zero() {
    let p = project(true, true);
    let exec = tools().reply(VALIDATOR, [Reply::Exit(1)]);
    let report = Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();

    assert!(!report.notebooks.as_ref().unwrap().passed());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_compiled_failure_still_runs_notebooks() {
    let p = project(true, true);
    let exec = tools().reply(CTEST, [Reply::Exit(8)]);
    Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();
    assert_eq!(exec.invocations_of(VALIDATOR).len(), 1);
}

#[test]
fn test_backend_query_failure_uses_default_backend() {
    let p = project(true, true);
    let exec = tools().reply(BACKEND_QUERY, [Reply::Exit(1)]);
    let report = Orchestrator::new(&p.config, &exec)
        .run(RunMode::NotebooksOnly)
        .unwrap();

    assert!(report.notebooks.is_some());
    let validator = exec
        .calls()
        .into_iter()
        .find(|c| c.to_shell_command().contains(VALIDATOR))
        .expect("validator must still run");
    assert_eq!(validator.stdin.as_deref(), Some("qpp-cpu\n"));
}

#[test]
fn test_missing_runtime_module_is_fatal() {
    let p = project(true, true);
    let exec = tools().reply(MODULE_PROBE, [Reply::Exit(1)]);
    let err = Orchestrator::new(&p.config, &exec)
        .run(RunMode::All)
        .unwrap_err();

    assert!(err.to_string().contains("module `cudaq`"));
    // The compiled suite already ran; only the notebook suite was refused.
    assert_eq!(exec.invocations_of(CTEST).len(), 1);
    assert!(exec.invocations_of(VALIDATOR).is_empty());
}

#[test]
fn test_missing_validator_script_is_fatal() {
    let p = project(true, false);
    let exec = tools();
    let err = Orchestrator::new(&p.config, &exec)
        .run(RunMode::NotebooksOnly)
        .unwrap_err();
    assert!(err.to_string().contains("notebook_validation.py"));
}

#[test]
fn test_notebook_tool_installed_on_the_fly() {
    let p = project(true, true);
    let exec = tools().reply("jupyter nbconvert", [Reply::Exit(1), Reply::Exit(0)]);
    let report = Orchestrator::new(&p.config, &exec)
        .run(RunMode::NotebooksOnly)
        .unwrap();

    assert!(report.notebooks.is_some());
    assert_eq!(exec.invocations_of("pip install notebook nbconvert").len(), 1);
}

#[test]
fn test_elapsed_time_is_consistent_with_wall_clock() {
    let p = project(true, true);
    let exec = tools();
    let started = std::time::Instant::now();
    let report = Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();
    let wall = started.elapsed();

    for suite in [SuiteKind::Compiled, SuiteKind::Notebooks] {
        let result = report.get(suite).unwrap();
        assert!(result.elapsed <= wall);
        assert_eq!(result.elapsed_seconds, result.elapsed.as_secs());
    }
}

#[test]
fn test_report_serializes_for_tooling() {
    let p = project(true, true);
    let exec = tools();
    let report = Orchestrator::new(&p.config, &exec).run(RunMode::All).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["compiled"]["exit_code"], 0);
    assert_eq!(json["notebooks"]["suite"], "notebooks");
}
