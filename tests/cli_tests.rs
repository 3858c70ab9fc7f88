//! # CLI Integration Tests / CLI 集成测试
//!
//! Runs the `ict-runner` binary end-to-end, mainly against the generator's
//! documented exit codes and the flags/option-file equivalence.
//!
//! 端到端运行 `ict-runner` 二进制文件，主要针对生成器的既定退出码
//! 和参数/选项文件的等价性。

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn ict_runner() -> Command {
    let mut cmd = Command::cargo_bin("ict-runner").unwrap();
    cmd.arg("--lang").arg("en");
    cmd
}

/// `gen` without any argument must print a usage text to standard output
/// and terminate with exit code 2.
///
/// 不带任何参数的 `gen` 必须向标准输出打印用法并以退出码 2 终止。
#[test]
fn test_gen_without_arguments_exits_with_usage() {
    let mut cmd = ict_runner();
    cmd.arg("gen");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("--options <option file>"));
}

/// `gen` with a partial flag set and no option file also resolves to the
/// usage path, naming both attempted input modes.
#[test]
fn test_gen_with_partial_flags_exits_with_usage() {
    let mut cmd = ict_runner();
    cmd.arg("gen").arg("-i").arg("somewhere");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("-i/-o/-n"))
        .stdout(predicate::str::contains("--options"));
}

/// A nonexistent template directory must produce a diagnostic and exit
/// code 1, and the output directory must not be created.
///
/// 不存在的模板目录必须产生诊断信息并以退出码 1 退出，
/// 且不得创建输出目录。
#[test]
fn test_gen_missing_template_dir_exits_without_creating_output() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");

    let mut cmd = ict_runner();
    cmd.arg("gen")
        .arg("-i")
        .arg(temp_dir.path().join("no_such_dir"))
        .arg("-o")
        .arg(&out_dir)
        .arg("-n")
        .arg("Alice");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("is not a directory"));
    assert!(!out_dir.exists());
}

/// A missing `map.json` aborts the run with a non-zero status.
#[test]
fn test_gen_missing_mapping_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    fs::create_dir_all(&template_dir).unwrap();

    let mut cmd = ict_runner();
    cmd.arg("gen")
        .arg("-i")
        .arg(&template_dir)
        .arg("-o")
        .arg(temp_dir.path().join("out"))
        .arg("-n")
        .arg("Alice");

    cmd.assert().failure();
}

/// End-to-end generation: the verbatim file is copied unchanged, the
/// template is rendered with the name bound and written under its mapped
/// name, and the nested layout is mirrored.
///
/// 端到端生成：原样文件按原样复制，模板在绑定名称后渲染并以映射名写出，
/// 嵌套布局被镜像。
#[test]
fn test_gen_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    let out_dir = temp_dir.path().join("out");
    common::setup_template_fixture(&template_dir);

    let mut cmd = ict_runner();
    cmd.arg("gen")
        .arg("-i")
        .arg(&template_dir)
        .arg("-o")
        .arg(&out_dir)
        .arg("-n")
        .arg("Alice");

    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(out_dir.join("file.txt")).unwrap(),
        "verbatim content"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("hello_Alice.out")).unwrap(),
        "Hello, Alice!"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("nested").join("inner.txt")).unwrap(),
        "inner"
    );
    // The mapping file itself is never copied.
    assert!(!out_dir.join("map.json").exists());
}

/// `--options <file>` must behave identically to the equivalent discrete
/// flags.
///
/// `--options <文件>` 必须与等价的离散参数行为一致。
#[test]
fn test_gen_option_file_matches_flags() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    common::setup_template_fixture(&template_dir);

    let flags_out = temp_dir.path().join("out_flags");
    let mut flags_cmd = ict_runner();
    flags_cmd
        .arg("gen")
        .arg("-i")
        .arg(&template_dir)
        .arg("-o")
        .arg(&flags_out)
        .arg("-n")
        .arg("Alice");
    flags_cmd.assert().success();

    let options_out = temp_dir.path().join("out_options");
    let options_file = temp_dir.path().join("options.json");
    fs::write(
        &options_file,
        serde_json::json!({
            "template_dir": template_dir,
            "out_dir": options_out,
            "name": "Alice",
        })
        .to_string(),
    )
    .unwrap();

    let mut options_cmd = ict_runner();
    options_cmd.arg("gen").arg("--options").arg(&options_file);
    options_cmd.assert().success();

    for file in ["file.txt", "hello_Alice.out", "nested/inner.txt"] {
        assert_eq!(
            fs::read_to_string(flags_out.join(file)).unwrap(),
            fs::read_to_string(options_out.join(file)).unwrap(),
            "flags and option-file runs diverged on {file}"
        );
    }
}

/// `run` with a missing configuration file fails fast.
#[test]
fn test_run_with_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = ict_runner();
    cmd.current_dir(temp_dir.path())
        .arg("run")
        .arg("--config")
        .arg("DoesNotExist.toml")
        .arg("--no-open");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DoesNotExist.toml"));
}

/// `init --non-interactive` writes a parseable default configuration.
#[test]
fn test_init_non_interactive_writes_default_config() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = ict_runner();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .arg("--non-interactive");

    cmd.assert().success();

    let content = fs::read_to_string(temp_dir.path().join("IctConfig.toml")).unwrap();
    assert!(content.contains("primary"));
    assert!(content.contains("windows"));
}
