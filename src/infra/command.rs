//! # Command Execution Module / 命令执行模块
//!
//! This module hosts the process-level plumbing: the fixed-pipeline runner
//! used to launch test executables, a capture helper for build output, the
//! custom-command path for platform manifests, and the external build tool
//! wrapper.
//!
//! 此模块承载进程级管道：用于启动测试可执行文件的固定管道运行器、
//! 构建输出捕获辅助函数、平台清单的自定义命令路径，以及外部构建工具封装。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Environment variable consulted once at startup for the build tool location.
pub const BUILD_TOOL_ENV: &str = "ICT_BUILD_TOOL";

/// Runs a fixed-length pipeline in `cwd`.
///
/// The command string is split on `|`; each segment is tokenized on
/// whitespace (no quoting or escaping) and launched with the standard output
/// of the previous stage wired to the standard input of the next. Only the
/// last stage is awaited; stage exit codes are not propagated and stage
/// output is discarded.
///
/// 在 `cwd` 中运行固定长度的管道。命令字符串按 `|` 拆分；每段按空白分词
/// （不支持引号或转义），前一阶段的标准输出接入下一阶段的标准输入。
/// 仅等待最后一个阶段；不传播阶段退出码，且丢弃阶段输出。
pub async fn run_pipeline(cmd: &str, cwd: &Path) -> Result<()> {
    println!("{}", cmd);

    let stages: Vec<&str> = cmd.split('|').collect();
    let stage_count = stages.len();
    let mut prev_stdout: Option<tokio::process::ChildStdout> = None;
    let mut last_child: Option<tokio::process::Child> = None;

    for (index, stage) in stages.iter().enumerate() {
        let mut tokens = stage.split_whitespace();
        let program = tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("Empty stage in pipeline: '{}'", cmd))?;

        let mut command = tokio::process::Command::new(program);
        command.args(tokens).current_dir(cwd);

        if let Some(stdout) = prev_stdout.take() {
            let stdin: Stdio = stdout
                .try_into()
                .context("Failed to wire pipeline standard input")?;
            command.stdin(stdin);
        }

        if index + 1 == stage_count {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            command.stdout(Stdio::piped()).stderr(Stdio::null());
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", program))?;
        prev_stdout = child.stdout.take();
        last_child = Some(child);
    }

    if let Some(mut child) = last_child {
        // Exit codes are not propagated; the run is side-effect only.
        let _ = child
            .wait()
            .await
            .context("Failed to wait for pipeline to finish")?;
    }

    Ok(())
}

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single string.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and an empty string for the output.
            return (Err(e), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture stdout")),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture stderr")),
                String::new(),
            );
        }
    };

    // Both streams append into the same buffer, in arrival order.
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stdout_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stderr_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let status = child.wait().await;

    // Join the reader tasks so all output is captured before returning.
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    (status, output.lock().await.clone())
}

/// Runs a custom command declared in a platform manifest.
///
/// The command is environment-expanded and split with shell-style quoting,
/// then executed with its output captured and echoed. A non-zero exit status
/// is an error carrying the captured output.
pub async fn run_custom_command(command: &str, cwd: &Path) -> Result<String> {
    let expanded = shellexpand::full(command)
        .with_context(|| format!("Failed to expand command: {command}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

    if parts.is_empty() {
        return Err(anyhow::anyhow!("Empty command after parsing."));
    }

    println!("{}", expanded);

    let mut cmd = tokio::process::Command::new(&parts[0]);
    cmd.args(&parts[1..]).kill_on_drop(true).current_dir(cwd);

    let (status_res, output) = spawn_and_capture(cmd).await;
    let status = status_res.with_context(|| format!("Failed to run '{}'", expanded))?;

    if !output.trim().is_empty() {
        println!("{}", output.trim());
    }

    if status.success() {
        Ok(output)
    } else {
        Err(anyhow::anyhow!(
            "Command '{}' exited with {}:\n{}",
            expanded,
            status,
            output
        ))
    }
}

/// The external build toolchain, resolved once at process start and threaded
/// through to every build invocation. Resolution order: the CLI override,
/// the `ICT_BUILD_TOOL` environment variable, then the configuration value.
/// The chosen string is environment-expanded before use.
///
/// 外部构建工具链，在进程启动时解析一次并贯穿所有构建调用。
/// 解析顺序：命令行覆盖、`ICT_BUILD_TOOL` 环境变量、配置文件中的值。
#[derive(Debug, Clone)]
pub struct Toolchain {
    path: Option<PathBuf>,
}

impl Toolchain {
    pub fn resolve(cli_override: Option<&str>, configured: Option<&str>) -> Result<Toolchain> {
        let raw = cli_override
            .map(str::to_string)
            .or_else(|| std::env::var(BUILD_TOOL_ENV).ok())
            .or_else(|| configured.map(str::to_string));

        let path = match raw {
            Some(raw) => {
                let expanded = shellexpand::full(&raw)
                    .with_context(|| format!("Failed to expand build tool path: {raw}"))?
                    .to_string();
                Some(PathBuf::from(expanded))
            }
            None => None,
        };

        Ok(Toolchain { path })
    }

    /// The resolved build tool location, if any was configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Invokes the build tool on `project` for one configuration/platform
    /// pair. Output is captured and echoed; a non-zero exit status is an
    /// error carrying the captured output.
    pub async fn build_project(
        &self,
        project: &Path,
        configuration: &str,
        platform: &str,
        cwd: &Path,
    ) -> Result<()> {
        let Some(tool) = self.path.as_deref() else {
            return Err(anyhow::anyhow!(
                "No build tool configured; set `build_tool` in the config, \
                 pass --build-tool, or export {}",
                BUILD_TOOL_ENV
            ));
        };

        let mut cmd = tokio::process::Command::new(tool);
        cmd.arg(project)
            .arg("-verbosity:minimal")
            .arg(format!("-property:Configuration={configuration}"))
            .arg(format!("-property:Platform={platform}"))
            .kill_on_drop(true)
            .current_dir(cwd);

        let (status_res, output) = spawn_and_capture(cmd).await;
        let status = status_res
            .with_context(|| format!("Failed to launch build tool '{}'", tool.display()))?;

        if !output.trim().is_empty() {
            println!("{}", output.trim());
        }

        if status.success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "Build tool exited with {} for {} ({}|{}):\n{}",
                status,
                project.display(),
                configuration,
                platform,
                output
            ))
        }
    }
}
