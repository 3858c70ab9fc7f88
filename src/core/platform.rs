//! # Platform Registry Module / 平台注册表模块
//!
//! Platform targets are plugins described by a TOML manifest under
//! `<platforms_root>/<name>/ICT/`. The registry resolves names to manifest
//! and report paths; discovery is the presence of the manifest file.
//!
//! 平台目标是由 `<platforms_root>/<name>/ICT/` 下的 TOML 清单描述的插件。
//! 注册表将名称解析为清单和报告路径；清单文件的存在即为发现。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Manifest file name looked up inside a platform's ICT directory.
pub const MANIFEST_FILE: &str = "IctPlatform.toml";

/// One invocation of the external build tool.
/// 外部构建工具的一次调用。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildStep {
    /// Build configuration handed to the tool (e.g. "DebugD3D12").
    /// 传给构建工具的配置（例如 "DebugD3D12"）。
    pub configuration: String,
    /// Target platform handed to the tool (e.g. "Win32", "x64").
    /// 传给构建工具的目标平台（例如 "Win32", "x64"）。
    pub platform: String,
}

/// One test executable run, rooted in its own output subdirectory.
/// 一次测试可执行文件运行，以其独立的输出子目录为根。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunStep {
    /// Output subdirectory under the orchestrator's build root, created
    /// before the run and used as the working directory.
    /// 编排器构建根目录下的输出子目录，运行前创建并用作工作目录。
    pub out_dir: String,
    /// Test executable, relative to the project root. Launched through the
    /// pipeline runner when no custom command is given.
    /// 测试可执行文件，相对于项目根目录。未给出自定义命令时经由管道运行器启动。
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// An optional custom command to run instead of the binary. Supports
    /// environment expansion and shell-style quoting.
    /// 代替二进制文件运行的可选自定义命令。支持环境变量展开和 shell 风格引号。
    #[serde(default)]
    pub command: Option<String>,
    /// Log file to filter after the run, relative to `out_dir`. Defaults to
    /// the binary's file name with `.log` appended.
    /// 运行后要过滤的日志文件，相对于 `out_dir`。默认为二进制文件名加 `.log`。
    #[serde(default)]
    pub log: Option<PathBuf>,
}

impl RunStep {
    /// The log file produced by this step, if any can be determined.
    pub fn log_file(&self) -> Option<PathBuf> {
        if let Some(log) = &self.log {
            return Some(log.clone());
        }
        let binary = self.binary.as_ref()?;
        let file_name = binary.file_name()?.to_string_lossy();
        Some(PathBuf::from(format!("{}.log", file_name)))
    }
}

/// A platform's build/run capability, loaded from its manifest.
/// 从清单加载的平台构建/运行能力。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlatformManifest {
    /// Project file handed to the build tool. Required when `builds` is
    /// non-empty.
    /// 传给构建工具的项目文件。`builds` 非空时必需。
    #[serde(default)]
    pub project: Option<PathBuf>,
    #[serde(default)]
    pub builds: Vec<BuildStep>,
    #[serde(default)]
    pub runs: Vec<RunStep>,
}

/// Resolves platform names to their on-disk layout and loads manifests.
/// 将平台名称解析为其磁盘布局并加载清单。
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    root: PathBuf,
}

impl PlatformRegistry {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The ICT directory of a platform: `<root>/<name>/ICT`.
    pub fn platform_dir(&self, name: &str) -> PathBuf {
        self.root.join(name).join("ICT")
    }

    /// The manifest path of a platform.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.platform_dir(name).join(MANIFEST_FILE)
    }

    /// The report fragment path of a platform:
    /// `<root>/<name>/ICT/test_result_<name>.report`.
    pub fn report_path(&self, name: &str) -> PathBuf {
        self.platform_dir(name)
            .join(format!("test_result_{}.report", name))
    }

    /// Discovery step: the manifest path when it exists on disk.
    /// 发现步骤：清单文件存在时返回其路径。
    pub fn discover(&self, name: &str) -> Option<PathBuf> {
        let path = self.manifest_path(name);
        path.is_file().then_some(path)
    }

    /// Loads and parses a platform's manifest.
    pub fn load(&self, name: &str) -> Result<PlatformManifest> {
        let path = self.manifest_path(name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read platform manifest: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse platform manifest: {}", path.display()))
    }
}
