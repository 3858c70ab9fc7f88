//! # Configuration Module / 配置模块
//!
//! Configuration for both tool chains: the orchestrator's `IctConfig.toml`
//! model and the generator's explicit option resolution.
//!
//! 两条工具链的配置：编排器的 `IctConfig.toml` 模型
//! 以及生成器的显式选项解析。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::reporting::logs::DEFAULT_ERROR_PATTERN;

/// Represents the orchestrator configuration, loaded from a TOML file.
/// All paths are interpreted relative to the project root.
/// 代表从 TOML 文件加载的编排器配置。所有路径都相对于项目根目录解释。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IctConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Output root that is reset and repopulated on every run.
    /// 每次运行时重置并重新填充的输出根目录。
    #[serde(default = "default_build_root")]
    pub build_root: PathBuf,

    /// Reference image directory copied into the output root.
    /// 复制到输出根目录的参考图像目录。
    #[serde(default = "default_ref_images")]
    pub ref_images: PathBuf,

    /// Static report template copied next to the combined report.
    /// 复制到合并报告旁的静态报告模板。
    #[serde(default = "default_report_template")]
    pub report_template: PathBuf,

    /// Root directory holding one subdirectory per platform target.
    /// 按平台目标分子目录的根目录。
    #[serde(default = "default_platforms_root")]
    pub platforms_root: PathBuf,

    /// The platform that is always built and run; a missing manifest for it
    /// aborts the run.
    /// 始终构建并运行的平台；其清单缺失会中止运行。
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Optional platforms, each skipped with a warning when absent on disk.
    /// 可选平台，磁盘上缺失时各自打印警告并跳过。
    #[serde(default)]
    pub platforms: Vec<String>,

    /// Location of the external build tool. Environment variables are
    /// expanded once at process start; the CLI flag and the `ICT_BUILD_TOOL`
    /// variable take precedence.
    /// 外部构建工具的位置。环境变量在进程启动时展开一次；
    /// 命令行参数和 `ICT_BUILD_TOOL` 变量优先。
    #[serde(default)]
    pub build_tool: Option<String>,

    /// Regular expression selecting error lines from test logs.
    /// 从测试日志中筛选错误行的正则表达式。
    #[serde(default = "default_error_pattern")]
    pub error_pattern: String,
}

impl Default for IctConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            build_root: default_build_root(),
            ref_images: default_ref_images(),
            report_template: default_report_template(),
            platforms_root: default_platforms_root(),
            primary: default_primary(),
            platforms: vec![
                "xbox".to_string(),
                "switch".to_string(),
                "ps4".to_string(),
                "ps5".to_string(),
            ],
            build_tool: None,
            error_pattern: default_error_pattern(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_build_root() -> PathBuf {
    PathBuf::from("build/Test_ICT")
}

fn default_ref_images() -> PathBuf {
    PathBuf::from("data/ICT_ref_images")
}

fn default_report_template() -> PathBuf {
    PathBuf::from("data/ICTReport.html")
}

fn default_platforms_root() -> PathBuf {
    PathBuf::from("sources/REI_Platforms")
}

fn default_primary() -> String {
    "windows".to_string()
}

fn default_error_pattern() -> String {
    DEFAULT_ERROR_PATTERN.to_string()
}

/// Resolved generator options: template directory, output directory and the
/// name substituted into templates and mapped file names.
/// 解析后的生成器选项：模板目录、输出目录，以及代入模板和映射文件名的名称。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    pub template_dir: PathBuf,
    pub out_dir: PathBuf,
    pub name: String,
}

/// The shape of a generator option file: a JSON object carrying the same
/// three logical fields as the discrete flags.
#[derive(Debug, Deserialize)]
struct GenOptionsFile {
    template_dir: PathBuf,
    out_dir: PathBuf,
    name: String,
}

/// Why generator options could not be resolved. Lists what was tried so the
/// diagnostic names both input modes.
#[derive(Debug)]
pub enum GenOptionsError {
    /// Neither complete flags nor an option file were supplied.
    Unresolvable { partial_flags: bool },
    /// The option file could not be read.
    FileRead { path: PathBuf, source: std::io::Error },
    /// The option file was not a well-formed options object.
    FileParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for GenOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenOptionsError::Unresolvable { partial_flags } => {
                if *partial_flags {
                    write!(
                        f,
                        "Incomplete arguments: tried -i/-o/-n flags (some missing) and \
                         --options (not given)"
                    )
                } else {
                    write!(
                        f,
                        "No arguments: tried -i/-o/-n flags (not given) and --options (not given)"
                    )
                }
            }
            GenOptionsError::FileRead { path, source } => {
                write!(f, "Failed to read option file {}: {}", path.display(), source)
            }
            GenOptionsError::FileParse { path, source } => {
                write!(f, "Failed to parse option file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenOptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenOptionsError::Unresolvable { .. } => None,
            GenOptionsError::FileRead { source, .. } => Some(source),
            GenOptionsError::FileParse { source, .. } => Some(source),
        }
    }
}

impl GenOptions {
    /// Resolves generator options in one explicit step: the discrete flags
    /// are preferred when all three are present, otherwise the option file
    /// is consulted. An unresolvable invocation reports both attempts.
    ///
    /// 单步显式解析生成器选项：三个参数齐全时优先使用；
    /// 否则读取选项文件。无法解析时同时报告两种尝试。
    pub fn resolve(
        template_dir: Option<&Path>,
        out_dir: Option<&Path>,
        name: Option<&str>,
        options_file: Option<&Path>,
    ) -> Result<GenOptions, GenOptionsError> {
        if let (Some(template_dir), Some(out_dir), Some(name)) = (template_dir, out_dir, name) {
            return Ok(GenOptions {
                template_dir: template_dir.to_path_buf(),
                out_dir: out_dir.to_path_buf(),
                name: name.to_string(),
            });
        }

        let partial_flags = template_dir.is_some() || out_dir.is_some() || name.is_some();

        let Some(path) = options_file else {
            return Err(GenOptionsError::Unresolvable { partial_flags });
        };

        let content = fs::read_to_string(path).map_err(|source| GenOptionsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: GenOptionsFile =
            serde_json::from_str(&content).map_err(|source| GenOptionsError::FileParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(GenOptions {
            template_dir: parsed.template_dir,
            out_dir: parsed.out_dir,
            name: parsed.name,
        })
    }
}
