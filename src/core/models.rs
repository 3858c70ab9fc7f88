//! # Outcome Models Module / 结果模型模块
//!
//! The per-platform outcome type produced by the orchestrator. Optional
//! platforms resolve to one of three states instead of relying on broad
//! exception suppression.
//!
//! 编排器产出的按平台结果类型。可选平台解析为三种状态之一，
//! 而不是依赖宽泛的异常吞没。

use serde::Serialize;
use std::path::PathBuf;

/// The result of orchestrating a single platform target.
#[derive(Debug, Clone, Serialize)]
pub enum PlatformOutcome {
    /// The platform's build and run steps all completed.
    Completed { platform: String },
    /// The platform's manifest was not present on disk; nothing was run.
    SkippedMissing { platform: String, manifest: PathBuf },
    /// The platform was discovered but a build or run step failed.
    Failed { platform: String, error: String },
}

impl PlatformOutcome {
    /// Gets the platform name this outcome belongs to.
    /// 获取此结果所属的平台名称。
    pub fn platform(&self) -> &str {
        match self {
            PlatformOutcome::Completed { platform } => platform,
            PlatformOutcome::SkippedMissing { platform, .. } => platform,
            PlatformOutcome::Failed { platform, .. } => platform,
        }
    }

    /// Gets the status of the outcome as a string for display.
    /// 以字符串形式获取结果状态以供显示。
    pub fn get_status_str(&self) -> &'static str {
        match self {
            PlatformOutcome::Completed { .. } => "Completed",
            PlatformOutcome::SkippedMissing { .. } => "Skipped",
            PlatformOutcome::Failed { .. } => "Failed",
        }
    }

    /// A one-line detail for summaries: the missing manifest path for a
    /// skipped platform, the first error line for a failed one.
    pub fn detail(&self) -> String {
        match self {
            PlatformOutcome::Completed { .. } => String::new(),
            PlatformOutcome::SkippedMissing { manifest, .. } => manifest.display().to_string(),
            PlatformOutcome::Failed { error, .. } => {
                error.lines().next().unwrap_or("").to_string()
            }
        }
    }

    /// The full error text for a failed platform, empty otherwise.
    pub fn get_error(&self) -> &str {
        match self {
            PlatformOutcome::Failed { error, .. } => error,
            _ => "",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PlatformOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, PlatformOutcome::SkippedMissing { .. })
    }
}
