//! # Report Combination Module / 报告合并模块

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the combined report: every fragment's full text, in order, inside
/// the fixed envelope `test_results = [<fragment>, <fragment>, ];`.
/// Fragments are concatenated, not parsed. Every listed path must exist;
/// callers existence-check optional fragments before listing them.
///
/// 写出合并报告：所有片段的完整文本按顺序置于固定外壳
/// `test_results = [<fragment>, <fragment>, ];` 中。片段只做串联，不做解析。
/// 列出的路径必须存在；可选片段由调用方先做存在性检查。
pub fn create_combined_report(out_path: &Path, report_paths: &[PathBuf]) -> Result<()> {
    let mut combined = String::from("test_results = [");

    for report_path in report_paths {
        let fragment = fs::read_to_string(report_path).with_context(|| {
            format!("Failed to read report fragment: {}", report_path.display())
        })?;
        combined.push_str(&fragment);
        combined.push_str(", ");
    }

    combined.push_str("];");

    fs::write(out_path, combined)
        .with_context(|| format!("Failed to write combined report: {}", out_path.display()))
}
