//! # Log Filter Module / 日志过滤模块

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default pattern selecting ` ERR|`-marked lines from test logs.
/// 从测试日志中筛选带 ` ERR|` 标记行的默认模式。
pub const DEFAULT_ERROR_PATTERN: &str = r"( ERR\|)";

/// Reads `path` and returns the concatenation of the lines matching
/// `pattern`, preserving their order and content. Each selected line keeps
/// its trailing newline. A missing file is an error.
///
/// 读取 `path` 并返回匹配 `pattern` 的行的串联结果，保持原有顺序和内容。
/// 每个被选中的行保留末尾换行。文件缺失是错误。
pub fn filter_lines(path: &Path, pattern: &Regex) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;

    let mut out = String::new();
    for line in content.lines() {
        if pattern.is_match(line) {
            out.push_str(line);
            out.push('\n');
        }
    }
    Ok(out)
}
