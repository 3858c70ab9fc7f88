//! # Console Reporting Module / 控制台报告模块
//!
//! Colored per-platform outcome summaries printed at the end of a run.
//!
//! 运行结束时打印的彩色按平台结果摘要。

use colored::*;

use crate::core::models::PlatformOutcome;
use crate::infra::t;

/// Prints a formatted summary of platform outcomes to the console.
///
/// 在控制台打印格式化的平台结果摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Platform Summary ---
///   - Completed  | windows      |
///   - Skipped    | xbox         | sources/REI_Platforms/xbox/ICT/IctPlatform.toml
///   - Failed     | ps5          | Build tool exited with exit status: 1 ...
/// ```
pub fn print_summary(outcomes: &[PlatformOutcome], locale: &str) {
    println!("\n{}", t!("summary.banner", locale = locale).bold());

    for outcome in outcomes {
        let status_str = outcome.get_status_str();
        let status_colored = match outcome {
            PlatformOutcome::Completed { .. } => status_str.green(),
            PlatformOutcome::SkippedMissing { .. } => status_str.yellow(),
            PlatformOutcome::Failed { .. } => status_str.red(),
        };

        println!(
            "  - {:<10} | {:<12} | {}",
            status_colored,
            outcome.platform(),
            outcome.detail()
        );
    }
}

/// Prints the full error text of every failed platform, separated for
/// readability. Returns early when nothing failed.
///
/// 打印每个失败平台的完整错误文本，以分隔线分开。无失败时直接返回。
pub fn print_failure_details(outcomes: &[PlatformOutcome], locale: &str) {
    let failures: Vec<_> = outcomes.iter().filter(|o| o.is_failure()).collect();
    if failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("summary.failure_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, outcome) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("summary.failure_header", locale = locale).red(),
            outcome.platform().cyan()
        );
        println!("\n{}", outcome.get_error());
        println!("\n{}", "-".repeat(80));
    }
}
