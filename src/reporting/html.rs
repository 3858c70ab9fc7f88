//! # HTML Reporting Module / HTML 报告模块
//!
//! Generates the optional HTML run summary (`--html`). This is a summary of
//! the orchestration itself; the combined ICT report keeps its own fixed
//! text envelope and static viewer template.
//!
//! 生成可选的 HTML 运行摘要（`--html`）。这是编排过程本身的摘要；
//! 合并的 ICT 报告保留其固定文本外壳和静态查看器模板。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::PlatformOutcome;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Minimal HTML escaping for text content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generates an HTML summary of platform outcomes.
///
/// # Arguments
/// * `outcomes` - Outcomes to include, primary platform first
/// * `output_path` - File path where the report is written
/// * `locale` - Locale for the report's labels
pub fn generate_html_report(
    outcomes: &[PlatformOutcome],
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));
    html.push_str(&format!(
        "<p class='generated-at'>{}</p>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));

    // Summary statistics
    let total = outcomes.len();
    let completed = outcomes
        .iter()
        .filter(|o| matches!(o, PlatformOutcome::Completed { .. }))
        .count();
    let skipped = outcomes.iter().filter(|o| o.is_skipped()).count();
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();

    html.push_str("<div class='summary-container'>");
    for (count, class, label) in [
        (total, "", t!("html_report.summary.total", locale = locale)),
        (
            completed,
            " completed-text",
            t!("html_report.summary.completed", locale = locale),
        ),
        (
            skipped,
            " skipped-text",
            t!("html_report.summary.skipped", locale = locale),
        ),
        (
            failed,
            " failed-text",
            t!("html_report.summary.failed", locale = locale),
        ),
    ] {
        html.push_str(&format!(
            "<div class='summary-item'><span class='count{}'>{}</span><span class='label'>{}</span></div>",
            class, count, label
        ));
    }
    html.push_str("</div>");

    // Outcome table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.platform", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.detail", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for outcome in outcomes {
        let status_class = match outcome {
            PlatformOutcome::Completed { .. } => "completed",
            PlatformOutcome::SkippedMissing { .. } => "skipped",
            PlatformOutcome::Failed { .. } => "failed",
        };
        html.push_str(&format!(
            "<tr class='{}'><td>{}</td><td class='status-col'>{}</td><td>",
            status_class,
            escape(outcome.platform()),
            outcome.get_status_str()
        ));
        if outcome.is_failure() {
            html.push_str(&format!(
                "<details><summary>{}</summary><pre>{}</pre></details>",
                escape(&outcome.detail()),
                escape(outcome.get_error())
            ));
        } else {
            html.push_str(&escape(&outcome.detail()));
        }
        html.push_str("</td></tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script>");
    html.push_str("</body></html>");

    fs::write(output_path, html)
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))
}
