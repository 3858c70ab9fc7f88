//! # Reporting Module / 报告模块
//!
//! This module handles everything the run leaves behind for humans: the
//! error-line log filter, the combined report with its fixed text envelope,
//! the colored console summary, and an optional HTML run summary.
//!
//! 此模块处理运行留给人的所有产物：错误行日志过滤器、
//! 带固定文本外壳的合并报告、彩色控制台摘要，以及可选的 HTML 运行摘要。

pub mod combine;
pub mod console;
pub mod html;
pub mod logs;

// Re-export common reporting functions
pub use combine::create_combined_report;
pub use console::{print_failure_details, print_summary};
pub use html::generate_html_report;
pub use logs::filter_lines;
