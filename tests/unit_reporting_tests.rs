//! # Reporting Unit Tests / 报告单元测试
//!
//! Log filtering and the combined report's fixed text envelope.
//!
//! 日志过滤和合并报告的固定文本外壳。

use ict_runner::reporting::combine::create_combined_report;
use ict_runner::reporting::logs::{filter_lines, DEFAULT_ERROR_PATTERN};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod filter_lines_tests {
    use super::*;

    #[test]
    fn test_filter_selects_only_matching_lines_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("Test_ICT.exe.log");
        fs::write(
            &log,
            "10:00 INF| renderer up\n\
             10:01 ERR| mismatch on frame 3\n\
             10:02 INF| still fine\n\
             10:03 ERR| mismatch on frame 9\n",
        )
        .unwrap();

        let pattern = Regex::new(DEFAULT_ERROR_PATTERN).unwrap();
        let filtered = filter_lines(&log, &pattern).unwrap();

        assert_eq!(
            filtered,
            "10:01 ERR| mismatch on frame 3\n10:03 ERR| mismatch on frame 9\n"
        );
    }

    #[test]
    fn test_filter_returns_empty_string_when_nothing_matches() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("clean.log");
        fs::write(&log, "all good\nnothing to see\n").unwrap();

        let pattern = Regex::new(DEFAULT_ERROR_PATTERN).unwrap();

        assert_eq!(filter_lines(&log, &pattern).unwrap(), "");
    }

    #[test]
    fn test_filter_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("absent.log");

        let pattern = Regex::new(DEFAULT_ERROR_PATTERN).unwrap();

        assert!(filter_lines(&log, &pattern).is_err());
    }
}

#[cfg(test)]
mod combined_report_tests {
    use super::*;

    #[test]
    fn test_combined_report_envelope() {
        let temp_dir = TempDir::new().unwrap();
        let mut fragments = Vec::new();
        for (name, content) in [("a", "A"), ("b", "B"), ("c", "C")] {
            let path = temp_dir.path().join(format!("{name}.report"));
            fs::write(&path, content).unwrap();
            fragments.push(path);
        }
        let out = temp_dir.path().join("test_result.report");

        create_combined_report(&out, &fragments).unwrap();

        // Literal concatenation with the fixed envelope and separators.
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "test_results = [A, B, C, ];"
        );
    }

    #[test]
    fn test_combined_report_with_no_fragments() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("test_result.report");

        create_combined_report(&out, &[]).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "test_results = [];");
    }

    #[test]
    fn test_combined_report_missing_fragment_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("test_result.report");
        let missing = temp_dir.path().join("absent.report");

        assert!(create_combined_report(&out, &[missing]).is_err());
    }
}
