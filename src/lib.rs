//! # ICT Runner Library / ICT Runner 库
//!
//! This library provides the core functionality for the ICT Runner tool,
//! a configuration-driven orchestrator for image-comparison conformance
//! tests across multiple platform targets, plus a template-based file
//! generator.
//!
//! 此库为 ICT Runner 工具提供核心功能，
//! 这是一个配置驱动的跨平台图像对比一致性测试编排器，
//! 并附带一个基于模板的文件生成器。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, platform registry, orchestration and template generation
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Log filtering, report combination and run summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、平台注册表、编排和模板生成
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 日志过滤、报告合并和运行摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::models;
pub use crate::core::orchestrator;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
