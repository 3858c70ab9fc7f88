//! # Core Module / 核心模块
//!
//! This module contains the core functionality of ICT Runner,
//! including configuration, the platform registry, the orchestration
//! sequence and the template generator.
//!
//! 此模块包含 ICT Runner 的核心功能，
//! 包括配置、平台注册表、编排流程和模板生成器。

pub mod config;
pub mod models;
pub mod orchestrator;
pub mod platform;
pub mod template;

// Re-exports
pub use config::IctConfig;
pub use models::PlatformOutcome;
pub use orchestrator::Orchestrator;
