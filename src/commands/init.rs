//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module provides functionality for initializing a new orchestrator
//! configuration through an interactive command-line wizard. It helps users
//! create an `IctConfig.toml` file with the usual platform layout.
//!
//! 此模块通过交互式命令行向导提供初始化新编排器配置的功能。
//! 它帮助用户创建带有常见平台布局的 `IctConfig.toml` 文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use std::fs;
use std::path::Path;

use crate::core::config::IctConfig;
use crate::infra::t;

/// Optional platforms offered by the wizard.
const OPTIONAL_PLATFORMS: [&str; 4] = ["xbox", "switch", "ps4", "ps5"];

/// Runs the interactive wizard to generate an `IctConfig.toml` file.
///
/// 运行交互式向导以生成 `IctConfig.toml` 文件。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("IctConfig.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init.wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init.wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init.overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init.user_input_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let mut config = IctConfig {
        language: language.to_string(),
        ..IctConfig::default()
    };

    if non_interactive {
        return write_config(config_path, &config, language);
    }

    let primary: String = Input::with_theme(&theme)
        .with_prompt(t!("init.primary_prompt", locale = language).to_string())
        .default(config.primary.clone())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;
    config.primary = primary;

    let selections = MultiSelect::with_theme(&theme)
        .with_prompt(t!("init.platforms_prompt", locale = language).to_string())
        .items(&OPTIONAL_PLATFORMS)
        .defaults(&[true; OPTIONAL_PLATFORMS.len()])
        .interact()
        .context(t!("init.user_input_failed", locale = language).to_string())?;
    config.platforms = selections
        .into_iter()
        .map(|i| OPTIONAL_PLATFORMS[i].to_string())
        .collect();

    let build_tool: String = Input::with_theme(&theme)
        .with_prompt(t!("init.build_tool_prompt", locale = language).to_string())
        .allow_empty(true)
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;
    if !build_tool.trim().is_empty() {
        config.build_tool = Some(build_tool.trim().to_string());
    }

    write_config(config_path, &config, language)
}

fn write_config(path: &Path, config: &IctConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!(
            "init.write_failed",
            locale = language,
            path = path.display()
        )
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!(
            "init.success_created",
            locale = language,
            path = path.display()
        )
        .bold()
    );
    println!("{}", t!("init.usage_hint", locale = language));

    Ok(())
}
