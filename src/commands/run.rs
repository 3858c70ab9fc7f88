// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf};

use crate::{
    core::{config::IctConfig, orchestrator::Orchestrator, platform::PlatformRegistry},
    infra::{command::Toolchain, t},
    reporting,
};

pub async fn execute(
    config: PathBuf,
    project_dir: PathBuf,
    build_tool: Option<String>,
    html: Option<PathBuf>,
    no_open: bool,
) -> Result<()> {
    let (ict_config, config_path) = setup_and_parse_config(&config)?;
    let locale = ict_config.language.clone();
    rust_i18n::set_locale(&locale);

    let project_root = fs::canonicalize(&project_dir).with_context(|| {
        t!(
            "run.project_dir_not_found",
            locale = &locale,
            path = project_dir.display()
        )
    })?;

    println!(
        "{}",
        t!(
            "run.project_root_detected",
            locale = &locale,
            path = project_root.display()
        )
    );
    println!(
        "{}",
        t!(
            "run.loading_config",
            locale = &locale,
            path = config_path.display()
        )
    );

    // The build tool location is resolved exactly once here and threaded
    // through; nothing downstream consults the environment.
    let toolchain = Toolchain::resolve(build_tool.as_deref(), ict_config.build_tool.as_deref())?;

    let registry = PlatformRegistry::new(project_root.join(&ict_config.platforms_root));
    let orchestrator = Orchestrator::new(project_root, ict_config, toolchain, registry);
    let outcomes = orchestrator.run(no_open).await?;

    reporting::print_summary(&outcomes, &locale);
    reporting::print_failure_details(&outcomes, &locale);

    if let Some(report_path) = &html {
        println!(
            "\n{}",
            t!(
                "run.generating_html",
                locale = &locale,
                path = report_path.display()
            )
        );
        if let Err(e) = reporting::generate_html_report(&outcomes, report_path, &locale) {
            eprintln!("{} {}", t!("run.html_failed", locale = &locale).red(), e);
        }
    }

    Ok(())
}

fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(IctConfig, PathBuf)> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let config_path = fs::canonicalize(config_path_arg).with_context(|| {
        t!(
            "run.config_read_failed",
            locale = locale,
            path = config_path_arg.display()
        )
    })?;

    let config_content = fs::read_to_string(&config_path).with_context(|| {
        t!(
            "run.config_read_failed",
            locale = locale,
            path = config_path.display()
        )
    })?;

    let ict_config: IctConfig = toml::from_str(&config_content)
        .with_context(|| t!("run.config_parse_failed", locale = locale))?;

    Ok((ict_config, config_path))
}
