// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::{commands, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection. Try the full locale first
    // (e.g. "zh-CN"), then the language part only (e.g. "en" from "en-US").
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();
    if available_locales.contains(&locale.as_str()) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
            .to_string()
    }
}

fn build_cli(locale: &str) -> Command {
    Command::new("ict-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value("IctConfig.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("project-dir")
                        .long("project-dir")
                        .help(t!("arg_project_dir", locale = locale).to_string())
                        .value_name("PROJECT_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("build-tool")
                        .long("build-tool")
                        .help(t!("arg_build_tool", locale = locale).to_string())
                        .value_name("BUILD_TOOL")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("no-open")
                        .long("no-open")
                        .help(t!("arg_no_open", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("gen")
                .about(t!("cmd_gen_about", locale = locale).to_string())
                .arg(
                    Arg::new("template-dir")
                        .short('i')
                        .long("template-dir")
                        .help(t!("arg_template_dir", locale = locale).to_string())
                        .value_name("TEMPLATE_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("out-dir")
                        .short('o')
                        .long("out-dir")
                        .help(t!("arg_out_dir", locale = locale).to_string())
                        .value_name("OUT_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help(t!("arg_name", locale = locale).to_string())
                        .value_name("NAME")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("options")
                        .long("options")
                        .help(t!("arg_options", locale = locale).to_string())
                        .value_name("OPTION_FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let config = run_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            let project_dir = run_matches
                .get_one::<PathBuf>("project-dir")
                .unwrap() // Has default
                .clone();
            let build_tool = run_matches.get_one::<String>("build-tool").cloned();
            let html = run_matches.get_one::<PathBuf>("html").cloned();
            let no_open = run_matches.get_flag("no-open");

            commands::run::execute(config, project_dir, build_tool, html, no_open).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("gen", gen_matches)) => {
            let template_dir = gen_matches.get_one::<PathBuf>("template-dir").cloned();
            let out_dir = gen_matches.get_one::<PathBuf>("out-dir").cloned();
            let name = gen_matches.get_one::<String>("name").cloned();
            let options_file = gen_matches.get_one::<PathBuf>("options").cloned();

            commands::generate::execute(template_dir, out_dir, name, options_file, &language)
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
            Ok(ExitCode::SUCCESS)
        }
    }
}
