// src/commands/generate.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::{
    core::{config::GenOptions, template},
    infra::{fs::is_directory, t},
};

/// Runs the template generator. Exit code 2 signals unresolvable arguments
/// (usage is printed), exit code 1 a missing template directory; the output
/// directory is never created before that check passes.
pub fn execute(
    template_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    name: Option<String>,
    options_file: Option<PathBuf>,
    locale: &str,
) -> Result<ExitCode> {
    let options = match GenOptions::resolve(
        template_dir.as_deref(),
        out_dir.as_deref(),
        name.as_deref(),
        options_file.as_deref(),
    ) {
        Ok(options) => options,
        Err(e) => {
            println!("{}", e);
            println!("{}", t!("gen.usage", locale = locale));
            return Ok(ExitCode::from(2));
        }
    };

    if !is_directory(&options.template_dir) {
        println!(
            "{}",
            t!(
                "gen.not_a_directory",
                locale = locale,
                path = options.template_dir.display()
            )
            .red()
        );
        return Ok(ExitCode::from(1));
    }

    let produced = template::generate(&options)?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("gen.done", locale = locale, count = produced).bold()
    );
    Ok(ExitCode::SUCCESS)
}
