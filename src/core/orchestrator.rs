//! # Orchestration Module / 编排模块
//!
//! The strictly linear ICT sequence: reset the output root, stage reference
//! assets and the report template, combine the per-platform report
//! fragments, then build and run the primary platform followed by each
//! optional platform. Optional platforms never abort the run; their
//! failures become outcomes.
//!
//! 严格线性的 ICT 流程：重置输出根目录，放置参考资源和报告模板，
//! 合并各平台报告片段，然后构建并运行主平台及各可选平台。
//! 可选平台不会中止运行；其失败会成为结果记录。

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::{
    core::{
        config::IctConfig,
        models::PlatformOutcome,
        platform::{PlatformManifest, PlatformRegistry},
    },
    infra::{self, command::Toolchain, t},
    reporting,
};

/// File name of the combined report written into the build root.
pub const COMBINED_REPORT: &str = "test_result.report";

/// Drives one complete ICT run over a project tree.
pub struct Orchestrator {
    project_root: PathBuf,
    config: IctConfig,
    toolchain: Toolchain,
    registry: PlatformRegistry,
}

impl Orchestrator {
    pub fn new(
        project_root: PathBuf,
        config: IctConfig,
        toolchain: Toolchain,
        registry: PlatformRegistry,
    ) -> Self {
        Self {
            project_root,
            config,
            toolchain,
            registry,
        }
    }

    /// Runs the full sequence and returns one outcome per platform, the
    /// primary platform first. Any error outside an optional platform's
    /// build/run steps is fatal.
    pub async fn run(&self, no_open: bool) -> Result<Vec<PlatformOutcome>> {
        let build_root = self.project_root.join(&self.config.build_root);

        println!(
            "{}",
            t!("run.resetting_output", path = build_root.display())
        );
        infra::fs::rmdir(&build_root)?;
        infra::fs::mkdir(&build_root)?;

        let report_viewer = self.stage_assets(&build_root)?;
        self.combine_reports(&build_root)?;

        let pattern = Regex::new(&self.config.error_pattern).with_context(|| {
            format!("Invalid error_pattern: {}", self.config.error_pattern)
        })?;

        let mut outcomes = Vec::new();

        // The primary platform is not optional: a missing manifest or any
        // failed step aborts the run.
        let primary = self.config.primary.clone();
        println!("{}", t!("run.platform_running", name = &primary).blue());
        let manifest = self.registry.load(&primary)?;
        self.build_platform(&manifest).await?;
        self.run_platform(&manifest, &build_root, &pattern).await?;
        println!(
            "{}",
            t!("run.platform_completed", name = &primary).green()
        );
        outcomes.push(PlatformOutcome::Completed { platform: primary });

        for name in &self.config.platforms {
            match self.registry.discover(name) {
                None => {
                    let manifest_path = self.registry.manifest_path(name);
                    println!(
                        "{}",
                        t!(
                            "run.platform_missing_warning",
                            name = name,
                            path = manifest_path.display()
                        )
                        .yellow()
                    );
                    outcomes.push(PlatformOutcome::SkippedMissing {
                        platform: name.clone(),
                        manifest: manifest_path,
                    });
                }
                Some(_) => {
                    println!("{}", t!("run.platform_running", name = name).blue());
                    match self.run_optional(name, &build_root, &pattern).await {
                        Ok(()) => {
                            println!(
                                "{}",
                                t!("run.platform_completed", name = name).green()
                            );
                            outcomes.push(PlatformOutcome::Completed {
                                platform: name.clone(),
                            });
                        }
                        Err(e) => {
                            println!("{}", t!("run.platform_failed", name = name).red());
                            outcomes.push(PlatformOutcome::Failed {
                                platform: name.clone(),
                                error: format!("{:#}", e),
                            });
                        }
                    }
                }
            }
        }

        if !no_open {
            println!(
                "{}",
                t!("run.opening_report", path = report_viewer.display())
            );
            // Fire-and-forget; a failing handler only warns.
            if let Err(e) = open::that(&report_viewer) {
                eprintln!("{} {}", t!("run.open_report_failed").yellow(), e);
            }
        }

        Ok(outcomes)
    }

    /// Copies the reference images and the static report template into the
    /// build root, keeping their base names. Returns the staged template
    /// path; it is the viewer opened at the end of the run.
    fn stage_assets(&self, build_root: &Path) -> Result<PathBuf> {
        let ref_images = self.project_root.join(&self.config.ref_images);
        self.stage_one(&ref_images, build_root)?;
        let template = self.project_root.join(&self.config.report_template);
        self.stage_one(&template, build_root)
    }

    fn stage_one(&self, src: &Path, build_root: &Path) -> Result<PathBuf> {
        let file_name = src
            .file_name()
            .with_context(|| format!("Asset path has no file name: {}", src.display()))?;
        let dst = build_root.join(file_name);
        println!(
            "{}",
            t!("run.copying_asset", src = src.display(), dst = dst.display())
        );
        infra::fs::copy(src, &dst)?;
        Ok(dst)
    }

    /// Collects the available report fragments and writes the combined
    /// report. The primary platform's fragment is always expected; optional
    /// fragments are existence-checked with a warning when absent.
    fn combine_reports(&self, build_root: &Path) -> Result<()> {
        let mut report_paths = vec![self.registry.report_path(&self.config.primary)];

        for name in &self.config.platforms {
            let path = self.registry.report_path(name);
            if path.is_file() {
                report_paths.push(path);
            } else {
                println!(
                    "{}",
                    t!(
                        "run.report_missing_warning",
                        path = path.display(),
                        name = name
                    )
                    .yellow()
                );
            }
        }

        let combined = build_root.join(COMBINED_REPORT);
        println!(
            "{}",
            t!(
                "run.combining_reports",
                count = report_paths.len(),
                path = combined.display()
            )
        );
        reporting::create_combined_report(&combined, &report_paths)
    }

    async fn run_optional(
        &self,
        name: &str,
        build_root: &Path,
        pattern: &Regex,
    ) -> Result<()> {
        let manifest = self.registry.load(name)?;
        self.build_platform(&manifest).await?;
        self.run_platform(&manifest, build_root, pattern).await
    }

    /// Invokes the build tool for every configuration/platform pair the
    /// manifest declares.
    async fn build_platform(&self, manifest: &PlatformManifest) -> Result<()> {
        for step in &manifest.builds {
            let project = manifest
                .project
                .as_ref()
                .context("Manifest declares builds but no project file")?;
            let project = self.project_root.join(project);
            println!(
                "{}",
                t!(
                    "run.building_project",
                    project = project.display(),
                    configuration = &step.configuration,
                    platform = &step.platform
                )
                .blue()
            );
            self.toolchain
                .build_project(&project, &step.configuration, &step.platform, &self.project_root)
                .await?;
        }
        Ok(())
    }

    /// Executes every run step: create the output subdirectory, launch the
    /// binary (or custom command) with that subdirectory as the working
    /// directory, then print the error lines filtered from its log.
    async fn run_platform(
        &self,
        manifest: &PlatformManifest,
        build_root: &Path,
        pattern: &Regex,
    ) -> Result<()> {
        for step in &manifest.runs {
            let out_dir = build_root.join(&step.out_dir);
            infra::fs::mkdir(&out_dir)?;

            if let Some(command) = &step.command {
                infra::command::run_custom_command(command, &out_dir).await?;
            } else if let Some(binary) = &step.binary {
                let executable = self.project_root.join(binary);
                infra::command::run_pipeline(&executable.display().to_string(), &out_dir)
                    .await?;
            }

            if let Some(log_file) = step.log_file() {
                let log_path = out_dir.join(log_file);
                println!(
                    "{}",
                    t!("run.filtered_log", path = log_path.display())
                );
                println!("{}", reporting::filter_lines(&log_path, pattern)?);
            }
        }
        Ok(())
    }
}
