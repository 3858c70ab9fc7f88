//! # Template Generation Module / 模板生成模块
//!
//! Walks a template directory and instantiates it under an output root:
//! `.template` files are rendered with the `name` bound into the context,
//! everything else is copied verbatim, and a mandatory `map.json` at the
//! template root renames outputs via `{name}` patterns.
//!
//! 遍历模板目录并在输出根目录下实例化：`.template` 文件在上下文中绑定
//! `name` 后渲染，其余文件原样复制，模板根目录下必需的 `map.json`
//! 通过 `{name}` 模式重命名输出。

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::Tera;
use walkdir::WalkDir;

use crate::core::config::GenOptions;
use crate::infra::{self, t};

/// Renaming rules file, looked up at the template root and skipped during
/// the walk at every depth.
pub const MAP_FILE: &str = "map.json";

/// Extension marking files that go through the template engine.
pub const TEMPLATE_EXT: &str = "template";

/// Token replaced by the name in mapped output file names.
const NAME_TOKEN: &str = "{name}";

/// Loads the mandatory renaming rules from the template root.
fn load_mapping(template_dir: &Path) -> Result<HashMap<String, String>> {
    let map_path = template_dir.join(MAP_FILE);
    let content = fs::read_to_string(&map_path)
        .with_context(|| t!("gen.map_read_failed", path = map_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| t!("gen.map_parse_failed", path = map_path.display()))
}

/// Destination file name for one template-tree entry: the mapped pattern
/// with `{name}` substituted when a rule exists, otherwise the file name
/// with the `.template` suffix stripped, otherwise the file name itself.
fn output_name(file_name: &str, mapping: &HashMap<String, String>, name: &str) -> String {
    if let Some(pattern) = mapping.get(file_name) {
        pattern.replace(NAME_TOKEN, name)
    } else if let Some(stem) = file_name.strip_suffix(&format!(".{}", TEMPLATE_EXT)) {
        stem.to_string()
    } else {
        file_name.to_string()
    }
}

/// Renders one template source with `name` bound into the context.
fn render(source: &str, name: &str) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("name", name);
    Tera::one_off(source, &context, false)
}

/// Instantiates the template tree under the output root and returns the
/// number of files produced. Destination directories mirror the relative
/// layout and are created on demand; any I/O error aborts the run.
pub fn generate(options: &GenOptions) -> Result<usize> {
    let mapping = load_mapping(&options.template_dir)?;
    let mut produced = 0usize;

    for entry in WalkDir::new(&options.template_dir) {
        let entry = entry.with_context(|| {
            format!(
                "Failed to walk template directory: {}",
                options.template_dir.display()
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name == MAP_FILE {
            continue;
        }

        let src_path = entry.path();
        let rel_dir = src_path
            .parent()
            .unwrap_or(options.template_dir.as_path())
            .strip_prefix(&options.template_dir)
            .context("Walked entry escaped the template directory")?;
        let dst_dir = options.out_dir.join(rel_dir);
        infra::fs::mkdir(&dst_dir)?;

        let dst_path = dst_dir.join(output_name(&file_name, &mapping, &options.name));

        let is_template = src_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == TEMPLATE_EXT);

        if is_template {
            println!(
                "{}",
                t!(
                    "gen.generating",
                    src = src_path.display(),
                    dst = dst_path.display()
                )
            );
            let source = fs::read_to_string(src_path)
                .with_context(|| format!("Failed to read template: {}", src_path.display()))?;
            let rendered = render(&source, &options.name)
                .with_context(|| format!("Failed to render template: {}", src_path.display()))?;
            fs::write(&dst_path, rendered.as_bytes())
                .with_context(|| format!("Failed to write output: {}", dst_path.display()))?;
        } else {
            println!(
                "{}",
                t!(
                    "gen.copying",
                    src = src_path.display(),
                    dst = dst_path.display()
                )
            );
            fs::copy(src_path, &dst_path).with_context(|| {
                format!(
                    "Failed to copy {} -> {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
        produced += 1;
    }

    Ok(produced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_prefers_mapping_over_suffix_strip() {
        let mut mapping = HashMap::new();
        mapping.insert(
            "greet.template".to_string(),
            "hello_{name}.out".to_string(),
        );

        assert_eq!(
            output_name("greet.template", &mapping, "Alice"),
            "hello_Alice.out"
        );
        assert_eq!(output_name("plain.template", &mapping, "Alice"), "plain");
        assert_eq!(output_name("file.txt", &mapping, "Alice"), "file.txt");
    }

    #[test]
    fn render_binds_name_into_context() {
        let rendered = render("Hello, {{ name }}!", "Alice").unwrap();
        assert_eq!(rendered, "Hello, Alice!");
    }
}
