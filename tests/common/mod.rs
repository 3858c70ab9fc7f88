// Shared test helpers for integration tests
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a template directory fixture:
///
/// ```text
/// <root>/
/// ├── map.json            {"greet.template": "hello_{name}.out"}
/// ├── file.txt            copied verbatim
/// ├── greet.template      rendered with `name` bound
/// └── nested/
///     └── inner.txt       checks relative-path mirroring
/// ```
pub fn setup_template_fixture(root: &Path) {
    fs::create_dir_all(root.join("nested")).expect("Failed to create template directories");
    fs::write(
        root.join("map.json"),
        r#"{"greet.template": "hello_{name}.out"}"#,
    )
    .expect("Failed to write map.json");
    fs::write(root.join("file.txt"), "verbatim content").expect("Failed to write file.txt");
    fs::write(root.join("greet.template"), "Hello, {{ name }}!")
        .expect("Failed to write greet.template");
    fs::write(root.join("nested").join("inner.txt"), "inner")
        .expect("Failed to write nested file");
}

/// Creates a minimal orchestrator project fixture with a primary platform
/// whose manifest declares no build or run steps, and returns the project
/// root. Optional platforms are left absent unless added by the caller.
///
/// 创建最小的编排器项目夹具：主平台清单不声明任何构建或运行步骤。
/// 可选平台默认缺失，由调用方按需添加。
pub fn setup_project_fixture(root: &Path) -> PathBuf {
    let data = root.join("data");
    fs::create_dir_all(data.join("ICT_ref_images")).expect("Failed to create data directories");
    fs::write(data.join("ICT_ref_images").join("ref1.png"), b"png-bytes".as_slice())
        .expect("Failed to write reference image");
    fs::write(data.join("ICTReport.html"), "<html></html>")
        .expect("Failed to write report template");

    add_platform(root, "windows", "");
    fs::write(
        root.join("sources/REI_Platforms/windows/ICT/test_result_windows.report"),
        "WIN",
    )
    .expect("Failed to write primary report fragment");

    root.to_path_buf()
}

/// Adds a platform directory with the given manifest content under the
/// fixture's platforms root.
pub fn add_platform(root: &Path, name: &str, manifest: &str) {
    let ict_dir = root.join("sources/REI_Platforms").join(name).join("ICT");
    fs::create_dir_all(&ict_dir).expect("Failed to create platform directory");
    fs::write(ict_dir.join("IctPlatform.toml"), manifest).expect("Failed to write manifest");
}

/// Adds a report fragment for a platform.
pub fn add_report(root: &Path, name: &str, content: &str) {
    let ict_dir = root.join("sources/REI_Platforms").join(name).join("ICT");
    fs::create_dir_all(&ict_dir).expect("Failed to create platform directory");
    fs::write(
        ict_dir.join(format!("test_result_{}.report", name)),
        content,
    )
    .expect("Failed to write report fragment");
}
