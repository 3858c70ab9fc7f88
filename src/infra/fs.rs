//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the small set of file system primitives the
//! orchestrator and the generator are built on: idempotent directory
//! creation and removal, and a copy that dispatches on the source kind.
//!
//! 此模块提供编排器和生成器所依赖的少量文件系统原语：
//! 幂等的目录创建与删除，以及根据源类型分派的复制操作。

use anyhow::{Context, Result};
use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

/// Creates a directory and all missing parents.
/// Calling it on an existing directory is a no-op.
///
/// # Arguments
/// * `path` - Directory to create
pub fn mkdir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Removes a directory tree. Calling it on a missing path is a no-op.
///
/// # Arguments
/// * `path` - Directory to remove
pub fn rmdir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

/// Copies `src` to `dst`, dispatching to a tree copy when the source is a
/// directory and to a single-file copy otherwise. The destination's parent
/// must already exist.
///
/// # Arguments
/// * `src` - Source file or directory
/// * `dst` - Destination path
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        copy_dir_all(src, dst)
    } else {
        fs::copy(src, dst)
            .with_context(|| {
                format!("Failed to copy {} -> {}", src.display(), dst.display())
            })
            .map(|_| ())
    }
}

/// Copies the entire content of a source directory to a destination directory.
///
/// # Arguments
/// * `from` - Source directory path
/// * `to` - Destination directory path
pub fn copy_dir_all(from: &Path, to: &Path) -> Result<()> {
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.copy_inside = true;
    fs_extra::dir::copy(from, to, &options)
        .with_context(|| format!("Failed to copy {} -> {}", from.display(), to.display()))?;
    Ok(())
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
