//! Builder for pre-built (imported) shared libraries.
//!
//! Used for libraries that ship as pre-built binaries (e.g., `.so` files
//! extracted from Android AAR packages) rather than being compiled from
//! source. `configure` and `build` are no-ops; all work happens in
//! `install`.
//!
//! Recognized build options:
//! - `include_subdir`: subdirectory within source containing headers
//!   (default: `include`)
//! - `lib_subdir`: subdirectory within source containing shared libraries
//!   (default: `lib`). Supports the `{android_abi}` placeholder, expanded
//!   to the ABI name for the target architecture (e.g.,
//!   `jni/{android_abi}` becomes `jni/arm64-v8a`).
//! - `lib_files`: specific library filenames to copy, in order. When
//!   unset or empty, all `.so`/`.dylib`/`.dll` files in `lib_subdir` are
//!   copied.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::builder::context::BuildContext;
use crate::builder::errors::BuildError;
use crate::builder::{Builder, BuilderKind};
use crate::core::platform::android_abi_name;
use crate::util::fs::{copy_dir_all, copy_file, ensure_dir, remove_dir_all_if_exists};

/// Placeholder expanded to the target's Android ABI directory name.
const ANDROID_ABI_TOKEN: &str = "{android_abi}";

/// File extensions treated as shared libraries in wildcard mode.
const SHARED_LIB_EXTENSIONS: &[&str] = &["so", "dylib", "dll"];

/// Builder for pre-built shared libraries.
pub struct ImportedSharedBuilder;

impl ImportedSharedBuilder {
    /// Create a new imported-shared builder.
    pub fn new() -> Self {
        ImportedSharedBuilder
    }

    /// Copy the source header tree to `install_dir/include`, if present.
    ///
    /// Headers are optional for imported libraries; a missing source
    /// header directory is silently skipped. When present, any existing
    /// install-side `include` tree is replaced wholesale so the result is
    /// an exact mirror of the source tree.
    fn install_headers(&self, ctx: &BuildContext) -> Result<()> {
        let include_subdir = ctx.options.str_or("include_subdir", "include");
        let src_include = ctx.source_dir.join(include_subdir);

        if !src_include.exists() {
            tracing::debug!(
                "no header directory at {}, skipping",
                src_include.display()
            );
            return Ok(());
        }

        let dst_include = ctx.install_dir.join("include");
        remove_dir_all_if_exists(&dst_include)?;
        copy_dir_all(&src_include, &dst_include)
    }

    /// Resolve the library subdirectory, expanding `{android_abi}`.
    ///
    /// An unmapped architecture expands to the empty string, which is kept
    /// as a literal path segment; the existence check on the joined path
    /// reports the failure.
    fn resolve_lib_subdir(&self, ctx: &BuildContext) -> String {
        let lib_subdir = ctx.options.str_or("lib_subdir", "lib");
        lib_subdir.replace(ANDROID_ABI_TOKEN, android_abi_name(ctx.target.arch))
    }

    /// Copy the files named in `lib_files`, in order, failing on the
    /// first missing one.
    fn copy_named_files(&self, files: &[String], src_lib: &Path, dst_lib: &Path) -> Result<u64> {
        let mut count = 0;
        for filename in files {
            let src_file = src_lib.join(filename);
            if !src_file.exists() {
                return Err(BuildError::LibFileNotFound { path: src_file }.into());
            }
            copy_file(&src_file, &dst_lib.join(filename))?;
            count += 1;
        }
        Ok(count)
    }

    /// Copy every shared-library file directly inside `src_lib`.
    ///
    /// Subdirectories and files with other extensions are ignored.
    fn copy_all_shared_libs(&self, src_lib: &Path, dst_lib: &Path) -> Result<u64> {
        let mut count = 0;
        let entries = fs::read_dir(src_lib)
            .with_context(|| format!("failed to read directory: {}", src_lib.display()))?;

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let path = entry.path();
            let is_shared_lib = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SHARED_LIB_EXTENSIONS.contains(&ext));

            if is_shared_lib {
                copy_file(&path, &dst_lib.join(entry.file_name()))?;
                count += 1;
            }
        }
        Ok(count)
    }
}

impl Default for ImportedSharedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for ImportedSharedBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::ImportedShared
    }

    /// No configuration needed for imported libraries.
    fn configure(&self, _ctx: &BuildContext) -> Result<()> {
        Ok(())
    }

    /// No build needed for imported libraries.
    fn build(&self, _ctx: &BuildContext) -> Result<()> {
        Ok(())
    }

    /// Copy pre-built shared libraries and headers to the install directory.
    fn install(&self, ctx: &BuildContext) -> Result<()> {
        ensure_dir(&ctx.install_dir)?;

        self.install_headers(ctx)?;

        let lib_subdir = self.resolve_lib_subdir(ctx);
        let src_lib = ctx.source_dir.join(&lib_subdir);

        if !src_lib.exists() {
            return Err(BuildError::LibDirNotFound {
                path: src_lib,
                source_dir: ctx.source_dir.clone(),
                lib_subdir,
            }
            .into());
        }

        let dst_lib = ctx.install_dir.join("lib");
        ensure_dir(&dst_lib)?;

        let count = match ctx.options.list("lib_files") {
            Some(files) if !files.is_empty() => {
                self.copy_named_files(files, &src_lib, &dst_lib)?
            }
            _ => self.copy_all_shared_libs(&src_lib, &dst_lib)?,
        };

        tracing::debug!(
            target_name = %ctx.target,
            count,
            "installed pre-built shared libraries"
        );

        if ctx.progress.is_none() {
            println!(
                "    Installed pre-built shared libraries from {}/",
                lib_subdir
            );
        }

        Ok(())
    }
}
