//! Integration tests for the imported-shared builder.
//!
//! These tests drive the full three-phase flow the way an orchestrator
//! would: strategy lookup through the registry, options declared in TOML
//! build configuration, and a fresh source/install tree per test.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use stevedore::{Arch, BuildContext, BuildOptions, BuilderKind, BuilderRegistry, Target};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Fixture {
    _tmp: TempDir,
    source_dir: PathBuf,
    install_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        init_tracing();
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("source");
        let install_dir = tmp.path().join("install");
        fs::create_dir_all(&source_dir).unwrap();
        Fixture {
            _tmp: tmp,
            source_dir,
            install_dir,
        }
    }

    fn write(&self, rel: &str, contents: &str) {
        let path = self.source_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn context(&self, arch: Arch, options_toml: &str) -> BuildContext {
        let options: BuildOptions = toml::from_str(options_toml).unwrap();
        BuildContext::new(
            self.source_dir.clone(),
            self.install_dir.clone(),
            Target::new("maps-sdk", arch),
        )
        .with_options(options)
    }
}

fn run_all_phases(ctx: &BuildContext) -> anyhow::Result<()> {
    let registry = BuilderRegistry::new();
    let builder = registry.get(BuilderKind::ImportedShared).unwrap();
    builder.configure(ctx)?;
    builder.build(ctx)?;
    builder.install(ctx)
}

fn tree(dir: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    if dir.exists() {
        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                let rel = entry.path().strip_prefix(dir).unwrap();
                entries.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    entries.sort();
    entries
}

// ============================================================================
// Full install flow
// ============================================================================

#[test]
fn test_aar_style_layout() {
    let fixture = Fixture::new();
    fixture.write("include/maps/maps.h", "void maps_init(void);");
    fixture.write("jni/arm64-v8a/libmaps.so", "arm64 elf");
    fixture.write("jni/armeabi-v7a/libmaps.so", "armv7 elf");

    let ctx = fixture.context(Arch::Arm64, r#"lib_subdir = "jni/{android_abi}""#);
    run_all_phases(&ctx).unwrap();

    assert_eq!(
        tree(&fixture.install_dir),
        vec!["include/maps/maps.h", "lib/libmaps.so"]
    );
    assert_eq!(
        fs::read_to_string(fixture.install_dir.join("lib/libmaps.so")).unwrap(),
        "arm64 elf"
    );
}

#[test]
fn test_per_arch_installs_do_not_collide() {
    let fixture = Fixture::new();
    fixture.write("jni/arm64-v8a/libmaps.so", "arm64 elf");
    fixture.write("jni/x86_64/libmaps.so", "x86_64 elf");

    // Distinct install dirs per target, as the orchestrator guarantees.
    for (arch, expected) in [(Arch::Arm64, "arm64 elf"), (Arch::X86_64, "x86_64 elf")] {
        let install_dir = fixture.install_dir.join(arch.to_string());
        let ctx = BuildContext::new(
            fixture.source_dir.clone(),
            install_dir.clone(),
            Target::new("maps-sdk", arch),
        )
        .with_options(BuildOptions::new().with_str("lib_subdir", "jni/{android_abi}"));

        run_all_phases(&ctx).unwrap();
        assert_eq!(
            fs::read_to_string(install_dir.join("lib/libmaps.so")).unwrap(),
            expected
        );
    }
}

#[test]
fn test_explicit_lib_files_from_toml() {
    let fixture = Fixture::new();
    fixture.write("lib/libmaps.so", "maps");
    fixture.write("lib/libutil.so", "util");
    fixture.write("lib/libextra.so", "extra");

    let ctx = fixture.context(Arch::Arm64, r#"lib_files = ["libmaps.so", "libutil.so"]"#);
    run_all_phases(&ctx).unwrap();

    assert_eq!(
        tree(&fixture.install_dir),
        vec!["lib/libmaps.so", "lib/libutil.so"]
    );
}

#[test]
fn test_wildcard_defaults() {
    let fixture = Fixture::new();
    fixture.write("lib/libmaps.so", "maps");
    fixture.write("lib/README.md", "docs");
    fixture.write("lib/debug/libmaps.so", "debug build");

    let ctx = fixture.context(Arch::X86, "");
    run_all_phases(&ctx).unwrap();

    assert_eq!(tree(&fixture.install_dir), vec!["lib/libmaps.so"]);
}

#[test]
fn test_reinstall_replaces_stale_headers() {
    let fixture = Fixture::new();
    fixture.write("include/v2.h", "v2");
    fixture.write("lib/libmaps.so", "elf");

    // Simulate leftovers from an earlier version of the package.
    let stale = fixture.install_dir.join("include/v1.h");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "v1").unwrap();

    let ctx = fixture.context(Arch::Arm64, "");
    run_all_phases(&ctx).unwrap();

    assert_eq!(
        tree(&fixture.install_dir),
        vec!["include/v2.h", "lib/libmaps.so"]
    );
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_missing_lib_dir_reports_resolved_path() {
    let fixture = Fixture::new();

    let ctx = fixture.context(Arch::Arm64, r#"lib_subdir = "jni/{android_abi}""#);
    let err = run_all_phases(&ctx).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("library directory not found"));
    assert!(msg.contains("jni/arm64-v8a"));
    assert!(msg.contains("source_dir:"));

    // Nothing was installed.
    assert!(tree(&fixture.install_dir).is_empty());
}

#[test]
fn test_missing_explicit_file_stops_after_earlier_copies() {
    let fixture = Fixture::new();
    fixture.write("lib/liba.so", "a");

    let ctx = fixture.context(Arch::Arm64, r#"lib_files = ["liba.so", "libmissing.so"]"#);
    let err = run_all_phases(&ctx).unwrap_err();

    assert!(err.to_string().contains("libmissing.so"));
    assert_eq!(tree(&fixture.install_dir), vec!["lib/liba.so"]);
}
