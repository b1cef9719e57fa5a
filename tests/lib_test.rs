//! Library integration tests.

use std::fs;
use std::path::PathBuf;

use fxboot::boot::{BootOutcome, Orchestrator};
use fxboot::capability::{CapabilityKind, ATTACH_PATH_KEY, JFX_PATH_KEY};
use fxboot::launch::LaunchHook;
use fxboot::locator::{Locate, OsStrategy, PlatformLocator};
use fxboot::platform::HostOs;
use fxboot::runtime::{JvmRuntime, LaunchContext, Runtime, RuntimeInfo};
use fxboot::state::{PathStore, PersistentConfig};
use fxboot::ui::{MockDialog, UserPaths};
use fxboot::BootError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = BootError::NativeLoadFailed {
        library: "attach".into(),
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fxboot::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use fxboot::cli::{Cli, Commands};

    let cli = Cli::parse_from(["fxboot", "status", "--json"]);
    if let Commands::Status(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn settings_survive_a_fresh_store() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("nested").join("boot.properties");

    let mut config = PersistentConfig::default();
    config.set(ATTACH_PATH_KEY, r"C:\Program Files\Java\jdk1.8.0_202\lib\tools.jar");
    config.set(JFX_PATH_KEY, "/opt/jfx:sdk/lib/jfxrt.jar");
    PathStore::new(&file).save(&config).unwrap();

    let reloaded = PathStore::new(&file).load();
    assert_eq!(reloaded, config);
}

#[test]
fn bundle_scan_picks_artifact_for_running_version() {
    let temp = TempDir::new().unwrap();
    let roots = temp.path().join("JavaVirtualMachines");
    let legacy = roots.join("1.6.0_65-b14-462.jdk");
    let modern = roots.join("jdk1.7.0_80.jdk");
    fs::create_dir_all(legacy.join("Contents/Classes")).unwrap();
    fs::write(legacy.join("Contents/Classes/classes.jar"), b"").unwrap();
    fs::create_dir_all(modern.join("Contents/Home/lib")).unwrap();
    fs::write(modern.join("Contents/Home/lib/tools.jar"), b"").unwrap();

    let strategy = OsStrategy::for_os(HostOs::MacOs).with_bundle_roots(vec![roots], ".jdk");
    let locator = PlatformLocator::new(strategy);

    let info_for = |version: &str| RuntimeInfo {
        home: Some(temp.path().join("jdk-elsewhere/Contents/Home")),
        version: version.to_string(),
        modules: Vec::new(),
    };

    assert_eq!(
        locator.locate(CapabilityKind::AttachSupport, &info_for("1.6.0_65")),
        Some(legacy.join("Contents/Classes/classes.jar"))
    );
    assert_eq!(
        locator.locate(CapabilityKind::AttachSupport, &info_for("1.7.0_80")),
        Some(modern.join("Contents/Home/lib/tools.jar"))
    );
}

struct NoLaunch;

impl LaunchHook for NoLaunch {
    fn launch(&mut self, _context: &LaunchContext) -> fxboot::Result<i32> {
        Ok(0)
    }
}

struct NothingFound;

impl Locate for NothingFound {
    fn locate(&self, _kind: CapabilityKind, _info: &RuntimeInfo) -> Option<PathBuf> {
        None
    }
}

#[test]
fn orchestrator_injects_user_paths() {
    let temp = TempDir::new().unwrap();
    let attach = temp.path().join("tools.jar");
    let jfx = temp.path().join("jfxrt.jar");
    fs::write(&attach, b"").unwrap();
    fs::write(&jfx, b"").unwrap();

    let mut orchestrator = Orchestrator::new(
        Box::new(JvmRuntime::new(RuntimeInfo::default(), HostOs::Linux)),
        Box::new(NothingFound),
        Box::new(MockDialog::submitting(UserPaths {
            attach: attach.clone(),
            jfx: jfx.clone(),
        })),
        Box::new(NoLaunch),
        PathStore::new(temp.path().join("boot.properties")),
        HostOs::Linux,
    );

    let outcome = orchestrator.run().unwrap();
    assert!(matches!(outcome, BootOutcome::Launched { .. }));
    assert_eq!(orchestrator.runtime().class_path(), &[attach, jfx]);
}
