//! The bootstrap state machine.

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::capability::{
    probe, Capability, CapabilityKind, Provenance, ResolutionState, ResolvedPath, ATTACH_PATH_KEY,
};
use crate::error::{BootError, Result};
use crate::inject::Injector;
use crate::launch::LaunchHook;
use crate::locator::{Locate, OsStrategy};
use crate::platform::HostOs;
use crate::runtime::Runtime;
use crate::state::{PathStore, PersistentConfig};
use crate::ui::{response_channel, DialogOutcome, DialogRequest, PathDialog, UserPaths};

use super::state::{BootOutcome, BootState};

/// Native library backing the attach API.
const ATTACH_LIBRARY: &str = "attach";

/// Property telling an embedded JavaFX toolkit not to take over the macOS app.
const MACOS_EMBEDDED_PROPERTY: &str = "javafx.macosx.embedded";

/// Drives one bootstrap: probe, resolve, ask, inject, launch.
///
/// All collaborators are handed in at construction. The orchestrator is the
/// only writer of the settings it loads, and it loads them only when some
/// capability is missing.
pub struct Orchestrator {
    runtime: Box<dyn Runtime>,
    locator: Box<dyn Locate>,
    dialog: Option<Box<dyn PathDialog>>,
    launcher: Box<dyn LaunchHook>,
    store: PathStore,
    injector: Injector,
    host: HostOs,
    config: Option<PersistentConfig>,
    capabilities: Vec<Capability>,
    cached_attach: Option<PathBuf>,
    located_attach: Option<PathBuf>,
    history: Vec<BootState>,
}

impl Orchestrator {
    pub fn new(
        runtime: Box<dyn Runtime>,
        locator: Box<dyn Locate>,
        dialog: Box<dyn PathDialog>,
        launcher: Box<dyn LaunchHook>,
        store: PathStore,
        host: HostOs,
    ) -> Self {
        Self {
            runtime,
            locator,
            dialog: Some(dialog),
            launcher,
            store,
            injector: Injector::new(&OsStrategy::for_os(host)),
            host,
            config: None,
            capabilities: CapabilityKind::ALL.into_iter().map(Capability::new).collect(),
            cached_attach: None,
            located_attach: None,
            history: Vec::new(),
        }
    }

    /// States visited so far, in order.
    pub fn history(&self) -> &[BootState] {
        &self.history
    }

    pub fn capability(&self, kind: CapabilityKind) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.kind() == kind)
    }

    fn capability_mut(&mut self, kind: CapabilityKind) -> Option<&mut Capability> {
        self.capabilities.iter_mut().find(|c| c.kind() == kind)
    }

    pub fn runtime(&self) -> &dyn Runtime {
        self.runtime.as_ref()
    }

    /// Settings as loaded (and updated) by this run. `None` until something
    /// needed resolving.
    pub fn config(&self) -> Option<&PersistentConfig> {
        self.config.as_ref()
    }

    fn enter(&mut self, state: BootState) {
        tracing::debug!("Boot state: {}", state);
        self.history.push(state);
    }

    /// Run the bootstrap to completion. The launch hook is called at most once.
    pub fn run(&mut self) -> Result<BootOutcome> {
        if !self.history.is_empty() {
            return Err(BootError::Other(anyhow!("Bootstrap has already run")));
        }

        self.enter(BootState::Init);
        self.probe_all();
        self.enter(BootState::ProbeDone);

        if self.capabilities.iter().all(Capability::is_available) {
            self.enter(BootState::DirectStart);
            let exit_code = self.launch(None, false)?;
            return Ok(BootOutcome::Launched {
                exit_code,
                direct: true,
            });
        }

        self.enter(BootState::NeedsResolution);
        let mut config = self.store.load();
        self.cached_attach = config.get(ATTACH_PATH_KEY).map(PathBuf::from);

        self.enter(BootState::Resolving);
        self.apply_cached(&config);
        self.apply_located(&mut config);
        self.config = Some(config);

        if self.capabilities.iter().all(Capability::is_satisfied) {
            self.enter(BootState::ReadyToLaunch);
            let exit_code = self.launch(None, true)?;
            return Ok(BootOutcome::Launched {
                exit_code,
                direct: false,
            });
        }

        self.enter(BootState::AwaitingUserInput);
        let outcome = self.ask_user();
        let mut dialog = self.dialog.take();

        match outcome {
            DialogOutcome::Submitted(paths) => {
                // The dialog is dismissed while completion runs on the worker.
                let this = &mut *self;
                let worker = std::thread::scope(|s| {
                    let completion = s.spawn(move || this.complete(paths));
                    if let Some(dialog) = dialog.as_mut() {
                        dialog.hide();
                    }
                    completion.join()
                });
                let exit_code = worker
                    .map_err(|_| BootError::Other(anyhow!("Bootstrap completion panicked")))??;
                Ok(BootOutcome::Launched {
                    exit_code,
                    direct: false,
                })
            }
            DialogOutcome::Cancelled => {
                if let Some(dialog) = dialog.as_mut() {
                    dialog.hide();
                }
                for cap in self.capabilities.iter_mut().filter(|c| !c.is_satisfied()) {
                    cap.advance(ResolutionState::Failed);
                }
                self.enter(BootState::Cancelled);
                tracing::info!("{}; nothing was launched", BootError::Cancelled);
                Ok(BootOutcome::Cancelled)
            }
        }
    }

    fn probe_all(&mut self) {
        for cap in &mut self.capabilities {
            let available = probe(self.runtime.as_ref(), cap.kind());
            if available {
                tracing::info!("{} is available", cap.kind());
            }
            cap.advance(ResolutionState::Probed { available });
        }
    }

    fn apply_cached(&mut self, config: &PersistentConfig) {
        for cap in self.capabilities.iter_mut().filter(|c| !c.is_available()) {
            let kind = cap.kind();
            let Some(cached) = config.get(kind.store_key()) else {
                tracing::debug!("No cached path for {}", kind);
                continue;
            };

            match ResolvedPath::verified(cached, Provenance::FromCache) {
                Some(resolved) => {
                    tracing::debug!("Using cached {} at {}", kind, resolved.path().display());
                    self.injector
                        .add_to_search_path(self.runtime.as_mut(), resolved.path());
                    cap.advance(ResolutionState::Injected(resolved));
                }
                None => tracing::debug!("Cached {} path {} no longer exists", kind, cached),
            }
        }
    }

    fn apply_located(&mut self, config: &mut PersistentConfig) {
        let mut changed = false;

        for cap in self.capabilities.iter_mut().filter(|c| !c.is_satisfied()) {
            let kind = cap.kind();
            let Some(resolved) = self
                .locator
                .locate(kind, self.runtime.info())
                .and_then(|p| ResolvedPath::verified(p, Provenance::FromSearch))
            else {
                continue;
            };

            tracing::info!("Found {} at {}", kind, resolved.path().display());
            cap.advance(ResolutionState::Located(resolved.clone()));
            self.injector
                .add_to_search_path(self.runtime.as_mut(), resolved.path());
            config.set(kind.store_key(), &resolved.path().to_string_lossy());
            if kind == CapabilityKind::AttachSupport {
                self.located_attach = Some(resolved.path().to_path_buf());
            }
            cap.advance(ResolutionState::Injected(resolved));
            changed = true;
        }

        if changed {
            self.persist(config);
        }
    }

    fn persist(&self, config: &PersistentConfig) {
        if let Err(e) = self.store.save(config) {
            tracing::warn!("{}", e);
        }
    }

    /// Best-effort path to offer as the dialog default.
    fn known_path(&self, kind: CapabilityKind) -> Option<PathBuf> {
        let cap = self.capability(kind)?;
        if let Some(resolved) = cap.resolved_path() {
            return Some(resolved.path().to_path_buf());
        }
        if cap.is_available() {
            return self.locator.locate(kind, self.runtime.info());
        }
        None
    }

    fn ask_user(&mut self) -> DialogOutcome {
        let request = DialogRequest {
            attach_path: self.known_path(CapabilityKind::AttachSupport),
            jfx_path: self.known_path(CapabilityKind::UiRuntime),
            modal: true,
        };
        tracing::debug!("Asking for paths with defaults {:?}", request);

        if self.host == HostOs::MacOs {
            self.runtime.set_property(MACOS_EMBEDDED_PROPERTY, "true");
        }

        let Some(dialog) = self.dialog.as_mut() else {
            return DialogOutcome::Cancelled;
        };
        dialog.init();
        let (responder, pending) = response_channel();
        dialog.show(request, responder);
        pending.wait()
    }

    /// Apply user-supplied paths, remember them and launch.
    ///
    /// A path injected earlier from the cache or the locator is taken off the
    /// class path so the user's choice is the one the runtime resolves.
    fn complete(&mut self, paths: UserPaths) -> Result<i32> {
        let mut config = self.config.take().unwrap_or_else(|| self.store.load());

        for (kind, path) in [
            (CapabilityKind::AttachSupport, &paths.attach),
            (CapabilityKind::UiRuntime, &paths.jfx),
        ] {
            let previous = self
                .capability(kind)
                .and_then(Capability::resolved_path)
                .map(|resolved| resolved.path().to_path_buf());
            self.injector
                .replace_in_search_path(self.runtime.as_mut(), previous.as_deref(), path);
            config.set(kind.store_key(), &path.to_string_lossy());

            let state = match ResolvedPath::verified(path.as_path(), Provenance::FromUserInput) {
                Some(resolved) => ResolutionState::Injected(resolved),
                None => {
                    tracing::warn!("{} path {} does not exist", kind, path.display());
                    ResolutionState::Failed
                }
            };
            if let Some(cap) = self.capability_mut(kind) {
                cap.advance(state);
            }
        }

        self.persist(&config);
        self.config = Some(config);
        self.launch(Some(&paths.attach), true)
    }

    /// Attach path for native activation: user-supplied, else located, else
    /// cached. The first non-empty existing one wins.
    fn attach_path(&self, user: Option<&Path>) -> Option<PathBuf> {
        [
            user.map(Path::to_path_buf),
            self.located_attach.clone(),
            self.cached_attach.clone(),
        ]
        .into_iter()
        .flatten()
        .find(|p| !p.as_os_str().is_empty() && p.exists())
    }

    fn launch(&mut self, user_attach: Option<&Path>, activate: bool) -> Result<i32> {
        if activate {
            if let Some(attach) = self.attach_path(user_attach) {
                // tools.jar sits at <jdk>/lib/tools.jar
                match attach.parent().and_then(Path::parent) {
                    Some(install_root) => {
                        let result = self.injector.load_native_dependency(
                            self.runtime.as_mut(),
                            ATTACH_LIBRARY,
                            install_root,
                        );
                        tracing::debug!("Native {} activation: {:?}", ATTACH_LIBRARY, result);
                    }
                    None => tracing::debug!("No install root above {}", attach.display()),
                }
            }
        }

        self.enter(BootState::Launching);
        let context = self.runtime.launch_context();
        self.launcher.launch(&context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::JFX_PATH_KEY;
    use crate::runtime::{JvmRuntime, LaunchContext, RuntimeInfo};
    use crate::ui::MockDialog;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct StubLocator {
        attach: Option<PathBuf>,
        jfx: Option<PathBuf>,
        calls: Arc<AtomicUsize>,
    }

    impl Locate for StubLocator {
        fn locate(&self, kind: CapabilityKind, _info: &RuntimeInfo) -> Option<PathBuf> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match kind {
                CapabilityKind::AttachSupport => self.attach.clone(),
                CapabilityKind::UiRuntime => self.jfx.clone(),
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingLauncher {
        launches: Arc<Mutex<Vec<LaunchContext>>>,
    }

    impl RecordingLauncher {
        fn launches(&self) -> Vec<LaunchContext> {
            self.launches.lock().unwrap().clone()
        }
    }

    impl LaunchHook for RecordingLauncher {
        fn launch(&mut self, context: &LaunchContext) -> Result<i32> {
            self.launches.lock().unwrap().push(context.clone());
            Ok(0)
        }
    }

    struct Fixture {
        temp: TempDir,
        settings: PathBuf,
        locator_calls: Arc<AtomicUsize>,
        launcher: RecordingLauncher,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let settings = temp.path().join("boot.properties");
            Self {
                temp,
                settings,
                locator_calls: Arc::new(AtomicUsize::new(0)),
                launcher: RecordingLauncher::default(),
            }
        }

        fn settings(&self) -> PathBuf {
            self.settings.clone()
        }

        /// Point the settings file below a regular file so every save fails.
        fn block_settings(&mut self) {
            let blocker = self.file("blocker");
            self.settings = blocker.join("boot.properties");
        }

        fn store(&self) -> PathStore {
            PathStore::new(self.settings())
        }

        /// Create an empty file under the temp dir and return its path.
        fn file(&self, rel: &str) -> PathBuf {
            let path = self.temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"").unwrap();
            path
        }

        fn seed(&self, attach: &Path, jfx: &Path) {
            let mut config = PersistentConfig::default();
            config.set(ATTACH_PATH_KEY, &attach.to_string_lossy());
            config.set(JFX_PATH_KEY, &jfx.to_string_lossy());
            self.store().save(&config).unwrap();
        }

        fn orchestrator(
            &self,
            modules: &[&str],
            located: (Option<PathBuf>, Option<PathBuf>),
            dialog: MockDialog,
            host: HostOs,
        ) -> Orchestrator {
            let info = RuntimeInfo {
                modules: modules.iter().map(|m| m.to_string()).collect(),
                ..Default::default()
            };
            Orchestrator::new(
                Box::new(JvmRuntime::new(info, host)),
                Box::new(StubLocator {
                    attach: located.0,
                    jfx: located.1,
                    calls: Arc::clone(&self.locator_calls),
                }),
                Box::new(dialog),
                Box::new(self.launcher.clone()),
                self.store(),
                host,
            )
        }

        fn locator_calls(&self) -> usize {
            self.locator_calls.load(Ordering::SeqCst)
        }
    }

    fn user_paths(fx: &Fixture) -> UserPaths {
        UserPaths {
            attach: fx.file("user/jdk/lib/tools.jar"),
            jfx: fx.file("user/jfx/lib/jfxrt.jar"),
        }
    }

    #[test]
    fn everything_available_starts_directly() {
        let fx = Fixture::new();
        let dialog = MockDialog::cancelling();
        let handle = dialog.handle();
        let mut orch = fx.orchestrator(
            &["jdk.attach", "javafx.base"],
            (None, None),
            dialog,
            HostOs::Linux,
        );

        let outcome = orch.run().unwrap();

        assert_eq!(
            outcome,
            BootOutcome::Launched {
                exit_code: 0,
                direct: true
            }
        );
        assert!(orch.config().is_none());
        assert_eq!(fx.locator_calls(), 0);
        assert!(!handle.was_shown());
        assert!(orch.runtime().class_path().is_empty());
        assert_eq!(fx.launcher.launches().len(), 1);
        assert_eq!(
            orch.history(),
            &[
                BootState::Init,
                BootState::ProbeDone,
                BootState::DirectStart,
                BootState::Launching
            ]
        );
    }

    #[test]
    fn valid_cache_is_used_without_searching() {
        let fx = Fixture::new();
        let cached_attach = fx.file("cached/jdk/lib/tools.jar");
        let cached_jfx = fx.file("cached/jfx/lib/jfxrt.jar");
        fx.seed(&cached_attach, &cached_jfx);
        let located = (
            Some(fx.file("found/jdk/lib/tools.jar")),
            Some(fx.file("found/jfx/lib/jfxrt.jar")),
        );

        let mut orch = fx.orchestrator(&[], located, MockDialog::cancelling(), HostOs::Linux);
        orch.run().unwrap();

        assert_eq!(fx.locator_calls(), 0);
        assert_eq!(
            orch.runtime().class_path(),
            &[cached_attach.clone(), cached_jfx]
        );
        let provenance = orch
            .capability(CapabilityKind::AttachSupport)
            .and_then(Capability::resolved_path)
            .map(ResolvedPath::provenance);
        assert_eq!(provenance, Some(Provenance::FromCache));
        assert_eq!(fx.launcher.launches().len(), 1);
    }

    #[test]
    fn stale_cache_falls_back_to_search_and_persists() {
        let fx = Fixture::new();
        fx.seed(
            Path::new("/nonexistent/jdk/lib/tools.jar"),
            Path::new("/nonexistent/jfx/lib/jfxrt.jar"),
        );
        let found_attach = fx.file("found/jdk/lib/tools.jar");
        let found_jfx = fx.file("found/jfx/lib/jfxrt.jar");

        let mut orch = fx.orchestrator(
            &[],
            (Some(found_attach.clone()), Some(found_jfx.clone())),
            MockDialog::cancelling(),
            HostOs::Linux,
        );
        let outcome = orch.run().unwrap();

        assert!(matches!(outcome, BootOutcome::Launched { direct: false, .. }));
        assert!(fx.locator_calls() >= 2);
        assert_eq!(
            orch.runtime().class_path(),
            &[found_attach.clone(), found_jfx.clone()]
        );

        let reloaded = fx.store().load();
        assert_eq!(
            reloaded.get(ATTACH_PATH_KEY),
            Some(found_attach.to_string_lossy().as_ref())
        );
        assert_eq!(
            reloaded.get(JFX_PATH_KEY),
            Some(found_jfx.to_string_lossy().as_ref())
        );
        assert!(orch.history().contains(&BootState::ReadyToLaunch));
    }

    #[test]
    fn user_input_is_injected_and_saved() {
        let fx = Fixture::new();
        let paths = user_paths(&fx);
        let dialog = MockDialog::submitting(paths.clone());
        let handle = dialog.handle();

        let mut orch = fx.orchestrator(&[], (None, None), dialog, HostOs::Linux);
        let outcome = orch.run().unwrap();

        assert!(matches!(outcome, BootOutcome::Launched { direct: false, .. }));
        assert_eq!(handle.init_count(), 1);
        assert_eq!(handle.hide_count(), 1);
        assert_eq!(
            orch.runtime().class_path(),
            &[paths.attach.clone(), paths.jfx.clone()]
        );

        let reloaded = fx.store().load();
        assert_eq!(
            reloaded.get(ATTACH_PATH_KEY),
            Some(paths.attach.to_string_lossy().as_ref())
        );
        assert_eq!(
            reloaded.get(JFX_PATH_KEY),
            Some(paths.jfx.to_string_lossy().as_ref())
        );
        assert_eq!(fx.launcher.launches().len(), 1);
        assert_eq!(
            orch.history(),
            &[
                BootState::Init,
                BootState::ProbeDone,
                BootState::NeedsResolution,
                BootState::Resolving,
                BootState::AwaitingUserInput,
                BootState::Launching
            ]
        );
    }

    #[test]
    fn submission_overwrites_both_keys() {
        let fx = Fixture::new();
        let old_attach = fx.file("old/jdk/lib/tools.jar");
        fx.seed(&old_attach, Path::new("/nonexistent/jfxrt.jar"));
        let paths = user_paths(&fx);
        let dialog = MockDialog::submitting(paths.clone());
        let handle = dialog.handle();

        let mut orch = fx.orchestrator(&[], (None, None), dialog, HostOs::Linux);
        orch.run().unwrap();

        // The still-valid cached path is offered as the default.
        assert_eq!(handle.requests()[0].attach_path, Some(old_attach));
        assert_eq!(handle.requests()[0].jfx_path, None);

        let reloaded = fx.store().load();
        assert_eq!(
            reloaded.get(ATTACH_PATH_KEY),
            Some(paths.attach.to_string_lossy().as_ref())
        );
        assert_eq!(orch.runtime().class_path(), &[paths.attach, paths.jfx]);
    }

    #[test]
    fn user_path_replaces_located_path_on_class_path() {
        let fx = Fixture::new();
        let found_attach = fx.file("found/jdk/lib/tools.jar");
        let paths = user_paths(&fx);

        let mut orch = fx.orchestrator(
            &[],
            (Some(found_attach.clone()), None),
            MockDialog::submitting(paths.clone()),
            HostOs::Linux,
        );
        orch.run().unwrap();

        let launches = fx.launcher.launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(
            launches[0].class_path,
            vec![paths.attach.clone(), paths.jfx.clone()]
        );
        assert!(!launches[0].class_path.contains(&found_attach));

        let provenance = orch
            .capability(CapabilityKind::AttachSupport)
            .and_then(Capability::resolved_path)
            .map(ResolvedPath::provenance);
        assert_eq!(provenance, Some(Provenance::FromUserInput));
    }

    #[test]
    fn failed_save_after_locating_still_launches() {
        let mut fx = Fixture::new();
        fx.block_settings();
        let located = (
            Some(fx.file("found/jdk/lib/tools.jar")),
            Some(fx.file("found/jfx/lib/jfxrt.jar")),
        );

        let mut orch = fx.orchestrator(&[], located, MockDialog::cancelling(), HostOs::Linux);
        let outcome = orch.run().unwrap();

        assert!(matches!(outcome, BootOutcome::Launched { direct: false, .. }));
        assert_eq!(fx.launcher.launches().len(), 1);
        assert!(!fx.settings().exists());
    }

    #[test]
    fn failed_save_after_user_input_still_launches() {
        let mut fx = Fixture::new();
        fx.block_settings();
        let paths = user_paths(&fx);

        let mut orch = fx.orchestrator(
            &[],
            (None, None),
            MockDialog::submitting(paths.clone()),
            HostOs::Linux,
        );
        let outcome = orch.run().unwrap();

        assert!(matches!(outcome, BootOutcome::Launched { direct: false, .. }));
        let launches = fx.launcher.launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].class_path, vec![paths.attach, paths.jfx]);
    }

    #[test]
    fn dialog_is_hidden_after_cancel() {
        let fx = Fixture::new();
        let dialog = MockDialog::cancelling();
        let handle = dialog.handle();
        let mut orch = fx.orchestrator(&[], (None, None), dialog, HostOs::Linux);

        orch.run().unwrap();

        assert_eq!(handle.init_count(), 1);
        assert_eq!(handle.hide_count(), 1);
    }

    #[test]
    fn cancel_launches_nothing() {
        let fx = Fixture::new();
        let mut orch = fx.orchestrator(&[], (None, None), MockDialog::cancelling(), HostOs::Linux);

        let outcome = orch.run().unwrap();

        assert_eq!(outcome, BootOutcome::Cancelled);
        assert!(fx.launcher.launches().is_empty());
        assert_eq!(orch.history().last(), Some(&BootState::Cancelled));
        assert!(!fx.settings().exists());
        assert_eq!(
            orch.capability(CapabilityKind::UiRuntime).map(Capability::state),
            Some(&ResolutionState::Failed)
        );
    }

    #[test]
    fn dropped_responder_is_treated_as_cancel() {
        let fx = Fixture::new();
        let mut orch = fx.orchestrator(&[], (None, None), MockDialog::abandoning(), HostOs::Linux);
        assert_eq!(orch.run().unwrap(), BootOutcome::Cancelled);
        assert!(fx.launcher.launches().is_empty());
    }

    #[test]
    fn available_capability_path_is_located_for_dialog_defaults() {
        let fx = Fixture::new();
        let found_attach = fx.file("found/jdk/lib/tools.jar");
        let dialog = MockDialog::cancelling();
        let handle = dialog.handle();

        let mut orch = fx.orchestrator(
            &["jdk.attach"],
            (Some(found_attach.clone()), None),
            dialog,
            HostOs::Linux,
        );
        orch.run().unwrap();

        assert_eq!(handle.requests()[0].attach_path, Some(found_attach));
        assert!(handle.requests()[0].modal);
    }

    #[test]
    fn macos_marks_toolkit_as_embedded() {
        let fx = Fixture::new();
        let mut orch = fx.orchestrator(&[], (None, None), MockDialog::cancelling(), HostOs::MacOs);
        orch.run().unwrap();

        let context = orch.runtime().launch_context();
        assert_eq!(
            context.properties.get(MACOS_EMBEDDED_PROPERTY).map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn user_attach_path_activates_native_library() {
        let fx = Fixture::new();
        let paths = user_paths(&fx);
        let native = fx.file("user/jdk/lib/libattach.so");

        let mut orch = fx.orchestrator(
            &[],
            (None, None),
            MockDialog::submitting(paths),
            HostOs::Linux,
        );
        orch.run().unwrap();

        let launches = fx.launcher.launches();
        assert_eq!(launches[0].loaded_libraries, vec![native]);
    }

    #[test]
    fn direct_start_skips_native_activation() {
        let fx = Fixture::new();
        let mut orch = fx.orchestrator(
            &["jdk.attach", "javafx.base"],
            (None, None),
            MockDialog::cancelling(),
            HostOs::Linux,
        );
        orch.run().unwrap();
        assert!(fx.launcher.launches()[0].library_path.is_empty());
    }

    #[test]
    fn second_run_is_rejected() {
        let fx = Fixture::new();
        let mut orch = fx.orchestrator(
            &["jdk.attach", "javafx.base"],
            (None, None),
            MockDialog::cancelling(),
            HostOs::Linux,
        );
        orch.run().unwrap();
        assert!(orch.run().is_err());
        assert_eq!(fx.launcher.launches().len(), 1);
    }
}
