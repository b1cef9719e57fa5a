//! Starting the downstream application.
//!
//! The orchestrator hands a [`LaunchContext`] to a [`LaunchHook`] exactly
//! once. [`JavaLauncher`] turns that context into a `java` command line and
//! waits for the child.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::error::{BootError, Result};
use crate::runtime::LaunchContext;

/// Starts the downstream application.
pub trait LaunchHook: Send {
    /// Start the application and return its exit code.
    fn launch(&mut self, context: &LaunchContext) -> Result<i32>;
}

/// Launches a main class on a `java` executable.
#[derive(Debug, Clone)]
pub struct JavaLauncher {
    java: Option<PathBuf>,
    main_class: String,
    args: Vec<String>,
}

impl JavaLauncher {
    pub fn new(main_class: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            java: None,
            main_class: main_class.into(),
            args,
        }
    }

    /// Use an explicit `java` executable instead of the runtime's.
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = Some(java.into());
        self
    }

    /// Executable to run: the explicit one, else `<java.home>/bin/java`, else
    /// `java` from `PATH`.
    pub fn executable(&self, context: &LaunchContext) -> PathBuf {
        if let Some(java) = &self.java {
            return java.clone();
        }
        context
            .java_home
            .as_ref()
            .map(|home| home.join("bin").join(java_binary_name()))
            .filter(|p| p.is_file())
            .unwrap_or_else(|| PathBuf::from(java_binary_name()))
    }

    /// Arguments passed to `java`, in order.
    pub fn arguments(&self, context: &LaunchContext) -> anyhow::Result<Vec<OsString>> {
        let mut args = Vec::new();

        if !context.class_path.is_empty() {
            let cp = std::env::join_paths(&context.class_path)
                .context("Class path entry contains a path separator")?;
            args.push(OsString::from("-cp"));
            args.push(cp);
        }

        if !context.library_path.is_empty() {
            let lp = std::env::join_paths(&context.library_path)
                .context("Library path entry contains a path separator")?;
            let mut flag = OsString::from("-Djava.library.path=");
            flag.push(lp);
            args.push(flag);
        }

        for (key, value) in &context.properties {
            args.push(OsString::from(format!("-D{}={}", key, value)));
        }

        args.push(OsString::from(&self.main_class));
        args.extend(self.args.iter().map(OsString::from));
        Ok(args)
    }
}

fn java_binary_name() -> &'static str {
    if cfg!(windows) {
        "java.exe"
    } else {
        "java"
    }
}

impl LaunchHook for JavaLauncher {
    fn launch(&mut self, context: &LaunchContext) -> Result<i32> {
        let java = self.executable(context);
        let args = self.arguments(context).map_err(|e| BootError::LaunchFailed {
            message: format!("{:#}", e),
        })?;

        tracing::info!("Launching {}", self.main_class);
        tracing::debug!("{} {:?}", java.display(), args);

        let status = Command::new(&java)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BootError::LaunchFailed {
                message: format!("Failed to start '{}': {}", java.display(), e),
            })?;

        // Killed by a signal: no code to forward.
        Ok(status.code().unwrap_or(1))
    }
}
