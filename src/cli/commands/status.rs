//! Status command implementation.
//!
//! The `fxboot status` command shows what a run would find without
//! injecting, prompting, writing settings or launching.

use std::io::Write;

use console::style;

use crate::boot::{inspect, CapabilityStatus, StatusReport};
use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::locator::PlatformLocator;
use crate::runtime::JvmRuntime;
use crate::state::PathStore;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    store: PathStore,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(store: PathStore, args: StatusArgs) -> Self {
        Self { store, args }
    }
}

fn describe(status: &CapabilityStatus) -> String {
    if status.available {
        return format!("{}", style("available").green());
    }
    if status.cached_valid {
        if let Some(cached) = &status.cached {
            return format!("{} {}", style("remembered").green(), cached);
        }
    }
    if let Some(located) = &status.located {
        return format!("{} {}", style("found").green(), located.display());
    }
    match &status.cached {
        Some(stale) => format!(
            "{} (remembered {} no longer exists)",
            style("missing").red(),
            stale
        ),
        None => format!("{}", style("missing").red()),
    }
}

fn write_human(report: &StatusReport, out: &mut dyn Write) -> std::io::Result<()> {
    match &report.runtime.home {
        Some(home) => writeln!(
            out,
            "Runtime:  {} ({})",
            home.display(),
            if report.runtime.version.is_empty() {
                "unknown version"
            } else {
                report.runtime.version.as_str()
            }
        )?,
        None => writeln!(out, "Runtime:  JAVA_HOME is not set")?,
    }
    writeln!(out, "Settings: {}", report.settings_file.display())?;
    writeln!(out)?;

    for status in &report.capabilities {
        writeln!(out, "  {:<16} {}", status.capability.name(), describe(status))?;
    }

    if report.needs_user_input() {
        writeln!(out)?;
        writeln!(out, "A run will ask for the missing paths.")?;
    }
    Ok(())
}

impl Command for StatusCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let runtime = JvmRuntime::from_env();
        let locator = PlatformLocator::for_host();
        let report = inspect(&runtime, &locator, &self.store);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            write_human(&report, out)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityKind;
    use crate::runtime::RuntimeInfo;
    use std::path::PathBuf;

    fn status(kind: CapabilityKind) -> CapabilityStatus {
        CapabilityStatus {
            capability: kind,
            available: false,
            cached: None,
            cached_valid: false,
            located: None,
        }
    }

    #[test]
    fn describe_prefers_availability() {
        let mut s = status(CapabilityKind::AttachSupport);
        s.available = true;
        s.located = Some(PathBuf::from("/jdk/lib/tools.jar"));
        assert!(describe(&s).contains("available"));
    }

    #[test]
    fn describe_reports_stale_cache() {
        let mut s = status(CapabilityKind::UiRuntime);
        s.cached = Some("/gone/jfxrt.jar".to_string());
        let text = describe(&s);
        assert!(text.contains("missing"));
        assert!(text.contains("/gone/jfxrt.jar"));
    }

    #[test]
    fn human_output_lists_capabilities() {
        let report = StatusReport {
            runtime: RuntimeInfo::default(),
            settings_file: PathBuf::from("/tmp/boot.properties"),
            capabilities: vec![
                status(CapabilityKind::AttachSupport),
                status(CapabilityKind::UiRuntime),
            ],
        };
        let mut out = Vec::new();
        write_human(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("JAVA_HOME is not set"));
        assert!(text.contains("attach-support"));
        assert!(text.contains("ui-runtime"));
        assert!(text.contains("will ask"));
    }
}
