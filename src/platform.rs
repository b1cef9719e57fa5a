//! Host platform detection.

/// Operating systems with distinct JDK install layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl HostOs {
    /// Detect the OS this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "linux") {
            HostOs::Linux
        } else {
            HostOs::Other
        }
    }

    /// Environment variable the dynamic loader reads its search path from.
    pub fn library_path_var(self) -> &'static str {
        match self {
            HostOs::MacOs => "DYLD_LIBRARY_PATH",
            HostOs::Windows => "PATH",
            HostOs::Linux | HostOs::Other => "LD_LIBRARY_PATH",
        }
    }

    /// Platform file name for a native library (`attach` -> `libattach.so`).
    pub fn library_filename(self, name: &str) -> String {
        match self {
            HostOs::MacOs => format!("lib{}.dylib", name),
            HostOs::Windows => format!("{}.dll", name),
            HostOs::Linux | HostOs::Other => format!("lib{}.so", name),
        }
    }
}

/// JDK architecture directory name used under `jre/lib` on Linux.
pub fn jre_arch_dir() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "x86" => "i386",
        other => other,
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
