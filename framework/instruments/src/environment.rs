use std::sync::OnceLock;
use sysinfo::System;

/// Environment variable that is present when running under TeamCity.
pub(crate) const TEAMCITY_ENV: &str = "TEAMCITY_PROJECT_NAME";

/// Facts about the machine a benchmark ran on, attached to every reported result as tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEnvironment {
    pub hostname: String,
    pub is_teamcity: bool,
    pub platform: String,
}

impl RunEnvironment {
    /// Capture the environment of the current process.
    ///
    /// The hostname is only looked up once per process. The TeamCity check is repeated on every
    /// call.
    pub fn current() -> Self {
        Self {
            hostname: hostname().to_string(),
            is_teamcity: std::env::var_os(TEAMCITY_ENV).is_some(),
            platform: platform().to_string(),
        }
    }

    /// The value written for the `is_teamcity` tag.
    ///
    /// Existing series were recorded as `True`/`False`, so keep writing those.
    pub(crate) fn is_teamcity_tag(&self) -> &'static str {
        if self.is_teamcity {
            "True"
        } else {
            "False"
        }
    }
}

/// The hostname of this machine, resolved on first use.
pub(crate) fn hostname() -> &'static str {
    static HOSTNAME: OnceLock<String> = OnceLock::new();

    HOSTNAME.get_or_init(|| {
        System::host_name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                log::warn!("Could not determine hostname, reporting as 'unknown'");
                "unknown".to_string()
            })
    })
}

/// The platform identifier for the current build target, e.g. `linux`, `darwin` or `win32`.
pub(crate) fn platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
