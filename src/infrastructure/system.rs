//! Host and platform probing
//!
//! Every probe degrades to a fallback value instead of failing, so a
//! response can always be assembled.

use std::path::Path;

use serde::Serialize;

const OS_RELEASE_PATH: &str = "/etc/os-release";
const UNKNOWN: &str = "unknown";

/// Host and runtime facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub runtime_version: String,
}

/// Probe the current host
pub fn probe() -> SystemInfo {
    let os = std::env::consts::OS;

    SystemInfo {
        hostname: hostname(),
        platform: platform_name(os),
        platform_version: platform_version(os, Path::new(OS_RELEASE_PATH), |key| {
            std::env::var(key).ok()
        }),
        architecture: std::env::consts::ARCH.to_string(),
        cpu_count: num_cpus::get(),
        runtime_version: env!("DEVOPS_INFO_RUSTC_VERSION").to_string(),
    }
}

fn hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|e| {
            tracing::debug!("Hostname lookup failed: {}", e);
            UNKNOWN.to_string()
        })
}

/// Map a raw OS identifier to its display name
pub fn platform_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "macos" | "darwin" => "Darwin".to_string(),
        other => other.to_string(),
    }
}

/// Friendly OS version, falling back to the raw OS identifier
pub fn platform_version<F>(os: &str, os_release: &Path, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let friendly = match os {
        "linux" => read_pretty_name(os_release),
        "windows" => env("OS").filter(|name| !name.is_empty()),
        _ => None,
    };

    friendly.unwrap_or_else(|| os.to_string())
}

/// Read `PRETTY_NAME` from an os-release file, `None` if missing or unreadable
pub fn read_pretty_name(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_pretty_name(&contents),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Extract the unquoted `PRETTY_NAME` value from os-release contents
pub fn parse_pretty_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches(|c: char| c == '"' || c == '\'').to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join(format!("os-release-missing-{}", std::process::id()))
    }

    #[test]
    fn test_platform_name_mapping() {
        assert_eq!(platform_name("linux"), "Linux");
        assert_eq!(platform_name("windows"), "Windows");
        assert_eq!(platform_name("macos"), "Darwin");
        assert_eq!(platform_name("freebsd"), "freebsd");
    }

    #[test]
    fn test_parse_pretty_name() {
        let contents = "NAME=\"Ubuntu\"\nVERSION_ID=\"24.04\"\n  PRETTY_NAME=\"Ubuntu 24.04.1 LTS\"\nID=ubuntu\n";
        assert_eq!(
            parse_pretty_name(contents).as_deref(),
            Some("Ubuntu 24.04.1 LTS")
        );

        assert_eq!(
            parse_pretty_name("PRETTY_NAME=Alpine Linux v3.20").as_deref(),
            Some("Alpine Linux v3.20")
        );
        assert_eq!(parse_pretty_name("NAME=Debian\nID=debian"), None);
    }

    #[test]
    fn test_linux_version_from_os_release() {
        let path = std::env::temp_dir().join(format!("os-release-test-{}", std::process::id()));
        std::fs::write(&path, "ID=debian\nPRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n").unwrap();

        let version = platform_version("linux", &path, no_env);
        std::fs::remove_file(&path).ok();

        assert_eq!(version, "Debian GNU/Linux 12 (bookworm)");
    }

    #[test]
    fn test_missing_os_release_falls_back_to_os_id() {
        assert_eq!(platform_version("linux", &missing_file(), no_env), "linux");
    }

    #[test]
    fn test_windows_version_from_env() {
        let env = |key: &str| (key == "OS").then(|| "Windows_NT".to_string());
        assert_eq!(platform_version("windows", &missing_file(), env), "Windows_NT");
        assert_eq!(platform_version("windows", &missing_file(), no_env), "windows");
    }

    #[test]
    fn test_other_platforms_use_os_id() {
        assert_eq!(platform_version("macos", &missing_file(), no_env), "macos");
    }

    #[test]
    fn test_probe_reports_host_facts() {
        let info = probe();

        assert!(!info.hostname.is_empty());
        assert!(!info.platform_version.is_empty());
        assert!(info.cpu_count >= 1);
        assert_eq!(info.architecture, std::env::consts::ARCH);
        assert!(!info.runtime_version.is_empty());
    }
}
