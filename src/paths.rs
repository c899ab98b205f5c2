/// Where the code-chunker configuration file lives on each platform
///
/// Unix-like systems follow the XDG Base Directory layout.
use std::path::PathBuf;

const APP_DIR_NAME: &str = "code-chunker";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform config locations
pub struct PlatformPaths;

impl PlatformPaths {
    /// Base configuration directory, `.` when nothing usable is set
    ///
    /// - Windows: %APPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    pub fn config_dir() -> PathBuf {
        let dir = if cfg!(target_os = "windows") {
            env_dir("APPDATA")
        } else if cfg!(target_os = "macos") {
            env_dir("HOME").map(|home| home.join("Library").join("Application Support"))
        } else {
            env_dir("XDG_CONFIG_HOME").or_else(|| env_dir("HOME").map(|home| home.join(".config")))
        };
        dir.unwrap_or_else(|| PathBuf::from("."))
    }

    /// `<config_dir>/code-chunker`
    pub fn project_config_dir() -> PathBuf {
        Self::config_dir().join(APP_DIR_NAME)
    }

    /// `<config_dir>/code-chunker/config.toml`
    pub fn default_config_path() -> PathBuf {
        Self::project_config_dir().join(CONFIG_FILE_NAME)
    }
}

/// Directory named by an environment variable; unset and empty are ignored
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_dir_not_empty() {
        assert!(!PlatformPaths::config_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_default_config_path_layout() {
        let path = PlatformPaths::default_config_path();
        assert!(path.ends_with("code-chunker/config.toml"));
        assert_eq!(path.parent(), Some(PlatformPaths::project_config_dir().as_path()));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_config_dir_prefers_xdg_over_home() {
        let saved_xdg = env::var_os("XDG_CONFIG_HOME");
        let saved_home = env::var_os("HOME");

        // Safety: no other test reads or writes XDG_CONFIG_HOME or HOME
        unsafe {
            env::set_var("XDG_CONFIG_HOME", "/custom/config");
            env::set_var("HOME", "/home/tester");
        }
        assert_eq!(PlatformPaths::config_dir(), PathBuf::from("/custom/config"));

        unsafe {
            env::set_var("XDG_CONFIG_HOME", "");
        }
        assert_eq!(
            PlatformPaths::config_dir(),
            PathBuf::from("/home/tester/.config")
        );

        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
            env::remove_var("HOME");
        }
        assert_eq!(PlatformPaths::config_dir(), PathBuf::from("."));

        unsafe {
            match saved_xdg {
                Some(value) => env::set_var("XDG_CONFIG_HOME", value),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
            match saved_home {
                Some(value) => env::set_var("HOME", value),
                None => env::remove_var("HOME"),
            }
        }
    }
}
