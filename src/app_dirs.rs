use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "soundditto";

/// Where soundditto keeps its files on this machine
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    /// `<config dir>/soundditto/config.json`, or the working directory when
    /// no home directory can be found
    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from(format!("{APP_NAME}_config.json")))
    }

    /// Prefers the XDG state dir, which `directories` does not expose on every platform
    pub fn log_path() -> Option<PathBuf> {
        let log_file = format!("{APP_NAME}.log");
        match std::env::var_os("HOME") {
            Some(home) => Some(
                PathBuf::from(home)
                    .join(".local/state")
                    .join(APP_NAME)
                    .join(log_file),
            ),
            None => Self::project().map(|dirs| dirs.data_local_dir().join(log_file)),
        }
    }
}
