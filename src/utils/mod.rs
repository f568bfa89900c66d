pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct OutputConfig {
        pub format: Option<String>, // "text" | "json"
        pub quiet: Option<bool>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct DotConfig {
        pub theme: Option<String>,   // "light" | "dark"
        pub rankdir: Option<String>, // "LR" | "TB"
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub output: Option<OutputConfig>,
        pub dot: Option<DotConfig>,
    }

    pub const CONFIG_FILE_NAME: &str = "depmap.toml";

    fn default_config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Read and parse a TOML config. Missing or invalid files yield `None`.
    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&data) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Look for `depmap.toml` in `dir`.
    #[must_use]
    pub fn load_config_near(dir: &Path) -> Option<Config> {
        let path = default_config_path(dir);
        if path.exists() {
            load_config_at(&path)
        } else {
            None
        }
    }
}
