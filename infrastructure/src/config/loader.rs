//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Application directory under the platform config dir
const APP_DIR: &str = "survey-invite";

/// Project-level file names, checked in order
const PROJECT_FILES: [&str; 2] = ["survey-invite.toml", ".survey-invite.toml"];

/// Prefix of environment variables that override config keys
pub const ENV_PREFIX: &str = "SURVEY_INVITE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SURVEY_INVITE_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./survey-invite.toml` or `./.survey-invite.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/survey-invite/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            // Toml::file tolerates missing files; an explicit path must exist
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/survey-invite/config.toml if set,
    /// otherwise falls back to ~/.config/survey-invite/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        let _ = writeln!(out, "  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            let _ = writeln!(out, "  [{}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => {
                let _ = writeln!(out, "  [FOUND] Project: {}", path.display());
            }
            None => {
                let _ = writeln!(
                    out,
                    "  [     ] Project: ./{} or ./{}",
                    PROJECT_FILES[0], PROJECT_FILES[1]
                );
            }
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            let _ = writeln!(out, "  [{}] Global:  {}", mark, path.display());
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}
