use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) marker: Option<String>,
}

impl Config {
    /// Load the first readable config file. Returns the path it came from.
    pub(crate) fn load() -> (Self, Option<PathBuf>) {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
                && let Some(config) = Self::parse(&content, &path)
            {
                return (config, Some(path));
            }
        }

        (Self::default(), None)
    }

    fn parse(content: &str, path: &Path) -> Option<Self> {
        match toml::from_str::<Config>(content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/lastmod/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("lastmod").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("lastmod").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.lastmod.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".lastmod.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_end_with_home_dotfile() {
        let paths = Config::get_config_paths();
        if dirs::home_dir().is_some() {
            assert!(paths.last().unwrap().ends_with(".lastmod.toml"));
        }
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            "debug = true\ntimezone = \"UTC\"\nmarker = \"<!--footer-->\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert_eq!(config.marker.as_deref(), Some("<!--footer-->"));
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();
        assert!(!config.debug);
        assert!(config.timezone.is_none());
        assert!(config.marker.is_none());
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(Config::parse("debug = \"yes\"", Path::new("config.toml")).is_none());
    }
}
