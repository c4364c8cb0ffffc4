use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentProvider, PlaygroundConfig, YamlSerializer};

const CONFIG_FILE: &str = "arcade_playground_config.yaml";

pub type PlaygroundConfigManager = ConfigManager<FileContentProvider, PlaygroundConfig, YamlSerializer>;

/// The config lives next to the executable unless a path is given explicitly.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn get_config_manager(path: &Path) -> PlaygroundConfigManager {
    ConfigManager::new(FileContentProvider::new(path), YamlSerializer::new())
}

/// A relative scores file is resolved against the directory holding the config.
pub fn scores_path(config_path: &Path, config: &PlaygroundConfig) -> PathBuf {
    let scores = PathBuf::from(&config.storage.scores_file);
    if scores.is_absolute() {
        return scores;
    }
    match config_path.parent() {
        Some(dir) => dir.join(scores),
        None => scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom.yaml");
        assert_eq!(config_path(Some(path.clone())), path);
    }

    #[test]
    fn test_default_path_uses_config_file_name() {
        let path = config_path(None);
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(CONFIG_FILE));
    }

    #[test]
    fn test_scores_path_relative_to_config() {
        let config = PlaygroundConfig::default();
        let path = scores_path(Path::new("/opt/arcade/arcade_playground_config.yaml"), &config);
        assert_eq!(path, PathBuf::from("/opt/arcade/arcade_playground_scores.yaml"));
    }

    #[test]
    fn test_scores_path_absolute_kept() {
        let mut config = PlaygroundConfig::default();
        config.storage.scores_file = "/var/scores.yaml".to_string();
        let path = scores_path(Path::new("/opt/arcade/config.yaml"), &config);
        assert_eq!(path, PathBuf::from("/var/scores.yaml"));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!(
            "arcade_playground_missing_{}.yaml",
            std::process::id()
        ));
        let manager = get_config_manager(&path);
        assert_eq!(manager.load().unwrap(), PlaygroundConfig::default());
    }
}
