mod config_manager;
mod content_provider;
mod playground_config;
mod serializer;

pub use config_manager::ConfigManager;
pub use content_provider::{ContentProvider, FileContentProvider};
pub use playground_config::{LogSettings, PlaygroundConfig, StorageSettings};
pub use serializer::{ContentSerializer, YamlSerializer};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
