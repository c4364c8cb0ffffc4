use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::config::{ContentProvider, ContentSerializer, FileContentProvider, YamlSerializer};

/// Durable string key-value storage used for best-score records.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let values = self
            .values
            .lock()
            .map_err(|_| "Memory store lock poisoned".to_string())?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| "Memory store lock poisoned".to_string())?;
        values.insert(key.to_string(), value.to_string());
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}

/// Keeps every key in one YAML mapping; each write rewrites the whole file.
pub struct FileStore<TProvider = FileContentProvider, TSerializer = YamlSerializer>
where
    TProvider: ContentProvider,
    TSerializer: ContentSerializer<BTreeMap<String, String>>,
{
    provider: TProvider,
    serializer: TSerializer,
    guard: Mutex<()>,
}

impl FileStore<FileContentProvider, YamlSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlSerializer::new())
    }
}

impl<TProvider, TSerializer> FileStore<TProvider, TSerializer>
where
    TProvider: ContentProvider,
    TSerializer: ContentSerializer<BTreeMap<String, String>>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            guard: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, String> {
        match self.provider.read_content()? {
            Some(content) if !content.trim().is_empty() => self.serializer.deserialize(&content),
            _ => Ok(BTreeMap::new()),
        }
    }
}

impl<TProvider, TSerializer> KeyValueStore for FileStore<TProvider, TSerializer>
where
    TProvider: ContentProvider,
    TSerializer: ContentSerializer<BTreeMap<String, String>>,
{
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let _guard = self
            .guard
            .lock()
            .map_err(|_| "Score file lock poisoned".to_string())?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let _guard = self
            .guard
            .lock()
            .map_err(|_| "Score file lock poisoned".to_string())?;
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let content = self.serializer.serialize(&values)?;
        self.provider.write_content(&content)
    }
}
