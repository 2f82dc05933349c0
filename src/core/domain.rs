use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration abstracts config options for the personal library
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_file: PathBuf,
    pub addr: String,
    pub log_level: String,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(library_file: &str) -> Self {
        Configuration {
            library_file: PathBuf::from(library_file),
            addr: DEFAULT_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            store: RepositoryStore::LocalFile,
        }
    }

    // LIBRARY_FILE, LIBRARY_ADDR, LIBRARY_LOG_LEVEL and LIBRARY_STORE override the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("LIBRARY_FILE").unwrap_or_else(|| DEFAULT_LIBRARY_FILE.to_string()).as_str());
        if let Some(addr) = lookup("LIBRARY_ADDR") {
            config.addr = addr;
        }
        if let Some(level) = lookup("LIBRARY_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(store) = lookup("LIBRARY_STORE") {
            config.store = RepositoryStore::from(store);
        }
        config
    }
}
