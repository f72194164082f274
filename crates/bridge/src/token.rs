//! Token storage for the authorized fetch helper.
//!
//! The page keeps its panel token in persistent browser storage under a
//! configurable key; outside the page the same role is played by a
//! [`TokenStore`]. The file-backed store keeps one JSON file per key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default storage key for the panel authorization token.
pub const DEFAULT_TOKEN_KEY: &str = "authorization";

/// Trait for token storage implementations.
pub trait TokenStore: Send + Sync {
    /// Save a token.
    fn save(&self, key: &str, token: &str) -> Result<()>;

    /// Load a token.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Delete a token.
    fn delete(&self, key: &str) -> Result<()>;

    /// Check if a token exists.
    fn exists(&self, key: &str) -> Result<bool>;
}

/// File-based token storage.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_path: PathBuf,
}

impl FileTokenStore {
    /// Create a file token store at the default path, `~/.karing/tokens/`.
    pub fn new() -> Result<Self> {
        let base_path = default_token_dir()?;
        Ok(Self { base_path })
    }

    /// Create a file token store with a custom path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            base_path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the token file path for a key.
    fn token_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to create a safe filename
        let safe_key = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect::<String>();

        self.base_path.join(format!("{}.json", safe_key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, key: &str, token: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.token_path(key);
        let stored = StoredToken {
            token: token.to_string(),
            stored_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&path, json)?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.token_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)?;
        let stored: StoredToken = serde_json::from_str(&json)?;

        Ok(Some(stored.token))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.token_path(key);

        if path.exists() {
            std::fs::remove_file(&path)?;
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.token_path(key).exists())
    }
}

/// In-memory token storage for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, key: &str, token: &str) -> Result<()> {
        self.tokens
            .lock()
            .map_err(|_| Error::Config("token store poisoned".to_string()))?
            .insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .tokens
            .lock()
            .map_err(|_| Error::Config("token store poisoned".to_string()))?
            .get(key)
            .cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.tokens
            .lock()
            .map_err(|_| Error::Config("token store poisoned".to_string()))?
            .remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self
            .tokens
            .lock()
            .map_err(|_| Error::Config("token store poisoned".to_string()))?
            .contains_key(key))
    }
}

/// Token with storage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    stored_at: chrono::DateTime<chrono::Utc>,
}

/// Get the default token storage directory.
pub fn default_token_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("Could not find home directory".to_string()))?;

    Ok(home.join(".karing").join("tokens"))
}
