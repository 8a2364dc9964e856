//! Token persisted in a small JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use secrecy::SecretString;
use serde_json::{Map, Value};
use tracing::debug;

use super::{StoreError, TokenStore};

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Token store backed by a JSON object on disk (`{"token": "..."}`).
///
/// A missing file means no token. Other keys in the file are preserved.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Some(Map::new())),
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // Write then rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        restrict_permissions(&tmp)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SecretString>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let token = self
            .read_map()?
            .and_then(|mut map| map.remove(TOKEN_KEY))
            .and_then(|value| match value {
                Value::String(s) if !s.is_empty() => Some(SecretString::from(s)),
                _ => None,
            });
        Ok(token)
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut map = self.read_map()?.unwrap_or_default();
        map.insert(TOKEN_KEY.to_owned(), Value::String(token.to_owned()));
        self.write_map(&map)?;
        debug!(path = %self.path.display(), "Session token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let Some(mut map) = self.read_map()? else {
            return Ok(());
        };
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(&map)?;
            debug!(path = %self.path.display(), "Session token cleared");
        }
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
