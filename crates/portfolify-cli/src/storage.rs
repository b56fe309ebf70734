//! File-backed credential storage.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories::ProjectDirs;

use portfolify_core::{CredentialStore, Error, Result};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Name of the token file inside the data directory.
const TOKEN_FILE: &str = "token";

/// Credential store backed by a single file in the user's data directory.
///
/// The file holds the bearer token string and nothing else. On Unix it is
/// written with mode 0600 so other users cannot read it.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store the token under the standard per-user data directory.
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "portfolify")
            .ok_or_else(|| Error::storage("could not determine data directory"))?;

        Ok(Self::at(dirs.data_dir().join(TOKEN_FILE)))
    }

    /// Store the token at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    tracing::debug!(path = %self.path.display(), "Ignoring empty token file");
                    return Ok(None);
                }
                Ok(Some(token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(format!("failed to read token file: {}", e))),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::storage(format!("failed to create data directory: {}", e)))?;
        }

        fs::write(&self.path, token)
            .map_err(|e| Error::storage(format!("failed to write token file: {}", e)))?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)
                .map_err(|e| Error::storage(format!("failed to stat token file: {}", e)))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)
                .map_err(|e| Error::storage(format!("failed to set token file mode: {}", e)))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(format!(
                "failed to remove token file: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_token_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("token"));

        assert_eq!(store.load().unwrap(), None);

        store.save("file-token").unwrap();
        assert_eq!(store.load().unwrap(), Some("file-token".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clearing_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("token"));

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("nested").join("deeper").join("token"));

        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("token"));

        store.save("tok").unwrap();

        let mode = fs::metadata(dir.path().join("token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
