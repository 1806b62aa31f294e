//! Client-side session identity.
//!
//! The cart is anonymous: each client mints an opaque random token once,
//! keeps it in local storage, and passes it explicitly with every cart
//! call. Nothing here talks to the server, and the cart service never
//! treats the token as anything but a partition key.

use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Where the token lives between runs. Write failures are ignored; the
/// worst case is a fresh token (and an empty cart) next time.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, session_id: &str) -> std::io::Result<()>;
}

/// Returns the persisted session id, minting and storing a UUID v4 on
/// first use. Stable until the backing storage is cleared.
pub fn get_or_create_session_id<S: SessionStore>(store: &S) -> String {
    if let Some(existing) = store.load() {
        return existing;
    }
    let session_id = Uuid::new_v4().to_string();
    store.save(&session_id).ok();
    session_id
}

/// File-backed store, the CLI-client equivalent of browser local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn save(&self, session_id: &str) -> std::io::Result<()> {
        fs::write(&self.path, session_id)
    }
}
