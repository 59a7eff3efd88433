//! # Session: auth token and device identity on top of a key-value store
//!
//! The client keeps exactly two persisted strings per browser profile:
//!
//! | Key | Value | Written by |
//! |-----|-------|-----------|
//! | [`TOKEN_KEY`] (`"token"`) | Auth token returned by sign-in | [`Session::set_token`] (sign-in), removed by [`Session::clear_token`] (sign-out) |
//! | [`DEVICE_KEY`] (`"device"`) | Random version-4 UUID | [`Session::device`], generated once on first read |
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string store with `get`/`set`/`remove`. Implementations live in
//! sibling modules ([`crate::memory`] for native builds and tests, `crate::local`
//! for the browser's `localStorage`). Browser storage is synchronous, so unlike
//! the rest of the client nothing here is `async`.
//!
//! ## Authentication check
//!
//! [`Session::is_authenticated`] treats an empty token exactly like a missing
//! one. Pages use it to decide whether to redirect to the sign-in page before
//! issuing any authenticated call.

use uuid::Uuid;

/// Storage key holding the auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the per-profile device identifier.
pub const DEVICE_KEY: &str = "device";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Token and device id persisted in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the persisted device id, generating and persisting one on first use.
    pub fn device(&self) -> String {
        if let Some(device) = self.store.get(DEVICE_KEY).filter(|d| !d.is_empty()) {
            return device;
        }
        let device = Uuid::new_v4().to_string();
        tracing::debug!(%device, "generated device id");
        self.store.set(DEVICE_KEY, &device);
        device
    }

    /// The current token, or an empty string when signed out.
    pub fn token(&self) -> String {
        self.store.get(TOKEN_KEY).unwrap_or_default()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token().is_empty()
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn is_v4(id: &str) -> bool {
        let bytes = id.as_bytes();
        id.len() == 36
            && [8, 13, 18, 23].iter().all(|&i| bytes[i] == b'-')
            && bytes[14] == b'4'
            && matches!(bytes[19], b'8' | b'9' | b'a' | b'b')
    }

    #[test]
    fn test_device_is_stable() {
        let session = Session::new(MemoryStore::new());

        let first = session.device();
        let second = session.device();
        assert_eq!(first, second);

        // Another session over the same storage sees the same id
        let other = Session::new(session.store().clone());
        assert_eq!(other.device(), first);
    }

    #[test]
    fn test_device_is_uuid_v4() {
        let session = Session::new(MemoryStore::new());
        let device = session.device();
        assert!(is_v4(&device), "not a v4 uuid: {device}");
    }

    #[test]
    fn test_existing_device_is_kept() {
        let store = MemoryStore::new();
        store.set(DEVICE_KEY, "fixed-device");

        let session = Session::new(store);
        assert_eq!(session.device(), "fixed-device");
    }

    #[test]
    fn test_token_lifecycle() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), "");

        session.set_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), "abc");

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session::new(MemoryStore::new());
        session.set_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_token_keeps_device() {
        let session = Session::new(MemoryStore::new());
        let device = session.device();
        session.set_token("abc");
        session.clear_token();
        assert_eq!(session.device(), device);
    }
}
