//! Store contract for saving and loading session data.

use serde_json::Value;

use crate::store::StoreError;

/// Key/value persistence for session data.
///
/// Values are opaque JSON documents; interpretation (and validation) is the
/// caller's job. A `get` for an absent key is `Ok(None)`, never an error.
pub trait SessionStore: Send + Sync {
    /// Load the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
