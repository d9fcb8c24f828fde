use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{SnapshotError, SnapshotStore};

/// In-memory snapshot store for tests and storage-less hosts.
///
/// Clones share the underlying map, so a test can keep a handle while the
/// controller owns another and observe state across controller restarts.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw snapshot contents, bypassing deserialization.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.snapshots.borrow().get(key).cloned()
    }

    /// Seed raw contents under `key`, e.g. to stage a corrupt snapshot.
    pub fn put_raw(&mut self, key: impl Into<String>, contents: impl Into<String>) {
        self.snapshots
            .borrow_mut()
            .insert(key.into(), contents.into());
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Option<String> {
        self.snapshots.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<(), SnapshotError> {
        self.snapshots
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_the_contents() {
        let mut store = MemorySnapshotStore::new();
        store.save("characters", "[]").unwrap();
        assert_eq!(store.load("characters").as_deref(), Some("[]"));
    }

    #[test]
    fn clones_share_the_snapshots() {
        let mut store = MemorySnapshotStore::new();
        let observer = store.clone();

        store.save("messages", "{}").unwrap();
        assert_eq!(observer.raw("messages").as_deref(), Some("{}"));
    }
}
