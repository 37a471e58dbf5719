//! In-memory persistence adapter.

use dashmap::DashMap;

use dataroom_core::result::AppResult;
use dataroom_core::traits::persistence::StatePersistence;

/// Map-backed persistence adapter. State lives for the process lifetime
/// only; the adapter of choice for integration tests.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    entries: DashMap<String, String>,
}

impl MemoryPersistence {
    /// Create an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePersistence for MemoryPersistence {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_remove() {
        let persistence = MemoryPersistence::new();
        assert_eq!(persistence.load("k").unwrap(), None);

        persistence.save("k", "v").unwrap();
        assert_eq!(persistence.load("k").unwrap().as_deref(), Some("v"));

        persistence.remove("k").unwrap();
        assert_eq!(persistence.load("k").unwrap(), None);
    }
}
