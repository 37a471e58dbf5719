//! No-op persistence adapter.

use dataroom_core::result::AppResult;
use dataroom_core::traits::persistence::StatePersistence;

/// Adapter that stores nothing and loads nothing. Every session starts
/// from the defaults, as if the backing storage were unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPersistence;

impl StatePersistence for NoopPersistence {
    fn load(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> AppResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }
}
