pub mod sqlite;

use crate::{country::Country, types::CountryCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("country '{0}' already exists")]
    DuplicateKey(CountryCode),
    #[error("country '{0}' not found")]
    NotFound(CountryCode),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("journal payload: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store holding [`Country`] rows keyed by code.
///
/// Every mutation is committed before it returns. `find_all` yields records
/// in insertion order.
pub trait CountryStore {
    fn find_all(&self) -> StoreResult<Vec<Country>>;
    fn find_by_code(&self, code: &CountryCode) -> StoreResult<Option<Country>>;
    fn insert(&mut self, country: Country) -> StoreResult<()>;
    fn update(&mut self, country: Country) -> StoreResult<()>;
    fn delete(&mut self, code: &CountryCode) -> StoreResult<()>;

    /// Releases the underlying handle.
    fn close(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}
