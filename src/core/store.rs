use hashbrown::HashMap;
use tracing::debug;

use crate::{
    country::Country,
    persist::{CountryStore, StoreError, StoreResult},
    types::CountryCode,
};

/// In-memory [`CountryStore`] that keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryCountryStore {
    records: HashMap<CountryCode, Country>,
    order: Vec<CountryCode>,
}

impl MemoryCountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `countries` in the given order.
    pub fn with_countries(countries: impl IntoIterator<Item = Country>) -> StoreResult<Self> {
        let mut store = Self::new();
        for country in countries {
            store.insert(country)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl CountryStore for MemoryCountryStore {
    fn find_all(&self) -> StoreResult<Vec<Country>> {
        Ok(self
            .order
            .iter()
            .filter_map(|code| self.records.get(code).cloned())
            .collect())
    }

    fn find_by_code(&self, code: &CountryCode) -> StoreResult<Option<Country>> {
        Ok(self.records.get(code).cloned())
    }

    fn insert(&mut self, country: Country) -> StoreResult<()> {
        if self.records.contains_key(&country.code) {
            return Err(StoreError::DuplicateKey(country.code));
        }
        debug!(code = %country.code, "memory store insert");
        self.order.push(country.code.clone());
        self.records.insert(country.code.clone(), country);
        Ok(())
    }

    fn update(&mut self, country: Country) -> StoreResult<()> {
        let rec = self
            .records
            .get_mut(&country.code)
            .ok_or_else(|| StoreError::NotFound(country.code.clone()))?;
        debug!(code = %country.code, "memory store update");
        *rec = country;
        Ok(())
    }

    fn delete(&mut self, code: &CountryCode) -> StoreResult<()> {
        self.records
            .remove(code)
            .ok_or_else(|| StoreError::NotFound(code.clone()))?;
        if let Some(pos) = self.order.iter().position(|c| c == code) {
            self.order.remove(pos);
        }
        debug!(code = %code, "memory store delete");
        Ok(())
    }
}
