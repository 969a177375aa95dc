use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::state::{NameRecord, NAMES};

/// Store access for the name registry.
///
/// Implemented for every `cosmwasm_std::Storage` trait object, so the host's
/// storage and `MockStorage` are interchangeable. Iteration is in ascending
/// byte order of the name.
pub trait Keeper {
    /// Returns the stored record, or the zero-valued record for an unknown name.
    fn load_record(&self, name: &str) -> StdResult<NameRecord>;

    fn is_registered(&self, name: &str) -> StdResult<bool>;

    fn save_record(&mut self, record: &NameRecord) -> StdResult<()>;

    /// Every stored record, in store order.
    fn iterate_records(&self) -> StdResult<Vec<NameRecord>>;

    /// Up to `limit` registered names strictly after `start_after`.
    fn list_names(&self, start_after: Option<&str>, limit: usize) -> StdResult<Vec<String>>;
}

impl<'s> Keeper for dyn Storage + 's {
    fn load_record(&self, name: &str) -> StdResult<NameRecord> {
        let record = NAMES.may_load(self, name)?;
        Ok(record.unwrap_or_else(|| NameRecord::unregistered(name)))
    }

    fn is_registered(&self, name: &str) -> StdResult<bool> {
        Ok(NAMES.has(self, name))
    }

    fn save_record(&mut self, record: &NameRecord) -> StdResult<()> {
        NAMES.save(self, record.name.as_str(), record)
    }

    fn iterate_records(&self) -> StdResult<Vec<NameRecord>> {
        NAMES
            .range(self, None, None, Order::Ascending)
            .map(|item| item.map(|(_, record)| record))
            .collect()
    }

    fn list_names(&self, start_after: Option<&str>, limit: usize) -> StdResult<Vec<String>> {
        let start = start_after.map(Bound::exclusive);
        NAMES
            .keys(self, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }
}
