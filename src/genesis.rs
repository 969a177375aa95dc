use std::collections::BTreeSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::keeper::Keeper;
use crate::state::{Config, NameRecord, CONFIG};

#[cw_serde]
pub struct GenesisRecord {
    pub name: String,
    pub owner: String,
    pub price: Uint128,
    pub value: String,
}

/// The registry's share of a genesis or snapshot document.
#[cw_serde]
pub struct GenesisState {
    pub denom: String,
    pub records: Vec<GenesisRecord>,
}

impl From<NameRecord> for GenesisRecord {
    fn from(record: NameRecord) -> Self {
        GenesisRecord {
            name: record.name,
            owner: record.owner.map(String::from).unwrap_or_default(),
            price: record.price,
            value: record.value,
        }
    }
}

/// Checks a genesis document and converts it into store records.
///
/// Nothing is written, so a rejected document leaves no trace.
pub fn validate_genesis(
    api: &dyn Api,
    denom: &str,
    records: Vec<GenesisRecord>,
) -> Result<Vec<NameRecord>, ContractError> {
    if denom.is_empty() {
        return Err(ContractError::invalid("denom must not be empty"));
    }

    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.name.clone()) {
                return Err(ContractError::DuplicateName { name: record.name });
            }
            if record.name.is_empty() {
                return Err(ContractError::invalid("genesis name must not be empty"));
            }
            if record.price.is_zero() {
                return Err(ContractError::invalid(format!(
                    "genesis price for '{}' must be positive",
                    record.name
                )));
            }
            let owner = api.addr_validate(&record.owner)?;
            Ok(NameRecord {
                name: record.name,
                value: record.value,
                owner: Some(owner),
                price: record.price,
            })
        })
        .collect()
}

/// Writes the config and every record into a fresh store. Returns how many
/// records were imported.
pub fn import_genesis(
    storage: &mut dyn Storage,
    api: &dyn Api,
    state: GenesisState,
) -> Result<usize, ContractError> {
    let records = validate_genesis(api, &state.denom, state.records)?;
    CONFIG.save(storage, &Config { denom: state.denom })?;
    for record in &records {
        storage.save_record(record)?;
    }
    Ok(records.len())
}

/// Dumps the config and all records in store order.
pub fn export_genesis(storage: &dyn Storage) -> StdResult<GenesisState> {
    let config = CONFIG.load(storage)?;
    let records = storage
        .iterate_records()?
        .into_iter()
        .map(GenesisRecord::from)
        .collect();
    Ok(GenesisState {
        denom: config.denom,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, MockApi};

    fn record(name: &str, owner: &str, price: u128, value: &str) -> GenesisRecord {
        GenesisRecord {
            name: name.to_string(),
            owner: owner.to_string(),
            price: Uint128::new(price),
            value: value.to_string(),
        }
    }

    #[test]
    fn round_trip() {
        let mut deps = mock_dependencies();
        let state = GenesisState {
            denom: "token".to_string(),
            records: vec![
                record("bob", "buyerb", 20, ""),
                record("alice", "buyera", 100, "1.2.3.4"),
            ],
        };

        let imported = import_genesis(&mut deps.storage, &deps.api, state.clone()).unwrap();
        assert_eq!(imported, 2);

        let exported = export_genesis(&deps.storage).unwrap();
        // export comes back in name order
        assert_eq!(
            exported,
            GenesisState {
                denom: "token".to_string(),
                records: vec![state.records[1].clone(), state.records[0].clone()],
            }
        );

        let mut fresh = mock_dependencies();
        import_genesis(&mut fresh.storage, &fresh.api, exported.clone()).unwrap();
        assert_eq!(export_genesis(&fresh.storage).unwrap(), exported);
    }

    #[test]
    fn duplicate_name_writes_nothing() {
        let mut deps = mock_dependencies();
        let state = GenesisState {
            denom: "token".to_string(),
            records: vec![
                record("alice", "buyera", 100, ""),
                record("alice", "buyerb", 200, ""),
            ],
        };

        let err = import_genesis(&mut deps.storage, &deps.api, state).unwrap_err();
        assert_eq!(
            err,
            ContractError::DuplicateName {
                name: "alice".to_string()
            }
        );
        let storage: &dyn Storage = &deps.storage;
        assert!(!storage.is_registered("alice").unwrap());
        assert!(CONFIG.may_load(storage).unwrap().is_none());
    }

    #[test]
    fn duplicate_reported_before_other_checks() {
        let api = MockApi::default();
        let err = validate_genesis(
            &api,
            "token",
            vec![
                record("alice", "buyera", 100, ""),
                record("alice", "", 0, ""),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::DuplicateName {
                name: "alice".to_string()
            }
        );
    }

    #[test]
    fn rejects_zero_price_and_empty_name() {
        let api = MockApi::default();

        let err = validate_genesis(&api, "token", vec![record("alice", "buyera", 0, "")]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidMessage { .. }));

        let err = validate_genesis(&api, "token", vec![record("", "buyera", 5, "")]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidMessage { .. }));

        let err = validate_genesis(&api, "", vec![]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidMessage { .. }));
    }

    #[test]
    fn rejects_invalid_owner() {
        let api = MockApi::default();
        let err = validate_genesis(&api, "token", vec![record("alice", "", 5, "")]).unwrap_err();
        assert!(matches!(err, ContractError::Std(_)));
    }
}
