use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// denom is the native asset every bid is settled in
    pub denom: String,
}

#[cw_serde]
#[derive(Default)]
pub struct NameRecord {
    pub name: String,
    /// value is what the name resolves to, empty when unset
    pub value: String,
    /// owner is None until the name is bought for the first time
    pub owner: Option<Addr>,
    /// price is the most recent accepted bid
    pub price: Uint128,
}

impl NameRecord {
    /// The zero-valued record reported for a name nobody has bought yet.
    pub fn unregistered(name: &str) -> Self {
        NameRecord {
            name: name.to_string(),
            ..NameRecord::default()
        }
    }

    pub fn is_registered(&self) -> bool {
        self.owner.is_some()
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const NAMES: Map<&str, NameRecord> = Map::new("names");
