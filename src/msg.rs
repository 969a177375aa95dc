use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::genesis::{GenesisRecord, GenesisState};
use crate::state::{Config, NameRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// denom all bids are paid in
    pub denom: String,
    /// records imported at genesis, each name at most once
    #[serde(default)]
    pub records: Vec<GenesisRecord>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Outbid the current owner. Funds for `bid` must be attached unless the
    /// name has never been bought.
    BuyName {
        name: String,
        bid: Uint128,
        value: Option<String>,
    },
    /// Change what a name resolves to. Owner only.
    SetName { name: String, value: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Resolve returns the value the name points to, empty if unset
    #[returns(ResolveResponse)]
    Resolve { name: String },
    #[returns(WhoisResponse)]
    Whois { name: String },
    #[returns(NamesResponse)]
    Names {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ConfigResponse)]
    Config {},
    // Export dumps every record for a genesis file
    #[returns(GenesisState)]
    Export {},
}

#[cw_serde]
pub struct MigrateMsg {}

// We define a custom struct for each query response
#[cw_serde]
pub struct ResolveResponse {
    pub value: String,
}

#[cw_serde]
pub struct WhoisResponse {
    pub owner: Option<String>,
    pub price: Uint128,
    pub value: String,
}

#[cw_serde]
pub struct NamesResponse {
    pub names: Vec<String>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub denom: String,
}

impl From<NameRecord> for WhoisResponse {
    fn from(record: NameRecord) -> Self {
        WhoisResponse {
            owner: record.owner.map(String::from),
            price: record.price,
            value: record.value,
        }
    }
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            denom: config.denom,
        }
    }
}
