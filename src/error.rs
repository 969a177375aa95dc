use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("Insufficient bid: {bid} does not exceed current price {price}")]
    InsufficientBid { bid: Uint128, price: Uint128 },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Uint128,
        available: Uint128,
    },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Name '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("Unsupported denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}

impl ContractError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ContractError::InvalidMessage {
            reason: reason.into(),
        }
    }
}
