use cosmwasm_std::{attr, Addr, Attribute, Uint128};

use crate::bank::Bank;
use crate::error::ContractError;
use crate::keeper::Keeper;
use crate::msg::ExecuteMsg;
use crate::state::NameRecord;

/// A state transition over the name store.
///
/// Every implementation reads fresh state from `keeper` and either applies all
/// of its effects or returns an error having applied none of them. The returned
/// attributes describe what changed.
pub trait Handler {
    fn handle<K, B>(self, keeper: &mut K, bank: &mut B) -> Result<Vec<Attribute>, ContractError>
    where
        K: Keeper + ?Sized,
        B: Bank + ?Sized;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuyName {
    pub name: String,
    pub bid: Uint128,
    pub buyer: Addr,
    /// None keeps the value the name already resolves to
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SetName {
    pub name: String,
    pub value: String,
    pub owner: Addr,
}

/// An execute message bound to the account that signed it.
#[derive(Clone, Debug, PartialEq)]
pub enum NameMsg {
    BuyName(BuyName),
    SetName(SetName),
}

impl NameMsg {
    pub fn new(msg: ExecuteMsg, sender: Addr) -> Self {
        match msg {
            ExecuteMsg::BuyName { name, bid, value } => NameMsg::BuyName(BuyName {
                name,
                bid,
                buyer: sender,
                value,
            }),
            ExecuteMsg::SetName { name, value } => NameMsg::SetName(SetName {
                name,
                value,
                owner: sender,
            }),
        }
    }
}

impl Handler for NameMsg {
    fn handle<K, B>(self, keeper: &mut K, bank: &mut B) -> Result<Vec<Attribute>, ContractError>
    where
        K: Keeper + ?Sized,
        B: Bank + ?Sized,
    {
        match self {
            NameMsg::BuyName(msg) => msg.handle(keeper, bank),
            NameMsg::SetName(msg) => msg.handle(keeper, bank),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ContractError> {
    if name.is_empty() {
        return Err(ContractError::invalid("name must not be empty"));
    }
    Ok(())
}

impl Handler for BuyName {
    fn handle<K, B>(self, keeper: &mut K, bank: &mut B) -> Result<Vec<Attribute>, ContractError>
    where
        K: Keeper + ?Sized,
        B: Bank + ?Sized,
    {
        validate_name(&self.name)?;
        if self.bid.is_zero() {
            return Err(ContractError::invalid("bid must be positive"));
        }

        let current = keeper.load_record(&self.name)?;
        let mut attrs = vec![attr("method", "buy_name"), attr("name", self.name.as_str())];

        // a first purchase has nobody to pay
        if let Some(previous) = &current.owner {
            if self.bid <= current.price {
                return Err(ContractError::InsufficientBid {
                    bid: self.bid,
                    price: current.price,
                });
            }
            bank.transfer(&self.buyer, previous, self.bid)?;
            attrs.push(attr("previous_owner", previous.as_str()));
        }

        let record = NameRecord {
            owner: Some(self.buyer.clone()),
            price: self.bid,
            value: self.value.unwrap_or(current.value),
            name: self.name,
        };
        keeper.save_record(&record)?;

        attrs.push(attr("owner", self.buyer));
        attrs.push(attr("price", self.bid));
        Ok(attrs)
    }
}

impl Handler for SetName {
    fn handle<K, B>(self, keeper: &mut K, _bank: &mut B) -> Result<Vec<Attribute>, ContractError>
    where
        K: Keeper + ?Sized,
        B: Bank + ?Sized,
    {
        validate_name(&self.name)?;

        let mut record = keeper.load_record(&self.name)?;
        if record.owner.as_ref() != Some(&self.owner) {
            return Err(ContractError::Unauthorized {});
        }

        record.value = self.value;
        keeper.save_record(&record)?;

        Ok(vec![
            attr("method", "set_name"),
            attr("name", record.name),
            attr("value", record.value),
        ])
    }
}
