//! In-memory collaborators for driving the handlers outside of a chain.

use std::collections::BTreeMap;

use cosmwasm_std::{Addr, StdError, Uint128};

use crate::bank::Bank;
use crate::error::ContractError;

/// A balance sheet that settles transfers immediately.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryBank {
    balances: BTreeMap<Addr, Uint128>,
    transfers: Vec<(Addr, Addr, Uint128)>,
}

impl MemoryBank {
    pub fn with_balances(balances: &[(&str, u128)]) -> Self {
        MemoryBank {
            balances: balances
                .iter()
                .map(|(addr, amount)| (Addr::unchecked(*addr), Uint128::new(*amount)))
                .collect(),
            transfers: vec![],
        }
    }

    pub fn balance(&self, addr: &str) -> Uint128 {
        self.balances
            .get(&Addr::unchecked(addr))
            .copied()
            .unwrap_or_default()
    }

    /// Every successful transfer as `(from, to, amount)`, oldest first.
    pub fn transfers(&self) -> &[(Addr, Addr, Uint128)] {
        &self.transfers
    }
}

impl Bank for MemoryBank {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: Uint128) -> Result<(), ContractError> {
        let available = self.balances.get(from).copied().unwrap_or_default();
        let debited = available
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientFunds {
                required: amount,
                available,
            })?;
        let credited = if from == to {
            debited
        } else {
            self.balances.get(to).copied().unwrap_or_default()
        };
        let credited = credited.checked_add(amount).map_err(StdError::from)?;

        self.balances.insert(from.clone(), debited);
        self.balances.insert(to.clone(), credited);
        self.transfers.push((from.clone(), to.clone(), amount));
        Ok(())
    }
}
