use cosmwasm_std::{coins, Addr, BankMsg, Coin, StdError, Uint128};

use crate::error::ContractError;

/// Moves native funds between accounts.
///
/// A transfer either fully succeeds or fails with no effect. Callers never
/// mint or burn through this interface.
///
/// Handlers transfer before they write the store, so a later failure in the
/// same message must let the host discard transfers already made. `FundsBank`
/// only queues messages, which the host drops along with a failed response.
pub trait Bank {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: Uint128) -> Result<(), ContractError>;
}

/// Bank backed by the funds the sender attached to the message.
///
/// Each transfer is paid out of those funds and becomes a `BankMsg::Send`.
/// Whatever is left over goes back to the sender via [`FundsBank::into_messages`].
pub struct FundsBank {
    sender: Addr,
    denom: String,
    available: Uint128,
    messages: Vec<BankMsg>,
}

impl FundsBank {
    /// Rejects attached coins of any denom other than `denom`.
    pub fn new(sender: Addr, denom: &str, funds: &[Coin]) -> Result<Self, ContractError> {
        let mut available = Uint128::zero();
        for coin in funds {
            if coin.denom != denom {
                return Err(ContractError::InvalidDenom {
                    denom: coin.denom.clone(),
                });
            }
            available = available.checked_add(coin.amount).map_err(StdError::from)?;
        }
        Ok(FundsBank {
            sender,
            denom: denom.to_string(),
            available,
            messages: vec![],
        })
    }

    pub fn available(&self) -> Uint128 {
        self.available
    }

    /// Queued payouts, followed by a refund of any unspent funds.
    pub fn into_messages(self) -> Vec<BankMsg> {
        let mut messages = self.messages;
        if !self.available.is_zero() {
            messages.push(BankMsg::Send {
                to_address: self.sender.into_string(),
                amount: coins(self.available.u128(), self.denom),
            });
        }
        messages
    }
}

impl Bank for FundsBank {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: Uint128) -> Result<(), ContractError> {
        // only the sender's attached funds can be spent
        if from != &self.sender {
            return Err(ContractError::InsufficientFunds {
                required: amount,
                available: Uint128::zero(),
            });
        }
        let remaining =
            self.available
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientFunds {
                    required: amount,
                    available: self.available,
                })?;
        self.available = remaining;
        self.messages.push(BankMsg::Send {
            to_address: to.to_string(),
            amount: coins(amount.u128(), self.denom.as_str()),
        });
        Ok(())
    }
}
