pub mod bank;
pub mod contract;
mod error;
pub mod genesis;
pub mod handler;
pub mod keeper;
pub mod msg;
pub mod state;
#[cfg(not(target_arch = "wasm32"))]
pub mod testing;

pub use crate::error::ContractError;
