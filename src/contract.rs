#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::bank::FundsBank;
use crate::error::ContractError;
use crate::genesis::{export_genesis, import_genesis, GenesisState};
use crate::handler::{Handler, NameMsg};
use crate::keeper::Keeper;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, NamesResponse, QueryMsg,
    ResolveResponse, WhoisResponse,
};
use crate::state::CONFIG;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-name-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let denom = msg.denom.clone();
    let imported = import_genesis(
        deps.storage,
        deps.api,
        GenesisState {
            denom: msg.denom,
            records: msg.records,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("denom", denom)
        .add_attribute("records", imported.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut bank = FundsBank::new(info.sender.clone(), &config.denom, &info.funds)?;

    let attrs = NameMsg::new(msg, info.sender).handle(deps.storage, &mut bank)?;

    Ok(Response::new()
        .add_messages(bank.into_messages())
        .add_attributes(attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Resolve { name } => to_binary(&query_resolve(deps, name)?),
        QueryMsg::Whois { name } => to_binary(&query_whois(deps, name)?),
        QueryMsg::Names { start_after, limit } => {
            to_binary(&query_names(deps, start_after, limit)?)
        }
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Export {} => to_binary(&export_genesis(deps.storage)?),
    }
}

fn query_resolve(deps: Deps, name: String) -> StdResult<ResolveResponse> {
    let record = deps.storage.load_record(&name)?;
    Ok(ResolveResponse {
        value: record.value,
    })
}

fn query_whois(deps: Deps, name: String) -> StdResult<WhoisResponse> {
    let record = deps.storage.load_record(&name)?;
    Ok(record.into())
}

fn query_names(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<NamesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let names = deps.storage.list_names(start_after.as_deref(), limit)?;
    Ok(NamesResponse { names })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.into())
}
