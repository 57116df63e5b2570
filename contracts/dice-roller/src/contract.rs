use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use dice_roller_common::RollParams;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, NEXT_REQUEST_ID, ROLLER_COUNT};

const CONTRACT_NAME: &str = "crates.io:dice-roller";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.roll_timeout_seconds == 0 {
        return Err(ContractError::InvalidTimeout);
    }

    let config = Config {
        admin: info.sender.clone(),
        oracle: deps.api.addr_validate(&msg.oracle)?,
        roll_timeout_seconds: msg.roll_timeout_seconds,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_REQUEST_ID.save(deps.storage, &0u64)?;
    ROLLER_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "dice-roller")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("oracle", config.oracle.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RollDice {
            number_of_dice,
            die_size,
            adjustment,
        } => execute::roll_dice(
            deps,
            env,
            info,
            RollParams::new(number_of_dice, die_size, adjustment),
        ),
        ExecuteMsg::ReceiveRandomness {
            request_id,
            randomness,
        } => execute::receive_randomness(deps, env, info, request_id, randomness),
        ExecuteMsg::RollDiceFast {
            number_of_dice,
            die_size,
            adjustment,
        } => execute::roll_dice_fast(
            deps,
            env,
            info,
            RollParams::new(number_of_dice, die_size, adjustment),
        ),
        ExecuteMsg::RecordRoll {
            number_of_dice,
            die_size,
            adjustment,
            result,
        } => execute::record_roll(
            deps,
            env,
            info,
            RollParams::new(number_of_dice, die_size, adjustment),
            result,
        ),
        ExecuteMsg::CancelRoll { request_id } => execute::cancel_roll(deps, env, info, request_id),
        ExecuteMsg::UpdateConfig {
            admin,
            oracle,
            roll_timeout_seconds,
        } => execute::update_config(deps, env, info, admin, oracle, roll_timeout_seconds),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::HasRolledOnce { address } => query::query_has_rolled_once(deps, address),
        QueryMsg::UserRollsCount { address } => query::query_user_rolls_count(deps, address),
        QueryMsg::UserRolls { address } => query::query_user_rolls(deps, address),
        QueryMsg::AllUsersCount {} => query::query_all_users_count(deps),
        QueryMsg::PendingRoll { request_id } => query::query_pending_roll(deps, request_id),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
