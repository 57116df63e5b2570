use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Storage, WasmMsg,
};
use dice_roller_common::{derive_outcome, RollParams};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::msg::OracleExecuteMsg;
use crate::state::{
    PendingRoll, RollRecord, CONFIG, HAS_ROLLED, NEXT_REQUEST_ID, PENDING_ROLLS, ROLLER_COUNT,
    USER_ROLLS, USER_ROLL_COUNT,
};

/// Request a dice roll. Validates the parameters, registers a pending roll
/// and sends a randomness request to the oracle. The dice land later, when
/// the oracle calls back through receive_randomness.
pub fn roll_dice(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RollParams,
) -> Result<Response, ContractError> {
    // Reject before any storage write or oracle message
    params.validate()?;

    let config = CONFIG.load(deps.storage)?;

    let request_id = next_request_id(deps.storage)?;
    let pending = PendingRoll {
        roller: info.sender.clone(),
        params,
        requested_at: env.block.time,
    };
    PENDING_ROLLS.save(deps.storage, request_id, &pending)?;

    // Fire-and-forget; the oracle echoes the id back at fulfillment
    let request_msg = WasmMsg::Execute {
        contract_addr: config.oracle.to_string(),
        msg: to_json_binary(&OracleExecuteMsg::RequestRandomness { request_id })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "roll_dice")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("roller", info.sender.to_string())
        .add_event(
            Event::new("dice_roll_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("roller", info.sender.to_string())
                .add_attribute("number_of_dice", params.number_of_dice.to_string())
                .add_attribute("die_size", params.die_size.to_string())
                .add_attribute("adjustment", params.adjustment.to_string()),
        ))
}

/// Oracle callback delivering randomness for a pending roll. Derives the
/// die values, commits the roll record and emits the dice_rolled /
/// dice_landed event pair, in that order.
pub fn receive_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    randomness: Vec<u8>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Authorization comes before any pending-roll lookup
    if info.sender != config.oracle {
        return Err(ContractError::Unauthorized {
            reason: "only the oracle can deliver randomness".to_string(),
        });
    }

    let pending = PENDING_ROLLS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::UnknownRequest { request_id })?;
    // Consume the id so a redelivery cannot land twice
    PENDING_ROLLS.remove(deps.storage, request_id);

    let params = pending.params;
    let (rolled_values, result) = derive_outcome(
        &randomness,
        params.number_of_dice,
        params.die_size,
        params.adjustment,
    );

    let record = RollRecord {
        roller: pending.roller.clone(),
        timestamp: env.block.time,
        randomness,
        number_of_dice: params.number_of_dice,
        die_size: params.die_size,
        adjustment: params.adjustment,
        result,
        has_rolled: true,
        rolled_values,
    };
    commit_roll(deps.storage, &record)?;

    let (rolled_event, landed_event) = roll_events(request_id, &record);

    Ok(Response::new()
        .add_attribute("action", "receive_randomness")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("roller", record.roller.to_string())
        .add_attribute("result", record.result.to_string())
        .add_event(rolled_event)
        .add_event(landed_event))
}

/// Roll without waiting for the oracle, seeding from block entropy. The
/// request id is allocated and consumed within the same call so observers
/// see the same event pair as an oracle roll.
pub fn roll_dice_fast(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RollParams,
) -> Result<Response, ContractError> {
    params.validate()?;

    let request_id = next_request_id(deps.storage)?;
    let seed = fast_seed(&env, &info, request_id);

    let (rolled_values, result) = derive_outcome(
        &seed,
        params.number_of_dice,
        params.die_size,
        params.adjustment,
    );

    let record = RollRecord {
        roller: info.sender.clone(),
        timestamp: env.block.time,
        randomness: seed,
        number_of_dice: params.number_of_dice,
        die_size: params.die_size,
        adjustment: params.adjustment,
        result,
        has_rolled: true,
        rolled_values,
    };
    commit_roll(deps.storage, &record)?;

    let (rolled_event, landed_event) = roll_events(request_id, &record);

    Ok(Response::new()
        .add_attribute("action", "roll_dice_fast")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("roller", record.roller.to_string())
        .add_attribute("result", record.result.to_string())
        .add_event(rolled_event)
        .add_event(landed_event))
}

/// Record a roll made off-contract with a caller-supplied result. The
/// parameters still have to pass the same bounds as a real roll.
pub fn record_roll(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RollParams,
    result: i16,
) -> Result<Response, ContractError> {
    params.validate()?;

    let record = RollRecord {
        roller: info.sender.clone(),
        timestamp: env.block.time,
        randomness: Vec::new(),
        number_of_dice: params.number_of_dice,
        die_size: params.die_size,
        adjustment: params.adjustment,
        result,
        has_rolled: true,
        rolled_values: Vec::new(),
    };
    commit_roll(deps.storage, &record)?;

    Ok(Response::new()
        .add_attribute("action", "record_roll")
        .add_attribute("roller", info.sender.to_string())
        .add_attribute("result", result.to_string())
        .add_event(
            Event::new("dice_roll_recorded")
                .add_attribute("roller", info.sender.to_string())
                .add_attribute("result", result.to_string()),
        ))
}

/// Drop a pending roll whose fulfillment never arrived. Roller or admin
/// only, and only after the configured timeout has elapsed.
pub fn cancel_roll(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let pending = PENDING_ROLLS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::UnknownRequest { request_id })?;

    if info.sender != pending.roller && info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the roller or admin can cancel a pending roll".to_string(),
        });
    }

    let cancellable_at = pending.requested_at.plus_seconds(config.roll_timeout_seconds);
    if env.block.time < cancellable_at {
        return Err(ContractError::RollNotExpired {
            request_id,
            cancellable_at: cancellable_at.seconds(),
        });
    }

    PENDING_ROLLS.remove(deps.storage, request_id);

    Ok(Response::new()
        .add_attribute("action", "cancel_roll")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("dice_roll_cancelled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("roller", pending.roller.to_string()),
        ))
}

/// Update contract configuration. Admin only.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: Option<String>,
    oracle: Option<String>,
    roll_timeout_seconds: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        });
    }

    if let Some(new_admin) = admin {
        config.admin = deps.api.addr_validate(&new_admin)?;
    }
    if let Some(new_oracle) = oracle {
        config.oracle = deps.api.addr_validate(&new_oracle)?;
    }
    if let Some(new_timeout) = roll_timeout_seconds {
        if new_timeout == 0 {
            return Err(ContractError::InvalidTimeout);
        }
        config.roll_timeout_seconds = new_timeout;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

/// Allocate the next oracle correlation id.
fn next_request_id(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let request_id = NEXT_REQUEST_ID.may_load(storage)?.unwrap_or(0);
    NEXT_REQUEST_ID.save(storage, &(request_id + 1))?;
    Ok(request_id)
}

/// Append a completed roll and update the per-user and global indices.
/// The only place records and counters are written, so the append-only
/// history and the idempotent participant set are enforced here.
fn commit_roll(storage: &mut dyn Storage, record: &RollRecord) -> Result<(), ContractError> {
    let roller = &record.roller;

    let mut rolls = USER_ROLLS.may_load(storage, roller)?.unwrap_or_default();
    rolls.push(record.clone());
    USER_ROLLS.save(storage, roller, &rolls)?;

    let count = USER_ROLL_COUNT.may_load(storage, roller)?.unwrap_or(0);
    USER_ROLL_COUNT.save(storage, roller, &(count + 1))?;

    // Second roll by the same address must not grow the participant count
    if !HAS_ROLLED.has(storage, roller) {
        HAS_ROLLED.save(storage, roller, &true)?;
        let total = ROLLER_COUNT.may_load(storage)?.unwrap_or(0);
        ROLLER_COUNT.save(storage, &(total + 1))?;
    }

    Ok(())
}

/// The guaranteed event pair for a landed roll: acknowledgment first,
/// outcome second, both carrying the request id.
fn roll_events(request_id: u64, record: &RollRecord) -> (Event, Event) {
    let rolled = Event::new("dice_rolled")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("roller", record.roller.to_string());

    let landed = Event::new("dice_landed")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("roller", record.roller.to_string())
        .add_attribute("rolled_values", format!("{:?}", record.rolled_values))
        .add_attribute("adjustment", record.adjustment.to_string())
        .add_attribute("result", record.result.to_string())
        .add_attribute("randomness", hex::encode(&record.randomness));

    (rolled, landed)
}

/// Entropy for fast rolls: block time and height, the caller and the
/// request id, hashed together. Predictable to validators, which is the
/// trade-off the fast path accepts.
fn fast_seed(env: &Env, info: &MessageInfo, request_id: u64) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(env.block.time.nanos().to_be_bytes());
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(info.sender.as_bytes());
    hasher.update(request_id.to_be_bytes());
    hasher.finalize().to_vec()
}
