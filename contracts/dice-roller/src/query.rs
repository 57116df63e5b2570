use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::PendingRollResponse;
use crate::state::{CONFIG, HAS_ROLLED, PENDING_ROLLS, ROLLER_COUNT, USER_ROLLS, USER_ROLL_COUNT};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_has_rolled_once(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let has_rolled = HAS_ROLLED.may_load(deps.storage, &addr)?.unwrap_or(false);
    to_json_binary(&has_rolled)
}

pub fn query_user_rolls_count(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let count = USER_ROLL_COUNT.may_load(deps.storage, &addr)?.unwrap_or(0);
    to_json_binary(&count)
}

pub fn query_user_rolls(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let rolls = USER_ROLLS.may_load(deps.storage, &addr)?.unwrap_or_default();
    to_json_binary(&rolls)
}

pub fn query_all_users_count(deps: Deps) -> StdResult<Binary> {
    let count = ROLLER_COUNT.may_load(deps.storage)?.unwrap_or(0);
    to_json_binary(&count)
}

pub fn query_pending_roll(deps: Deps, request_id: u64) -> StdResult<Binary> {
    let pending = PENDING_ROLLS.may_load(deps.storage, request_id)?;
    let response = pending.map(|p| PendingRollResponse {
        request_id,
        roller: p.roller.to_string(),
        number_of_dice: p.params.number_of_dice,
        die_size: p.params.die_size,
        adjustment: p.params.adjustment,
        requested_at: p.requested_at,
    });
    to_json_binary(&response)
}
