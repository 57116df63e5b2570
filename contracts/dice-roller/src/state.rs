use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};
use dice_roller_common::RollParams;

pub const CONFIG: Item<Config> = Item::new("config");
/// Correlation ids handed to the oracle; monotonically increasing.
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
/// In-flight rolls keyed by request id. An entry is consumed exactly once,
/// either by fulfillment or by cancellation.
pub const PENDING_ROLLS: Map<u64, PendingRoll> = Map::new("pending_rolls");

/// Per-user roll history, in fulfillment order. Append-only.
pub const USER_ROLLS: Map<&Addr, Vec<RollRecord>> = Map::new("user_rolls");
/// Per-user roll count, kept alongside USER_ROLLS so count queries don't
/// load the full history.
pub const USER_ROLL_COUNT: Map<&Addr, u64> = Map::new("user_roll_count");
/// Addresses that have completed at least one roll. Insertion is idempotent.
pub const HAS_ROLLED: Map<&Addr, bool> = Map::new("has_rolled");
/// Cardinality of HAS_ROLLED, bumped only on first insertion to avoid
/// iterating the map on every count query.
pub const ROLLER_COUNT: Item<u64> = Item::new("roller_count");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// The randomness oracle contract. Only this address may fulfill.
    pub oracle: Addr,
    /// How long a pending roll must wait before it can be cancelled (seconds)
    pub roll_timeout_seconds: u64,
}

/// A roll awaiting its randomness. Removed on fulfillment or cancellation.
#[cw_serde]
pub struct PendingRoll {
    pub roller: Addr,
    pub params: RollParams,
    pub requested_at: Timestamp,
}

/// One completed roll. Immutable once written.
#[cw_serde]
pub struct RollRecord {
    pub roller: Addr,
    /// When the dice landed (fulfillment time, not request time)
    pub timestamp: Timestamp,
    /// Raw oracle seed, retained for auditability
    pub randomness: Vec<u8>,
    pub number_of_dice: u8,
    pub die_size: u8,
    pub adjustment: i8,
    /// sum(rolled_values) + adjustment. Can be negative.
    pub result: i16,
    /// Always true on a committed record; kept for query-shape compatibility
    pub has_rolled: bool,
    /// Individual die outcomes, each in [1, die_size]
    pub rolled_values: Vec<u8>,
}
