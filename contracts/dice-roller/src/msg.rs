use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Timestamp;

use crate::state::{Config, RollRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Randomness oracle contract address
    pub oracle: String,
    /// Seconds before a pending roll becomes cancellable
    pub roll_timeout_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Request a dice roll. Registers a pending roll and asks the oracle
    /// for randomness; the dice land when the oracle calls back.
    RollDice {
        number_of_dice: u8,
        die_size: u8,
        adjustment: i8,
    },
    /// Oracle callback delivering the randomness for a pending roll.
    /// Only the configured oracle may call this.
    ReceiveRandomness {
        request_id: u64,
        randomness: Vec<u8>,
    },
    /// Roll immediately using block-derived entropy instead of the oracle.
    /// Weaker guarantees, no waiting.
    RollDiceFast {
        number_of_dice: u8,
        die_size: u8,
        adjustment: i8,
    },
    /// Record a roll made elsewhere, with a caller-supplied result.
    RecordRoll {
        number_of_dice: u8,
        die_size: u8,
        adjustment: i8,
        result: i16,
    },
    /// Drop a pending roll whose fulfillment never arrived. Roller or
    /// admin only, and only after the configured timeout.
    CancelRoll { request_id: u64 },
    /// Update contract configuration. Admin only.
    UpdateConfig {
        admin: Option<String>,
        oracle: Option<String>,
        roll_timeout_seconds: Option<u64>,
    },
}

/// Message sent to the oracle contract to request randomness. The oracle
/// echoes the request id back through ReceiveRandomness.
#[cw_serde]
pub enum OracleExecuteMsg {
    RequestRandomness { request_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    /// True iff the address has completed at least one roll.
    #[returns(bool)]
    HasRolledOnce { address: String },

    #[returns(u64)]
    UserRollsCount { address: String },

    /// Full roll history for an address, in fulfillment order.
    #[returns(Vec<RollRecord>)]
    UserRolls { address: String },

    /// Number of distinct addresses that have completed a roll.
    #[returns(u64)]
    AllUsersCount {},

    #[returns(Option<PendingRollResponse>)]
    PendingRoll { request_id: u64 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct PendingRollResponse {
    pub request_id: u64,
    pub roller: String,
    pub number_of_dice: u8,
    pub die_size: u8,
    pub adjustment: i8,
    pub requested_at: Timestamp,
}
