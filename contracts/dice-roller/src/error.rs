use cosmwasm_std::StdError;
use dice_roller_common::ParamsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error(transparent)]
    InvalidParams(#[from] ParamsError),

    #[error("no pending roll for request {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("roll {request_id} has not timed out yet (cancellable at {cancellable_at})")]
    RollNotExpired {
        request_id: u64,
        cancellable_at: u64,
    },

    #[error("roll timeout must be greater than zero")]
    InvalidTimeout,
}
