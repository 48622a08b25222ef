use thiserror::Error;
use tx_core::{Hour, TaxiId, TxError};
use tx_fleet::FleetError;

use crate::BookingRequest;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(#[from] TxError),

    #[error("request parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("drop time for {request} is past the last representable hour")]
    HourOverflow {
        request: BookingRequest,
    },

    #[error("selector picked {taxi}, which is busy at hour {at}")]
    Ineligible {
        taxi: TaxiId,
        at:   Hour,
    },

    #[error("commit failed: {0}")]
    Fleet(#[from] FleetError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
