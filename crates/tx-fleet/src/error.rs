use thiserror::Error;
use tx_core::TaxiId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("{0} is not part of the fleet")]
    UnknownTaxi(TaxiId),
}

pub type FleetResult<T> = Result<T, FleetError>;
