use thiserror::Error;
use vt_core::{VillagerId, VtError};
use vt_mobility::MobilityError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] VtError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("focus {focus} is out of range for {count} villagers")]
    FocusOutOfRange {
        focus: VillagerId,
        count: usize,
    },

    #[error("`run` needs config.total_ticks; use `run_ticks` for an open-ended town")]
    NoTickLimit,
}

pub type SimResult<T> = Result<T, SimError>;
