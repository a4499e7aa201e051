use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("movement speed {0} must be in (0, 1]")]
    InvalidSpeed(f64),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
