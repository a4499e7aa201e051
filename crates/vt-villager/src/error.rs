use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("a town needs at least one villager")]
    Empty,

    #[error("villager #{0} has a blank name")]
    BlankName(usize),

    #[error("duplicate villager name {0:?}")]
    DuplicateName(String),

    #[error("{0} villagers exceed the roster limit")]
    TooMany(usize),
}

pub type RosterResult<T> = Result<T, RosterError>;
