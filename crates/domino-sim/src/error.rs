use thiserror::Error;

/// Ways the scripted demo can fail to produce a chain reaction.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("drag path never crossed a tracked plane ({samples} samples)")]
    NoSurface { samples: usize },

    #[error("drag path hit the surface {hits} times but placed no domino")]
    NothingPlaced { hits: usize },

    #[error("start did not push the first domino")]
    NotStarted,
}
