use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("row pitch {pitch} is smaller than the block width {block_width}")]
    InvalidPitch { pitch: usize, block_width: usize },

    #[error("row pitch {pitch} would overflow the block size")]
    PitchWouldOverflow { pitch: usize },

    #[error("expected block to have at least {expected} bytes but found {actual}")]
    NotEnoughData { expected: usize, actual: usize },
}
