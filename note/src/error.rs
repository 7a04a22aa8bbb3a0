use thiserror::Error;

/// The only way operations in this crate fail. Each variant names the condition that caused the
/// input to be rejected. Anything not covered here is normalized rather than rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error(
        "absolute semitone {absolute} is out of range (supported range is {}..={})",
        crate::Note::MIN_ABSOLUTE,
        crate::Note::MAX_ABSOLUTE
    )]
    OutOfRange { absolute: i128 },
    #[error("not a note: {0:?}")]
    Spelling(String),
    #[error("unrecognized flat/sharp filter: {0:?}")]
    Filter(String),
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
