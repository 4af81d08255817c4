use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A building record is structurally invalid. `index` is its position in the input.
    #[error("invalid building record at index {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
    #[error("building kind {kind} has an empty footprint")]
    EmptyFootprint { kind: String },
    #[error("unknown land tier {0}")]
    UnknownLandTier(u8),
}

impl EngineError {
    pub fn invalid_input(index: usize, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            index,
            reason: reason.into(),
        }
    }
}
