/// `Result<_, ScoringError>`
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Anything that could go wrong while aggregating a score pad or while
/// resolving a round for a handicap calculation.
///
/// All variants are precondition violations by the caller, i.e. invalid
/// arguments. Out-of-range handicaps or scores are never an error; they are
/// clamped instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("end size must be greater than zero")]
    ZeroEndSize,
    #[error("arrows belong to more than one round instance ({first} and {other})")]
    MixedRoundInstances { first: u32, other: u32 },
    #[error("arrow {arrow_number} is marked as X but scores {score}")]
    InvalidX { arrow_number: u32, score: u8 },
    #[error("round has {arrow_counts} arrow counts but {distances} distances for sub type {sub_type}")]
    SegmentMismatch {
        sub_type: u32,
        arrow_counts: usize,
        distances: usize,
    },
    #[error("no distance {distance_number} for sub type {sub_type}")]
    MissingDistance { sub_type: u32, distance_number: u32 },
    #[error("unknown sub type {0}")]
    UnknownSubType(u32),
    #[error("{faces} faces were given for {segments} distances")]
    TooManyFaces { faces: usize, segments: usize },
    #[error("face {face:?} cannot be used for {scoring:?} scoring")]
    IncompatibleFace {
        face: crate::model::face::FaceType,
        scoring: crate::model::round::Scoring,
    },
}

impl ScoringError {
    /// Whether the error is caused by an invalid argument.
    ///
    /// Currently this holds for every variant.
    pub const fn is_invalid_argument(&self) -> bool {
        match self {
            Self::ZeroEndSize
            | Self::MixedRoundInstances { .. }
            | Self::InvalidX { .. }
            | Self::SegmentMismatch { .. }
            | Self::MissingDistance { .. }
            | Self::UnknownSubType(_)
            | Self::TooManyFaces { .. }
            | Self::IncompatibleFace { .. } => true,
        }
    }
}
