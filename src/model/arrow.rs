use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single shot arrow of a round instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arrow {
    /// Identifier of the round instance i.e. the shot round this arrow
    /// belongs to.
    pub round_instance: u32,
    /// 1-based position of the arrow within its round instance.
    pub arrow_number: u32,
    /// Ring value of the arrow; `0` is a miss.
    pub score: u8,
    /// Whether the arrow hit the inner ten. Only meaningful if `score` is
    /// `10`.
    pub is_x: bool,
}

impl Arrow {
    /// Create a new [`Arrow`].
    pub const fn new(round_instance: u32, arrow_number: u32, score: u8, is_x: bool) -> Self {
        Self {
            round_instance,
            arrow_number,
            score,
            is_x,
        }
    }

    /// Whether the arrow hit the face at all.
    pub const fn is_hit(&self) -> bool {
        self.score != 0
    }

    /// Whether `is_x` is only set on a ten.
    pub(crate) const fn is_consistent(&self) -> bool {
        !self.is_x || self.score == 10
    }
}

impl Display for Arrow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.score, self.is_x) {
            (0, _) => f.write_str("M"),
            (10, true) => f.write_str("X"),
            (score, _) => write!(f, "{score}"),
        }
    }
}
