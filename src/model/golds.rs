use super::{
    arrow::Arrow,
    round::{DistanceUnit, Location, RoundGeometry},
};

/// Which arrows count as golds.
///
/// Golds are only ever counted, they never influence the score itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GoldsType {
    /// Only tens are golds.
    #[default]
    Tens,
    /// Nines and tens are golds.
    Nines,
    /// Only inner tens are golds.
    Xs,
}

impl GoldsType {
    /// Whether the given arrow is a gold.
    pub const fn is_gold(self, arrow: &Arrow) -> bool {
        match self {
            Self::Tens => arrow.score == 10,
            Self::Nines => arrow.score >= 9,
            Self::Xs => arrow.is_x,
        }
    }

    /// The golds type that is usually counted for the given round.
    ///
    /// Outdoor imperial rounds count nines, everything else counts tens.
    pub const fn default_for(round: &RoundGeometry) -> Self {
        match (round.location, round.unit) {
            (Location::Outdoor, DistanceUnit::Yards) => Self::Nines,
            _ => Self::Tens,
        }
    }

    /// Short label, e.g. to caption the golds column of a score pad.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tens => "10s",
            Self::Nines => "9s",
            Self::Xs => "Xs",
        }
    }
}
