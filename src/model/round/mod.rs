use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::{ScoringError, ScoringResult};

pub use self::decode::ParseRoundError;

mod decode;
mod reader;

/// Static reference data of a round such as "York" or "WA 18m".
///
/// Rounds with sub-types, e.g. gender or age specific variants, share their
/// arrow counts and face sizes but specify their own distances.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundGeometry {
    pub name: String,
    pub unit: DistanceUnit,
    pub location: Location,
    pub scoring: Scoring,

    pub arrow_counts: Vec<ArrowCount>,
    /// Distances of all sub-types. Rounds without sub-types store their
    /// distances under sub-type [`RoundGeometry::DEFAULT_SUB_TYPE`].
    pub distances: Vec<RoundDistance>,
    pub sub_types: Vec<RoundSubType>,
}

impl RoundGeometry {
    /// Sub-type that is used if none is specified.
    pub const DEFAULT_SUB_TYPE: u32 = 1;

    /// Nominal amount of arrows of the round.
    pub fn arrow_count(&self) -> u32 {
        self.arrow_counts.iter().map(|count| count.arrow_count).sum()
    }

    /// Highest possible score of the round.
    pub fn max_score(&self) -> u32 {
        self.arrow_count() * u32::from(self.scoring.max_ring())
    }

    /// Resolve the distance segments of the given sub-type.
    ///
    /// If `sub_type` is `None`, [`RoundGeometry::DEFAULT_SUB_TYPE`] will be
    /// used.
    pub fn segments(&self, sub_type: Option<u32>) -> ScoringResult<Vec<DistanceSegment>> {
        let sub_type = sub_type.unwrap_or(Self::DEFAULT_SUB_TYPE);

        let known = if self.sub_types.is_empty() {
            sub_type == Self::DEFAULT_SUB_TYPE
        } else {
            self.sub_types.iter().any(|sub| sub.id == sub_type)
        };

        if !known {
            return Err(ScoringError::UnknownSubType(sub_type));
        }

        let mut distances: Vec<_> = self
            .distances
            .iter()
            .filter(|distance| distance.sub_type == sub_type)
            .collect();

        if distances.len() != self.arrow_counts.len() {
            return Err(ScoringError::SegmentMismatch {
                sub_type,
                arrow_counts: self.arrow_counts.len(),
                distances: distances.len(),
            });
        }

        distances.sort_unstable_by_key(|distance| distance.distance_number);

        let mut arrow_counts: Vec<_> = self.arrow_counts.iter().collect();
        arrow_counts.sort_unstable_by_key(|count| count.distance_number);

        arrow_counts
            .into_iter()
            .zip(distances)
            .map(|(count, distance)| {
                if count.distance_number == distance.distance_number {
                    Ok(DistanceSegment {
                        distance_number: count.distance_number,
                        face_size_cm: count.face_size_cm,
                        arrow_count: count.arrow_count,
                        distance: distance.distance,
                    })
                } else {
                    Err(ScoringError::MissingDistance {
                        sub_type,
                        distance_number: count.distance_number,
                    })
                }
            })
            .collect()
    }
}

/// How many arrows are shot at which face size for a distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrowCount {
    /// 1-based position of the distance within the round.
    pub distance_number: u32,
    pub face_size_cm: u32,
    pub arrow_count: u32,
}

/// The concrete distance of a sub-type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundDistance {
    pub distance_number: u32,
    pub sub_type: u32,
    /// Distance in the round's [`DistanceUnit`].
    pub distance: u32,
}

/// A variant of a round that only differs in its distances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSubType {
    pub id: u32,
    pub name: String,
}

/// A resolved distance of a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DistanceSegment {
    pub distance_number: u32,
    pub face_size_cm: u32,
    pub arrow_count: u32,
    pub distance: u32,
}

/// Unit of a round's distances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    #[default]
    Metres,
    Yards,
}

impl DistanceUnit {
    const METRES_PER_YARD: f64 = 0.9144;

    /// Convert a distance in this unit into metres.
    pub fn to_metres(self, distance: f64) -> f64 {
        match self {
            Self::Metres => distance,
            Self::Yards => distance * Self::METRES_PER_YARD,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Yards => "yd",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Whether a round is shot indoors or outdoors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    Indoor,
    #[default]
    Outdoor,
}

/// Ring values of a round's faces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scoring {
    /// Ten rings scoring 10 down to 1.
    #[default]
    TenZone,
    /// Imperial scoring with five colours scoring 9, 7, 5, 3, and 1.
    FiveZone,
    /// Five rings scoring 5 down to 1.
    Worcester,
}

impl Scoring {
    /// Value of the best ring.
    pub const fn max_ring(self) -> u8 {
        match self {
            Self::TenZone => 10,
            Self::FiveZone => 9,
            Self::Worcester => 5,
        }
    }
}
