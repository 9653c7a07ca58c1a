use crate::{
    error::{ScoringError, ScoringResult},
    model::{face::FaceType, round::RoundGeometry},
};

use self::formula::Rings;

mod formula;
mod search;

/// Best handicap of the tables.
pub const MIN_HANDICAP: f64 = 0.0;

/// Worst handicap of the tables.
pub const MAX_HANDICAP: f64 = 150.0;

/// The handicap tables that are used for calculations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HandicapSystem {
    /// Pre-2023 tables by David Lane.
    Legacy,
    /// Archery GB tables introduced in 2023.
    #[default]
    Agb2023,
}

/// A handicap together with the score expected for it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandicapPair {
    pub handicap: f64,
    pub score: u32,
}

/// Conversion between handicaps and expected scores for a round.
///
/// # Example
///
/// ```
/// use archery_scorer::{
///     model::{
///         face::FaceType,
///         round::{ArrowCount, DistanceUnit, Location, RoundDistance, RoundGeometry},
///     },
///     HandicapCalculator, HandicapSystem,
/// };
///
/// let portsmouth = RoundGeometry {
///     name: "Portsmouth".to_owned(),
///     unit: DistanceUnit::Yards,
///     location: Location::Indoor,
///     arrow_counts: vec![ArrowCount { distance_number: 1, face_size_cm: 60, arrow_count: 60 }],
///     distances: vec![RoundDistance { distance_number: 1, sub_type: 1, distance: 20 }],
///     ..Default::default()
/// };
///
/// let full_face = HandicapCalculator::new(&portsmouth)
///     .system(HandicapSystem::Agb2023)
///     .score_for(60.0)
///     .unwrap();
///
/// let triple_face = HandicapCalculator::new(&portsmouth)
///     .faces(&[FaceType::Triple])
///     .score_for(60.0)
///     .unwrap();
///
/// assert!(triple_face < full_face);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct HandicapCalculator<'round> {
    round: &'round RoundGeometry,
    sub_type: Option<u32>,
    inner_ten: bool,
    faces: Vec<FaceType>,
    system: HandicapSystem,
}

impl<'round> HandicapCalculator<'round> {
    /// Create a new calculator for the given round.
    ///
    /// By default, the round's default sub type is shot on full faces with
    /// regular ten rings and the [`HandicapSystem::Agb2023`] tables apply.
    pub const fn new(round: &'round RoundGeometry) -> Self {
        Self {
            round,
            sub_type: None,
            inner_ten: false,
            faces: Vec::new(),
            system: HandicapSystem::Agb2023,
        }
    }

    /// Specify the sub type of the round, i.e. which set of distances is shot.
    pub const fn sub_type(mut self, sub_type: u32) -> Self {
        self.sub_type = Some(sub_type);

        self
    }

    /// Whether only the X ring scores 10, as is the case for compound bows.
    ///
    /// Has no effect on rounds without ten zone scoring.
    pub const fn inner_ten(mut self, inner_ten: bool) -> Self {
        self.inner_ten = inner_ten;

        self
    }

    /// Specify the faces that are shot at.
    ///
    /// A single face applies to all distances, otherwise the faces are given
    /// in distance order and missing ones default to [`FaceType::Full`].
    pub fn faces(mut self, faces: &[FaceType]) -> Self {
        faces.clone_into(&mut self.faces);

        self
    }

    pub const fn system(mut self, system: HandicapSystem) -> Self {
        self.system = system;

        self
    }

    /// The expected score for a handicap.
    ///
    /// Handicaps outside of `0..=150` are clamped.
    pub fn score_for(&self, handicap: f64) -> ScoringResult<u32> {
        let handicap = clamp_handicap(handicap);

        self.resolve().map(|round| round.score(handicap))
    }

    /// The handicap for a score.
    ///
    /// This is the worst handicap whose expected score still reaches `score`.
    /// Scores beyond what is achievable at handicap 0 result in 0, scores
    /// that are reached even at handicap 150 result in 150.
    pub fn handicap_for(&self, score: u32) -> ScoringResult<f64> {
        self.resolve()
            .map(|round| search::handicap_for(&round, score))
    }

    /// The worst whole handicap whose expected score still reaches `score`.
    ///
    /// Unlike rounding the result of [`handicap_for`](Self::handicap_for),
    /// the expected score of the returned handicap is never below `score`
    /// unless `score` cannot be reached at all, in which case this is 0.
    pub fn whole_handicap_for(&self, score: u32) -> ScoringResult<u32> {
        self.handicap_for(score)
            .map(|handicap| handicap.floor() as u32)
    }

    /// Expected scores for all whole handicaps from 0 to 150.
    pub fn table(&self) -> ScoringResult<Vec<HandicapPair>> {
        let round = self.resolve()?;

        let table = (0..=MAX_HANDICAP as u32)
            .map(f64::from)
            .map(|handicap| HandicapPair {
                handicap,
                score: round.score(handicap),
            })
            .collect();

        Ok(table)
    }

    /// The maximum score of the round with the given faces.
    pub fn max_score(&self) -> ScoringResult<u32> {
        self.resolve().map(|round| round.max_score)
    }

    fn resolve(&self) -> ScoringResult<ResolvedRound> {
        let segments = self.round.segments(self.sub_type)?;

        if self.faces.len() > 1 && self.faces.len() > segments.len() {
            return Err(ScoringError::TooManyFaces {
                faces: self.faces.len(),
                segments: segments.len(),
            });
        }

        let face_at = |i: usize| match self.faces.as_slice() {
            [face] => *face,
            faces => faces.get(i).copied().unwrap_or_default(),
        };

        let arrow_radius = self.system.arrow_radius(self.round.location);

        let passes = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let rings = Rings::new(self.round.scoring, face_at(i), self.inner_ten)?;

                Ok(Pass {
                    arrows: segment.arrow_count,
                    distance: self.round.unit.to_metres(f64::from(segment.distance)),
                    face_diameter: f64::from(segment.face_size_cm) / 100.0,
                    rings,
                })
            })
            .collect::<ScoringResult<Vec<_>>>()?;

        let max_score = passes
            .iter()
            .map(|pass| pass.arrows * u32::from(pass.rings.max_score()))
            .sum();

        Ok(ResolvedRound {
            passes,
            system: self.system,
            arrow_radius,
            max_score,
        })
    }
}

/// The expected score for a handicap.
///
/// Shorthand for [`HandicapCalculator::score_for`].
pub fn score_for_handicap(
    round: &RoundGeometry,
    sub_type: Option<u32>,
    handicap: f64,
    inner_ten: bool,
    faces: &[FaceType],
    system: HandicapSystem,
) -> ScoringResult<u32> {
    calculator(round, sub_type, inner_ten, faces, system).score_for(handicap)
}

/// The handicap for a score.
///
/// Shorthand for [`HandicapCalculator::handicap_for`].
pub fn handicap_for_score(
    round: &RoundGeometry,
    sub_type: Option<u32>,
    score: u32,
    inner_ten: bool,
    faces: &[FaceType],
    system: HandicapSystem,
) -> ScoringResult<f64> {
    calculator(round, sub_type, inner_ten, faces, system).handicap_for(score)
}

/// The worst whole handicap for a score.
///
/// Shorthand for [`HandicapCalculator::whole_handicap_for`].
pub fn whole_handicap_for_score(
    round: &RoundGeometry,
    sub_type: Option<u32>,
    score: u32,
    inner_ten: bool,
    faces: &[FaceType],
    system: HandicapSystem,
) -> ScoringResult<u32> {
    calculator(round, sub_type, inner_ten, faces, system).whole_handicap_for(score)
}

/// Round a handicap to the nearest whole number.
///
/// Halves round towards the worse handicap. The expected score of the rounded
/// handicap may fall below the score a handicap was looked up for, use
/// [`HandicapCalculator::whole_handicap_for`] to classify a shot score.
pub fn round_handicap(handicap: f64) -> i32 {
    (handicap + 0.5).floor() as i32
}

fn calculator<'round>(
    round: &'round RoundGeometry,
    sub_type: Option<u32>,
    inner_ten: bool,
    faces: &[FaceType],
    system: HandicapSystem,
) -> HandicapCalculator<'round> {
    let calc = HandicapCalculator::new(round)
        .inner_ten(inner_ten)
        .faces(faces)
        .system(system);

    match sub_type {
        Some(sub_type) => calc.sub_type(sub_type),
        None => calc,
    }
}

fn clamp_handicap(handicap: f64) -> f64 {
    if (MIN_HANDICAP..=MAX_HANDICAP).contains(&handicap) {
        return handicap;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(handicap, "handicap outside of the tables, clamping");

    if handicap.is_nan() {
        MAX_HANDICAP
    } else {
        handicap.clamp(MIN_HANDICAP, MAX_HANDICAP)
    }
}

/// Arrows shot at one distance and face.
#[derive(Copy, Clone, Debug)]
struct Pass {
    arrows: u32,
    /// In metres.
    distance: f64,
    /// In metres.
    face_diameter: f64,
    rings: Rings,
}

/// A round with its sub type and faces resolved.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedRound {
    passes: Vec<Pass>,
    system: HandicapSystem,
    arrow_radius: f64,
    max_score: u32,
}

impl ResolvedRound {
    /// Unrounded expected score.
    fn expected_score(&self, handicap: f64) -> f64 {
        self.passes
            .iter()
            .map(|pass| {
                let sigma = self.system.radial_deviation(handicap, pass.distance);
                let per_arrow =
                    pass.rings
                        .expected_score(sigma, pass.face_diameter, self.arrow_radius);

                f64::from(pass.arrows) * per_arrow
            })
            .sum()
    }

    /// Expected score, rounded to the nearest whole number.
    pub(crate) fn score(&self, handicap: f64) -> u32 {
        let score = self.expected_score(handicap).round();

        if score <= 0.0 {
            0
        } else {
            (score as u32).min(self.max_score)
        }
    }
}
