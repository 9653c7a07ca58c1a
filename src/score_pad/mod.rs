use std::cmp;

use crate::{
    error::{ScoringError, ScoringResult},
    model::{
        arrow::Arrow,
        golds::GoldsType,
        round::{DistanceSegment, DistanceUnit, RoundGeometry},
    },
};

pub use self::{
    export::{to_csv, to_plain_text, ScorePadColumn},
    row::{RowTotals, ScorePadRow},
};

mod export;
mod row;

/// Row header of distance and surplus totals.
pub const TOTAL_HEADER: &str = "T";

/// Row header of the grand total.
pub const GRAND_TOTAL_HEADER: &str = "GT";

/// The aggregated rows of a shot round.
///
/// # Example
///
/// ```
/// use archery_scorer::{
///     model::{arrow::Arrow, golds::GoldsType},
///     score_pad::ScorePadColumn,
///     ScorePad,
/// };
///
/// let arrows: Vec<_> = (1..=12)
///     .map(|n| Arrow::new(7, n, if n % 2 == 1 { 10 } else { 9 }, false))
///     .collect();
///
/// let pad = ScorePad::builder(&arrows)
///     .end_size(6)
///     .golds(GoldsType::Tens)
///     .build()
///     .unwrap();
///
/// let total = pad.grand_total().unwrap();
/// assert_eq!((total.hits, total.score, total.golds), (12, 114, 6));
///
/// let csv = pad.to_csv(&ScorePadColumn::DEFAULT_ORDER, true);
/// assert_eq!(csv.lines().count(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScorePad {
    rows: Vec<ScorePadRow>,
}

impl ScorePad {
    /// Create a [`ScorePadBuilder`] for the arrows of a single round
    /// instance.
    pub const fn builder(arrows: &[Arrow]) -> ScorePadBuilder<'_> {
        ScorePadBuilder::new(arrows)
    }

    pub fn rows(&self) -> &[ScorePadRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ScorePadRow> {
        self.rows
    }

    /// Whether no arrows have been shot yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Totals of all arrows or `None` if no arrows have been shot yet.
    pub fn grand_total(&self) -> Option<RowTotals> {
        self.rows.iter().rev().find_map(|row| match row {
            ScorePadRow::GrandTotal { totals } => Some(*totals),
            _ => None,
        })
    }

    /// Distance and surplus totals in the order they were shot.
    pub fn distance_totals(&self) -> impl Iterator<Item = &ScorePadRow> {
        self.rows.iter().filter(|row| row.is_distance_row())
    }

    /// See [`row_headers`].
    pub fn row_headers(&self) -> Vec<String> {
        row_headers(&self.rows)
    }

    /// See [`to_plain_text`].
    pub fn to_plain_text(
        &self,
        columns: &[ScorePadColumn],
        include_distance_rows: bool,
    ) -> (String, String) {
        to_plain_text(&self.rows, columns, include_distance_rows)
    }

    /// See [`to_csv`].
    pub fn to_csv(&self, columns: &[ScorePadColumn], include_distance_rows: bool) -> String {
        to_csv(&self.rows, columns, include_distance_rows)
    }
}

/// Builder for a [`ScorePad`].
#[derive(Clone, Debug)]
#[must_use]
pub struct ScorePadBuilder<'a> {
    arrows: &'a [Arrow],
    end_size: usize,
    golds: GoldsType,
    round: Option<(&'a RoundGeometry, Option<u32>)>,
}

impl<'a> ScorePadBuilder<'a> {
    /// Amount of arrows per end if none is specified.
    pub const DEFAULT_END_SIZE: usize = 6;

    /// Create a new builder for the arrows of a single round instance.
    pub const fn new(arrows: &'a [Arrow]) -> Self {
        Self {
            arrows,
            end_size: Self::DEFAULT_END_SIZE,
            golds: GoldsType::Tens,
            round: None,
        }
    }

    /// Specify the amount of arrows per end.
    ///
    /// Defaults to [`ScorePadBuilder::DEFAULT_END_SIZE`].
    pub const fn end_size(mut self, end_size: usize) -> Self {
        self.end_size = end_size;

        self
    }

    /// Specify which arrows count as golds.
    ///
    /// Defaults to [`GoldsType::Tens`].
    pub const fn golds(mut self, golds: GoldsType) -> Self {
        self.golds = golds;

        self
    }

    /// Specify the round that was shot.
    ///
    /// If no round is given, all arrows will be treated as a single
    /// anonymous distance without distance total. If `sub_type` is `None`,
    /// [`RoundGeometry::DEFAULT_SUB_TYPE`] will be used.
    pub const fn round(mut self, round: &'a RoundGeometry, sub_type: Option<u32>) -> Self {
        self.round = Some((round, sub_type));

        self
    }

    /// Aggregate the arrows into a [`ScorePad`].
    pub fn build(self) -> ScoringResult<ScorePad> {
        let rows = match self.round {
            Some((round, sub_type)) => {
                let segments = round.segments(sub_type)?;

                build_score_pad(
                    self.arrows,
                    self.end_size,
                    self.golds,
                    Some((segments.as_slice(), round.unit)),
                )?
            }
            None => build_score_pad(self.arrows, self.end_size, self.golds, None)?,
        };

        Ok(ScorePad { rows })
    }
}

/// Aggregate the arrows of a single round instance into score pad rows.
///
/// Arrows are grouped into ends of `end_size` arrows. If `geometry` is
/// specified, each distance segment consumes its arrow count from the front
/// of the remaining arrows, ends never span two distances, and every
/// distance is followed by its total if the round has multiple distances or
/// more arrows were shot than the round specifies. Those surplus arrows form
/// an additional segment that ends on a [`ScorePadRow::SurplusTotal`].
///
/// Unless `arrows` is empty, the last row is always the grand total.
pub fn build_score_pad(
    arrows: &[Arrow],
    end_size: usize,
    golds: GoldsType,
    geometry: Option<(&[DistanceSegment], DistanceUnit)>,
) -> ScoringResult<Vec<ScorePadRow>> {
    if end_size == 0 {
        return Err(ScoringError::ZeroEndSize);
    }

    validate_arrows(arrows)?;

    if arrows.is_empty() {
        return Ok(Vec::new());
    }

    let mut pad = PadState {
        rows: Vec::with_capacity(arrows.len() / end_size + 4),
        end_size,
        golds,
        end_number: 0,
        running_total: 0,
    };

    match geometry {
        Some((segments, unit)) => {
            let mut segments = segments.to_vec();
            segments.sort_unstable_by_key(|segment| segment.distance_number);

            let nominal_len: usize = segments
                .iter()
                .map(|segment| segment.arrow_count as usize)
                .sum();

            let with_distance_totals = segments.len() > 1 || arrows.len() > nominal_len;
            let mut remaining = arrows;

            for segment in &segments {
                if remaining.is_empty() {
                    break;
                }

                let take = cmp::min(segment.arrow_count as usize, remaining.len());

                if take == 0 {
                    continue;
                }

                let (distance_arrows, rest) = remaining.split_at(take);
                pad.push_ends(distance_arrows);

                if with_distance_totals {
                    pad.rows.push(ScorePadRow::DistanceTotal {
                        distance: segment.distance,
                        unit,
                        totals: RowTotals::new(distance_arrows, golds),
                    });
                }

                remaining = rest;
            }

            if !remaining.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    surplus = remaining.len(),
                    nominal_len,
                    "More arrows than the round specifies"
                );

                pad.push_ends(remaining);

                pad.rows.push(ScorePadRow::SurplusTotal {
                    totals: RowTotals::new(remaining, golds),
                });
            }
        }
        None => pad.push_ends(arrows),
    }

    pad.rows.push(ScorePadRow::GrandTotal {
        totals: RowTotals::new(arrows, golds),
    });

    Ok(pad.rows)
}

/// Row headers of the given rows.
///
/// End rows are numbered starting at 1 regardless of distances, distance
/// and surplus totals are labeled [`TOTAL_HEADER`], and the grand total
/// [`GRAND_TOTAL_HEADER`].
pub fn row_headers(rows: &[ScorePadRow]) -> Vec<String> {
    let mut end_number = 0;

    rows.iter()
        .map(|row| match row {
            ScorePadRow::End { .. } => {
                end_number += 1;

                end_number.to_string()
            }
            ScorePadRow::DistanceTotal { .. } | ScorePadRow::SurplusTotal { .. } => {
                TOTAL_HEADER.to_owned()
            }
            ScorePadRow::GrandTotal { .. } => GRAND_TOTAL_HEADER.to_owned(),
        })
        .collect()
}

fn validate_arrows(arrows: &[Arrow]) -> ScoringResult<()> {
    let Some(first) = arrows.first() else {
        return Ok(());
    };

    for arrow in arrows {
        if arrow.round_instance != first.round_instance {
            return Err(ScoringError::MixedRoundInstances {
                first: first.round_instance,
                other: arrow.round_instance,
            });
        }

        if !arrow.is_consistent() {
            return Err(ScoringError::InvalidX {
                arrow_number: arrow.arrow_number,
                score: arrow.score,
            });
        }
    }

    Ok(())
}

/// End rows and counters while building a score pad.
struct PadState {
    rows: Vec<ScorePadRow>,
    end_size: usize,
    golds: GoldsType,
    end_number: usize,
    running_total: u32,
}

impl PadState {
    fn push_ends(&mut self, arrows: &[Arrow]) {
        for end in arrows.chunks(self.end_size) {
            let totals = RowTotals::new(end, self.golds);

            self.end_number += 1;
            self.running_total += totals.score;

            self.rows.push(ScorePadRow::End {
                end_number: self.end_number,
                arrows: end.to_vec(),
                totals,
                running_total: self.running_total,
            });
        }
    }
}
