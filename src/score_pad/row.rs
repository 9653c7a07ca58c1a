use std::fmt::Write;

use crate::model::{arrow::Arrow, golds::GoldsType, round::DistanceUnit};

/// Hits, score, and golds of a group of arrows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowTotals {
    /// Amount of arrows that did not miss.
    pub hits: u32,
    /// Sum of all arrow scores.
    pub score: u32,
    /// Amount of golds w.r.t. the [`GoldsType`] of the score pad.
    pub golds: u32,
}

impl RowTotals {
    /// Sum up the given arrows.
    pub fn new(arrows: &[Arrow], golds: GoldsType) -> Self {
        arrows.iter().fold(Self::default(), |mut totals, arrow| {
            totals.hits += u32::from(arrow.is_hit());
            totals.score += u32::from(arrow.score);
            totals.golds += u32::from(golds.is_gold(arrow));

            totals
        })
    }
}

/// A single row of a [`ScorePad`](super::ScorePad).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScorePadRow {
    /// A group of consecutively shot arrows.
    End {
        /// 1-based number of the end, counted across all distances.
        end_number: usize,
        arrows: Vec<Arrow>,
        totals: RowTotals,
        /// Score of this end and all ends before it.
        running_total: u32,
    },
    /// Totals of all arrows shot at one distance.
    DistanceTotal {
        distance: u32,
        unit: DistanceUnit,
        totals: RowTotals,
    },
    /// Totals of all arrows shot beyond the round's nominal length.
    SurplusTotal { totals: RowTotals },
    /// Totals of all arrows.
    GrandTotal { totals: RowTotals },
}

impl ScorePadRow {
    pub const fn totals(&self) -> &RowTotals {
        match self {
            Self::End { totals, .. }
            | Self::DistanceTotal { totals, .. }
            | Self::SurplusTotal { totals }
            | Self::GrandTotal { totals } => totals,
        }
    }

    /// The running total if this is an end row.
    pub const fn running_total(&self) -> Option<u32> {
        match self {
            Self::End { running_total, .. } => Some(*running_total),
            Self::DistanceTotal { .. } | Self::SurplusTotal { .. } | Self::GrandTotal { .. } => {
                None
            }
        }
    }

    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }

    /// Whether the row is a distance or surplus total.
    pub const fn is_distance_row(&self) -> bool {
        matches!(self, Self::DistanceTotal { .. } | Self::SurplusTotal { .. })
    }

    /// Text shown in the arrows column.
    ///
    /// End rows list their arrows, e.g. `X-10-9-M`, total rows describe
    /// themselves.
    pub fn arrows_text(&self) -> String {
        match self {
            Self::End { arrows, .. } => {
                let mut text = String::with_capacity(arrows.len() * 3);

                for (i, arrow) in arrows.iter().enumerate() {
                    if i > 0 {
                        text.push('-');
                    }

                    let _ = write!(text, "{arrow}");
                }

                text
            }
            Self::DistanceTotal { distance, unit, .. } => format!("Total at {distance}{unit}"),
            Self::SurplusTotal { .. } => "Surplus Total".to_owned(),
            Self::GrandTotal { .. } => "Grand Total".to_owned(),
        }
    }
}
