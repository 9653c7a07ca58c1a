use super::{ResolvedRound, MAX_HANDICAP, MIN_HANDICAP};

/// Upper bound of bisection steps. The loop usually ends earlier once `lo`
/// and `hi` are neighbouring floats.
const MAX_STEPS: usize = 128;

/// Find the worst handicap whose expected score still reaches `score`.
///
/// Expected scores are non-increasing in the handicap so a bisection over the
/// table range finds the boundary between handicaps that reach `score` and
/// those that do not.
pub(super) fn handicap_for(round: &ResolvedRound, score: u32) -> f64 {
    if round.score(MIN_HANDICAP) < score {
        #[cfg(feature = "tracing")]
        tracing::debug!(score, "score not reachable at any handicap, clamping");

        return MIN_HANDICAP;
    }

    if round.score(MAX_HANDICAP) >= score {
        #[cfg(feature = "tracing")]
        tracing::debug!(score, "score reached at the worst handicap, clamping");

        return MAX_HANDICAP;
    }

    // Invariant: `lo` reaches the score, `hi` does not
    let mut lo = MIN_HANDICAP;
    let mut hi = MAX_HANDICAP;

    for _ in 0..MAX_STEPS {
        let mid = lo + (hi - lo) / 2.0;

        if mid <= lo || mid >= hi {
            break;
        }

        if round.score(mid) >= score {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(score, handicap = lo, "found handicap");

    lo
}
