use crate::{
    error::{ScoringError, ScoringResult},
    model::{
        face::FaceType,
        round::{Location, Scoring},
    },
};

use super::HandicapSystem;

// AGB 2023
const AGB_DATUM: f64 = 6.0;
const AGB_STEP: f64 = 3.5;
const AGB_ANG_0: f64 = 5.0e-4;
const AGB_KD: f64 = 0.00365;
const AGB_ARROW_RADIUS_INDOOR: f64 = 9.3e-3 / 2.0;
const AGB_ARROW_RADIUS_OUTDOOR: f64 = 5.5e-3 / 2.0;

// David Lane
const LEGACY_DATUM: f64 = 12.9;
const LEGACY_STEP: f64 = 3.6;
const LEGACY_ANG_0: f64 = 5.0e-4;
const LEGACY_K1: f64 = 1.429e-6;
const LEGACY_K2: f64 = 1.07;
const LEGACY_K3: f64 = 4.3;
const LEGACY_P1: f64 = 2.0;
const LEGACY_ARROW_RADIUS: f64 = 7.14e-3 / 2.0;

impl HandicapSystem {
    /// Angular deviation in radians of an archer with the given handicap
    /// shooting at a distance in metres.
    pub(crate) fn angular_deviation(self, handicap: f64, distance: f64) -> f64 {
        match self {
            Self::Agb2023 => {
                AGB_ANG_0
                    * (1.0 + AGB_STEP / 100.0).powf(handicap + AGB_DATUM)
                    * (AGB_KD * distance).exp()
            }
            Self::Legacy => {
                LEGACY_ANG_0
                    * (1.0 + LEGACY_STEP / 100.0).powf(handicap + LEGACY_DATUM)
                    * (LEGACY_K1
                        * LEGACY_K2.powf(handicap + LEGACY_K3)
                        * distance.powf(LEGACY_P1))
                    .exp()
            }
        }
    }

    /// Radial deviation in metres.
    pub(crate) fn radial_deviation(self, handicap: f64, distance: f64) -> f64 {
        distance * self.angular_deviation(handicap, distance)
    }

    /// Arrow radius in metres.
    pub(crate) const fn arrow_radius(self, location: Location) -> f64 {
        match (self, location) {
            (Self::Agb2023, Location::Indoor) => AGB_ARROW_RADIUS_INDOOR,
            (Self::Agb2023, Location::Outdoor) => AGB_ARROW_RADIUS_OUTDOOR,
            (Self::Legacy, _) => LEGACY_ARROW_RADIUS,
        }
    }
}

/// Ring layout of a face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rings {
    /// Rings 10 to 1. With `inner_ten`, only the X ring scores 10.
    TenZone { inner_ten: bool },
    /// Rings 10 to 5.
    TenZoneSixRing { inner_ten: bool },
    /// Rings 10 to 6.
    TenZoneFiveRing { inner_ten: bool },
    /// Imperial 9, 7, 5, 3, 1.
    FiveZone,
    /// Rings 5 to 1.
    Worcester,
    /// Centre 5, rest 4.
    WorcesterTwoRing,
}

impl Rings {
    pub(crate) fn new(scoring: Scoring, face: FaceType, inner_ten: bool) -> ScoringResult<Self> {
        let rings = match (scoring, face) {
            (Scoring::TenZone, FaceType::Full) => Self::TenZone { inner_ten },
            (Scoring::TenZone, FaceType::FitaSix) => Self::TenZoneSixRing { inner_ten },
            (Scoring::TenZone, FaceType::Triple) => Self::TenZoneFiveRing { inner_ten },
            (Scoring::FiveZone, FaceType::Full) => Self::FiveZone,
            (Scoring::Worcester, FaceType::Full) => Self::Worcester,
            (Scoring::Worcester, FaceType::WorcesterFive) => Self::WorcesterTwoRing,
            (Scoring::TenZone, FaceType::WorcesterFive)
            | (Scoring::FiveZone, FaceType::Triple | FaceType::FitaSix | FaceType::WorcesterFive)
            | (Scoring::Worcester, FaceType::Triple | FaceType::FitaSix) => {
                return Err(ScoringError::IncompatibleFace { face, scoring })
            }
        };

        Ok(rings)
    }

    pub(crate) const fn max_score(self) -> u8 {
        match self {
            Self::TenZone { .. } | Self::TenZoneSixRing { .. } | Self::TenZoneFiveRing { .. } => {
                10
            }
            Self::FiveZone => 9,
            Self::Worcester | Self::WorcesterTwoRing => 5,
        }
    }

    /// Expected score of a single arrow.
    ///
    /// Arrows land with a radial deviation of `sigma` metres around the
    /// centre, i.e. the probability to land outside of radius `r` is
    /// `exp(-(r / sigma)^2)`. A ring counts as hit if the arrow touches it,
    /// hence the arrow radius is added to every ring radius.
    pub(crate) fn expected_score(self, sigma: f64, face_diameter: f64, arrow_radius: f64) -> f64 {
        let outside = |radius: f64| (-((radius + arrow_radius) / sigma).powi(2)).exp();

        let ten_zone_ring = |n: u32| outside(f64::from(n) * face_diameter / 20.0);
        let five_zone_ring = |n: u32| outside(f64::from(n) * face_diameter / 10.0);

        let ten_ring = |inner_ten: bool| {
            if inner_ten {
                outside(face_diameter / 40.0)
            } else {
                ten_zone_ring(1)
            }
        };

        match self {
            Self::TenZone { inner_ten } => {
                10.0 - ten_ring(inner_ten) - (2..=10).map(ten_zone_ring).sum::<f64>()
            }
            Self::TenZoneSixRing { inner_ten } => {
                10.0 - ten_ring(inner_ten)
                    - (2..=5).map(ten_zone_ring).sum::<f64>()
                    - 5.0 * ten_zone_ring(6)
            }
            Self::TenZoneFiveRing { inner_ten } => {
                10.0 - ten_ring(inner_ten)
                    - (2..=4).map(ten_zone_ring).sum::<f64>()
                    - 6.0 * ten_zone_ring(5)
            }
            Self::FiveZone => {
                9.0 - 2.0 * (1..=4).map(five_zone_ring).sum::<f64>() - five_zone_ring(5)
            }
            Self::Worcester => 5.0 - (1..=5).map(five_zone_ring).sum::<f64>(),
            Self::WorcesterTwoRing => 5.0 - five_zone_ring(1) - 4.0 * five_zone_ring(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACE: f64 = 1.22;
    const ARROW_RADIUS: f64 = 0.00275;

    #[test]
    fn perfect_archer_hits_the_best_ring() {
        let sigma = 1e-6;

        for rings in [
            Rings::TenZone { inner_ten: false },
            Rings::TenZone { inner_ten: true },
            Rings::TenZoneSixRing { inner_ten: false },
            Rings::TenZoneFiveRing { inner_ten: true },
            Rings::FiveZone,
            Rings::Worcester,
            Rings::WorcesterTwoRing,
        ] {
            let score = rings.expected_score(sigma, FACE, ARROW_RADIUS);

            assert!(
                (score - f64::from(rings.max_score())).abs() < 1e-9,
                "{rings:?}: {score}"
            );
        }
    }

    #[test]
    fn hopeless_archer_misses() {
        let sigma = 1e6;

        for rings in [
            Rings::TenZone { inner_ten: false },
            Rings::TenZoneSixRing { inner_ten: false },
            Rings::FiveZone,
            Rings::WorcesterTwoRing,
        ] {
            let score = rings.expected_score(sigma, FACE, ARROW_RADIUS);

            assert!(score.abs() < 1e-3, "{rings:?}: {score}");
        }
    }

    #[test]
    fn inner_ten_scores_less() {
        let sigma = 0.05;

        let full = Rings::TenZone { inner_ten: false }.expected_score(sigma, FACE, ARROW_RADIUS);
        let inner = Rings::TenZone { inner_ten: true }.expected_score(sigma, FACE, ARROW_RADIUS);

        assert!(inner < full);
    }

    #[test]
    fn reduced_faces_score_less() {
        // Rings outside of a reduced face count as misses
        let sigma = 0.3;

        let full = Rings::TenZone { inner_ten: false }.expected_score(sigma, FACE, ARROW_RADIUS);
        let six =
            Rings::TenZoneSixRing { inner_ten: false }.expected_score(sigma, FACE, ARROW_RADIUS);
        let five =
            Rings::TenZoneFiveRing { inner_ten: false }.expected_score(sigma, FACE, ARROW_RADIUS);

        assert!(five < six);
        assert!(six < full);
    }

    #[test]
    fn incompatible_faces() {
        assert!(Rings::new(Scoring::TenZone, FaceType::WorcesterFive, false).is_err());
        assert!(Rings::new(Scoring::FiveZone, FaceType::Triple, false).is_err());
        assert_eq!(
            Rings::new(Scoring::Worcester, FaceType::WorcesterFive, false),
            Ok(Rings::WorcesterTwoRing)
        );
    }

    #[test]
    fn legacy_and_agb_differ() {
        let agb = HandicapSystem::Agb2023.angular_deviation(50.0, 70.0);
        let legacy = HandicapSystem::Legacy.angular_deviation(50.0, 70.0);

        assert!((agb - legacy).abs() > 1e-6);
    }
}
