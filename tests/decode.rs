use archery_scorer::model::round::{
    DistanceSegment, DistanceUnit, Location, RoundGeometry, Scoring,
};

mod common;

fn assert_wa_1440(round: RoundGeometry) {
    assert_eq!(round.name, "WA 1440");
    assert_eq!(round.unit, DistanceUnit::Metres);
    assert_eq!(round.location, Location::Outdoor);
    assert_eq!(round.scoring, Scoring::TenZone);
    assert_eq!(round.arrow_counts.len(), 4);
    assert_eq!(round.distances.len(), 12);
    assert_eq!(round.sub_types.len(), 3);
    assert_eq!(round.sub_types[1].name, "70m");
    assert_eq!(round.arrow_count(), 144);
    assert_eq!(round.max_score(), 1440);

    let distances: Vec<_> = round
        .segments(Some(2))
        .unwrap()
        .into_iter()
        .map(|segment| segment.distance)
        .collect();

    assert_eq!(distances, [70, 60, 50, 30]);
}

fn assert_york(round: RoundGeometry) {
    assert_eq!(round.name, "York");
    assert_eq!(round.unit, DistanceUnit::Yards);
    assert_eq!(round.scoring, Scoring::FiveZone);
    assert!(round.sub_types.is_empty());
    assert_eq!(round.max_score(), 1296);

    let segments = round.segments(None).unwrap();

    assert_eq!(
        segments[0],
        DistanceSegment {
            distance_number: 1,
            face_size_cm: 122,
            arrow_count: 72,
            distance: 100,
        }
    );
}

fn assert_worcester(round: RoundGeometry) {
    assert_eq!(round.name, "Worcester");
    assert_eq!(round.location, Location::Indoor);
    assert_eq!(round.scoring, Scoring::Worcester);
    assert_eq!(round.max_score(), 300);
}

#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
mod sync {
    use super::*;

    #[test]
    fn decode_wa_1440() {
        assert_wa_1440(test_round!(common::WA_1440));
    }

    #[test]
    fn decode_york() {
        assert_york(test_round!(common::YORK));
    }

    #[test]
    fn decode_worcester() {
        assert_worcester(test_round!(common::WORCESTER));
    }

    #[test]
    fn missing_file() {
        let err = RoundGeometry::from_path("./resources/rounds/missing.round").unwrap_err();

        assert!(matches!(
            err,
            archery_scorer::model::round::ParseRoundError::Io(_)
        ));
    }
}

#[cfg(feature = "async_tokio")]
mod async_tokio {
    use tokio::runtime::Builder as RuntimeBuilder;

    use super::*;

    #[test]
    fn decode_wa_1440() {
        RuntimeBuilder::new_current_thread()
            .build()
            .unwrap()
            .block_on(async { assert_wa_1440(test_round!(common::WA_1440)) });
    }

    #[test]
    fn decode_york() {
        RuntimeBuilder::new_current_thread()
            .build()
            .unwrap()
            .block_on(async { assert_york(test_round!(common::YORK)) });
    }

    #[test]
    fn decode_worcester() {
        RuntimeBuilder::new_current_thread()
            .build()
            .unwrap()
            .block_on(async { assert_worcester(test_round!(common::WORCESTER)) });
    }
}

#[cfg(feature = "async_std")]
mod async_std {
    use super::*;

    #[test]
    fn decode_wa_1440() {
        ::async_std::task::block_on(async { assert_wa_1440(test_round!(common::WA_1440)) });
    }

    #[test]
    fn decode_york() {
        ::async_std::task::block_on(async { assert_york(test_round!(common::YORK)) });
    }

    #[test]
    fn decode_worcester() {
        ::async_std::task::block_on(async { assert_worcester(test_round!(common::WORCESTER)) });
    }
}
