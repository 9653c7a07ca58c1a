use archery_scorer::{
    handicap::MAX_HANDICAP,
    model::{face::FaceType, round::RoundGeometry},
    HandicapCalculator, HandicapSystem, ScoringError,
};

mod common;

struct TestCase {
    path: &'static str,
    system: HandicapSystem,
    /// (handicap, score)
    scores: [(f64, u32); 6],
    /// (score, whole handicap)
    handicaps: [(u32, u32); 3],
}

const AGB: HandicapSystem = HandicapSystem::Agb2023;
const LEGACY: HandicapSystem = HandicapSystem::Legacy;

const TEST_CASES: &[TestCase] = &[
    TestCase {
        path: common::WA_1440,
        system: AGB,
        scores: [(10.0, 1356), (25.0, 1248), (40.0, 1065), (55.0, 782), (70.0, 463), (85.0, 222)],
        handicaps: [(1300, 18), (1000, 43), (600, 63)],
    },
    TestCase {
        path: common::WA_1440,
        system: LEGACY,
        scores: [(10.0, 1352), (25.0, 1226), (40.0, 977), (55.0, 539), (70.0, 178), (85.0, 33)],
        handicaps: [(1300, 17), (1000, 39), (600, 53)],
    },
    TestCase {
        path: common::YORK,
        system: AGB,
        scores: [(10.0, 1244), (25.0, 1121), (40.0, 904), (55.0, 597), (70.0, 308), (85.0, 131)],
        handicaps: [(1100, 26), (700, 50), (300, 70)],
    },
    TestCase {
        path: common::YORK,
        system: LEGACY,
        scores: [(10.0, 1249), (25.0, 1107), (40.0, 803), (55.0, 320), (70.0, 44), (85.0, 1)],
        handicaps: [(1100, 25), (700, 43), (300, 55)],
    },
    TestCase {
        path: common::WA_18,
        system: AGB,
        scores: [(10.0, 593), (25.0, 568), (40.0, 519), (55.0, 435), (70.0, 302), (85.0, 157)],
        handicaps: [(590, 13), (500, 44), (300, 70)],
    },
    TestCase {
        path: common::PORTSMOUTH,
        system: AGB,
        scores: [(10.0, 599), (25.0, 586), (40.0, 554), (55.0, 498), (70.0, 403), (85.0, 260)],
        handicaps: [(580, 28), (500, 54), (300, 81)],
    },
    TestCase {
        path: common::PORTSMOUTH,
        system: LEGACY,
        scores: [(10.0, 596), (25.0, 574), (40.0, 530), (55.0, 453), (70.0, 315), (85.0, 135)],
        handicaps: [(580, 22), (500, 47), (300, 71)],
    },
    TestCase {
        path: common::WORCESTER,
        system: AGB,
        scores: [(10.0, 300), (25.0, 295), (40.0, 273), (55.0, 231), (70.0, 162), (85.0, 85)],
        handicaps: [(290, 29), (250, 49), (150, 72)],
    },
    TestCase {
        path: common::WORCESTER,
        system: LEGACY,
        scores: [(10.0, 299), (25.0, 287), (40.0, 255), (55.0, 198), (70.0, 111), (85.0, 39)],
        handicaps: [(290, 23), (250, 41), (150, 63)],
    },
];

#[test]
fn expected_scores() {
    for case in TEST_CASES {
        let round = common::load_round(case.path);
        let calc = HandicapCalculator::new(&round).system(case.system);

        for (handicap, expected) in case.scores {
            let score = calc.score_for(handicap).unwrap();

            assert_eq!(
                score, expected,
                "{} {:?} handicap {handicap}",
                round.name, case.system
            );
        }
    }
}

#[test]
fn handicaps_for_scores() {
    for case in TEST_CASES {
        let round = common::load_round(case.path);
        let calc = HandicapCalculator::new(&round).system(case.system);

        for (score, expected) in case.handicaps {
            let handicap = calc.handicap_for(score).unwrap();
            let whole = calc.whole_handicap_for(score).unwrap();

            assert_eq!(
                whole, expected,
                "{} {:?} score {score}: {handicap}",
                round.name, case.system
            );

            assert!(calc.score_for(f64::from(whole)).unwrap() >= score);
        }
    }
}

#[test]
fn whole_handicaps_reproduce_table_scores() {
    let york = common::load_round(common::YORK);
    let wa_1440 = common::load_round(common::WA_1440);

    for round in [&york, &wa_1440] {
        for system in [AGB, LEGACY] {
            let calc = HandicapCalculator::new(round).system(system);

            for pair in calc.table().unwrap() {
                let whole = calc.whole_handicap_for(pair.score).unwrap();

                assert_eq!(
                    calc.score_for(f64::from(whole)),
                    Ok(pair.score),
                    "{} {system:?} handicap {} score {}",
                    round.name,
                    pair.handicap,
                    pair.score
                );

                assert!(f64::from(whole) >= pair.handicap);
            }
        }
    }
}

#[test]
fn table_matches_single_lookups() {
    let round = common::load_round(common::YORK);
    let calc = HandicapCalculator::new(&round).system(LEGACY);
    let table = calc.table().unwrap();

    assert_eq!(table.len(), MAX_HANDICAP as usize + 1);

    for pair in table.iter().step_by(15) {
        assert_eq!(calc.score_for(pair.handicap), Ok(pair.score));
    }
}

#[test]
fn sub_types() {
    let round = common::load_round(common::WA_1440);

    let scores: Vec<_> = [10.0, 40.0, 70.0]
        .into_iter()
        .map(|handicap| {
            HandicapCalculator::new(&round)
                .sub_type(2)
                .score_for(handicap)
                .unwrap()
        })
        .collect();

    assert_eq!(scores, [1378, 1128, 535]);

    let legacy: Vec<_> = [10.0, 40.0, 70.0]
        .into_iter()
        .map(|handicap| {
            HandicapCalculator::new(&round)
                .sub_type(2)
                .system(LEGACY)
                .score_for(handicap)
                .unwrap()
        })
        .collect();

    assert_eq!(legacy, [1371, 1054, 208]);
}

#[test]
fn compound_on_triple_faces() {
    let round = common::load_round(common::WA_18);

    let triple = |system, handicap| {
        HandicapCalculator::new(&round)
            .inner_ten(true)
            .faces(&[FaceType::Triple])
            .system(system)
            .score_for(handicap)
            .unwrap()
    };

    assert_eq!(triple(AGB, 10.0), 572);
    assert_eq!(triple(AGB, 40.0), 508);
    assert_eq!(triple(AGB, 70.0), 210);
    assert_eq!(triple(LEGACY, 10.0), 561);
    assert_eq!(triple(LEGACY, 40.0), 465);
    assert_eq!(triple(LEGACY, 70.0), 122);

    let full_face = HandicapCalculator::new(&round)
        .inner_ten(true)
        .score_for(70.0)
        .unwrap();

    assert_eq!(full_face, 301);
}

#[test]
fn worcester_five_face() {
    let round = common::load_round(common::WORCESTER);
    let calc = HandicapCalculator::new(&round).faces(&[FaceType::WorcesterFive]);

    assert_eq!(calc.score_for(10.0), Ok(300));
    assert_eq!(calc.score_for(40.0), Ok(265));
    assert_eq!(calc.score_for(70.0), Ok(86));
}

#[test]
fn faces_per_distance() {
    let round = common::load_round(common::WA_1440);

    let calc = HandicapCalculator::new(&round).faces(&[
        FaceType::Full,
        FaceType::Full,
        FaceType::FitaSix,
        FaceType::Triple,
    ]);

    assert_eq!(calc.score_for(10.0), Ok(1356));
    assert_eq!(calc.score_for(40.0), Ok(1057));
    assert_eq!(calc.score_for(70.0), Ok(381));
}

#[test]
fn incompatible_face() {
    let round = common::load_round(common::WORCESTER);

    let err = HandicapCalculator::new(&round)
        .faces(&[FaceType::FitaSix])
        .table()
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(matches!(err, ScoringError::IncompatibleFace { .. }));
}

#[test]
fn empty_round() {
    let round = RoundGeometry::default();
    let calc = HandicapCalculator::new(&round);

    assert_eq!(calc.max_score(), Ok(0));
    assert_eq!(calc.score_for(0.0), Ok(0));
    assert_eq!(calc.handicap_for(0), Ok(MAX_HANDICAP));
}
