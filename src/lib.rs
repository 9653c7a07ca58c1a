//! Library to aggregate archery score pads and to convert between handicaps
//! and expected round scores.
//!
//! ## Description
//!
//! Two independent calculators make up the core of `archery-scorer`:
//!
//!   - [`ScorePad`] turns the arrows of a shot round into end rows, running
//!     totals, distance totals, and a grand total. The result can be rendered
//!     as aligned plain text or CSV.
//!   - [`HandicapCalculator`] converts an archer's handicap into the score
//!     expected for a round and back again, either under the AGB 2023 tables
//!     or the legacy David Lane tables.
//!
//! Both are pure calculations over value data so they can be used from any
//! thread without synchronization.
//!
//! ## Usage
//!
//! ```
//! use archery_scorer::{
//!     model::{arrow::Arrow, golds::GoldsType, round::RoundGeometry},
//!     HandicapCalculator, HandicapSystem, ScorePad,
//! };
//!
//! // Decode the round definition
//! let york = RoundGeometry::from_bytes(
//!     b"archery round format v1
//!
//!     [General]
//!     Name: York
//!     Unit: yd
//!     Location: Outdoor
//!     Scoring: FiveZone
//!
//!     [ArrowCounts]
//!     1,122,72
//!     2,122,48
//!     3,122,24
//!
//!     [Distances]
//!     1,1,100
//!     2,1,80
//!     3,1,60",
//! )
//! # ;
//! # #[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
//! # {
//! # let york = york.unwrap();
//!
//! // Build the score pad of a round that is still in progress
//! let arrows: Vec<_> = (1..=30).map(|n| Arrow::new(1, n, 9, false)).collect();
//!
//! let pad = ScorePad::builder(&arrows)
//!     .end_size(6)
//!     .golds(GoldsType::default_for(&york))
//!     .round(&york, None)
//!     .build()
//!     .unwrap();
//!
//! let total = pad.grand_total().unwrap();
//! assert_eq!(total.score, 270);
//!
//! // Expected score and handicap
//! let calc = HandicapCalculator::new(&york).system(HandicapSystem::Agb2023);
//!
//! let score = calc.score_for(40.0).unwrap();
//! let handicap = calc.handicap_for(score).unwrap();
//!
//! assert!(handicap >= 40.0);
//! # }
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `tracing` feature |
//! | `tracing` | Skipped decoder input, surplus arrows, and clamped handicap inputs are logged through `tracing`. | [`tracing`]
//! | `async_tokio` | Round definitions are decoded from `tokio` readers through `async` functions. | [`tokio`]
//! | `async_std` | Round definitions are decoded from `async-std` readers through `async` functions. | [`async-std`]
//!
//! [`tracing`]: https://docs.rs/tracing
//! [`tokio`]: https://docs.rs/tokio
//! [`async-std`]: https://docs.rs/async-std

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[cfg(all(feature = "async_tokio", feature = "async_std"))]
compile_error!("The features `async_tokio` and `async_std` are mutually exclusive");

#[doc(inline)]
pub use self::{
    error::ScoringError,
    handicap::{HandicapCalculator, HandicapPair, HandicapSystem},
    score_pad::{ScorePad, ScorePadBuilder, ScorePadRow},
};

/// Score pad aggregation and its text renderings.
pub mod score_pad;

/// Conversion between handicaps and expected round scores.
pub mod handicap;

/// Value types shared by both calculators.
pub mod model;

mod error;
