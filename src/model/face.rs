/// The face shot at a distance.
///
/// Reduced faces keep the face size of the round but leave out the outer
/// rings which changes the expected score for a handicap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FaceType {
    /// All rings of the round's scoring.
    #[default]
    Full,
    /// Ten zone face reduced to the rings 10 to 6, as used on triple spots.
    Triple,
    /// Ten zone face reduced to the rings 10 to 5.
    FitaSix,
    /// Worcester face where the centre scores 5 and the rest of the face 4.
    WorcesterFive,
}
