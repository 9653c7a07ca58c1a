/// Arrow related types.
pub mod arrow;

/// Face related types.
pub mod face;

/// Golds related types.
pub mod golds;

/// Round related types.
pub mod round;
