//! Placement rules and board generation

/// Placement validity rule and verdicts
pub mod placement;
/// Seeded random tile scattering
pub mod scatter;
