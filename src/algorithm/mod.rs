/// Tile resolution engine and candidate policies
pub mod resolution;
/// Seeded draw sources
pub mod rng;
/// Walk sessions driving resolution from player moves
pub mod session;
