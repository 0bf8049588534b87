//! An embeddable relational programming engine in the miniKanren family.
//!
//! Goals are pure functions from a search state to a lazy stream of
//! successor states. Running a goal enumerates every variable assignment
//! that makes it true. Streams interleave answers from disjoint branches
//! fairly, so branches with infinite or divergent search spaces cannot
//! starve productive ones.

#[macro_use]
pub mod macros;
pub mod core;
pub mod goals;
pub mod prelude;
pub mod testing;
