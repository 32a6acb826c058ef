// Weighted multi-factor match scoring. Pure functions of the two texts,
// the declared skill list, and the policy; no I/O, no shared state.

pub mod scorer;

pub use scorer::{score_match, MatchEvaluation};
