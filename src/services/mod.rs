pub mod dedup;
pub mod normalize;
pub mod reporting;
pub mod roster_service;
pub mod similarity;
