mod institution;
mod registry;
mod roster;
pub(crate) mod storage;
mod summary;
mod team;

pub use institution::{Institution, InstitutionId};
pub use registry::{DedupedRegistry, Registry};
pub use roster::RosterRow;
pub use summary::{Summary, SummaryMetadata};
pub use team::{Ranking, Team, TeamId};
