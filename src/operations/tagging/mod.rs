mod engine;
mod report;
mod strategy;

pub use engine::{
    BatchResult, ElementRef, MAX_PLACEMENT_ATTEMPTS, TagPlacement, TagPlacementBatch,
    TagPlacementParams,
};
pub use report::{BatchSummary, summarize_batch};
pub use strategy::{CandidatePositions, TagCandidate};
