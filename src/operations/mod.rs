pub mod analyze;
pub mod dimension;
pub mod tagging;

pub use analyze::{BoundaryAnalysis, OPENING_ASSOCIATION_TOLERANCE};
pub use dimension::{DimensionChain, DimensionParameters, DimensionPlan, MIN_DIMENSIONABLE_LENGTH};
pub use tagging::{
    BatchResult, BatchSummary, CandidatePositions, ElementRef, MAX_PLACEMENT_ATTEMPTS,
    TagCandidate, TagPlacement, TagPlacementBatch, TagPlacementParams, summarize_batch,
};
