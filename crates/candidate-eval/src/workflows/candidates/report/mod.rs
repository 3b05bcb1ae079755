mod detail;
mod summary;
pub mod views;

pub use detail::{candidate_detail, radar_profile, roster};
pub use summary::{
    percentile, summarize, top_rank, CandidateSummary, TOP_PERFORMER_LIMIT, TREND_WINDOW,
};
