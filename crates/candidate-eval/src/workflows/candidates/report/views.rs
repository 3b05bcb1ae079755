use super::super::domain::{CandidateStatus, JobRole};
use super::super::evaluation::StatusDrift;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// 1-based insertion position, kept after truncation.
    pub position: usize,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCards {
    pub total_candidates: usize,
    pub positions_filled: usize,
    pub success_rate: usize,
    pub success_rate_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCountEntry {
    pub role: JobRole,
    pub role_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub role_label: &'static str,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: KpiCards,
    pub status_distribution: Vec<StatusSlice>,
    pub role_demographics: Vec<RoleCountEntry>,
    pub top_performers: Vec<LeaderboardRow>,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub position: usize,
    pub name: String,
    pub role_label: &'static str,
    pub status: CandidateStatus,
    pub status_label: &'static str,
    pub average_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatBar {
    pub label: &'static str,
    pub value: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarAxis {
    pub axis: &'static str,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateDetailView {
    pub position: usize,
    pub name: String,
    pub email: String,
    pub role: JobRole,
    pub role_label: &'static str,
    pub status: CandidateStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub experience_years: i32,
    pub average_score: f64,
    pub stat_bars: Vec<StatBar>,
    pub percentile: usize,
    pub rank_label: String,
    pub radar: Vec<RadarAxis>,
    pub drift: StatusDrift,
    pub offer_available: bool,
}
