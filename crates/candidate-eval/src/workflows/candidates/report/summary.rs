use super::super::domain::{Candidate, CandidateStatus, JobRole};
use super::views::{
    DashboardView, KpiCards, LeaderboardRow, RoleCountEntry, StatusSlice, TrendPoint,
};
use std::collections::HashMap;

/// Size of the leaderboard.
pub const TOP_PERFORMER_LIMIT: usize = 5;
/// Most recent entries kept in the trend series.
pub const TREND_WINDOW: usize = 20;

/// Aggregate view over the whole collection, rebuilt after every add or load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSummary {
    pub total: usize,
    pub hired: usize,
    pub rejected: usize,
    /// Shortlisted and on-hold candidates together.
    pub other: usize,
    /// Whole-number percentage of hired candidates, truncated.
    pub success_rate: usize,
    pub role_counts: HashMap<JobRole, usize>,
    pub top_performers: Vec<Candidate>,
    pub trend: Vec<TrendPoint>,
}

pub fn summarize(candidates: &[Candidate]) -> CandidateSummary {
    let mut summary = CandidateSummary {
        total: candidates.len(),
        ..CandidateSummary::default()
    };

    for candidate in candidates {
        match candidate.status() {
            CandidateStatus::Hired => summary.hired += 1,
            CandidateStatus::Rejected => summary.rejected += 1,
            CandidateStatus::Shortlisted | CandidateStatus::OnHold => summary.other += 1,
        }
        *summary.role_counts.entry(candidate.role()).or_insert(0) += 1;
    }

    summary.success_rate = if summary.total == 0 {
        0
    } else {
        summary.hired * 100 / summary.total
    };

    // `sort_by` is stable, so equal averages keep insertion order.
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.average_score().total_cmp(&a.average_score()));
    summary.top_performers = ranked
        .into_iter()
        .take(TOP_PERFORMER_LIMIT)
        .cloned()
        .collect();

    let skip = candidates.len().saturating_sub(TREND_WINDOW);
    summary.trend = candidates
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, candidate)| TrendPoint {
            position: index + 1,
            average_score: candidate.average_score(),
        })
        .collect();

    summary
}

/// Share of the collection scoring strictly below `target`, as a truncated percentage.
/// An empty collection yields 0.
pub fn percentile(candidates: &[Candidate], target: &Candidate) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let better_than = candidates
        .iter()
        .filter(|candidate| candidate.average_score() < target.average_score())
        .count();

    better_than * 100 / candidates.len()
}

/// The "top N%" figure shown next to a percentile.
pub fn top_rank(percentile: usize) -> usize {
    100usize.saturating_sub(percentile)
}

impl CandidateSummary {
    pub fn dashboard(&self) -> DashboardView {
        let kpis = KpiCards {
            total_candidates: self.total,
            positions_filled: self.hired,
            success_rate: self.success_rate,
            success_rate_label: format!("{}%", self.success_rate),
        };

        let status_distribution = vec![
            StatusSlice {
                label: "Hired",
                count: self.hired,
            },
            StatusSlice {
                label: "Rejected",
                count: self.rejected,
            },
            StatusSlice {
                label: "On Hold",
                count: self.other,
            },
        ];

        let role_demographics = JobRole::ordered()
            .into_iter()
            .filter_map(|role| {
                self.role_counts.get(&role).map(|count| RoleCountEntry {
                    role,
                    role_label: role.label(),
                    count: *count,
                })
            })
            .collect();

        let top_performers = self
            .top_performers
            .iter()
            .map(|candidate| LeaderboardRow {
                name: candidate.name().to_string(),
                role_label: candidate.role().label(),
                average_score: candidate.average_score(),
            })
            .collect();

        DashboardView {
            kpis,
            status_distribution,
            role_demographics,
            top_performers,
            trend: self.trend.clone(),
        }
    }
}
