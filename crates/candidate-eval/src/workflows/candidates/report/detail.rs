use super::super::domain::{Candidate, CandidateStatus};
use super::super::evaluation::EvaluationEngine;
use super::summary::{percentile, top_rank};
use super::views::{CandidateDetailView, RadarAxis, RosterEntry, StatBar};

/// Detail pane for the candidate at a 1-based position, ranked against the whole collection.
pub fn candidate_detail(
    candidates: &[Candidate],
    position: usize,
    engine: &EvaluationEngine,
) -> Option<CandidateDetailView> {
    let candidate = position
        .checked_sub(1)
        .and_then(|index| candidates.get(index))?;
    let percentile = percentile(candidates, candidate);

    Some(CandidateDetailView {
        position,
        name: candidate.name().to_string(),
        email: candidate.email().to_string(),
        role: candidate.role(),
        role_label: candidate.role().label(),
        status: candidate.status(),
        status_label: candidate.status().label(),
        photo: candidate.photo().map(str::to_string),
        experience_years: candidate.experience_years(),
        average_score: candidate.average_score(),
        stat_bars: vec![
            StatBar {
                label: "Technical",
                value: candidate.technical_score(),
                max: 100,
            },
            StatBar {
                label: "Communication",
                value: candidate.communication_score(),
                max: 100,
            },
        ],
        percentile,
        rank_label: format!("Top {}%", top_rank(percentile)),
        radar: radar_profile(candidate),
        drift: engine.drift(candidate),
        offer_available: candidate.status() == CandidateStatus::Hired,
    })
}

/// Three-axis profile on a 0-100 scale; a year of experience counts as ten points.
pub fn radar_profile(candidate: &Candidate) -> Vec<RadarAxis> {
    vec![
        RadarAxis {
            axis: "Tech",
            value: candidate.technical_score(),
        },
        RadarAxis {
            axis: "Comm",
            value: candidate.communication_score(),
        },
        RadarAxis {
            axis: "Exp",
            value: candidate.experience_years().saturating_mul(10),
        },
    ]
}

/// Candidates whose name contains `query` (case-insensitive), in insertion order.
pub fn roster(candidates: &[Candidate], query: Option<&str>) -> Vec<RosterEntry> {
    let needle = query
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default();

    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            needle.is_empty() || candidate.name().to_lowercase().contains(&needle)
        })
        .map(|(index, candidate)| RosterEntry {
            position: index + 1,
            name: candidate.name().to_string(),
            role_label: candidate.role().label(),
            status: candidate.status(),
            status_label: candidate.status().label(),
            average_score: candidate.average_score(),
            photo: candidate.photo().map(str::to_string),
        })
        .collect()
}
