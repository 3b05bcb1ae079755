use std::fmt::Write as _;

use candidate_eval::error::AppError;
use candidate_eval::workflows::accounts::UserDirectory;
use candidate_eval::workflows::candidates::report::views::{
    CandidateDetailView, DashboardView, RosterEntry,
};
use candidate_eval::workflows::candidates::{
    DriftEntry, EvaluationRequest, RawField, SubmittedCandidate,
};
use clap::Args;

use crate::infra::{bootstrap, open_candidate_service};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Candidate's full name
    #[arg(long)]
    pub(crate) name: String,
    /// Email address, or a bare handle that receives the configured domain
    #[arg(long)]
    pub(crate) email: String,
    /// Job role label, e.g. "Software Engineer"
    #[arg(long)]
    pub(crate) role: String,
    /// Technical score (whole number)
    #[arg(long)]
    pub(crate) tech: String,
    /// Communication score (whole number)
    #[arg(long)]
    pub(crate) comm: String,
    /// Years of experience (whole number)
    #[arg(long)]
    pub(crate) experience: String,
    /// Optional photo path or URI
    #[arg(long)]
    pub(crate) photo: Option<String>,
}

impl From<EvaluateArgs> for EvaluationRequest {
    fn from(args: EvaluateArgs) -> Self {
        EvaluationRequest {
            name: args.name,
            email: args.email,
            role: Some(args.role),
            technical_score: RawField::from(args.tech),
            communication_score: RawField::from(args.comm),
            experience_years: RawField::from(args.experience),
            photo: args.photo,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Only list candidates whose name contains this text
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PositionArgs {
    /// 1-based position in evaluation order
    pub(crate) position: usize,
}

#[derive(Args, Debug)]
pub(crate) struct UserArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) password: String,
}

pub(crate) fn evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let submitted = service.submit(&EvaluationRequest::from(args))?;
    print!("{}", render_submitted(&submitted));
    Ok(())
}

pub(crate) fn list(args: ListArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let entries = service.roster(args.search.as_deref())?;
    print!("{}", render_roster(&entries));
    Ok(())
}

pub(crate) fn show(args: PositionArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let detail = service.detail(args.position)?;
    print!("{}", render_detail(&detail));
    Ok(())
}

pub(crate) fn dashboard() -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let view = service.dashboard()?;
    print!("{}", render_dashboard(&view));
    Ok(())
}

pub(crate) fn offer(args: PositionArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let path = service.issue_offer(args.position)?;
    println!("Offer letter written to {}", path.display());
    Ok(())
}

pub(crate) fn recheck() -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = open_candidate_service(&config)?;
    let drifted = service.drift_report()?;
    print!("{}", render_drift(&drifted));
    Ok(())
}

pub(crate) fn register(args: UserArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let directory = UserDirectory::open(&config.storage.users_path)?;
    let user = directory.register(&args.username, &args.password)?;
    println!("Registered {} ({})", user.username, user.role);
    Ok(())
}

pub(crate) fn login(args: UserArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let directory = UserDirectory::open(&config.storage.users_path)?;
    let user = directory.login(&args.username, &args.password)?;
    println!("Welcome, {} ({})", user.username, user.role);
    Ok(())
}

pub(crate) fn render_submitted(submitted: &SubmittedCandidate) -> String {
    let candidate = &submitted.candidate;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "#{} {} <{}> evaluated for {}",
        submitted.position,
        candidate.name(),
        candidate.email(),
        candidate.role()
    );
    let _ = writeln!(
        out,
        "Average {:.1} with {} years experience -> {}",
        candidate.average_score(),
        candidate.experience_years(),
        submitted.status_label
    );
    out
}

pub(crate) fn render_roster(entries: &[RosterEntry]) -> String {
    if entries.is_empty() {
        return "No candidates found\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<28} {:<18} {:<12} {:>6.1}",
            entry.position, entry.name, entry.role_label, entry.status_label, entry.average_score
        );
    }
    out
}

pub(crate) fn render_detail(detail: &CandidateDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", detail.position, detail.name);
    let _ = writeln!(out, "Email: {}", detail.email);
    let _ = writeln!(out, "Role: {}", detail.role_label);
    let _ = writeln!(out, "Status: {}", detail.status_label);
    if let Some(photo) = &detail.photo {
        let _ = writeln!(out, "Photo: {photo}");
    }
    let _ = writeln!(out, "Experience: {} years", detail.experience_years);
    for bar in &detail.stat_bars {
        let _ = writeln!(out, "{}: {}/{}", bar.label, bar.value, bar.max);
    }
    let _ = writeln!(
        out,
        "Average: {:.1} (percentile {}, {})",
        detail.average_score, detail.percentile, detail.rank_label
    );
    let radar: Vec<String> = detail
        .radar
        .iter()
        .map(|axis| format!("{} {}", axis.axis, axis.value))
        .collect();
    let _ = writeln!(out, "Profile: {}", radar.join(" | "));
    if detail.drift.has_drifted() {
        let _ = writeln!(
            out,
            "Note: current rule would assign {}",
            detail.drift.current.label()
        );
    }
    if detail.offer_available {
        let _ = writeln!(out, "Offer letter available: candidate-desk offer {}", detail.position);
    }
    out
}

pub(crate) fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hiring dashboard");
    let _ = writeln!(
        out,
        "- Total candidates: {} | Positions filled: {} | Success rate: {}",
        view.kpis.total_candidates, view.kpis.positions_filled, view.kpis.success_rate_label
    );

    let _ = writeln!(out, "Status distribution:");
    for slice in &view.status_distribution {
        let _ = writeln!(out, "  - {}: {}", slice.label, slice.count);
    }

    if !view.role_demographics.is_empty() {
        let _ = writeln!(out, "Roles:");
        for entry in &view.role_demographics {
            let _ = writeln!(out, "  - {}: {}", entry.role_label, entry.count);
        }
    }

    if !view.top_performers.is_empty() {
        let _ = writeln!(out, "Top performers:");
        for (rank, row) in view.top_performers.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} ({}) {:.1}",
                rank + 1,
                row.name,
                row.role_label,
                row.average_score
            );
        }
    }

    if !view.trend.is_empty() {
        let points: Vec<String> = view
            .trend
            .iter()
            .map(|point| format!("#{}={:.1}", point.position, point.average_score))
            .collect();
        let _ = writeln!(out, "Trend: {}", points.join(" "));
    }
    out
}

pub(crate) fn render_drift(entries: &[DriftEntry]) -> String {
    if entries.is_empty() {
        return "All stored verdicts match the current rule\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "#{} {}: stored {} -> current {}",
            entry.position,
            entry.name,
            entry.drift.stored.label(),
            entry.drift.current.label()
        );
    }
    out
}
