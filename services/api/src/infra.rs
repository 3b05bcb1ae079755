use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use candidate_eval::config::AppConfig;
use candidate_eval::error::AppError;
use candidate_eval::telemetry;
use candidate_eval::workflows::candidates::{CandidateService, CsvCandidateRepository};
use metrics_exporter_prometheus::PrometheusHandle;

pub(crate) type DeskService = CandidateService<CsvCandidateRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration and installs the tracing subscriber.
pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

/// Opens the configured candidate file and wraps it in a service.
pub(crate) fn open_candidate_service(config: &AppConfig) -> Result<Arc<DeskService>, AppError> {
    let repository = CsvCandidateRepository::open(&config.storage.candidates_path)?;
    Ok(Arc::new(CandidateService::new(
        Arc::new(repository),
        config.evaluation.clone(),
        config.storage.offers_dir.clone(),
    )))
}
