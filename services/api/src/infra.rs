use career_fit::assessment::ScoringMode;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_scoring_mode(raw: &str) -> Result<ScoringMode, String> {
    raw.parse::<ScoringMode>()
        .map_err(|err| format!("failed to parse '{raw}' as a scoring mode ({err})"))
}
