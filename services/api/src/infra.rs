use metrics_exporter_prometheus::PrometheusHandle;
use privacy_advisor::config::AdvisorConfig;
use privacy_advisor::workflows::assessment::AssessmentPolicy;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// A command-line `--require-complete` can only tighten the configured policy.
pub(crate) fn assessment_policy(advisor: &AdvisorConfig, require_complete: bool) -> AssessmentPolicy {
    let mut policy = AssessmentPolicy::from(advisor);
    policy.require_complete_answers |= require_complete;
    policy
}
