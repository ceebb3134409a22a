/// Outcome of comparing a fresh price against the stored baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertEvaluation {
    pub is_alert: bool,
    pub diff_percent: f64,
    pub new_baseline: f64,
}
