use crate::entity::AlertEvaluation;

pub const DEFAULT_ALERT_THRESHOLD: f64 = 5.0;

/// Decides whether a price move since the last alert is worth reporting.
///
/// The baseline only advances when an alert fires, so small drifts in one
/// direction add up until they cross the threshold, while oscillation around
/// the baseline stays quiet.
#[derive(Debug, Clone, Copy)]
pub struct AlertEvaluator {
    threshold_percent: f64,
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_THRESHOLD)
    }
}

impl AlertEvaluator {
    pub fn new(threshold_percent: f64) -> Self {
        Self { threshold_percent }
    }

    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    pub fn evaluate(&self, current_price: f64, baseline: Option<f64>) -> AlertEvaluation {
        let baseline = match baseline {
            Some(baseline) if baseline > 0.0 => baseline,
            // First observation, or a baseline we cannot divide by
            _ => {
                return AlertEvaluation {
                    is_alert: false,
                    diff_percent: 0.0,
                    new_baseline: current_price,
                }
            }
        };

        let diff_percent = (current_price - baseline) * 100.0 / baseline;
        let is_alert = diff_percent.abs() >= self.threshold_percent;

        AlertEvaluation {
            is_alert,
            diff_percent,
            new_baseline: if is_alert { current_price } else { baseline },
        }
    }
}
