pub const REVEAL_CLASS: &str = "animate-fadeUp";

pub fn counter_value(elapsed_ms: f64, duration_ms: f64, target: u64) -> u64 {
    (ramp_progress(elapsed_ms, duration_ms) * target as f64).floor() as u64
}

pub fn ramp_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }

    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn ramp_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    ramp_progress(elapsed_ms, duration_ms) >= 1.0
}

pub fn parse_target(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

/// Fires once, the first time an element's visible fraction reaches the threshold.
#[derive(Clone, Copy, Debug)]
pub struct OnceGate {
    threshold: f64,
    fired: bool,
}

impl OnceGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.fired || !intersecting || ratio < self.threshold {
            return false;
        }

        self.fired = true;
        true
    }
}
