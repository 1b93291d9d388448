use crate::error::Result;
use crate::telemetry::LogLevel;
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

const DEFAULT_SEE_ALL_THRESHOLD: usize = 4;
const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;
const DEFAULT_REVEAL_SCROLL_DELAY_MS: u32 = 300;
const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 4_000;
const DEFAULT_FORM_SENDING_MS: u32 = 900;
const DEFAULT_FORM_SENT_MS: u32 = 1_200;
const DEFAULT_PRELOADER_FADE_MS: u32 = 350;
const DEFAULT_COUNTER_DURATION_MS: f64 = 1_000.0;
const DEFAULT_COUNTER_THRESHOLD: f64 = 0.6;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
const DEFAULT_PARALLAX_FACTOR: f64 = 0.04;
const DEFAULT_MORE_DESIGNS_URL: &str = "https://charles-portfolio-seven.vercel.app/Ui.html";

const SEE_ALL_THRESHOLD_BOUNDS: (usize, usize) = (1, 100);
const STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const SCROLL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const CAROUSEL_INTERVAL_MS_BOUNDS: (u32, u32) = (500, 60_000);
const FORM_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const PRELOADER_FADE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const COUNTER_DURATION_MS_BOUNDS: (f64, f64) = (1.0, 10_000.0);
const VISIBILITY_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 1.0);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub see_all_threshold: usize,
    pub reveal_stagger_ms: u32,
    pub reveal_scroll_delay_ms: u32,
    pub carousel_interval_ms: u32,
    pub form_sending_ms: u32,
    pub form_sent_ms: u32,
    pub preloader_fade_ms: u32,
    pub counter_duration_ms: f64,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub parallax_factor: f64,
    pub more_designs_url: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            see_all_threshold: DEFAULT_SEE_ALL_THRESHOLD,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            reveal_scroll_delay_ms: DEFAULT_REVEAL_SCROLL_DELAY_MS,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            form_sending_ms: DEFAULT_FORM_SENDING_MS,
            form_sent_ms: DEFAULT_FORM_SENT_MS,
            preloader_fade_ms: DEFAULT_PRELOADER_FADE_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_threshold: DEFAULT_COUNTER_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            more_designs_url: DEFAULT_MORE_DESIGNS_URL.to_string(),
            log_level: LogLevel::Info,
        }
    }
}

fn clamp_f64(value: f64, default: f64, bounds: (f64, f64)) -> f64 {
    if value.is_finite() {
        value.clamp(bounds.0, bounds.1)
    } else {
        default
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.validated())
    }

    pub fn validated(mut self) -> Self {
        self.see_all_threshold = self
            .see_all_threshold
            .clamp(SEE_ALL_THRESHOLD_BOUNDS.0, SEE_ALL_THRESHOLD_BOUNDS.1);
        self.reveal_stagger_ms = self
            .reveal_stagger_ms
            .clamp(STAGGER_MS_BOUNDS.0, STAGGER_MS_BOUNDS.1);
        self.reveal_scroll_delay_ms = self
            .reveal_scroll_delay_ms
            .clamp(SCROLL_DELAY_MS_BOUNDS.0, SCROLL_DELAY_MS_BOUNDS.1);
        self.carousel_interval_ms = self
            .carousel_interval_ms
            .clamp(CAROUSEL_INTERVAL_MS_BOUNDS.0, CAROUSEL_INTERVAL_MS_BOUNDS.1);
        self.form_sending_ms = self
            .form_sending_ms
            .clamp(FORM_DELAY_MS_BOUNDS.0, FORM_DELAY_MS_BOUNDS.1);
        self.form_sent_ms = self.form_sent_ms.clamp(FORM_DELAY_MS_BOUNDS.0, FORM_DELAY_MS_BOUNDS.1);
        self.preloader_fade_ms = self
            .preloader_fade_ms
            .clamp(PRELOADER_FADE_MS_BOUNDS.0, PRELOADER_FADE_MS_BOUNDS.1);
        self.counter_duration_ms = clamp_f64(
            self.counter_duration_ms,
            DEFAULT_COUNTER_DURATION_MS,
            COUNTER_DURATION_MS_BOUNDS,
        );
        self.counter_threshold = clamp_f64(
            self.counter_threshold,
            DEFAULT_COUNTER_THRESHOLD,
            VISIBILITY_THRESHOLD_BOUNDS,
        );
        self.reveal_threshold = clamp_f64(
            self.reveal_threshold,
            DEFAULT_REVEAL_THRESHOLD,
            VISIBILITY_THRESHOLD_BOUNDS,
        );
        self.parallax_factor = clamp_f64(
            self.parallax_factor,
            DEFAULT_PARALLAX_FACTOR,
            PARALLAX_FACTOR_BOUNDS,
        );

        if self.more_designs_url.trim().is_empty() {
            self.more_designs_url = DEFAULT_MORE_DESIGNS_URL.to_string();
        }

        self
    }
}
