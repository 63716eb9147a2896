use crate::domain::model::ViewConfig;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default map-view parameters handed to the rendering layer at page load:
/// centered on (0, 0) at zoom 1.
pub fn map_defaults() -> ViewConfig {
    ViewConfig::default()
}

/// Page-load timing marks, as reported by the hosting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTiming {
    pub navigation_start: DateTime<Utc>,
    pub load_event_end: DateTime<Utc>,
}

impl PageTiming {
    /// Signed time between navigation start and load-event end. Negative only
    /// if the marks arrive out of order.
    pub fn elapsed(&self) -> chrono::Duration {
        self.load_event_end - self.navigation_start
    }

    /// Load duration usable as an animation length; out-of-order marks
    /// saturate to zero instead of producing a negative duration.
    pub fn estimated_duration(&self) -> Duration {
        self.elapsed().to_std().unwrap_or(Duration::ZERO)
    }
}

/// Cosmetic page-load progress counter: ticks 0 to 100 over a fixed total
/// duration, one increment per step interval, stopping at 100. Purely visual;
/// produces no data consumed elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct LoadingBar {
    total: Duration,
}

impl LoadingBar {
    pub const STEPS: u32 = 100;

    pub fn new(total: Duration) -> Self {
        Self { total }
    }

    pub fn from_timing(timing: &PageTiming) -> Self {
        Self::new(timing.estimated_duration())
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn step_interval(&self) -> Duration {
        self.total / Self::STEPS
    }

    /// Drives the counter, invoking `on_tick` with each percentage from 1 to
    /// 100 and returning once complete. A zero total completes immediately
    /// (tokio intervals treat a zero period as "fire as fast as possible").
    pub async fn run<F: FnMut(u32)>(&self, mut on_tick: F) {
        let mut interval = tokio::time::interval(self.step_interval().max(Duration::from_nanos(1)));
        interval.tick().await; // first tick completes immediately
        for percent in 1..=Self::STEPS {
            interval.tick().await;
            on_tick(percent);
        }
    }
}
