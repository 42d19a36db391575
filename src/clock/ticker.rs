//! Clock ticker
//!
//! Renders the current time once on start, then on a fixed interval, until
//! the owner stops it through the returned [`ClockHandle`].

use super::format::ClockFormat;
use crate::view::ClockDisplay;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Element the planner header clock writes into
pub const HEADER_ELEMENT: &str = "dateTime";

/// Element the footer clock writes into
pub const FOOTER_ELEMENT: &str = "footerDateTime";

/// Button on the footer clock that leaves the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub target: String,
}

/// Which clock instance this is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockVariant {
    /// Date/time line in the planner page
    Header,
    /// Footer paragraph plus a navigation button
    Footer(FooterLink),
}

impl ClockVariant {
    pub fn element(&self) -> &'static str {
        match self {
            Self::Header => HEADER_ELEMENT,
            Self::Footer(_) => FOOTER_ELEMENT,
        }
    }

    pub fn link(&self) -> Option<&FooterLink> {
        match self {
            Self::Header => None,
            Self::Footer(link) => Some(link),
        }
    }
}

/// A clock that hasn't been started yet
#[derive(Debug, Clone)]
pub struct Clock {
    variant: ClockVariant,
    format: ClockFormat,
    interval: Duration,
}

impl Clock {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(variant: ClockVariant, format: ClockFormat) -> Self {
        Self {
            variant,
            format,
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn variant(&self) -> &ClockVariant {
        &self.variant
    }

    /// Render the current time once
    pub fn tick(&self, display: &dyn ClockDisplay) {
        display.show_time(self.variant.element(), &self.format.now());
    }

    /// Spawn the recurring render task. The first render happens immediately.
    pub fn start(self, display: Arc<dyn ClockDisplay>) -> ClockHandle {
        let clock = Arc::new(self);
        let running = Arc::new(RwLock::new(true));

        let task = {
            let clock = Arc::clone(&clock);
            let running = Arc::clone(&running);
            let display = Arc::clone(&display);

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(clock.interval);

                loop {
                    interval.tick().await;

                    if !*running.read().await {
                        break;
                    }

                    clock.tick(display.as_ref());
                }

                tracing::debug!(element = clock.variant.element(), "clock stopped");
            })
        };

        tracing::debug!(element = clock.variant.element(), "clock started");
        ClockHandle {
            clock,
            display,
            running,
            task,
        }
    }
}

/// Owner's handle on a running clock
pub struct ClockHandle {
    clock: Arc<Clock>,
    display: Arc<dyn ClockDisplay>,
    running: Arc<RwLock<bool>>,
    task: JoinHandle<()>,
}

impl ClockHandle {
    pub async fn is_running(&self) -> bool {
        *self.running.read().await && !self.task.is_finished()
    }

    /// Stop ticking. No render happens after this returns.
    pub async fn stop(self) {
        *self.running.write().await = false;
        self.task.abort();
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                tracing::warn!("Clock task ended abnormally: {}", e);
            }
        }
    }

    /// Activate the footer button: tear the clock down and navigate to its
    /// target.
    ///
    /// A clock without a button is handed back untouched and keeps running.
    pub async fn follow_link(self) -> Result<String, ClockHandle> {
        let target = match self.clock.variant.link() {
            Some(link) => link.target.clone(),
            None => return Err(self),
        };
        let display = Arc::clone(&self.display);

        self.stop().await;
        tracing::info!(target = %target, "navigating away");
        display.navigate(&target);
        Ok(target)
    }
}
